pub mod models;
pub mod processing;
pub mod validation;
pub mod utils;
pub mod id_card_extractor;

pub use id_card_extractor::{Extraction, IdCardExtractor};
