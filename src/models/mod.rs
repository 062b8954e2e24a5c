pub mod config;
pub mod record;
pub mod report;

pub use config::OcrConfig;
pub use record::{ExtractedRecord, RecordField};
pub use report::{FormatValidationResult, ValidationIssue, ValidationIssueType};
