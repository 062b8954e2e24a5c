pub mod extractor;
pub mod image;
pub mod lines;
pub mod matchers;
pub mod ocr;
pub mod patterns;

pub use extractor::FieldExtractor;
pub use image::ImageProcessor;
pub use lines::normalize_lines;
pub use ocr::OcrProcessor;
