use thiserror::Error;

#[derive(Debug, Error)]
pub enum IdCardError {
    #[error("Image processing error: {0}")]
    ImageProcessingError(String),
    #[error("OCR error: {0}")]
    OcrError(String),
    #[error("IO error: {0}")]
    IoError(String),
    #[error("Serialization error: {0}")]
    SerializationError(String),
    #[error("Invalid edit: {0}")]
    InvalidEdit(String),
}

impl From<std::io::Error> for IdCardError {
    fn from(err: std::io::Error) -> Self {
        IdCardError::IoError(err.to_string())
    }
}

impl From<serde_json::Error> for IdCardError {
    fn from(err: serde_json::Error) -> Self {
        IdCardError::SerializationError(err.to_string())
    }
}
