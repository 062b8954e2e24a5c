use crate::models::OcrConfig;
use crate::utils::IdCardError;
use log::{debug, info};
use std::path::Path;
use tesseract::Tesseract;

use super::image::ImageProcessor;

/// OcrProcessor wraps the Tesseract engine that turns a card photo into text.
pub struct OcrProcessor;

impl OcrProcessor {
    /// Recognize the text on the card at `image_path`.
    pub fn recognize(image_path: &Path, config: &OcrConfig) -> Result<String, IdCardError> {
        info!("Running OCR on {:?} (language: {})", image_path, config.language);

        // Keep the prepared image alive until recognition finishes
        let prepared = ImageProcessor::prepare_for_ocr(image_path, config)?;
        let path_str = prepared
            .path()
            .to_str()
            .ok_or_else(|| IdCardError::OcrError("Could not convert path to string".to_string()))?;

        let tessdata = match &config.tessdata_dir {
            Some(dir) => Some(
                dir.to_str()
                    .ok_or_else(|| IdCardError::OcrError(format!("Invalid tessdata path: {:?}", dir)))?,
            ),
            None => None,
        };

        let text = Tesseract::new(tessdata, Some(config.language.as_str()))
            .map_err(|e| IdCardError::OcrError(format!("Failed to initialize Tesseract: {}", e)))?
            .set_image(path_str)
            .map_err(|e| IdCardError::OcrError(format!("Failed to set image: {}", e)))?
            .get_text()
            .map_err(|e| IdCardError::OcrError(format!("Failed to extract text: {}", e)))?;

        debug!("OCR result:\n{}", text);
        info!("OCR finished: {} characters recognized", text.chars().count());

        Ok(text)
    }
}
