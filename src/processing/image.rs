use crate::models::OcrConfig;
use crate::utils::IdCardError;
use image::{imageops, DynamicImage, GrayImage};
use log::debug;
use std::path::Path;
use tempfile::NamedTempFile;

// Contrast boost applied to photographed cards, in percent.
const CONTRAST_BOOST: f32 = 20.0;

pub struct ImageProcessor;

impl ImageProcessor {
    /// Grayscale and contrast-stretch the photo, writing the result to a
    /// temporary PNG for the OCR engine. The file lives as long as the
    /// returned handle.
    pub fn prepare_for_ocr(image_path: &Path, config: &OcrConfig) -> Result<NamedTempFile, IdCardError> {
        let img = image::open(image_path)
            .map_err(|e| IdCardError::ImageProcessingError(format!("Failed to open image: {}", e)))?;

        let processed = if config.preprocess {
            Self::preprocess_image(&img)
        } else {
            img.to_luma8()
        };
        debug!(
            "Prepared {:?} for OCR ({}x{})",
            image_path,
            processed.width(),
            processed.height()
        );

        Self::save_to_temp_file(&processed)
    }

    fn preprocess_image(img: &DynamicImage) -> GrayImage {
        let gray = img.to_luma8();
        Self::enhance_contrast(&gray)
    }

    fn enhance_contrast(img: &GrayImage) -> GrayImage {
        imageops::contrast(img, CONTRAST_BOOST)
    }

    fn save_to_temp_file(img: &GrayImage) -> Result<NamedTempFile, IdCardError> {
        let temp_file = tempfile::Builder::new()
            .prefix("idscan-")
            .suffix(".png")
            .tempfile()
            .map_err(|e| IdCardError::ImageProcessingError(format!("Failed to create temp file: {}", e)))?;

        img.save(temp_file.path())
            .map_err(|e| IdCardError::ImageProcessingError(format!("Failed to write temp image: {}", e)))?;

        Ok(temp_file)
    }
}
