use crate::models::*;
use crate::processing::*;
use crate::utils::IdCardError;
use crate::validation::FormatValidator;
use log::info;
use serde::Serialize;
use std::path::Path;

/// Outcome of one scan: the text the OCR engine produced, the fields read
/// from it and the report on which of them are missing or malformed.
#[derive(Debug, Clone, Serialize)]
pub struct Extraction {
    pub ocr_text: String,
    pub record: ExtractedRecord,
    pub validation: FormatValidationResult,
}

impl Extraction {
    /// Apply a user edit to one field and refresh the format report.
    pub fn apply_edit(&mut self, field: RecordField, value: impl Into<String>) {
        self.record.set(field, value);
        self.validation = FormatValidator::validate(&self.record);
    }
}

pub struct IdCardExtractor {
    config: OcrConfig,
}

impl Default for IdCardExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl IdCardExtractor {
    pub fn new() -> Self {
        Self::with_config(OcrConfig::default())
    }

    pub fn with_config(config: OcrConfig) -> Self {
        IdCardExtractor { config }
    }

    pub fn config(&self) -> &OcrConfig {
        &self.config
    }

    // Main entry point: photo in, fields out
    pub fn scan_image(&self, image_path: &Path) -> Result<Extraction, IdCardError> {
        // Step 1: Recognize the text on the card
        let text = OcrProcessor::recognize(image_path, &self.config)?;

        // Step 2: Read the fields out of it
        Ok(self.scan_text(&text))
    }

    /// Extract fields from text that has already been through OCR.
    pub fn scan_text(&self, text: &str) -> Extraction {
        let record = FieldExtractor::extract(text);
        let validation = FormatValidator::validate(&record);

        info!(
            "Extracted {} of {} fields",
            RecordField::ALL.len() - validation.missing_fields.len(),
            RecordField::ALL.len()
        );

        Extraction {
            ocr_text: text.to_string(),
            record,
            validation,
        }
    }
}
