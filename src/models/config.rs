use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_OCR_LANGUAGE: &str = "eng";
pub const LANGUAGE_ENV_VAR: &str = "IDSCAN_OCR_LANG";
pub const TESSDATA_ENV_VAR: &str = "TESSDATA_PREFIX";

/// Settings for the OCR step that produces the text to extract from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OcrConfig {
    /// Tesseract language code, e.g. "eng".
    pub language: String,
    /// Directory holding the traineddata files. `None` uses Tesseract's own lookup.
    pub tessdata_dir: Option<PathBuf>,
    /// Grayscale and contrast-stretch the image before recognition.
    pub preprocess: bool,
}

impl Default for OcrConfig {
    fn default() -> Self {
        OcrConfig {
            language: DEFAULT_OCR_LANGUAGE.to_string(),
            tessdata_dir: None,
            preprocess: true,
        }
    }
}

impl OcrConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = OcrConfig::default();

        if let Some(lang) = lookup(LANGUAGE_ENV_VAR).filter(|v| !v.trim().is_empty()) {
            config.language = lang.trim().to_string();
        }
        if let Some(dir) = lookup(TESSDATA_ENV_VAR).filter(|v| !v.trim().is_empty()) {
            config.tessdata_dir = Some(PathBuf::from(dir.trim()));
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = OcrConfig::default();
        assert_eq!(config.language, "eng");
        assert!(config.tessdata_dir.is_none());
        assert!(config.preprocess);
    }

    #[test]
    fn test_lookup_overrides_defaults() {
        let mut vars = HashMap::new();
        vars.insert(LANGUAGE_ENV_VAR, "amh");
        vars.insert(TESSDATA_ENV_VAR, "/usr/local/share/tessdata");

        let config = OcrConfig::from_lookup(|key| vars.get(key).map(|v| v.to_string()));
        assert_eq!(config.language, "amh");
        assert_eq!(config.tessdata_dir, Some(PathBuf::from("/usr/local/share/tessdata")));
    }

    #[test]
    fn test_blank_values_are_ignored() {
        let config = OcrConfig::from_lookup(|_| Some("   ".to_string()));
        assert_eq!(config, OcrConfig::default());
    }
}
