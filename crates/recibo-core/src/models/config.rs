//! Configuration structures for the extraction pipeline.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Main configuration for the recibo pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReciboConfig {
    /// Field-extraction configuration.
    pub extraction: ExtractionConfig,

    /// Text-classifier configuration.
    pub classifier: ClassifierConfig,
}

impl Default for ReciboConfig {
    fn default() -> Self {
        Self {
            extraction: ExtractionConfig::default(),
            classifier: ClassifierConfig::default(),
        }
    }
}

/// Field-extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Currency code applied when detection finds nothing explicit.
    pub default_currency: String,

    /// VAT rate used to derive the tax amount (Peruvian IGV).
    pub vat_rate: Decimal,

    /// Run every primary extractor regardless of the whole-text category.
    /// When false, the amount/date/merchant extractors only run if the
    /// whole text classifies as the matching category (historical
    /// behavior of early revisions).
    pub always_attempt_all_fields: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            default_currency: "PEN".to_string(),
            vat_rate: Decimal::new(18, 2),
            always_attempt_all_fields: true,
        }
    }
}

/// Text-classifier configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Lowercase tokens before counting.
    pub lowercase: bool,

    /// Minimum token length kept during tokenization.
    pub min_token_len: usize,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            lowercase: true,
            min_token_len: 1,
        }
    }
}

impl ReciboConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        std::fs::write(path, content)
    }
}
