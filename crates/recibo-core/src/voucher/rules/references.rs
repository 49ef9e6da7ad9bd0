//! Transaction/reference-number extraction.

use super::patterns::{REFERENCE_PATTERNS, TOKEN_DIGITS};
use super::{FieldExtractor, SourceText};

/// Label tokens whose following numeric token is the reference in the
/// scan fallback.
const REFERENCE_LABELS: [&str; 4] = ["ref", "referencia", "nro", "transacción"];

/// Reference-number extractor. Emits digits only.
pub struct ReferenceExtractor;

impl ReferenceExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ReferenceExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for ReferenceExtractor {
    type Output = String;

    fn extract(&self, text: &SourceText) -> Option<String> {
        for pattern in REFERENCE_PATTERNS.iter() {
            if let Some(caps) = pattern.captures(text.flat()) {
                if let Some(m) = caps.get(1) {
                    return Some(m.as_str().to_string());
                }
            }
        }

        let tokens: Vec<&str> = text.tokens().collect();
        for pair in tokens.windows(2) {
            let label = pair[0].to_lowercase();
            if REFERENCE_LABELS.contains(&label.as_str()) && TOKEN_DIGITS.is_match(pair[1]) {
                return Some(pair[1].to_string());
            }
        }

        None
    }
}
