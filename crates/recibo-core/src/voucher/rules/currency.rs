//! Currency detection from keywords and symbols.

use super::patterns::{CURRENCY_EUR, CURRENCY_PEN, CURRENCY_USD};
use super::{FieldExtractor, SourceText};

/// Currency detector. Keyword sets are checked in fixed order (PEN, USD,
/// EUR) and the first with any hit wins; the orchestrator applies the
/// default when nothing matches.
pub struct CurrencyExtractor;

impl CurrencyExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CurrencyExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for CurrencyExtractor {
    type Output = String;

    fn extract(&self, text: &SourceText) -> Option<String> {
        let flat = text.flat();
        if CURRENCY_PEN.is_match(flat) {
            Some("PEN".to_string())
        } else if CURRENCY_USD.is_match(flat) {
            Some("USD".to_string())
        } else if CURRENCY_EUR.is_match(flat) {
            Some("EUR".to_string())
        } else {
            None
        }
    }
}
