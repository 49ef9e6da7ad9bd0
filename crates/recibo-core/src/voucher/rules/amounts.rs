//! Amount extraction for payment vouchers.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::nlp::training::Category;
use crate::nlp::PatternLibrary;

use super::patterns::TOKEN_AMOUNT;
use super::{ExtractionMatch, FieldExtractor, SourceText};

/// Labels whose following token is read as the amount in the scan
/// fallback.
const AMOUNT_LABELS: [&str; 2] = ["total", "importe"];

/// Principal-amount extractor: labeled library patterns first, token scan
/// second.
pub struct AmountExtractor<'lib> {
    library: &'lib PatternLibrary,
}

impl<'lib> AmountExtractor<'lib> {
    pub fn new(library: &'lib PatternLibrary) -> Self {
        Self { library }
    }
}

impl FieldExtractor for AmountExtractor<'_> {
    type Output = ExtractionMatch<Decimal>;

    fn extract(&self, text: &SourceText) -> Option<Self::Output> {
        for pattern in self.library.patterns_for(Category::Amount) {
            if let Some(caps) = pattern.captures(text.flat()) {
                if let Some(value) = caps.get(1).and_then(|m| parse_amount(m.as_str())) {
                    let source = caps.get(0).map(|m| m.as_str()).unwrap_or_default();
                    return Some(ExtractionMatch::new(value, 0.95, source));
                }
            }
        }

        // Token scan: a "total"/"importe" token followed by an NN.NN token.
        let tokens: Vec<&str> = text.tokens().collect();
        for pair in tokens.windows(2) {
            let label = pair[0].to_lowercase();
            if AMOUNT_LABELS.iter().any(|l| label.contains(l)) && TOKEN_AMOUNT.is_match(pair[1]) {
                if let Some(value) = parse_amount(pair[1]) {
                    return Some(ExtractionMatch::new(value, 0.6, pair.join(" ")));
                }
            }
        }

        None
    }
}

/// Parse a captured numeral, treating `,` as the decimal separator.
pub fn parse_amount(s: &str) -> Option<Decimal> {
    Decimal::from_str(&s.replace(',', ".")).ok()
}
