//! Date extraction and Spanish month normalization.

use regex::Captures;

use crate::nlp::training::Category;
use crate::nlp::PatternLibrary;

use super::patterns::TOKEN_DATE;
use super::{FieldExtractor, SourceText};

/// Labels whose following token is read as the date in the scan fallback.
const DATE_LABELS: [&str; 2] = ["fecha", "día"];

/// Transaction-date extractor. Emits `DD/MM/YY(YY)`.
pub struct DateExtractor<'lib> {
    library: &'lib PatternLibrary,
}

impl<'lib> DateExtractor<'lib> {
    pub fn new(library: &'lib PatternLibrary) -> Self {
        Self { library }
    }
}

impl FieldExtractor for DateExtractor<'_> {
    type Output = String;

    fn extract(&self, text: &SourceText) -> Option<String> {
        for pattern in self.library.patterns_for(Category::Date) {
            if let Some(caps) = pattern.captures(text.flat()) {
                return Some(normalize_date(&caps));
            }
        }

        let tokens: Vec<&str> = text.tokens().collect();
        for pair in tokens.windows(2) {
            let label = pair[0].to_lowercase();
            if DATE_LABELS.iter().any(|l| label.contains(l)) && TOKEN_DATE.is_match(pair[1]) {
                return Some(pair[1].to_string());
            }
        }

        None
    }
}

/// Re-emit a date capture as `DD/MM/YY(YY)`. A 3-letter alphabetic month
/// is mapped to its numeric code; numeric matches pass through verbatim.
fn normalize_date(caps: &Captures<'_>) -> String {
    let month = caps.get(2).map(|m| m.as_str()).unwrap_or_default();
    if month.len() == 3 && month.chars().all(|c| c.is_ascii_alphabetic()) {
        let day = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
        let year = caps.get(3).map(|m| m.as_str()).unwrap_or_default();
        format!("{}/{}/{}", day, spanish_month_number(month), year)
    } else {
        caps.get(0).map(|m| m.as_str()).unwrap_or_default().to_string()
    }
}

fn spanish_month_number(month: &str) -> &'static str {
    match month.to_uppercase().as_str() {
        "ENE" => "01",
        "FEB" => "02",
        "MAR" => "03",
        "ABR" => "04",
        "MAY" => "05",
        "JUN" => "06",
        "JUL" => "07",
        "AGO" => "08",
        "SEP" => "09",
        "OCT" => "10",
        "NOV" => "11",
        "DIC" => "12",
        _ => "01",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(text: &str) -> Option<String> {
        let library = PatternLibrary::builtin();
        DateExtractor::new(&library).extract(&SourceText::new(text))
    }

    #[test]
    fn labeled_compact_date_converts_the_month() {
        assert_eq!(extract("FECHA:09ENE25"), Some("09/01/25".to_string()));
        assert_eq!(extract("fecha: 21DIC24"), Some("21/12/24".to_string()));
    }

    #[test]
    fn numeric_date_passes_through_verbatim() {
        assert_eq!(extract("Pagado el 15/07/2024"), Some("15/07/2024".to_string()));
        assert_eq!(extract("09-01-25 10:38"), Some("09-01-25".to_string()));
    }

    #[test]
    fn unlabeled_compact_date_converts_the_month() {
        assert_eq!(extract("operación 21DIC2024"), Some("21/12/2024".to_string()));
    }

    #[test]
    fn spaced_month_abbreviation_is_recognized() {
        assert_eq!(extract("21 ene. 2025 - 10:38 am"), Some("21/01/2025".to_string()));
    }

    #[test]
    fn unknown_month_abbreviation_defaults_to_january() {
        assert_eq!(extract("FECHA:09XYZ25"), Some("09/01/25".to_string()));
    }

    #[test]
    fn absent_when_no_date_shape_is_present() {
        assert_eq!(extract("yape S/50"), None);
    }
}
