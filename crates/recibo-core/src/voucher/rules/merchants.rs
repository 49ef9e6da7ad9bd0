//! Merchant-name extraction.

use crate::nlp::training::Category;
use crate::nlp::PatternLibrary;

use super::{FieldExtractor, SourceText};

/// Merchant-name extractor: labeled library patterns, then line
/// heuristics.
pub struct MerchantExtractor<'lib> {
    library: &'lib PatternLibrary,
}

impl<'lib> MerchantExtractor<'lib> {
    pub fn new(library: &'lib PatternLibrary) -> Self {
        Self { library }
    }
}

impl FieldExtractor for MerchantExtractor<'_> {
    type Output = String;

    fn extract(&self, text: &SourceText) -> Option<String> {
        // Labeled patterns run on the line-preserving text so a capture
        // stops at the end of its line.
        for pattern in self.library.patterns_for(Category::Merchant) {
            if let Some(caps) = pattern.captures(text.raw()) {
                if let Some(m) = caps.get(1) {
                    let name = m.as_str().trim();
                    if !name.is_empty() {
                        return Some(name.to_string());
                    }
                }
            }
        }

        // First line with a parenthesis: the name precedes it.
        for line in text.lines() {
            if let Some(idx) = line.find('(') {
                let name = line[..idx].trim();
                if !name.is_empty() {
                    return Some(name.to_string());
                }
            }
        }

        // Second line, unless it carries an ID label.
        let second = text.lines().get(1)?;
        if !second.contains("ID:") {
            return Some(second.trim().to_string());
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(text: &str) -> Option<String> {
        let library = PatternLibrary::builtin();
        MerchantExtractor::new(&library).extract(&SourceText::new(text))
    }

    #[test]
    fn destino_label_is_preferred() {
        let text = "yape\nEly F. Leguia O.\nDestino: Supermercado XYZ\n";
        assert_eq!(extract(text), Some("Supermercado XYZ".to_string()));
    }

    #[test]
    fn razon_social_label_is_recognized() {
        let text = "BOLETA ELECTRONICA\nRAZON SOCIAL: Bodega Maria SAC\n";
        assert_eq!(extract(text), Some("Bodega Maria SAC".to_string()));
    }

    #[test]
    fn parenthesis_line_keeps_the_name_before_it() {
        let text = "comprobante\nTienda Lima (sede centro)\nTOTAL S/ 9.00";
        assert_eq!(extract(text), Some("Tienda Lima".to_string()));
    }

    #[test]
    fn falls_back_to_the_second_line() {
        let text = "comprobante de pago\nFarmacia Salud\nTOTAL S/ 12.00";
        assert_eq!(extract(text), Some("Farmacia Salud".to_string()));
    }

    #[test]
    fn second_line_with_id_label_is_excluded() {
        let text = "comprobante de pago\nID: 778899\nTOTAL S/ 12.00";
        assert_eq!(extract(text), None);
    }

    #[test]
    fn absent_on_single_line_text() {
        assert_eq!(extract("comprobante"), None);
    }
}
