//! Rule-based field extractors for Peruvian payment vouchers.
//!
//! Every extractor applies an ordered list of strategies, first success
//! wins: labeled regex patterns from the library first, then a token or
//! line scan fallback. Extraction is pure computation; a field that
//! cannot be recovered is simply absent.

pub mod amounts;
pub mod currency;
pub mod dates;
pub mod items;
pub mod merchants;
pub mod patterns;
pub mod references;

pub use amounts::AmountExtractor;
pub use currency::CurrencyExtractor;
pub use dates::DateExtractor;
pub use items::extract_items;
pub use merchants::MerchantExtractor;
pub use references::ReferenceExtractor;

/// Normalized view of one OCR text blob.
///
/// `flat` collapses newlines and repeated whitespace for the regex and
/// token scans; `lines` keeps the trimmed, non-empty source lines for the
/// heuristics that are defined per line (merchant fallback, item
/// candidates).
#[derive(Debug, Clone)]
pub struct SourceText {
    raw: String,
    flat: String,
    lines: Vec<String>,
}

impl SourceText {
    pub fn new(input: &str) -> Self {
        let lines: Vec<String> = input
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(String::from)
            .collect();
        let raw = lines.join("\n");
        let flat = raw.split_whitespace().collect::<Vec<_>>().join(" ");
        Self { raw, flat, lines }
    }

    /// Trimmed source text with line structure preserved.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Whitespace-collapsed text.
    pub fn flat(&self) -> &str {
        &self.flat
    }

    /// Trimmed, non-empty lines.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Whitespace tokens of the flat text, with trailing punctuation
    /// stripped so labels like `TOTAL:` compare cleanly.
    pub fn tokens(&self) -> impl Iterator<Item = &str> + '_ {
        self.flat
            .split_whitespace()
            .map(|t| t.trim_end_matches([':', ';', '.', ',']))
    }

    pub fn is_empty(&self) -> bool {
        self.flat.is_empty()
    }
}

/// An extracted value with the confidence of the strategy that produced
/// it.
#[derive(Debug, Clone)]
pub struct ExtractionMatch<T> {
    /// Extracted value.
    pub value: T,
    /// Confidence score (0.0 - 1.0).
    pub confidence: f32,
    /// Source fragment that was matched.
    pub source: String,
}

impl<T> ExtractionMatch<T> {
    pub fn new(value: T, confidence: f32, source: impl Into<String>) -> Self {
        Self {
            value,
            confidence,
            source: source.into(),
        }
    }
}

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the field from the normalized text, first strategy wins.
    fn extract(&self, text: &SourceText) -> Option<Self::Output>;
}
