//! Extraction orchestrator: normalize, classify, extract, assemble.

use std::time::Instant;

use rust_decimal::RoundingStrategy;
use tracing::{debug, info};

use crate::error::{OcrError, Result};
use crate::models::config::ExtractionConfig;
use crate::models::voucher::ExtractedVoucherData;
use crate::nlp::training::Category;
use crate::nlp::{PatternLibrary, TextClassifier};

use super::confidence::completeness_score;
use super::rules::{
    extract_items, AmountExtractor, CurrencyExtractor, DateExtractor, FieldExtractor,
    MerchantExtractor, ReferenceExtractor, SourceText,
};

/// Result of one extraction run.
#[derive(Debug, Clone)]
pub struct ExtractionOutcome {
    /// Extracted voucher data.
    pub data: ExtractedVoucherData,
    /// Completeness score (0-100).
    pub confidence: f32,
    /// Fields the extractors could not recover.
    pub warnings: Vec<String>,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Voucher extraction pipeline.
///
/// Owns the pattern library and the classifier trained from it. Training
/// happens inside the constructor, so by the time a parser can be shared
/// the model is final; `parse` is then a read-only operation and the
/// parser can serve concurrent callers.
pub struct VoucherParser {
    library: PatternLibrary,
    classifier: TextClassifier,
    config: ExtractionConfig,
}

impl VoucherParser {
    /// Parser over the built-in pattern library.
    pub fn new() -> Self {
        Self::with_library(PatternLibrary::builtin())
    }

    /// Parser over a pre-seeded library. Trains the classifier before
    /// returning.
    pub fn with_library(library: PatternLibrary) -> Self {
        let classifier = TextClassifier::train(&library);
        Self {
            library,
            classifier,
            config: ExtractionConfig::default(),
        }
    }

    /// Override the extraction configuration.
    pub fn with_config(mut self, config: ExtractionConfig) -> Self {
        self.config = config;
        self
    }

    /// The trained classifier backing this parser.
    pub fn classifier(&self) -> &TextClassifier {
        &self.classifier
    }

    /// Run the full pipeline over one OCR text blob.
    ///
    /// Fails only when the text is empty; unrecoverable fields are absent
    /// in the result and reported as warnings, never as errors.
    pub fn parse(&self, raw_text: &str) -> Result<ExtractionOutcome> {
        let start = Instant::now();
        let text = SourceText::new(raw_text);

        if text.is_empty() {
            return Err(OcrError::NoTextDetected.into());
        }

        info!("extracting fields from {} characters of text", text.flat().len());

        // Early revisions gated amount/date/merchant on the whole-text
        // category; the always-attempt path is the default because a
        // single dominant label silently drops the other fields.
        let dominant = self.classifier.classify(text.flat());
        debug!("dominant category: {}", dominant);
        let attempt =
            |category: Category| self.config.always_attempt_all_fields || dominant == category;

        let amount_match = attempt(Category::Amount)
            .then(|| AmountExtractor::new(&self.library).extract(&text))
            .flatten();
        if let Some(m) = &amount_match {
            debug!("amount {} from {:?} (confidence {:.2})", m.value, m.source, m.confidence);
        }
        let amount = amount_match.as_ref().map(|m| m.value);

        let transaction_date = attempt(Category::Date)
            .then(|| DateExtractor::new(&self.library).extract(&text))
            .flatten();
        let merchant_name = attempt(Category::Merchant)
            .then(|| MerchantExtractor::new(&self.library).extract(&text))
            .flatten();
        let transaction_number = ReferenceExtractor::new().extract(&text);
        let currency = CurrencyExtractor::new().extract(&text);

        let mut warnings = Vec::new();
        if amount.is_none() {
            warnings.push("could not extract amount".to_string());
        }
        if transaction_date.is_none() {
            warnings.push("could not extract transaction date".to_string());
        }
        if transaction_number.is_none() {
            warnings.push("could not extract transaction number".to_string());
        }
        if merchant_name.is_none() {
            warnings.push("could not extract merchant name".to_string());
        }

        let items = extract_items(&text, amount, &self.classifier);

        let tax_amount = amount.map(|a| {
            (a * self.config.vat_rate)
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        });

        let data = ExtractedVoucherData {
            amount,
            transaction_date,
            transaction_number,
            merchant_name,
            items,
            total_amount: amount,
            tax_amount,
            currency: currency.unwrap_or_else(|| self.config.default_currency.clone()),
            raw_text: text.raw().to_string(),
        };

        let confidence = completeness_score(&data);
        debug!("extraction complete, completeness {:.1}%", confidence);

        Ok(ExtractionOutcome {
            data,
            confidence,
            warnings,
            processing_time_ms: start.elapsed().as_millis() as u64,
        })
    }
}

impl Default for VoucherParser {
    fn default() -> Self {
        Self::new()
    }
}
