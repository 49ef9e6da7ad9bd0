//! Bag-of-words category classifier trained from the pattern library.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::models::config::ClassifierConfig;

use super::training::{Category, PatternLibrary};

/// Multinomial naive-Bayes classifier over voucher text spans.
///
/// Trained once from the library's labeled examples with Laplace
/// smoothing. The model is immutable after `train` returns and holds only
/// owned data, so a single instance can be shared across threads for
/// concurrent classification.
#[derive(Debug)]
pub struct TextClassifier {
    config: ClassifierConfig,
    /// Categories in training order; posterior ties resolve to the
    /// earliest entry.
    categories: Vec<Category>,
    /// Example count per category.
    example_counts: Vec<usize>,
    /// Token occurrence counts per category.
    token_counts: Vec<HashMap<String, usize>>,
    /// Total token count per category.
    token_totals: Vec<usize>,
    /// Distinct tokens seen across all examples.
    vocabulary: HashSet<String>,
    total_examples: usize,
}

impl TextClassifier {
    /// Train a classifier from the library's labeled examples with the
    /// default configuration.
    pub fn train(library: &PatternLibrary) -> Self {
        Self::train_with_config(library, ClassifierConfig::default())
    }

    /// Train a classifier from the library's labeled examples.
    pub fn train_with_config(library: &PatternLibrary, config: ClassifierConfig) -> Self {
        let categories: Vec<Category> = Category::ALL.to_vec();
        let mut example_counts = vec![0usize; categories.len()];
        let mut token_counts: Vec<HashMap<String, usize>> =
            vec![HashMap::new(); categories.len()];
        let mut token_totals = vec![0usize; categories.len()];
        let mut vocabulary = HashSet::new();
        let mut total_examples = 0usize;

        for (text, category) in library.examples() {
            let idx = category as usize;
            example_counts[idx] += 1;
            total_examples += 1;

            for token in tokenize(text, &config) {
                vocabulary.insert(token.clone());
                *token_counts[idx].entry(token).or_insert(0) += 1;
                token_totals[idx] += 1;
            }
        }

        debug!(
            "trained classifier: {} categories, {} examples, {} distinct tokens",
            categories.len(),
            total_examples,
            vocabulary.len()
        );

        Self {
            config,
            categories,
            example_counts,
            token_counts,
            token_totals,
            vocabulary,
            total_examples,
        }
    }

    /// Classify a text span into the most likely category.
    ///
    /// Never fails: tokens outside the training vocabulary are skipped, so
    /// a span with no known tokens degrades to the prior-most-likely
    /// category (the one with the most training examples, earliest on
    /// ties).
    pub fn classify(&self, text: &str) -> Category {
        let tokens: Vec<String> = tokenize(text, &self.config)
            .filter(|t| self.vocabulary.contains(t))
            .collect();

        let mut best_idx = 0usize;
        let mut best_score = f64::NEG_INFINITY;

        for idx in 0..self.categories.len() {
            let score = self.score(idx, &tokens);
            if score > best_score {
                best_score = score;
                best_idx = idx;
            }
        }

        self.categories[best_idx]
    }

    /// Log-posterior of one category for the given known tokens.
    fn score(&self, idx: usize, tokens: &[String]) -> f64 {
        // Smoothed prior keeps empty categories finite.
        let prior = (self.example_counts[idx] as f64 + 1.0)
            / (self.total_examples as f64 + self.categories.len() as f64);
        let mut score = prior.ln();

        let denominator = (self.token_totals[idx] + self.vocabulary.len()) as f64;
        for token in tokens {
            let count = self.token_counts[idx].get(token).copied().unwrap_or(0);
            score += ((count as f64 + 1.0) / denominator).ln();
        }

        score
    }
}

fn tokenize<'a>(text: &'a str, config: &'a ClassifierConfig) -> impl Iterator<Item = String> + 'a {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(move |t| !t.is_empty() && t.chars().count() >= config.min_token_len)
        .map(move |t| {
            if config.lowercase {
                t.to_lowercase()
            } else {
                t.to_string()
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> TextClassifier {
        TextClassifier::train(&PatternLibrary::builtin())
    }

    #[test]
    fn recognizes_seeded_categories() {
        let classifier = classifier();
        assert_eq!(classifier.classify("importe total a pagar"), Category::Amount);
        assert_eq!(classifier.classify("fecha de emisión"), Category::Date);
        assert_eq!(classifier.classify("razón social"), Category::Merchant);
        assert_eq!(classifier.classify("producto"), Category::Product);
        assert_eq!(classifier.classify("pago de servicio"), Category::Service);
    }

    #[test]
    fn unknown_tokens_fall_back_to_prior_argmax() {
        let classifier = classifier();
        // No token overlaps the training vocabulary; "amounts" has the
        // most examples, so the prior decides.
        assert_eq!(classifier.classify("zzz qqq www"), Category::Amount);
        assert_eq!(classifier.classify(""), Category::Amount);
    }

    #[test]
    fn classification_is_deterministic() {
        let classifier = classifier();
        let first = classifier.classify("servicio de consumo");
        for _ in 0..10 {
            assert_eq!(classifier.classify("servicio de consumo"), first);
        }
    }

    #[test]
    fn added_examples_shift_the_model() {
        let mut library = PatternLibrary::builtin();
        library.add_example("services", "suscripción mensual").unwrap();
        let classifier = TextClassifier::train(&library);
        assert_eq!(classifier.classify("suscripción mensual"), Category::Service);
    }
}
