//! Training data and statistical text classification.

pub mod classifier;
pub mod training;

pub use classifier::TextClassifier;
pub use training::{Category, PatternLibrary};
