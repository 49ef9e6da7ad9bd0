//! Core library for Peruvian payment-voucher text extraction.
//!
//! This crate provides:
//! - A pattern library of labeled examples and extraction regexes
//! - A bag-of-words classifier trained from those examples
//! - Rule-based field extractors (amount, date, merchant, reference
//!   number, currency, items)
//! - The extraction orchestrator with completeness scoring
//! - Contracts for the storage, OCR and persistence collaborators

pub mod error;
pub mod models;
pub mod nlp;
pub mod services;
pub mod voucher;

pub use error::{ReciboError, Result};
pub use models::config::ReciboConfig;
pub use models::voucher::{ExtractedVoucherData, VoucherItem, VoucherRecord};
pub use nlp::{Category, PatternLibrary, TextClassifier};
pub use services::{ObjectStorage, TextDetection, VoucherService, VoucherStore};
pub use voucher::{completeness_score, ExtractionOutcome, VoucherParser};
