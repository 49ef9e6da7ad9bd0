//! Error types for the recibo-core library.

use thiserror::Error;

/// Main error type for the recibo library.
#[derive(Error, Debug)]
pub enum ReciboError {
    /// Text-detection (OCR) error.
    #[error("OCR error: {0}")]
    Ocr(#[from] OcrError),

    /// Pattern-library error.
    #[error("pattern error: {0}")]
    Pattern(#[from] PatternError),

    /// Object-storage error.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// Record-store error.
    #[error("persistence error: {0}")]
    Persistence(#[from] PersistenceError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors from the external text-detection service.
#[derive(Error, Debug)]
pub enum OcrError {
    /// The engine found no usable text in the image. Distinct from a
    /// per-field miss, which is represented by field absence.
    #[error("no text detected in image")]
    NoTextDetected,

    /// Detection failed upstream.
    #[error("text detection failed: {0}")]
    Detection(String),
}

/// Errors from pattern-library mutations.
#[derive(Error, Debug)]
pub enum PatternError {
    /// The referenced category does not exist. Categories are a closed set
    /// established at startup.
    #[error("unknown category: {0}")]
    UnknownCategory(String),
}

/// Errors from the object-storage collaborator.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The bucket rejected the upload.
    #[error("upload failed: {0}")]
    UploadFailed(String),

    /// The bucket stored the object but returned no public URL.
    #[error("no public URL for {0}")]
    MissingPublicUrl(String),
}

/// Errors from the record store.
#[derive(Error, Debug)]
pub enum PersistenceError {
    /// Insert was rejected by the backend.
    #[error("insert failed: {0}")]
    Insert(String),

    /// Listing records failed.
    #[error("query failed: {0}")]
    Query(String),
}

/// Result type for the recibo library.
pub type Result<T> = std::result::Result<T, ReciboError>;
