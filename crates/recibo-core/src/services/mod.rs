//! Collaborator contracts and the thin service that wires them together.
//!
//! Storage, OCR and persistence are external systems; the core only
//! depends on the contracts below. These are the only operations in the
//! pipeline that may suspend; field extraction itself is synchronous
//! computation.

use async_trait::async_trait;
use tracing::info;

use crate::error::{OcrError, PersistenceError, ReciboError, StorageError};
use crate::models::voucher::{ExtractedVoucherData, NewVoucherRecord, VoucherRecord};
use crate::voucher::VoucherParser;

/// Object storage that accepts a binary blob and returns a publicly
/// resolvable URL.
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    async fn store(&self, bytes: &[u8], content_type: &str) -> Result<String, StorageError>;
}

/// Text-detection engine that turns image bytes into one raw text blob.
#[async_trait]
pub trait TextDetection: Send + Sync {
    async fn detect_text(&self, bytes: &[u8]) -> Result<String, OcrError>;
}

/// Append/list store for voucher records.
#[async_trait]
pub trait VoucherStore: Send + Sync {
    async fn insert(&self, record: NewVoucherRecord) -> Result<VoucherRecord, PersistenceError>;

    async fn list_all(&self) -> Result<Vec<VoucherRecord>, PersistenceError>;
}

/// Outcome of processing one uploaded voucher image.
#[derive(Debug, Clone)]
pub struct ProcessedVoucher {
    /// Public URL of the stored image.
    pub image_url: String,
    /// Extracted data, ready for review.
    pub data: ExtractedVoucherData,
    /// Completeness score (0-100).
    pub confidence: f32,
}

/// Upload -> OCR -> extraction -> persistence glue.
///
/// Collaborator failures surface with their own messages; nothing here
/// retries.
pub struct VoucherService<S, D, P> {
    storage: S,
    detector: D,
    store: P,
    parser: VoucherParser,
}

impl<S, D, P> VoucherService<S, D, P>
where
    S: ObjectStorage,
    D: TextDetection,
    P: VoucherStore,
{
    pub fn new(storage: S, detector: D, store: P) -> Self {
        Self {
            storage,
            detector,
            store,
            parser: VoucherParser::new(),
        }
    }

    /// Replace the default parser (e.g. one built over a custom library).
    pub fn with_parser(mut self, parser: VoucherParser) -> Self {
        self.parser = parser;
        self
    }

    /// Store the image, run text detection, extract fields.
    pub async fn process(
        &self,
        bytes: &[u8],
        content_type: &str,
    ) -> Result<ProcessedVoucher, ReciboError> {
        let image_url = self.storage.store(bytes, content_type).await?;
        info!("stored voucher image at {}", image_url);

        let raw_text = self.detector.detect_text(bytes).await?;
        let outcome = self.parser.parse(&raw_text)?;

        Ok(ProcessedVoucher {
            image_url,
            data: outcome.data,
            confidence: outcome.confidence,
        })
    }

    /// Persist a reviewed extraction.
    ///
    /// The review operations on [`ExtractedVoucherData`] keep the item
    /// totals consistent; the record is written as given.
    pub async fn save(
        &self,
        image_url: String,
        data: ExtractedVoucherData,
    ) -> Result<VoucherRecord, ReciboError> {
        let record = self.store.insert(NewVoucherRecord { image_url, data }).await?;
        info!("saved voucher record {}", record.id);
        Ok(record)
    }

    /// All persisted voucher records.
    pub async fn history(&self) -> Result<Vec<VoucherRecord>, ReciboError> {
        Ok(self.store.list_all().await?)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use chrono::Utc;
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;

    use super::*;

    struct FakeStorage;

    #[async_trait]
    impl ObjectStorage for FakeStorage {
        async fn store(&self, _bytes: &[u8], _content_type: &str) -> Result<String, StorageError> {
            Ok("https://bucket.test/vouchers/1.png".to_string())
        }
    }

    struct FakeDetector {
        text: String,
    }

    #[async_trait]
    impl TextDetection for FakeDetector {
        async fn detect_text(&self, _bytes: &[u8]) -> Result<String, OcrError> {
            if self.text.is_empty() {
                Err(OcrError::NoTextDetected)
            } else {
                Ok(self.text.clone())
            }
        }
    }

    #[derive(Default)]
    struct MemoryStore {
        records: Mutex<Vec<VoucherRecord>>,
    }

    #[async_trait]
    impl VoucherStore for MemoryStore {
        async fn insert(
            &self,
            record: NewVoucherRecord,
        ) -> Result<VoucherRecord, PersistenceError> {
            let mut records = self
                .records
                .lock()
                .map_err(|e| PersistenceError::Insert(e.to_string()))?;
            let inserted = VoucherRecord {
                id: records.len() as i64 + 1,
                image_url: record.image_url,
                data: record.data,
                created_at: Utc::now(),
                status: true,
            };
            records.push(inserted.clone());
            Ok(inserted)
        }

        async fn list_all(&self) -> Result<Vec<VoucherRecord>, PersistenceError> {
            let records = self
                .records
                .lock()
                .map_err(|e| PersistenceError::Query(e.to_string()))?;
            Ok(records.clone())
        }
    }

    fn service(text: &str) -> VoucherService<FakeStorage, FakeDetector, MemoryStore> {
        VoucherService::new(
            FakeStorage,
            FakeDetector {
                text: text.to_string(),
            },
            MemoryStore::default(),
        )
    }

    #[tokio::test]
    async fn process_stores_detects_and_extracts() {
        let service = service("TOTAL S/ 45.50\nREF:123456\nDestino: Supermercado XYZ\n");
        let processed = service.process(b"png-bytes", "image/png").await.unwrap();

        assert_eq!(processed.image_url, "https://bucket.test/vouchers/1.png");
        assert_eq!(processed.data.amount, Some(Decimal::new(4550, 2)));
        assert!(processed.confidence > 0.0);
    }

    #[tokio::test]
    async fn process_propagates_empty_ocr_as_no_text_detected() {
        let service = service("");
        let err = service.process(b"png-bytes", "image/png").await.unwrap_err();
        assert!(matches!(err, ReciboError::Ocr(OcrError::NoTextDetected)));
    }

    #[tokio::test]
    async fn save_then_history_round_trips_the_record() {
        let service = service("TOTAL S/ 45.50\n");
        let processed = service.process(b"png-bytes", "image/png").await.unwrap();

        let record = service
            .save(processed.image_url.clone(), processed.data.clone())
            .await
            .unwrap();
        assert_eq!(record.id, 1);
        assert!(record.status);

        let history = service.history().await.unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].data, processed.data);
    }
}
