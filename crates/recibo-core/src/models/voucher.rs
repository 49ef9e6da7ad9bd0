//! Voucher data models shared by the extraction pipeline and persistence.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single line item on a voucher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoucherItem {
    /// Item description.
    pub description: String,

    /// Quantity purchased.
    pub quantity: Decimal,

    /// Price per unit.
    pub unit_price: Decimal,

    /// Line total. Always `quantity * unit_price` after recomputation;
    /// externally supplied values are never trusted.
    pub total_price: Decimal,
}

impl VoucherItem {
    /// Create an item with the line total derived from quantity and unit
    /// price.
    pub fn new(description: impl Into<String>, quantity: Decimal, unit_price: Decimal) -> Self {
        Self {
            description: description.into(),
            quantity,
            unit_price,
            total_price: quantity * unit_price,
        }
    }

    /// Re-derive the line total from quantity and unit price.
    pub fn recompute_total(&mut self) {
        self.total_price = self.quantity * self.unit_price;
    }
}

/// Structured data extracted from one voucher's OCR text.
///
/// Every field except `currency` and `raw_text` is optional: a field the
/// extractors cannot recover is absent, not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedVoucherData {
    /// Principal transaction amount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,

    /// Transaction date, normalized as `DD/MM/YY` or `DD/MM/YYYY`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_date: Option<String>,

    /// Operation/reference number, digits only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_number: Option<String>,

    /// Merchant or destination name, trimmed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_name: Option<String>,

    /// Line items in discovery order.
    #[serde(default)]
    pub items: Vec<VoucherItem>,

    /// Mirrors `amount` at extraction time. Kept as a separate field
    /// because manual review may diverge it from `amount`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<Decimal>,

    /// Derived VAT (IGV) amount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_amount: Option<Decimal>,

    /// ISO currency code; "PEN" unless an explicit currency was detected.
    pub currency: String,

    /// Cleaned OCR text the result was derived from, retained for audit
    /// and re-processing.
    pub raw_text: String,
}

impl ExtractedVoucherData {
    /// Empty result for the given source text.
    pub fn new(raw_text: impl Into<String>) -> Self {
        Self {
            amount: None,
            transaction_date: None,
            transaction_number: None,
            merchant_name: None,
            items: Vec::new(),
            total_amount: None,
            tax_amount: None,
            currency: "PEN".to_string(),
            raw_text: raw_text.into(),
        }
    }

    /// Append an item, re-deriving its line total and the voucher total.
    pub fn push_item(&mut self, mut item: VoucherItem) {
        item.recompute_total();
        self.items.push(item);
        self.total_amount = Some(self.items_total());
    }

    /// Update an item's quantity and unit price, re-deriving the totals.
    /// Returns false when the index is out of range.
    pub fn edit_item(&mut self, index: usize, quantity: Decimal, unit_price: Decimal) -> bool {
        let Some(item) = self.items.get_mut(index) else {
            return false;
        };
        item.quantity = quantity;
        item.unit_price = unit_price;
        item.recompute_total();
        self.total_amount = Some(self.items_total());
        true
    }

    /// Re-derive every line total, then `total_amount` as their sum.
    /// Leaves `total_amount` untouched when there are no items.
    pub fn recompute_totals(&mut self) {
        for item in &mut self.items {
            item.recompute_total();
        }
        if !self.items.is_empty() {
            self.total_amount = Some(self.items_total());
        }
    }

    fn items_total(&self) -> Decimal {
        self.items.iter().map(|i| i.total_price).sum()
    }
}

/// Input for persisting a reviewed voucher.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewVoucherRecord {
    /// Public URL of the stored voucher image.
    pub image_url: String,

    /// Reviewed extraction result.
    pub data: ExtractedVoucherData,
}

/// A persisted voucher record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoucherRecord {
    /// Backend-assigned identifier.
    pub id: i64,

    /// Public URL of the stored voucher image.
    pub image_url: String,

    /// Extraction result at save time.
    pub data: ExtractedVoucherData,

    /// Insertion timestamp.
    pub created_at: DateTime<Utc>,

    /// True while the record is active.
    pub status: bool,
}
