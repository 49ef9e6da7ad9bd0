//! Item-list assembly from the extracted amount and classified lines.

use rust_decimal::Decimal;

use crate::models::voucher::VoucherItem;
use crate::nlp::training::Category;
use crate::nlp::TextClassifier;

use super::SourceText;

/// Build the item list for a voucher.
///
/// The list is seeded with a synthetic "Total compra" line when an amount
/// was found; after that, every line the classifier tags as a product or
/// service is appended with quantity 1 and the overall amount as its
/// price (0 when no amount was found). Per-item quantities and prices are
/// not parsed from the lines themselves.
pub fn extract_items(
    text: &SourceText,
    amount: Option<Decimal>,
    classifier: &TextClassifier,
) -> Vec<VoucherItem> {
    let mut items = Vec::new();

    if let Some(amount) = amount {
        items.push(VoucherItem::new("Total compra", Decimal::ONE, amount));
    }

    let unit_price = amount.unwrap_or(Decimal::ZERO);
    for line in text.lines() {
        match classifier.classify(line) {
            Category::Product | Category::Service => {
                items.push(VoucherItem::new(line.clone(), Decimal::ONE, unit_price));
            }
            _ => {}
        }
    }

    items
}
