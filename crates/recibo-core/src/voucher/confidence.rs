//! Completeness scoring for extracted voucher data.

use crate::models::voucher::ExtractedVoucherData;

/// Full weight of the scored field set.
const TOTAL_WEIGHT: f32 = 10.0;

/// Score how complete an extraction is, as a 0-100 percentage.
///
/// Scalar fields weigh 1 point each; a non-empty item list weighs 2. The
/// denominator is the full weight of the field set, so a missing field
/// lowers the score instead of dropping out of it.
pub fn completeness_score(data: &ExtractedVoucherData) -> f32 {
    let mut score = 0.0f32;

    if data.amount.is_some() {
        score += 1.0;
    }
    if data.transaction_date.is_some() {
        score += 1.0;
    }
    if data.transaction_number.is_some() {
        score += 1.0;
    }
    if data.merchant_name.is_some() {
        score += 1.0;
    }
    if !data.currency.is_empty() {
        score += 1.0;
    }
    if !data.items.is_empty() {
        score += 2.0;
    }
    if data.total_amount.is_some() {
        score += 1.0;
    }
    if data.tax_amount.is_some() {
        score += 1.0;
    }

    (score / TOTAL_WEIGHT) * 100.0
}
