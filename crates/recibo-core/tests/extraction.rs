//! End-to-end extraction tests over realistic receipt texts.

use std::str::FromStr;

use pretty_assertions::assert_eq;
use rust_decimal::Decimal;

use recibo_core::error::OcrError;
use recibo_core::{completeness_score, ReciboError, VoucherParser};

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

#[test]
fn supermarket_receipt_recovers_every_primary_field() {
    let parser = VoucherParser::new();
    let text = "comprobante\nTOTAL S/ 45.50\nREF:123456\nDestino: Supermercado XYZ\n";
    let outcome = parser.parse(text).unwrap();

    assert_eq!(outcome.data.amount, Some(dec("45.50")));
    assert_eq!(outcome.data.transaction_number, Some("123456".to_string()));
    assert_eq!(
        outcome.data.merchant_name,
        Some("Supermercado XYZ".to_string())
    );
    assert_eq!(outcome.data.tax_amount, Some(dec("8.19")));
    assert_eq!(outcome.data.currency, "PEN");
    assert_eq!(outcome.data.total_amount, outcome.data.amount);

    assert_eq!(outcome.data.items[0].description, "Total compra");
    assert_eq!(outcome.data.items[0].total_price, dec("45.50"));

    // Every weighted field except the date is present.
    assert_eq!(outcome.confidence, 80.0);
}

#[test]
fn labeled_compact_date_is_normalized() {
    let parser = VoucherParser::new();
    let outcome = parser.parse("comprobante\nFECHA:09ENE25\n").unwrap();
    assert_eq!(outcome.data.transaction_date, Some("09/01/25".to_string()));
}

#[test]
fn amount_absence_lowers_the_score() {
    let parser = VoucherParser::new();

    let without = parser.parse("recibo\nDestino: Bodega Maria\nREF:555\n").unwrap();
    assert_eq!(without.data.amount, None);
    assert_eq!(without.data.tax_amount, None);
    assert_eq!(without.data.total_amount, None);
    assert!(without.data.items.is_empty());
    // merchant + number + default currency
    assert_eq!(without.confidence, 30.0);

    let with = parser
        .parse("recibo\nTOTAL S/ 9.00\nDestino: Bodega Maria\nREF:555\n")
        .unwrap();
    assert_eq!(with.confidence, 80.0);
}

#[test]
fn empty_ocr_text_fails_without_a_partial_result() {
    let parser = VoucherParser::new();
    let err = parser.parse("").unwrap_err();
    assert!(matches!(err, ReciboError::Ocr(OcrError::NoTextDetected)));
}

#[test]
fn dollar_amounts_detect_usd() {
    let parser = VoucherParser::new();
    let outcome = parser.parse("cargo mensual\ncobro de $45.00\n").unwrap();
    assert_eq!(outcome.data.currency, "USD");
}

#[test]
fn currency_defaults_to_pen() {
    let parser = VoucherParser::new();
    let outcome = parser.parse("comprobante\nsin marca de moneda\n").unwrap();
    assert_eq!(outcome.data.currency, "PEN");
}

#[test]
fn tax_is_present_iff_amount_is_present() {
    let parser = VoucherParser::new();

    for text in [
        "TOTAL S/ 45.50",
        "IMPORTE S/ 12,34",
        "MONTO S/ 100.00",
        "recibo sin monto",
        "Destino: Tienda",
    ] {
        let outcome = parser.parse(text).unwrap();
        match outcome.data.amount {
            Some(amount) => {
                let expected = (amount * dec("0.18")).round_dp(2);
                assert_eq!(outcome.data.tax_amount, Some(expected));
            }
            None => assert_eq!(outcome.data.tax_amount, None),
        }
    }
}

#[test]
fn extraction_is_idempotent() {
    let parser = VoucherParser::new();
    let text = "yape\nTOTAL S/ 45.50\nREF:123456\nDestino: Supermercado XYZ\n21 ene. 2025\n";

    let first = parser.parse(text).unwrap();
    let second = parser.parse(text).unwrap();
    assert_eq!(first.data, second.data);
}

#[test]
fn score_stays_within_bounds() {
    let parser = VoucherParser::new();
    for text in [
        "x",
        "TOTAL S/ 45.50",
        "yape\nTOTAL S/ 45.50\nREF:123456\nFECHA:09ENE25\nDestino: Supermercado XYZ\n",
    ] {
        let outcome = parser.parse(text).unwrap();
        assert!((0.0..=100.0).contains(&outcome.confidence));
        assert_eq!(outcome.confidence, completeness_score(&outcome.data));
    }
}

#[test]
fn yape_style_receipt() {
    let parser = VoucherParser::new();
    let text = "10:38 AM\nyape\n¡Yapeaste!\nS/50\nEly F. Leguia O.\n21 ene. 2025 - 10:38 am\nN° de celular: *** *** 480\nDestino: Yape\nN° de operación: 06144082";
    let outcome = parser.parse(text).unwrap();

    // No labeled total, so the amount stays absent.
    assert_eq!(outcome.data.amount, None);
    assert_eq!(outcome.data.transaction_date, Some("21/01/2025".to_string()));
    assert_eq!(outcome.data.merchant_name, Some("Yape".to_string()));
    assert_eq!(outcome.data.currency, "PEN");
    assert_eq!(outcome.data.raw_text, text);
}
