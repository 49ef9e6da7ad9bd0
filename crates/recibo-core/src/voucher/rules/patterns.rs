//! Shared fallback patterns for voucher field extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Reference-number labels, most specific first.
    pub static ref REFERENCE_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"(?i)REF:\s*(\d+)").unwrap(),
        Regex::new(r"(?i)REFERENCIA:\s*(\d+)").unwrap(),
        Regex::new(r"(?i)NRO\.?:\s*(\d+)").unwrap(),
        Regex::new(r"(?i)TRANSACCI[OÓ]N:\s*(\d+)").unwrap(),
    ];

    // Token shapes used by the scan fallbacks.
    pub static ref TOKEN_AMOUNT: Regex = Regex::new(r"^\d+[.,]\d{2}$").unwrap();
    pub static ref TOKEN_DATE: Regex = Regex::new(r"^\d{2}[-/]\d{2}[-/]\d{2,4}$").unwrap();
    pub static ref TOKEN_DIGITS: Regex = Regex::new(r"^\d+$").unwrap();

    // Currency keyword sets. Symbol forms match anywhere; word forms are
    // bounded so PEN/SOL never fire inside words like "PENDIENTE".
    pub static ref CURRENCY_PEN: Regex =
        Regex::new(r"(?i)S/|\bPEN\b|\bSOLES\b|\bSOL\b").unwrap();
    pub static ref CURRENCY_USD: Regex =
        Regex::new(r"(?i)\$|\bUSD\b|\bD[OÓ]LAR(?:ES)?\b").unwrap();
    pub static ref CURRENCY_EUR: Regex =
        Regex::new(r"(?i)€|\bEUR\b|\bEUROS?\b").unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_patterns_capture_digit_runs() {
        let caps = REFERENCE_PATTERNS[0].captures("REF:123456").unwrap();
        assert_eq!(&caps[1], "123456");

        let caps = REFERENCE_PATTERNS[2].captures("NRO.: 98765").unwrap();
        assert_eq!(&caps[1], "98765");
    }

    #[test]
    fn currency_word_forms_are_bounded() {
        assert!(CURRENCY_PEN.is_match("45.00 PEN"));
        assert!(!CURRENCY_PEN.is_match("PAGO PENDIENTE"));
        assert!(CURRENCY_USD.is_match("$45.00"));
        assert!(!CURRENCY_USD.is_match("CONSOLIDADO"));
        assert!(CURRENCY_EUR.is_match("importe 12,00 €"));
    }

    #[test]
    fn token_shapes() {
        assert!(TOKEN_AMOUNT.is_match("45.50"));
        assert!(TOKEN_AMOUNT.is_match("45,50"));
        assert!(!TOKEN_AMOUNT.is_match("45"));
        assert!(TOKEN_DATE.is_match("09/01/2025"));
        assert!(TOKEN_DATE.is_match("09-01-25"));
        assert!(!TOKEN_DATE.is_match("9/1/25"));
    }
}
