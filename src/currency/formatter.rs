// ============================================================================
// Currency Formatter
// Minor units to display strings and back, fail-soft on user input
// ============================================================================

use super::code::{currency_symbol, is_well_formed};
use super::errors::CurrencyError;
use super::locale::Locale;
use crate::numeric::{to_minor_units, MinorUnits};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Raw input accepted by `CurrencyFormatter::parse`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MoneyInput<'a> {
    /// Free-form text typed by a user ("$1,234.50", "12", "")
    Str(&'a str),
    /// Trusted major-unit number
    Number(f64),
}

impl<'a> From<&'a str> for MoneyInput<'a> {
    fn from(value: &'a str) -> Self {
        MoneyInput::Str(value)
    }
}

impl<'a> From<&'a String> for MoneyInput<'a> {
    fn from(value: &'a String) -> Self {
        MoneyInput::Str(value.as_str())
    }
}

impl From<f64> for MoneyInput<'_> {
    fn from(value: f64) -> Self {
        MoneyInput::Number(value)
    }
}

/// Formats and parses amounts for one currency in one locale.
///
/// Every currency is rendered with exactly two fraction digits, even those
/// whose real minor unit differs (JPY, KWD).
///
/// # Example
/// ```
/// use split_engine::currency::CurrencyFormatter;
/// use split_engine::numeric::MinorUnits;
///
/// let usd = CurrencyFormatter::new("USD", None).unwrap();
/// assert_eq!(usd.format(MinorUnits::from_raw(123_450)), "$1,234.50");
/// assert_eq!(usd.parse("$1,234.50").raw_value(), 123_450);
/// assert_eq!(usd.parse("oops").raw_value(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyFormatter {
    currency: String,
    symbol: String,
    locale: Locale,
}

impl CurrencyFormatter {
    /// Create a formatter for `currency` in `locale` (default `en-US`).
    ///
    /// # Errors
    /// Returns `InvalidCurrencyCode` unless the code is three upper-case
    /// ASCII letters. Well-formed codes outside `CURRENCIES` are accepted
    /// and rendered by code.
    pub fn new(currency: &str, locale: Option<&str>) -> Result<Self, CurrencyError> {
        if !is_well_formed(currency) {
            return Err(CurrencyError::InvalidCurrencyCode(currency.to_string()));
        }

        Ok(Self {
            currency: currency.to_string(),
            symbol: currency_symbol(currency).to_string(),
            locale: Locale::resolve(locale),
        })
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Render minor units as a display string, e.g. `-$1,234.50` or
    /// `1.234,50 €`.
    pub fn format(&self, amount: MinorUnits) -> String {
        let magnitude = amount.raw_value().unsigned_abs();
        let scale = MinorUnits::SCALE as u64;
        let major = self.locale.group_digits(&(magnitude / scale).to_string());
        let number = format!(
            "{}{}{:02}",
            major,
            self.locale.decimal_separator,
            magnitude % scale
        );

        let body = self.locale.place_symbol(&number, &self.symbol);
        if amount.is_negative() {
            format!("-{}", body)
        } else {
            body
        }
    }

    /// Same as `format`; the name used by display components.
    pub fn to_ui_string(&self, amount: MinorUnits) -> String {
        self.format(amount)
    }

    /// Convert user input to minor units. Never fails: anything that does
    /// not yield a finite, representable number becomes zero.
    pub fn parse<'a>(&self, input: impl Into<MoneyInput<'a>>) -> MinorUnits {
        match input.into() {
            MoneyInput::Number(value) => to_minor_units(value).unwrap_or(MinorUnits::ZERO),
            MoneyInput::Str(text) => parse_currency_input(text),
        }
    }
}

/// Format with the default locale.
///
/// # Errors
/// Returns `InvalidCurrencyCode` for malformed codes.
pub fn format_currency(amount: MinorUnits, currency: &str) -> Result<String, CurrencyError> {
    Ok(CurrencyFormatter::new(currency, None)?.format(amount))
}

/// Parse free-form text into minor units, ignoring currency symbols,
/// grouping separators and whitespace.
///
/// Every character other than ASCII digits, `.` and `-` is dropped, then
/// the longest leading `-?digits(.digits)?` prefix is read. Input with no
/// such prefix yields zero.
pub fn parse_currency_input(input: &str) -> MinorUnits {
    let cleaned: String = input
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();

    leading_decimal(&cleaned)
        .and_then(|d| MinorUnits::from_decimal(d).ok())
        .unwrap_or(MinorUnits::ZERO)
}

/// Read the longest decimal number at the start of `s`.
fn leading_decimal(s: &str) -> Option<Decimal> {
    let (negative, rest) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    };

    let int_len = rest.bytes().take_while(|b| b.is_ascii_digit()).count();
    let int_digits = &rest[..int_len];
    let frac_digits = match rest[int_len..].strip_prefix('.') {
        Some(frac) => {
            let frac_len = frac.bytes().take_while(|b| b.is_ascii_digit()).count();
            &frac[..frac_len]
        },
        None => "",
    };

    if int_digits.is_empty() && frac_digits.is_empty() {
        return None;
    }

    let normalized = format!(
        "{}{}.{}",
        if negative { "-" } else { "" },
        if int_digits.is_empty() { "0" } else { int_digits },
        if frac_digits.is_empty() { "0" } else { frac_digits },
    );
    Decimal::from_str(&normalized).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usd() -> CurrencyFormatter {
        CurrencyFormatter::new("USD", Some("en-US")).unwrap()
    }

    fn eur_de() -> CurrencyFormatter {
        CurrencyFormatter::new("EUR", Some("de-DE")).unwrap()
    }

    #[test]
    fn test_rejects_malformed_currency_code() {
        assert_eq!(
            CurrencyFormatter::new("us", None),
            Err(CurrencyError::InvalidCurrencyCode("us".to_string()))
        );
        assert!(CurrencyFormatter::new("usd", None).is_err());
        assert!(CurrencyFormatter::new("USDD", None).is_err());
    }

    #[test]
    fn test_accepts_well_formed_unlisted_code() {
        let xau = CurrencyFormatter::new("XAU", None).unwrap();
        assert_eq!(xau.format(MinorUnits::from_raw(100)), "XAU1.00");
    }

    #[test]
    fn test_format_usd() {
        let f = usd();
        assert_eq!(f.format(MinorUnits::from_raw(1000)), "$10.00");
        assert_eq!(f.format(MinorUnits::from_raw(0)), "$0.00");
        assert_eq!(f.format(MinorUnits::from_raw(9999)), "$99.99");
        assert_eq!(f.format(MinorUnits::from_raw(123_456_789)), "$1,234,567.89");
        assert_eq!(f.to_ui_string(MinorUnits::from_raw(5)), "$0.05");
    }

    #[test]
    fn test_format_negative() {
        assert_eq!(usd().format(MinorUnits::from_raw(-1000)), "-$10.00");
        assert_eq!(
            eur_de().format(MinorUnits::from_raw(-1000)),
            "-10,00\u{a0}€"
        );
        assert_eq!(
            usd().format(MinorUnits::MIN),
            "-$92,233,720,368,547,758.08"
        );
    }

    #[test]
    fn test_format_eur_de() {
        assert_eq!(
            eur_de().format(MinorUnits::from_raw(123_450)),
            "1.234,50\u{a0}€"
        );
    }

    #[test]
    fn test_format_other_locales() {
        let inr = CurrencyFormatter::new("INR", Some("en-IN")).unwrap();
        assert_eq!(inr.format(MinorUnits::from_raw(12_345_678)), "₹1,23,456.78");

        let brl = CurrencyFormatter::new("BRL", Some("pt-BR")).unwrap();
        assert_eq!(brl.format(MinorUnits::from_raw(123_450)), "R$\u{a0}1.234,50");

        let jpy = CurrencyFormatter::new("JPY", Some("ja-JP")).unwrap();
        assert_eq!(jpy.format(MinorUnits::from_raw(100_000)), "¥1,000.00");
    }

    #[test]
    fn test_unknown_locale_falls_back() {
        let f = CurrencyFormatter::new("GBP", Some("tlh-KX")).unwrap();
        assert_eq!(f.locale().tag, "en-US");
        assert_eq!(f.format(MinorUnits::from_raw(250)), "£2.50");
    }

    #[test]
    fn test_parse_string() {
        let f = usd();
        assert_eq!(f.parse("10.00").raw_value(), 1000);
        assert_eq!(f.parse("99.99").raw_value(), 9999);
        assert_eq!(f.parse("0.01").raw_value(), 1);
        assert_eq!(f.parse("-12.5").raw_value(), -1250);
        assert_eq!(f.parse(".5").raw_value(), 50);
        assert_eq!(f.parse("7.").raw_value(), 700);
    }

    #[test]
    fn test_parse_number() {
        let f = usd();
        assert_eq!(f.parse(10.0).raw_value(), 1000);
        assert_eq!(f.parse(99.99).raw_value(), 9999);
        assert_eq!(f.parse(f64::NAN).raw_value(), 0);
        assert_eq!(f.parse(f64::INFINITY).raw_value(), 0);
        assert_eq!(f.parse(1e300).raw_value(), 0);
    }

    #[test]
    fn test_parse_strips_symbols_and_grouping() {
        assert_eq!(parse_currency_input("$10.00").raw_value(), 1000);
        assert_eq!(parse_currency_input("€50.00").raw_value(), 5000);
        assert_eq!(parse_currency_input("$1,234.56").raw_value(), 123_456);
        assert_eq!(parse_currency_input(" 12 ").raw_value(), 1200);
        assert_eq!(parse_currency_input("-$3.10").raw_value(), -310);
    }

    #[test]
    fn test_parse_fail_soft() {
        assert_eq!(parse_currency_input("").raw_value(), 0);
        assert_eq!(parse_currency_input("invalid").raw_value(), 0);
        assert_eq!(parse_currency_input("abc!@#").raw_value(), 0);
        assert_eq!(parse_currency_input("-").raw_value(), 0);
        assert_eq!(parse_currency_input(".").raw_value(), 0);
        assert_eq!(parse_currency_input("--5").raw_value(), 0);
    }

    #[test]
    fn test_parse_reads_leading_number_only() {
        assert_eq!(parse_currency_input("1.2.3").raw_value(), 120);
        assert_eq!(parse_currency_input("1-2").raw_value(), 100);
    }

    #[test]
    fn test_parse_rounds_exactly() {
        // No binary float drift: 1.005 rounds up
        assert_eq!(parse_currency_input("1.005").raw_value(), 101);
        assert_eq!(parse_currency_input("1.004").raw_value(), 100);
        assert_eq!(parse_currency_input("-1.005").raw_value(), -101);
    }

    #[test]
    fn test_parse_out_of_range_is_zero() {
        assert_eq!(
            parse_currency_input("99999999999999999999999999999999999").raw_value(),
            0
        );
        assert_eq!(
            parse_currency_input("92233720368547758.08").raw_value(),
            0
        );
        assert_eq!(
            parse_currency_input("92233720368547758.07").raw_value(),
            i64::MAX
        );
    }

    #[test]
    fn test_canonical_form_round_trips() {
        for raw in [0, 1, 99, 1000, 9999, 123_456_789] {
            let amount = MinorUnits::from_raw(raw);
            assert_eq!(parse_currency_input(&amount.to_string()), amount);
        }
    }

    #[test]
    fn test_en_us_display_round_trips() {
        let f = usd();
        for raw in [0, 1, 1000, 123_456_789] {
            let amount = MinorUnits::from_raw(raw);
            assert_eq!(f.parse(&f.format(amount)), amount);
        }
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(
            format_currency(MinorUnits::from_raw(1000), "USD").unwrap(),
            "$10.00"
        );
        assert_eq!(
            format_currency(MinorUnits::from_raw(5000), "EUR").unwrap(),
            "€50.00"
        );
        assert!(format_currency(MinorUnits::from_raw(1000), "??").is_err());
    }
}
