use serde::{Deserialize, Serialize};

/// ISO 4217 currency representation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CurrencyCode(pub String);

impl CurrencyCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self::new("USD")
    }
}

/// Prefix placed before the digits. Codes without a known symbol are spelled
/// out with a trailing space (`CHF 12.00`).
pub fn symbol_for(code: &str) -> String {
    match code {
        "USD" => "$".into(),
        "EUR" => "€".into(),
        "GBP" => "£".into(),
        "JPY" => "¥".into(),
        _ => format!("{code} "),
    }
}

pub fn minor_units_for(code: &str) -> u8 {
    match code {
        "JPY" => 0,
        "KWD" | "BHD" => 3,
        _ => 2,
    }
}

/// Formats `amount` in US dollars with two decimals, e.g. `$150.00`.
pub fn format_currency(amount: f64) -> String {
    format_currency_value(amount, &CurrencyCode::default())
}

/// Formats `amount` with the symbol and minor-unit precision of `code`.
/// No digit grouping is applied.
pub fn format_currency_value(amount: f64, code: &CurrencyCode) -> String {
    let precision = minor_units_for(code.as_str()) as usize;
    let body = format!("{:.*}", precision, amount.abs());
    let symbol = symbol_for(code.as_str());
    // `-0.00` should not render with a sign.
    if amount < 0.0 && body.chars().any(|ch| ch.is_ascii_digit() && ch != '0') {
        format!("-{symbol}{body}")
    } else {
        format!("{symbol}{body}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_whole_dollars_with_two_decimals() {
        assert_eq!(format_currency(150.0), "$150.00");
        assert_eq!(format_currency(34.0), "$34.00");
        assert_eq!(format_currency(0.0), "$0.00");
    }

    #[test]
    fn does_not_group_thousands() {
        assert_eq!(format_currency(2057.0), "$2057.00");
    }

    #[test]
    fn respects_minor_units_per_code() {
        assert_eq!(format_currency_value(1400.0, &CurrencyCode::new("jpy")), "¥1400");
        assert_eq!(format_currency_value(1.5, &CurrencyCode::new("KWD")), "KWD 1.500");
        assert_eq!(format_currency_value(1.0, &CurrencyCode::new("AUD")), "AUD 1.00");
    }

    #[test]
    fn negative_values_lead_with_sign() {
        assert_eq!(format_currency_value(-5.0, &CurrencyCode::new("EUR")), "-€5.00");
        assert_eq!(format_currency(-0.001), "$0.00");
    }
}
