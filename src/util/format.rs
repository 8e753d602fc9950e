//! Display helpers for monetary amounts. Pricing always happens in USD;
//! KRW is a display-only conversion.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Usd,
    Krw,
}

impl Currency {
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Krw => "₩",
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Krw => "KRW",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_uppercase().as_str() {
            "USD" => Some(Currency::Usd),
            "KRW" => Some(Currency::Krw),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Formats a USD amount in the chosen display currency, rounded to whole units.
pub fn format_currency(amount_usd: f64, currency: Currency, krw_per_usd: f64) -> String {
    let amount = match currency {
        Currency::Usd => amount_usd,
        Currency::Krw => amount_usd * krw_per_usd,
    };
    let sign = if amount.round() < 0.0 { "-" } else { "" };
    format!(
        "{sign}{}{}",
        currency.symbol(),
        group_thousands(amount.abs().round() as u64)
    )
}

/// Rough USD delta such as `약 -$1,250` or `약 +$300`.
pub fn format_approx_delta(delta_usd: f64) -> String {
    let rounded = delta_usd.round();
    let sign = if rounded < 0.0 { "-" } else { "+" };
    format!("약 {sign}${}", group_thousands(rounded.abs() as u64))
}

pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(3_219_750), "3,219,750");
    }

    #[test]
    fn formats_usd_and_krw() {
        assert_eq!(format_currency(2385.0, Currency::Usd, 1350.0), "$2,385");
        assert_eq!(format_currency(2385.0, Currency::Krw, 1350.0), "₩3,219,750");
        assert_eq!(format_currency(-12.4, Currency::Usd, 1350.0), "-$12");
    }

    #[test]
    fn delta_is_sign_aware() {
        assert_eq!(format_approx_delta(-1250.4), "약 -$1,250");
        assert_eq!(format_approx_delta(300.0), "약 +$300");
    }
}
