//! Decimal-backed money type.
//!
//! Prices are stored in the currency's standard unit (pounds, not pence) and
//! formatted for display with two decimal places.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A price with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., pounds, not pence).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// Format for display (e.g., "£19.99").
    #[must_use]
    pub fn display(&self) -> String {
        format!("{}{:.2}", self.currency_code.symbol(), self.amount)
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{:.2}", self.currency_code.symbol(), self.amount)
    }
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    USD,
    EUR,
    #[default]
    GBP,
    CAD,
    AUD,
}

impl CurrencyCode {
    /// The currency symbol used for display.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::USD | Self::CAD | Self::AUD => "$",
            Self::EUR => "€",
            Self::GBP => "£",
        }
    }

    /// The ISO 4217 code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::USD => "USD",
            Self::EUR => "EUR",
            Self::GBP => "GBP",
            Self::CAD => "CAD",
            Self::AUD => "AUD",
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_display_two_decimals() {
        let price = Price::new(Decimal::new(1999, 2), CurrencyCode::GBP);
        assert_eq!(price.display(), "£19.99");
    }

    #[test]
    fn test_display_pads_short_scale() {
        // 4.5 renders with a trailing zero
        let price = Price::new(Decimal::new(45, 1), CurrencyCode::GBP);
        assert_eq!(price.display(), "£4.50");
    }

    #[test]
    fn test_display_whole_amount() {
        let price = Price::new(Decimal::from(12), CurrencyCode::GBP);
        assert_eq!(price.display(), "£12.00");
    }

    #[test]
    fn test_display_zero() {
        let price = Price::new(Decimal::ZERO, CurrencyCode::GBP);
        assert_eq!(price.display(), "£0.00");
    }

    #[test]
    fn test_display_trait_matches_method() {
        let price = Price::new(Decimal::new(250, 2), CurrencyCode::EUR);
        assert_eq!(format!("{price}"), price.display());
    }

    #[test]
    fn test_default_currency_is_gbp() {
        assert_eq!(CurrencyCode::default(), CurrencyCode::GBP);
        assert_eq!(CurrencyCode::default().symbol(), "£");
    }

    #[test]
    fn test_currency_codes() {
        assert_eq!(CurrencyCode::GBP.code(), "GBP");
        assert_eq!(CurrencyCode::USD.symbol(), "$");
        assert_eq!(CurrencyCode::EUR.symbol(), "€");
    }
}
