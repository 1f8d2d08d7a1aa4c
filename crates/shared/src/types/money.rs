//! Money type with decimal precision and display formatting.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! This type wraps `rust_decimal::Decimal` for arbitrary precision.

use num_format::{Locale, ToFormattedString};
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

/// Symbol used when no other symbol is configured.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";

/// Represents a monetary amount in the organization's single currency.
///
/// Uses `Decimal` internally to avoid floating-point precision errors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(pub Decimal);

impl Money {
    /// Creates a new Money instance.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Creates a zero amount.
    #[must_use]
    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Returns the inner decimal amount.
    #[must_use]
    pub const fn amount(self) -> Decimal {
        self.0
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns true if the amount is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Formats the amount with a currency symbol and en-locale thousands separators.
    ///
    /// Amounts are rounded to cents, half away from zero, and trailing zeros
    /// are dropped: `12500` renders as `$12,500`, `1234.5` as `$1,234.5` and
    /// `1234.567` as `$1,234.57`.
    /// Negative amounts put the sign before the symbol: `-$300`.
    #[must_use]
    pub fn display_with_symbol(&self, symbol: &str) -> String {
        let rounded = self
            .0
            .abs()
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        let integer_part = rounded.trunc().to_u128().map_or_else(
            || rounded.trunc().to_string(),
            |whole| whole.to_formatted_string(&Locale::en),
        );

        let fraction = rounded.fract().normalize();
        let fraction_part = if fraction.is_zero() {
            String::new()
        } else {
            fraction
                .to_string()
                .split('.')
                .nth(1)
                .map(|digits| format!(".{digits}"))
                .unwrap_or_default()
        };

        let sign = if self.is_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };

        format!("{sign}{symbol}{integer_part}{fraction_part}")
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display_with_symbol(DEFAULT_CURRENCY_SYMBOL))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[test]
    fn test_money_zero() {
        let money = Money::zero();
        assert!(money.is_zero());
        assert!(!money.is_negative());
        assert_eq!(money.amount(), Decimal::ZERO);
    }

    #[test]
    fn test_money_is_negative() {
        assert!(Money::new(dec!(-10)).is_negative());
        assert!(!Money::new(dec!(10)).is_negative());
    }

    #[rstest]
    #[case(dec!(0), "$0")]
    #[case(dec!(600), "$600")]
    #[case(dec!(12500), "$12,500")]
    #[case(dec!(1234.5), "$1,234.5")]
    #[case(dec!(1234.50), "$1,234.5")]
    #[case(dec!(1000000.25), "$1,000,000.25")]
    #[case(dec!(1234.567), "$1,234.57")]
    #[case(dec!(0.125), "$0.13")]
    #[case(dec!(0.999), "$1")]
    #[case(dec!(-300), "-$300")]
    #[case(dec!(-1850.75), "-$1,850.75")]
    fn test_money_display(#[case] amount: Decimal, #[case] expected: &str) {
        assert_eq!(Money::new(amount).to_string(), expected);
    }

    #[test]
    fn test_money_custom_symbol() {
        assert_eq!(Money::new(dec!(2500)).display_with_symbol("€"), "€2,500");
    }

    #[test]
    fn test_money_tiny_negative_rounds_without_sign() {
        assert_eq!(Money::new(dec!(-0.001)).to_string(), "$0");
    }
}
