use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign};
use std::str::FromStr;

use crate::errors::{CalculatorError, Result};

/// days in a year when converting a monthly rate to a daily one
pub const DAYS_PER_YEAR: Decimal = dec!(365);

/// months in a year; a month is 365/12 days for rate conversion
pub const MONTHS_PER_YEAR: Decimal = dec!(12);

/// Money type with 8 decimal places precision
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);
    pub const ONE: Money = Money(Decimal::ONE);

    /// create from decimal
    pub fn from_decimal(d: Decimal) -> Self {
        Money(d.round_dp(8))
    }

    /// create from string with exact parsing
    pub fn from_str_exact(s: &str) -> std::result::Result<Self, rust_decimal::Error> {
        Ok(Money(Decimal::from_str(s.trim())?.round_dp(8)))
    }

    /// parse user input, rejecting non-numeric text
    pub fn parse(s: &str) -> Result<Self> {
        Money::from_str_exact(s).map_err(|_| CalculatorError::amount("principal", s))
    }

    /// create from whole currency units
    pub fn from_major(amount: i64) -> Self {
        Money(Decimal::from(amount))
    }

    /// get underlying decimal
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// drop the fractional part
    pub fn trunc(&self) -> Self {
        Money(self.0.trunc())
    }

    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    pub fn checked_add(self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money::from_decimal)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Money {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Money::from_str_exact(s)
    }
}

impl From<Decimal> for Money {
    fn from(d: Decimal) -> Self {
        Money::from_decimal(d)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money((self.0 + other.0).round_dp(8))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Money) {
        self.0 = (self.0 + other.0).round_dp(8);
    }
}

/// interest rate in currency units per 100 of principal per month
///
/// A rate of 2 means 2 units of interest on every 100 borrowed, each month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub struct Rate(Decimal);

impl Rate {
    pub const ZERO: Rate = Rate(Decimal::ZERO);

    /// create from the per-hundred figure (e.g., 1.5 for 1.50 per 100 per month)
    pub fn per_hundred(d: Decimal) -> Self {
        Rate(d)
    }

    /// create from a whole per-hundred figure
    pub fn from_major(per_hundred: i64) -> Self {
        Rate(Decimal::from(per_hundred))
    }

    /// parse user input, rejecting non-numeric text
    pub fn parse(s: &str) -> Result<Self> {
        Decimal::from_str(s.trim())
            .map(Rate)
            .map_err(|_| CalculatorError::amount("rate", s))
    }

    /// the per-hundred figure
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} per 100 per month", self.0)
    }
}

impl From<Decimal> for Rate {
    fn from(d: Decimal) -> Self {
        Rate::per_hundred(d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_precision() {
        let m = Money::from_str_exact("100.123456789").unwrap();
        assert_eq!(m.to_string(), "100.12345679"); // rounded to 8 places
    }

    #[test]
    fn test_trunc() {
        assert_eq!(Money::from_decimal(dec!(19.726)).trunc(), Money::from_major(19));
        assert_eq!(Money::from_decimal(dec!(1020.9)).trunc(), Money::from_major(1020));
        assert_eq!(Money::from_major(20).trunc(), Money::from_major(20));
    }

    #[test]
    fn test_parse_rejects_text() {
        assert!(Money::parse("1000.50").is_ok());
        assert!(matches!(
            Money::parse("a lot"),
            Err(CalculatorError::InvalidAmount { ref field, .. }) if field == "principal"
        ));
        assert!(matches!(
            Rate::parse("two"),
            Err(CalculatorError::InvalidAmount { ref field, .. }) if field == "rate"
        ));
    }

    #[test]
    fn test_whole_constructors_agree() {
        assert_eq!(Rate::from_major(2).as_decimal(), Money::from_major(2).as_decimal());
        assert!(Rate::from_major(-3).is_negative());
        assert!(Money::from_major(-3).is_negative());
    }

    #[test]
    fn test_negative_detection() {
        assert!(Money::from_major(-1).is_negative());
        assert!(!Money::ZERO.is_negative());
        assert!(Rate::per_hundred(dec!(-0.5)).is_negative());
        assert!(!Rate::ZERO.is_negative());
    }
}
