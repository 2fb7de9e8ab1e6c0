use log::trace;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::decimal::{Money, Rate, DAYS_PER_YEAR, MONTHS_PER_YEAR};
use crate::errors::{CalculatorError, Result};
use crate::events::YearObserver;
use crate::interest::{
    validate_inputs, CalculationMethod, DateSpan, InterestCalculation, InterestCalculator,
};

/// engine for simple (non-compounding) interest
#[derive(Debug, Default, Clone, Copy)]
pub struct SimpleInterestCalculator;

impl SimpleInterestCalculator {
    pub fn new() -> Self {
        Self
    }

    /// unrounded interest for `days` days
    ///
    /// principal * (rate / 100) / (365 / 12) * days, evaluated as a single
    /// division so whole results stay whole.
    pub fn raw_interest(&self, principal: Money, rate: Rate, days: i64) -> Result<Decimal> {
        let denominator = dec!(100) * DAYS_PER_YEAR;
        principal
            .as_decimal()
            .checked_mul(rate.as_decimal())
            .and_then(|v| v.checked_mul(Decimal::from(days)))
            .and_then(|v| v.checked_mul(MONTHS_PER_YEAR))
            .and_then(|v| v.checked_div(denominator))
            .ok_or_else(|| CalculatorError::overflow("interest"))
    }

    /// interest rounded up to the next whole unit
    pub fn interest_for_days(&self, principal: Money, rate: Rate, days: i64) -> Result<Money> {
        let raw = self.raw_interest(principal, rate, days)?;
        trace!("simple interest on {} for {} days at {}: {}", principal, days, rate, raw);
        Ok(Money::from_decimal(raw.ceil()))
    }

    /// simple interest over `span`
    pub fn compute(&self, principal: Money, rate: Rate, span: DateSpan) -> Result<InterestCalculation> {
        validate_inputs(principal, rate)?;
        let days = span.days();
        let interest = self.interest_for_days(principal, rate, days)?;
        InterestCalculation::new(principal, interest, days, CalculationMethod::Simple)
    }
}

impl InterestCalculator for SimpleInterestCalculator {
    fn calculate_interest(
        &self,
        principal: Money,
        rate: Rate,
        span: DateSpan,
        _observer: &mut dyn YearObserver,
    ) -> Result<InterestCalculation> {
        self.compute(principal, rate, span)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(start: &str, end: &str) -> DateSpan {
        DateSpan::parse(start, end).unwrap()
    }

    #[test]
    fn test_thirty_days() {
        let calc = SimpleInterestCalculator::new()
            .compute(Money::from_major(1000), Rate::from_major(2), span("2023-01-01", "2023-01-31"))
            .unwrap();

        // 1000 * 2 * 30 / (365/12 * 100) = 19.73
        assert_eq!(calc.days, 30);
        assert_eq!(calc.interest_amount, Money::from_major(20));
        assert_eq!(calc.final_amount, Money::from_major(1020));
        assert_eq!(calc.calculation_method, CalculationMethod::Simple);
    }

    #[test]
    fn test_same_day_is_free() {
        let calc = SimpleInterestCalculator::new()
            .compute(
                Money::from_major(50_000),
                Rate::per_hundred(dec!(3.5)),
                span("2024-06-15", "2024-06-15"),
            )
            .unwrap();

        assert_eq!(calc.interest_amount, Money::ZERO);
        assert_eq!(calc.final_amount, Money::from_major(50_000));
    }

    #[test]
    fn test_full_year_is_twelve_months() {
        let calc = SimpleInterestCalculator::new()
            .compute(Money::from_major(1000), Rate::from_major(2), span("2023-01-01", "2024-01-01"))
            .unwrap();

        // 365 days is exactly 12 months of 2%
        assert_eq!(calc.interest_amount, Money::from_major(240));
    }

    #[test]
    fn test_exact_whole_interest_is_not_bumped() {
        let engine = SimpleInterestCalculator::new();
        // 36500 * 1 * 1 * 12 / 36500 = 12 exactly
        let interest = engine
            .interest_for_days(Money::from_major(36_500), Rate::from_major(1), 1)
            .unwrap();
        assert_eq!(interest, Money::from_major(12));
    }

    #[test]
    fn test_rounds_up_fractions() {
        let engine = SimpleInterestCalculator::new();
        // 100 * 1 * 1 * 12 / 36500 = 0.0329
        let interest = engine
            .interest_for_days(Money::from_major(100), Rate::from_major(1), 1)
            .unwrap();
        assert_eq!(interest, Money::ONE);
    }

    #[test]
    fn test_fractional_principal() {
        let calc = SimpleInterestCalculator::new()
            .compute(
                Money::from_decimal(dec!(1000.50)),
                Rate::from_major(2),
                span("2023-01-01", "2023-01-31"),
            )
            .unwrap();

        assert_eq!(calc.interest_amount, Money::from_major(20));
        assert_eq!(calc.final_amount, Money::from_major(1020));
    }

    #[test]
    fn test_rejects_negative_principal() {
        let err = SimpleInterestCalculator::new()
            .compute(Money::from_major(-1), Rate::from_major(2), span("2023-01-01", "2023-01-31"))
            .unwrap_err();
        assert!(matches!(err, CalculatorError::InvalidAmount { .. }));
    }

    #[test]
    fn test_final_is_principal_plus_interest() {
        let engine = SimpleInterestCalculator::new();
        for (principal, days_end) in [(1, "2023-03-01"), (999, "2023-07-19"), (250_000, "2030-12-31")] {
            let calc = engine
                .compute(Money::from_major(principal), Rate::per_hundred(dec!(1.25)), span("2023-01-01", days_end))
                .unwrap();
            assert_eq!(calc.final_amount, calc.principal_base + calc.interest_amount);
        }
    }

    #[test]
    fn test_overflow_is_an_error() {
        let engine = SimpleInterestCalculator::new();
        let err = engine
            .interest_for_days(Money::from_decimal(Decimal::MAX), Rate::from_major(100), 1000)
            .unwrap_err();
        assert!(matches!(err, CalculatorError::CalculationError { .. }));
    }
}
