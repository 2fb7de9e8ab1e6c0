pub mod compound;
pub mod simple;
pub mod span;

use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::errors::{CalculatorError, Result};
use crate::events::YearObserver;

pub use compound::CompoundInterestCalculator;
pub use simple::SimpleInterestCalculator;
pub use span::{add_years, days_between, parse_date, DateSpan, DATE_FORMAT};

/// how an interest figure was produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CalculationMethod {
    Simple,
    /// compounded on each anniversary, remainder at simple interest
    AnnualCompound,
}

/// interest calculation result
///
/// `interest_amount` and `final_amount` are whole currency units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterestCalculation {
    pub principal_base: Money,
    pub interest_amount: Money,
    pub final_amount: Money,
    pub days: i64,
    pub calculation_method: CalculationMethod,
}

impl InterestCalculation {
    pub(crate) fn new(
        principal_base: Money,
        interest_amount: Money,
        days: i64,
        calculation_method: CalculationMethod,
    ) -> Result<Self> {
        let final_amount = principal_base
            .checked_add(interest_amount)
            .ok_or_else(|| CalculatorError::overflow("final amount"))?
            .trunc();

        Ok(Self {
            principal_base,
            interest_amount,
            final_amount,
            days,
            calculation_method,
        })
    }

    /// `(interest, final amount)`, the order simple interest is usually quoted in
    pub fn interest_then_final(&self) -> (Money, Money) {
        (self.interest_amount, self.final_amount)
    }

    /// `(final amount, interest)`, the order compound interest is usually quoted in
    pub fn final_then_interest(&self) -> (Money, Money) {
        (self.final_amount, self.interest_amount)
    }

    pub fn to_json_pretty(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// trait for interest calculations
///
/// Calculators without a yearly breakdown never call the observer.
pub trait InterestCalculator {
    fn calculate_interest(
        &self,
        principal: Money,
        rate: Rate,
        span: DateSpan,
        observer: &mut dyn YearObserver,
    ) -> Result<InterestCalculation>;
}

/// reject negative principal or rate
pub fn validate_inputs(principal: Money, rate: Rate) -> Result<()> {
    if principal.is_negative() {
        return Err(CalculatorError::amount("principal", principal));
    }
    if rate.is_negative() {
        return Err(CalculatorError::amount("rate", rate.as_decimal()));
    }
    Ok(())
}
