//! Simple and annually compounded interest over calendar date ranges.
//!
//! Rates are quoted the informal-lending way: currency units of interest per
//! 100 of principal per month. Interest is always rounded up to a whole unit.
//!
//! ```
//! use interest_calc_rs::{compute_simple, Money, Rate};
//!
//! let calc = compute_simple(Money::from_major(1000), Rate::from_major(2), "2023-01-01", "2023-01-31")?;
//! assert_eq!(calc.interest_amount, Money::from_major(20));
//! assert_eq!(calc.final_amount, Money::from_major(1020));
//! # Ok::<(), interest_calc_rs::CalculatorError>(())
//! ```

pub mod config;
pub mod decimal;
pub mod errors;
pub mod events;
pub mod interest;
pub mod request;

// re-export key types
pub use config::{CalculatorConfig, LeapDayPolicy};
pub use decimal::{Money, Rate};
pub use errors::{CalculatorError, Result};
pub use events::{Event, EventStore, LogObserver, NullObserver, YearObserver};
pub use interest::{
    days_between, parse_date, CalculationMethod, CompoundInterestCalculator, DateSpan,
    InterestCalculation, InterestCalculator, SimpleInterestCalculator,
};
pub use request::{InterestRequest, InterestRequestBuilder};

/// simple interest between two `YYYY-MM-DD` dates
pub fn compute_simple(principal: Money, rate: Rate, start: &str, end: &str) -> Result<InterestCalculation> {
    SimpleInterestCalculator::new().compute(principal, rate, DateSpan::parse(start, end)?)
}

/// annually compounded interest between two `YYYY-MM-DD` dates
pub fn compute_compound(principal: Money, rate: Rate, start: &str, end: &str) -> Result<InterestCalculation> {
    compute_compound_observed(principal, rate, start, end, &mut NullObserver)
}

/// annually compounded interest, reporting each year to `observer`
pub fn compute_compound_observed(
    principal: Money,
    rate: Rate,
    start: &str,
    end: &str,
    observer: &mut dyn YearObserver,
) -> Result<InterestCalculation> {
    CompoundInterestCalculator::new().compute_observed(principal, rate, DateSpan::parse(start, end)?, observer)
}
