use chrono::NaiveDate;
use log::debug;

use crate::config::CalculatorConfig;
use crate::decimal::{Money, Rate};
use crate::errors::{CalculatorError, Result};
use crate::events::{NullObserver, YearObserver};
use crate::interest::{
    add_years, days_between, validate_inputs, CalculationMethod, DateSpan, InterestCalculation,
    InterestCalculator, SimpleInterestCalculator,
};

/// one compounding segment, discarded once its interest is booked
#[derive(Debug, Clone, Copy, PartialEq)]
struct YearSegment {
    segment_start: NaiveDate,
    segment_end: NaiveDate,
    principal_at_start: Money,
    interest_accrued: Money,
}

/// engine for annually compounded interest
///
/// The span is first counted in fixed-length years (365 days by default).
/// Each complete year then runs anniversary to anniversary at simple
/// interest, and the interest is added to the principal before the next
/// year starts. Whatever is left after the last anniversary accrues simple
/// interest up to the end date.
///
/// Complete years are always charged anniversary to anniversary, even when
/// accumulated leap days carry the last anniversary past the end date.
#[derive(Debug, Clone, Default)]
pub struct CompoundInterestCalculator {
    pub config: CalculatorConfig,
    simple: SimpleInterestCalculator,
}

impl CompoundInterestCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: CalculatorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            simple: SimpleInterestCalculator::new(),
        })
    }

    /// compound interest over `span`
    pub fn compute(&self, principal: Money, rate: Rate, span: DateSpan) -> Result<InterestCalculation> {
        self.compute_observed(principal, rate, span, &mut NullObserver)
    }

    /// compound interest over `span`, reporting each year to `observer`
    pub fn compute_observed(
        &self,
        principal: Money,
        rate: Rate,
        span: DateSpan,
        observer: &mut dyn YearObserver,
    ) -> Result<InterestCalculation> {
        validate_inputs(principal, rate)?;
        self.config.validate()?;

        let total_days = span.days();
        let basis = i64::from(self.config.segment_year_days);
        let complete_years = u32::try_from(total_days / basis)
            .map_err(|_| CalculatorError::overflow("year count"))?;
        let remainder_days = total_days % basis;

        debug!(
            "compounding {} over {} days: {} complete years, {} remaining days",
            principal, total_days, complete_years, remainder_days
        );

        let mut current_principal = principal;
        let mut total_interest = Money::ZERO;
        let mut current_date = span.start();

        for year in 1..=complete_years {
            let next_date = add_years(current_date, 1, self.config.leap_day_policy)?;
            let segment = self.segment(current_principal, rate, current_date, next_date)?;
            observer.on_year_computed(year, segment.principal_at_start, segment.interest_accrued);

            total_interest += segment.interest_accrued;
            current_principal += segment.interest_accrued;
            current_date = segment.segment_end;
        }

        if remainder_days > 0 {
            // leap days can carry the last anniversary past the end date;
            // the remainder then covers zero days instead of a negative span
            let remainder_end = span.end().max(current_date);
            let segment = self.segment(current_principal, rate, current_date, remainder_end)?;
            observer.on_remainder_computed(
                days_between(segment.segment_start, segment.segment_end),
                segment.principal_at_start,
                segment.interest_accrued,
            );

            total_interest += segment.interest_accrued;
        }

        InterestCalculation::new(
            principal,
            total_interest,
            total_days,
            CalculationMethod::AnnualCompound,
        )
    }

    fn segment(
        &self,
        principal: Money,
        rate: Rate,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<YearSegment> {
        let span = DateSpan::new(start, end)?;
        let interest = self.simple.compute(principal, rate, span)?.interest_amount;

        Ok(YearSegment {
            segment_start: start,
            segment_end: end,
            principal_at_start: principal,
            interest_accrued: interest,
        })
    }
}

impl InterestCalculator for CompoundInterestCalculator {
    fn calculate_interest(
        &self,
        principal: Money,
        rate: Rate,
        span: DateSpan,
        observer: &mut dyn YearObserver,
    ) -> Result<InterestCalculation> {
        self.compute_observed(principal, rate, span, observer)
    }
}
