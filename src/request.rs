use serde::Deserialize;
use serde_json::Value;

use crate::config::CalculatorConfig;
use crate::decimal::{Money, Rate};
use crate::errors::{CalculatorError, Result};
use crate::events::{NullObserver, YearObserver};
use crate::interest::{
    validate_inputs, CalculationMethod, CompoundInterestCalculator, DateSpan,
    InterestCalculation, InterestCalculator, SimpleInterestCalculator,
};

/// validated inputs for one calculation
#[derive(Debug, Clone, PartialEq)]
pub struct InterestRequest {
    pub principal: Money,
    pub rate: Rate,
    pub span: DateSpan,
    pub config: CalculatorConfig,
}

/// wire shape of a request, dates as `YYYY-MM-DD`, amounts as numbers or strings
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct RequestInput {
    principal: Option<Value>,
    rate: Option<Value>,
    start_date: Option<String>,
    end_date: Option<String>,
    config: Option<CalculatorConfig>,
}

impl InterestRequest {
    /// builder for creating requests
    pub fn builder() -> InterestRequestBuilder {
        InterestRequestBuilder::new()
    }

    /// parse and validate a json request
    pub fn from_json(json: &str) -> Result<Self> {
        let input: RequestInput =
            serde_json::from_str(json).map_err(|e| CalculatorError::InvalidConfiguration {
                message: format!("malformed request: {}", e),
            })?;

        // missing fields are left unset so the builder reports them
        let mut builder = InterestRequestBuilder::new();
        if let Some(principal) = input.principal {
            builder = builder.principal(Money::parse(&amount_text(&principal))?);
        }
        if let Some(rate) = input.rate {
            builder = builder.rate(Rate::parse(&amount_text(&rate))?);
        }
        if let Some(start) = input.start_date {
            builder = builder.start_date(start);
        }
        if let Some(end) = input.end_date {
            builder = builder.end_date(end);
        }
        if let Some(config) = input.config {
            builder = builder.config(config);
        }
        builder.build()
    }

    /// calculator for `method`, configured from this request
    pub fn calculator(&self, method: CalculationMethod) -> Result<Box<dyn InterestCalculator>> {
        Ok(match method {
            CalculationMethod::Simple => Box::new(SimpleInterestCalculator::new()),
            CalculationMethod::AnnualCompound => {
                Box::new(CompoundInterestCalculator::with_config(self.config.clone())?)
            }
        })
    }

    pub fn calculate(
        &self,
        method: CalculationMethod,
        observer: &mut dyn YearObserver,
    ) -> Result<InterestCalculation> {
        self.calculator(method)?
            .calculate_interest(self.principal, self.rate, self.span, observer)
    }

    pub fn simple(&self) -> Result<InterestCalculation> {
        self.calculate(CalculationMethod::Simple, &mut NullObserver)
    }

    pub fn compound(&self) -> Result<InterestCalculation> {
        self.compound_observed(&mut NullObserver)
    }

    pub fn compound_observed(&self, observer: &mut dyn YearObserver) -> Result<InterestCalculation> {
        self.calculate(CalculationMethod::AnnualCompound, observer)
    }
}

#[derive(Debug, Default)]
pub struct InterestRequestBuilder {
    principal: Option<Money>,
    rate: Option<Rate>,
    start_date: Option<String>,
    end_date: Option<String>,
    config: Option<CalculatorConfig>,
}

impl InterestRequestBuilder {
    pub fn new() -> Self {
        Self {
            principal: None,
            rate: None,
            start_date: None,
            end_date: None,
            config: None,
        }
    }

    pub fn principal(mut self, principal: Money) -> Self {
        self.principal = Some(principal);
        self
    }

    pub fn rate(mut self, rate: Rate) -> Self {
        self.rate = Some(rate);
        self
    }

    pub fn start_date(mut self, date: impl Into<String>) -> Self {
        self.start_date = Some(date.into());
        self
    }

    pub fn end_date(mut self, date: impl Into<String>) -> Self {
        self.end_date = Some(date.into());
        self
    }

    pub fn config(mut self, config: CalculatorConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// validate everything and produce the request
    pub fn build(self) -> Result<InterestRequest> {
        let principal = self
            .principal
            .ok_or_else(|| CalculatorError::amount("principal", "missing"))?;
        let rate = self.rate.ok_or_else(|| CalculatorError::amount("rate", "missing"))?;
        validate_inputs(principal, rate)?;

        let start = self.start_date.ok_or_else(|| missing_date("start"))?;
        let end = self.end_date.ok_or_else(|| missing_date("end"))?;
        let span = DateSpan::parse(&start, &end)?;

        let config = self.config.unwrap_or_default();
        config.validate()?;

        Ok(InterestRequest {
            principal,
            rate,
            span,
            config,
        })
    }
}

fn amount_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn missing_date(which: &str) -> CalculatorError {
    CalculatorError::InvalidDate {
        input: String::new(),
        message: format!("{} date is required", which),
    }
}
