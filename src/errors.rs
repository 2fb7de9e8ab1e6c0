use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalculatorError {
    #[error("invalid date {input:?}: {message}")]
    InvalidDate {
        input: String,
        message: String,
    },

    #[error("invalid range: end date {end} is before start date {start}")]
    InvalidRange {
        start: NaiveDate,
        end: NaiveDate,
    },

    #[error("invalid {field}: {value}")]
    InvalidAmount {
        field: String,
        value: String,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        message: String,
    },

    #[error("calculation error: {message}")]
    CalculationError {
        message: String,
    },
}

impl CalculatorError {
    pub(crate) fn amount(field: &str, value: impl ToString) -> Self {
        CalculatorError::InvalidAmount {
            field: field.to_string(),
            value: value.to_string(),
        }
    }

    pub(crate) fn overflow(what: &str) -> Self {
        CalculatorError::CalculationError {
            message: format!("{} overflowed", what),
        }
    }
}

pub type Result<T> = std::result::Result<T, CalculatorError>;
