//! Field-level validation for the settings editor.
//!
//! Validation is pure and independent of any UI toolkit: the dialog calls
//! [`validate_field`] when a text box loses focus and stores the result.

use crate::profile::NumericField;

/// How the text of a numeric field must parse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    PositiveInteger,
    Number,
    PositiveNumber,
}

/// Why a field was rejected
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    #[error("not an integer")]
    NotAnInteger,

    #[error("not a number")]
    NotANumber,

    #[error("must be strictly positive")]
    NotPositive,
}

/// Validation state of one field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldState {
    #[default]
    Valid,
    Invalid(FieldError),
}

impl FieldState {
    pub fn is_valid(&self) -> bool {
        matches!(self, FieldState::Valid)
    }

    pub fn error(&self) -> Option<FieldError> {
        match self {
            FieldState::Valid => None,
            FieldState::Invalid(error) => Some(*error),
        }
    }
}

impl FieldRule {
    pub fn check(&self, text: &str) -> FieldState {
        let result = match self {
            FieldRule::PositiveInteger => match parse_integer(text) {
                Some(value) if value > 0 => Ok(()),
                Some(_) => Err(FieldError::NotPositive),
                None => Err(FieldError::NotAnInteger),
            },
            FieldRule::Number => parse_number(text).map(|_| ()).ok_or(FieldError::NotANumber),
            FieldRule::PositiveNumber => match parse_number(text) {
                Some(value) if value > 0.0 => Ok(()),
                Some(_) => Err(FieldError::NotPositive),
                None => Err(FieldError::NotANumber),
            },
        };

        match result {
            Ok(()) => FieldState::Valid,
            Err(error) => FieldState::Invalid(error),
        }
    }
}

/// Validate the text of `field` against its rule
pub fn validate_field(field: NumericField, text: &str) -> FieldState {
    field.rule().check(text)
}

pub fn parse_integer(text: &str) -> Option<i32> {
    text.trim().parse().ok()
}

/// Finite reals only; `NaN` and infinities are not accepted as numbers
pub fn parse_number(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|value| value.is_finite())
}
