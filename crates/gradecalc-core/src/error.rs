//! Validation error types.
//!
//! A rejected form field is a normal outcome: front ends recover from it by
//! re-displaying the form with the message, so it is never treated as a fault.

use thiserror::Error;

use crate::model::Field;

/// The rule a raw field value broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Absence count did not parse as an integer.
    NotAnInteger,
    /// Absence count was below zero.
    NegativeAbsences,
    /// Score did not parse as a number.
    NotANumber,
    /// Score was outside `[0, 100]`.
    OutOfRange,
}

impl Rule {
    fn describe(self) -> &'static str {
        match self {
            Rule::NotAnInteger => "please enter a valid integer.",
            Rule::NegativeAbsences => "absences cannot be negative.",
            Rule::NotANumber => "please enter a valid number.",
            Rule::OutOfRange => "must be between 0 and 100.",
        }
    }
}

/// A form field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}: {}", .field.label(), .rule.describe())]
pub struct InvalidInput {
    pub field: Field,
    pub rule: Rule,
}

impl InvalidInput {
    pub fn new(field: Field, rule: Rule) -> Self {
        Self { field, rule }
    }
}
