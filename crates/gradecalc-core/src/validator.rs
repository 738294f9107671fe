//! Form validation.
//!
//! Turns the 15 raw form strings into a [`GradeSheet`]. Fields are checked in
//! form order and the first bad field stops validation.

use std::borrow::Cow;
use std::num::IntErrorKind;

use crate::error::{InvalidInput, Rule};
use crate::model::{Component, Field, GradeSheet, RawForm, Term, TermInput};

/// Lowest and highest accepted score.
pub const MIN_SCORE: f64 = 0.0;
pub const MAX_SCORE: f64 = 100.0;

/// Drop `_` digit-group separators, e.g. `1_000`.
///
/// Each underscore must sit between two ASCII digits; otherwise `None`.
fn strip_digit_separators(raw: &str) -> Option<Cow<'_, str>> {
    if !raw.contains('_') {
        return Some(Cow::Borrowed(raw));
    }
    let bytes = raw.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        if b == b'_' {
            let before = i.checked_sub(1).map(|j| bytes[j]);
            let after = bytes.get(i + 1).copied();
            if !before.is_some_and(|c| c.is_ascii_digit())
                || !after.is_some_and(|c| c.is_ascii_digit())
            {
                return None;
            }
        }
    }
    Some(Cow::Owned(raw.replace('_', "")))
}

/// Parse an absence count.
///
/// Integers too large for `u32` saturate; they are far past the failure
/// threshold either way.
pub fn parse_absences(field: Field, raw: &str) -> Result<u32, InvalidInput> {
    let digits = strip_digit_separators(raw.trim())
        .ok_or_else(|| InvalidInput::new(field, Rule::NotAnInteger))?;
    let value = match digits.parse::<i64>() {
        Ok(v) => v,
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => i64::MAX,
            IntErrorKind::NegOverflow => i64::MIN,
            _ => return Err(InvalidInput::new(field, Rule::NotAnInteger)),
        },
    };
    if value < 0 {
        return Err(InvalidInput::new(field, Rule::NegativeAbsences));
    }
    Ok(u32::try_from(value).unwrap_or(u32::MAX))
}

/// Parse a score in `[0, 100]`. NaN and infinities are out of range.
pub fn parse_grade(field: Field, raw: &str) -> Result<f64, InvalidInput> {
    let value: f64 = strip_digit_separators(raw.trim())
        .and_then(|digits| digits.parse().ok())
        .ok_or_else(|| InvalidInput::new(field, Rule::NotANumber))?;
    if !(MIN_SCORE..=MAX_SCORE).contains(&value) {
        return Err(InvalidInput::new(field, Rule::OutOfRange));
    }
    Ok(value)
}

/// Validate the five fields of one term.
pub fn validate_term(form: &RawForm, term: Term) -> Result<TermInput, InvalidInput> {
    let grade = |component| {
        let field = Field::new(term, component);
        parse_grade(field, form.get(field))
    };

    let absences_field = Field::new(term, Component::Absences);
    let absences = parse_absences(absences_field, form.get(absences_field))?;

    Ok(TermInput {
        absences,
        exam: grade(Component::Exam)?,
        quizzes: grade(Component::Quizzes)?,
        requirements: grade(Component::Requirements)?,
        recitation: grade(Component::Recitation)?,
    })
}

/// Validate a whole submitted form.
pub fn validate_form(form: &RawForm) -> Result<GradeSheet, InvalidInput> {
    let sheet = GradeSheet {
        prelim: validate_term(form, Term::Prelim)?,
        midterm: validate_term(form, Term::Midterm)?,
        finals: validate_term(form, Term::Final)?,
    };
    tracing::debug!("form validated");
    Ok(sheet)
}
