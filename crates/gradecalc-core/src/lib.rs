//! gradecalc-core — Input validation and grade computation.
//!
//! This crate holds everything that does not depend on a transport: the data
//! model, the form validator, and the grade engine. Front ends (the web form,
//! the CLI) call [`validator::validate_form`] and then [`engine::evaluate`].

pub mod engine;
pub mod error;
pub mod model;
pub mod parser;
pub mod validator;

pub use error::{InvalidInput, Rule};
pub use model::{
    Component, Field, GradeReport, GradeSheet, OverallResult, RawForm, Term, TermInput,
    TermOutcome, TermResult,
};

/// Validate a raw form and evaluate it in one step.
pub fn grade_form(form: &RawForm) -> Result<GradeReport, InvalidInput> {
    let sheet = validator::validate_form(form)?;
    Ok(engine::evaluate(&sheet))
}
