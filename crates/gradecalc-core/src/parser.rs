//! TOML grade sheet parser.
//!
//! A grade sheet has one table per term:
//!
//! ```toml
//! [prelim]
//! absences = 0
//! exam = 80
//! quizzes = 90
//! requirements = 85
//! recitation = 88
//! ```
//!
//! Values are turned back into raw strings so that sheets go through the
//! same validator as form submissions.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::model::{Component, Field, RawForm, Term};

/// Intermediate TOML structure for grade sheet files.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlSheet {
    #[serde(default)]
    prelim: TomlTerm,
    #[serde(default)]
    midterm: TomlTerm,
    #[serde(default, rename = "final")]
    finals: TomlTerm,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlTerm {
    #[serde(default)]
    absences: Option<toml::Value>,
    #[serde(default)]
    exam: Option<toml::Value>,
    #[serde(default)]
    quizzes: Option<toml::Value>,
    #[serde(default)]
    requirements: Option<toml::Value>,
    #[serde(default)]
    recitation: Option<toml::Value>,
}

impl TomlTerm {
    fn value(&self, component: Component) -> Option<&toml::Value> {
        match component {
            Component::Absences => self.absences.as_ref(),
            Component::Exam => self.exam.as_ref(),
            Component::Quizzes => self.quizzes.as_ref(),
            Component::Requirements => self.requirements.as_ref(),
            Component::Recitation => self.recitation.as_ref(),
        }
    }
}

impl TomlSheet {
    fn term(&self, term: Term) -> &TomlTerm {
        match term {
            Term::Prelim => &self.prelim,
            Term::Midterm => &self.midterm,
            Term::Final => &self.finals,
        }
    }
}

fn raw_value(field: Field, value: &toml::Value) -> Result<String> {
    match value {
        toml::Value::String(s) => Ok(s.clone()),
        toml::Value::Integer(i) => Ok(i.to_string()),
        toml::Value::Float(f) => Ok(f.to_string()),
        other => anyhow::bail!(
            "{}: expected a number or string, found {}",
            field.label(),
            other.type_str()
        ),
    }
}

/// Parse a grade sheet file into a raw form.
pub fn parse_sheet(path: &Path) -> Result<RawForm> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read grade sheet: {}", path.display()))?;

    parse_sheet_str(&content, path)
}

/// Parse grade sheet TOML from a string (useful for testing).
pub fn parse_sheet_str(content: &str, source_path: &Path) -> Result<RawForm> {
    let parsed: TomlSheet = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let mut form = RawForm::new();
    for field in Field::all() {
        if let Some(value) = parsed.term(field.term).value(field.component) {
            form.set(field, raw_value(field, value)?);
        }
    }
    Ok(form)
}
