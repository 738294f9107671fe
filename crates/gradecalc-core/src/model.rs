//! Core data model types for gradecalc.
//!
//! These are the types every front end shares: terms and their form fields,
//! the raw submitted form, validated inputs, and computed results.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// An academic grading period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Term {
    Prelim,
    Midterm,
    Final,
}

impl Term {
    /// All terms in grading order.
    pub const ALL: [Term; 3] = [Term::Prelim, Term::Midterm, Term::Final];

    /// Display name used in labels and result messages.
    pub fn name(self) -> &'static str {
        match self {
            Term::Prelim => "Prelim",
            Term::Midterm => "Midterm",
            Term::Final => "Final",
        }
    }

    /// Prefix of this term's form field names.
    pub fn field_prefix(self) -> &'static str {
        match self {
            Term::Prelim => "prelim",
            Term::Midterm => "mid",
            Term::Final => "final",
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One of the five per-term inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Component {
    Absences,
    Exam,
    Quizzes,
    Requirements,
    Recitation,
}

impl Component {
    /// All components in form order.
    pub const ALL: [Component; 5] = [
        Component::Absences,
        Component::Exam,
        Component::Quizzes,
        Component::Requirements,
        Component::Recitation,
    ];

    /// Lowercase name, used both as field suffix and label word.
    pub fn as_str(self) -> &'static str {
        match self {
            Component::Absences => "absences",
            Component::Exam => "exam",
            Component::Quizzes => "quizzes",
            Component::Requirements => "requirements",
            Component::Recitation => "recitation",
        }
    }
}

/// A single named form field: one component of one term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Field {
    pub term: Term,
    pub component: Component,
}

impl Field {
    pub const fn new(term: Term, component: Component) -> Self {
        Self { term, component }
    }

    /// Form field name, e.g. `mid_exam`.
    pub fn name(self) -> String {
        format!("{}_{}", self.term.field_prefix(), self.component.as_str())
    }

    /// Human-readable label, e.g. `Midterm exam`.
    pub fn label(self) -> String {
        format!("{} {}", self.term.name(), self.component.as_str())
    }

    /// All 15 fields in validation order.
    pub fn all() -> impl Iterator<Item = Field> {
        Term::ALL
            .into_iter()
            .flat_map(|t| Component::ALL.into_iter().map(move |c| Field::new(t, c)))
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

/// Raw, unvalidated form values keyed by field name.
///
/// Only the 15 known fields are kept. A field that was never submitted reads
/// as the empty string, which the validator then rejects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawForm {
    values: HashMap<String, String>,
}

impl RawForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a form from submitted key/value pairs, dropping unknown keys.
    ///
    /// When a key is repeated, its first value wins.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let known: Vec<String> = Field::all().map(Field::name).collect();
        let mut values = HashMap::new();
        for (k, v) in pairs {
            let k = k.into();
            if known.contains(&k) {
                values.entry(k).or_insert_with(|| v.into());
            }
        }
        Self { values }
    }

    /// Set the raw value for a field.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.values.insert(field.name(), value.into());
    }

    /// Raw value for a field, or `""` when missing.
    pub fn get(&self, field: Field) -> &str {
        self.values
            .get(&field.name())
            .map(String::as_str)
            .unwrap_or("")
    }
}

/// Validated inputs for one term.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TermInput {
    pub absences: u32,
    pub exam: f64,
    pub quizzes: f64,
    pub requirements: f64,
    pub recitation: f64,
}

/// Validated inputs for all three terms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradeSheet {
    pub prelim: TermInput,
    pub midterm: TermInput,
    pub finals: TermInput,
}

impl GradeSheet {
    pub fn term(&self, term: Term) -> &TermInput {
        match term {
            Term::Prelim => &self.prelim,
            Term::Midterm => &self.midterm,
            Term::Final => &self.finals,
        }
    }
}

/// Outcome of computing a single term.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum TermResult {
    /// Too many absences; no grade is computed.
    Failed { reason: String },
    Computed { grade: f64 },
}

impl TermResult {
    /// The computed grade, or `None` for a failed term.
    pub fn grade(&self) -> Option<f64> {
        match self {
            TermResult::Computed { grade } => Some(*grade),
            TermResult::Failed { .. } => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, TermResult::Failed { .. })
    }

    /// Display message for this result, e.g. `Prelim Grade: 84.37`.
    pub fn message(&self, term: Term) -> String {
        match self {
            TermResult::Failed { reason } => reason.clone(),
            TermResult::Computed { grade } => format!("{term} Grade: {grade:.2}"),
        }
    }
}

/// A term together with its result and display message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermOutcome {
    pub term: Term,
    pub result: TermResult,
    pub message: String,
}

/// Overall grade and required final exam scores.
///
/// Present only when none of the three terms failed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverallResult {
    pub overall: f64,
    pub required_for_finals_75: f64,
    pub required_for_finals_90: f64,
}

/// Everything computed from one grade sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeReport {
    pub prelim: TermOutcome,
    pub midterm: TermOutcome,
    pub finals: TermOutcome,
    #[serde(default)]
    pub overall: Option<OverallResult>,
}

impl GradeReport {
    /// The three term outcomes in grading order.
    pub fn terms(&self) -> [&TermOutcome; 3] {
        [&self.prelim, &self.midterm, &self.finals]
    }
}
