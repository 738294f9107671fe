//! Grade computation.
//!
//! Fixed weighted formulas for term grades, the overall grade, and the final
//! exam score needed to reach a target overall grade. Every function here is
//! pure.

use crate::model::{
    GradeReport, GradeSheet, OverallResult, Term, TermInput, TermOutcome, TermResult,
};

/// Absence count at which a term is failed outright.
pub const FAILING_ABSENCES: u32 = 4;

/// Attendance points lost per absence.
pub const ATTENDANCE_PENALTY: f64 = 10.0;

// Term grade weights.
pub const EXAM_WEIGHT: f64 = 0.6;
pub const ATTENDANCE_WEIGHT: f64 = 0.1;
pub const CLASS_STANDING_WEIGHT: f64 = 0.3;

// Class standing weights.
pub const QUIZZES_WEIGHT: f64 = 0.4;
pub const REQUIREMENTS_WEIGHT: f64 = 0.3;
pub const RECITATION_WEIGHT: f64 = 0.3;

// Overall grade weights.
pub const PRELIM_WEIGHT: f64 = 0.2;
pub const MIDTERM_WEIGHT: f64 = 0.3;
pub const FINALS_WEIGHT: f64 = 0.5;

/// Overall grades for which a required final exam score is reported.
pub const PASSING_TARGET: f64 = 75.0;
pub const EXCELLENT_TARGET: f64 = 90.0;

/// Attendance score for an absence count.
pub fn attendance(absences: u32) -> f64 {
    100.0 - ATTENDANCE_PENALTY * f64::from(absences)
}

/// Weighted combination of quizzes, requirements and recitation.
pub fn class_standing(quizzes: f64, requirements: f64, recitation: f64) -> f64 {
    QUIZZES_WEIGHT * quizzes + REQUIREMENTS_WEIGHT * requirements + RECITATION_WEIGHT * recitation
}

/// Compute one term's grade, or fail it for excessive absences.
pub fn compute_term(term: Term, input: &TermInput) -> TermResult {
    if input.absences >= FAILING_ABSENCES {
        return TermResult::Failed {
            reason: format!("{term} FAILED due to excessive absences."),
        };
    }

    let standing = class_standing(input.quizzes, input.requirements, input.recitation);
    let grade = EXAM_WEIGHT * input.exam
        + ATTENDANCE_WEIGHT * attendance(input.absences)
        + CLASS_STANDING_WEIGHT * standing;
    TermResult::Computed { grade }
}

/// Final exam score needed to reach `target` overall.
///
/// Not clamped: a result above 100 means the target is out of reach, a
/// result below 0 means it is already secured.
pub fn required_for_finals(prelim: f64, midterm: f64, target: f64) -> f64 {
    (target - PRELIM_WEIGHT * prelim - MIDTERM_WEIGHT * midterm) / FINALS_WEIGHT
}

/// Weighted overall grade from the three term grades.
pub fn overall_grade(prelim: f64, midterm: f64, finals: f64) -> f64 {
    PRELIM_WEIGHT * prelim + MIDTERM_WEIGHT * midterm + FINALS_WEIGHT * finals
}

/// Overall grade and required scores, or `None` if any term failed.
pub fn compute_overall(
    prelim: &TermResult,
    midterm: &TermResult,
    finals: &TermResult,
) -> Option<OverallResult> {
    let (p, m, f) = (prelim.grade()?, midterm.grade()?, finals.grade()?);
    Some(OverallResult {
        overall: overall_grade(p, m, f),
        required_for_finals_75: required_for_finals(p, m, PASSING_TARGET),
        required_for_finals_90: required_for_finals(p, m, EXCELLENT_TARGET),
    })
}

/// Evaluate a validated grade sheet.
pub fn evaluate(sheet: &GradeSheet) -> GradeReport {
    let outcome = |term: Term| {
        let result = compute_term(term, sheet.term(term));
        let message = result.message(term);
        TermOutcome {
            term,
            result,
            message,
        }
    };

    let prelim = outcome(Term::Prelim);
    let midterm = outcome(Term::Midterm);
    let finals = outcome(Term::Final);
    let overall = compute_overall(&prelim.result, &midterm.result, &finals.result);

    match &overall {
        Some(o) => tracing::debug!(overall = o.overall, "grade sheet evaluated"),
        None => tracing::debug!("grade sheet evaluated with a failed term"),
    }

    GradeReport {
        prelim,
        midterm,
        finals,
        overall,
    }
}
