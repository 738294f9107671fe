//! gradecalc-report — Rendering of the grade form and its results.

pub mod html;
