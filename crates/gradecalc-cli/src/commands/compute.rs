//! The `gradecalc compute` command.

use std::path::{Path, PathBuf};

use anyhow::Result;

use gradecalc_core::parser::parse_sheet;
use gradecalc_core::GradeReport;
use gradecalc_report::html::{render_results, write_html_report};

pub fn execute(sheet_path: PathBuf, format: String, output: Option<PathBuf>) -> Result<()> {
    tracing::debug!(sheet = %sheet_path.display(), "computing grades");
    let form = parse_sheet(&sheet_path)?;
    let report = gradecalc_core::grade_form(&form)?;

    match format.as_str() {
        "text" => emit(&render_text(&report), output.as_deref())?,
        "json" => emit(&serde_json::to_string_pretty(&report)?, output.as_deref())?,
        "html" => match &output {
            Some(path) => {
                write_html_report(&report, path)?;
                eprintln!("HTML report: {}", path.display());
            }
            None => println!("{}", render_results(&report)),
        },
        other => anyhow::bail!("unknown format: {other} (expected text, json or html)"),
    }

    Ok(())
}

fn emit(rendered: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, rendered)?;
            eprintln!("Results saved to: {}", path.display());
        }
        None => println!("{rendered}"),
    }
    Ok(())
}

fn render_text(report: &GradeReport) -> String {
    use comfy_table::{Cell, Table};

    let mut out = String::new();
    for outcome in report.terms() {
        out.push_str(&outcome.message);
        out.push('\n');
    }

    let mut table = Table::new();
    table.set_header(vec!["Term", "Grade"]);
    for outcome in report.terms() {
        let grade = match outcome.result.grade() {
            Some(g) => format!("{g:.2}"),
            None => "FAILED".to_string(),
        };
        table.add_row(vec![Cell::new(outcome.term), Cell::new(grade)]);
    }
    out.push_str(&format!("\n{table}\n"));

    if let Some(overall) = &report.overall {
        out.push_str(&format!("\nOverall Grade: {:.2}\n", overall.overall));
        out.push_str(&format!(
            "Required Final Exam score for 75: {:.2}\n",
            overall.required_for_finals_75
        ));
        out.push_str(&format!(
            "Required Final Exam score for 90: {:.2}",
            overall.required_for_finals_90
        ));
    }

    out
}
