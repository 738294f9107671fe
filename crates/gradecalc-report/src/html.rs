//! HTML pages for the grade form and its results.
//!
//! Both pages are self-contained, with CSS inlined.

use anyhow::Result;
use std::path::Path;

use gradecalc_core::model::{Component, Field, GradeReport, RawForm, Term};

/// Escape a string for safe HTML insertion.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

fn page_start(html: &mut String, title: &str) {
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!("<title>{}</title>\n", html_escape(title)));
    html.push_str("<style>\n");
    html.push_str(CSS);
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n");
}

fn page_end(html: &mut String) {
    html.push_str("</body>\n</html>");
}

/// Render the input form.
///
/// Every field is pre-filled with its raw value from `form`, so a rejected
/// submission comes back exactly as typed. `error` is shown above the form.
pub fn render_form(form: &RawForm, error: Option<&str>) -> String {
    let mut html = String::new();
    page_start(&mut html, "Grade Calculator");

    html.push_str("<header>\n<h1>Grade Calculator</h1>\n</header>\n");

    if let Some(message) = error {
        html.push_str(&format!(
            "<p class=\"error\" role=\"alert\">{}</p>\n",
            html_escape(message)
        ));
    }

    html.push_str("<form method=\"post\" action=\"/\">\n");
    for term in Term::ALL {
        html.push_str(&format!(
            "<fieldset>\n<legend>{}</legend>\n",
            html_escape(term.name())
        ));
        for component in Component::ALL {
            let field = Field::new(term, component);
            let name = field.name();
            html.push_str(&format!(
                "<label for=\"{name}\">{}</label>\n",
                html_escape(&field.label())
            ));
            html.push_str(&format!(
                "<input type=\"text\" inputmode=\"decimal\" id=\"{name}\" name=\"{name}\" value=\"{}\">\n",
                html_escape(form.get(field))
            ));
        }
        html.push_str("</fieldset>\n");
    }
    html.push_str("<button type=\"submit\">Compute</button>\n");
    html.push_str("</form>\n");

    page_end(&mut html);
    html
}

/// Render the results of an evaluated grade sheet.
pub fn render_results(report: &GradeReport) -> String {
    let mut html = String::new();
    page_start(&mut html, "Grade Calculator — Results");

    html.push_str("<header>\n<h1>Results</h1>\n</header>\n");

    // Per-term messages
    html.push_str("<section class=\"messages\">\n<ul>\n");
    for outcome in report.terms() {
        let class = if outcome.result.is_failed() {
            "fail"
        } else {
            "pass"
        };
        html.push_str(&format!(
            "<li class=\"{class}\">{}</li>\n",
            html_escape(&outcome.message)
        ));
    }
    html.push_str("</ul>\n</section>\n");

    // Term grade table
    html.push_str("<section class=\"grades\">\n");
    html.push_str("<table>\n<thead><tr><th>Term</th><th>Grade</th></tr></thead>\n<tbody>\n");
    for outcome in report.terms() {
        let cell = match outcome.result.grade() {
            Some(grade) => format!("<td>{grade:.2}</td>"),
            None => "<td class=\"fail\">FAILED</td>".to_string(),
        };
        html.push_str(&format!(
            "<tr><td>{}</td>{cell}</tr>\n",
            html_escape(outcome.term.name())
        ));
    }
    html.push_str("</tbody></table>\n</section>\n");

    // Overall, only when every term was computed
    if let Some(overall) = &report.overall {
        html.push_str("<section class=\"overall\">\n");
        html.push_str(&format!(
            "<p>Overall Grade: <strong>{:.2}</strong></p>\n",
            overall.overall
        ));
        html.push_str(&format!(
            "<p>Required Final Exam score for 75: <strong>{:.2}</strong></p>\n",
            overall.required_for_finals_75
        ));
        html.push_str(&format!(
            "<p>Required Final Exam score for 90: <strong>{:.2}</strong></p>\n",
            overall.required_for_finals_90
        ));
        html.push_str("</section>\n");
    }

    html.push_str("<p><a href=\"/\">Compute again</a></p>\n");

    page_end(&mut html);
    html
}

/// Write a results page to a file.
pub fn write_html_report(report: &GradeReport, path: &Path) -> Result<()> {
    let html = render_results(report);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, html)?;
    Ok(())
}

const CSS: &str = r#"
:root { --bg: #fff; --fg: #1a1a1a; --border: #e5e7eb; --pass: #dcfce7; --fail: #fde2e2; }
@media (prefers-color-scheme: dark) {
  :root { --bg: #111827; --fg: #f9fafb; --border: #374151; --pass: #064e3b; --fail: #7f1d1d; }
}
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; margin: 0; padding: 2rem; background: var(--bg); color: var(--fg); max-width: 48rem; }
h1 { margin-top: 0; }
fieldset { border: 1px solid var(--border); border-radius: 8px; margin: 1rem 0; padding: 1rem; display: grid; grid-template-columns: 12rem 1fr; gap: 0.5rem 1rem; }
legend { font-weight: bold; padding: 0 0.5rem; }
input { padding: 0.3rem 0.5rem; border: 1px solid var(--border); border-radius: 4px; background: var(--bg); color: var(--fg); }
button { padding: 0.5rem 1.5rem; cursor: pointer; }
.error { background: var(--fail); padding: 0.75rem 1rem; border-radius: 8px; }
table { border-collapse: collapse; width: 100%; margin: 1rem 0; }
th, td { border: 1px solid var(--border); padding: 0.5rem 1rem; text-align: left; }
th { background: var(--border); }
.pass { background: var(--pass); }
.fail { background: var(--fail); }
ul { list-style: none; padding: 0; }
li { padding: 0.4rem 0.75rem; margin: 0.25rem 0; border-radius: 4px; }
"#;
