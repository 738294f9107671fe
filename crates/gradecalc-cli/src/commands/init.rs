//! The `gradecalc init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    // Create gradecalc.toml
    if std::path::Path::new("gradecalc.toml").exists() {
        println!("gradecalc.toml already exists, skipping.");
    } else {
        std::fs::write("gradecalc.toml", SAMPLE_CONFIG)?;
        println!("Created gradecalc.toml");
    }

    // Create example grade sheet
    std::fs::create_dir_all("sheets")?;
    let example_path = std::path::Path::new("sheets/example.toml");
    if example_path.exists() {
        println!("sheets/example.toml already exists, skipping.");
    } else {
        std::fs::write(example_path, EXAMPLE_SHEET)?;
        println!("Created sheets/example.toml");
    }

    println!("\nNext steps:");
    println!("  1. Run: gradecalc compute --sheet sheets/example.toml");
    println!("  2. Run: gradecalc serve, then open http://127.0.0.1:5000/");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# gradecalc configuration

bind_addr = "127.0.0.1:5000"
max_body_bytes = 16384
"#;

const EXAMPLE_SHEET: &str = r#"# Four or more absences fail a term.

[prelim]
absences = 0
exam = 80
quizzes = 90
requirements = 85
recitation = 88

[midterm]
absences = 1
exam = 90
quizzes = 90
requirements = 90
recitation = 90

[final]
absences = 2
exam = 70
quizzes = 80
requirements = 75
recitation = 60
"#;
