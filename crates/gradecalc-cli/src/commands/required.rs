//! The `gradecalc required` command.

use anyhow::Result;

use gradecalc_core::engine::required_for_finals;

pub fn execute(prelim: f64, midterm: f64, target_str: String) -> Result<()> {
    for (name, grade) in [("prelim", prelim), ("midterm", midterm)] {
        anyhow::ensure!(
            (0.0..=100.0).contains(&grade),
            "{name} grade must be between 0 and 100"
        );
    }

    let targets: Vec<f64> = target_str
        .split(',')
        .map(|s| {
            s.trim()
                .parse::<f64>()
                .ok()
                .filter(|t| t.is_finite())
                .ok_or_else(|| anyhow::anyhow!("invalid target: '{}'", s.trim()))
        })
        .collect::<Result<Vec<_>>>()?;

    for target in targets {
        let required = required_for_finals(prelim, midterm, target);
        println!("Required Final Exam score for {target}: {required:.2}");
        if required > 100.0 {
            println!("  (out of reach)");
        }
    }

    Ok(())
}
