//! Validate an exported session document.

use std::path::PathBuf;

use reframe_session_model::{parse_samples, validate_sequence};

pub fn run(path: PathBuf) -> anyhow::Result<()> {
    println!("Validating session at: {}", path.display());

    let content = std::fs::read_to_string(&path)?;
    let samples =
        parse_samples(&content).map_err(|e| anyhow::anyhow!("Failed to parse session: {e}"))?;

    println!("  Samples: {}", samples.len());

    let issues = validate_sequence(&samples);
    if issues.is_empty() {
        println!("\nSession is valid.");
    } else {
        println!("\nValidation issues:");
        for issue in &issues {
            println!("  - {issue}");
        }
        println!(
            "\n{} issue(s) found. Session may not replay cleanly.",
            issues.len()
        );
    }

    Ok(())
}
