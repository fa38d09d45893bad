//! paint export command - re-emit a saved report in another format.

use std::path::Path;

use anyhow::{Context, Result};
use paint_report::{export_regions, ExportFormat, Report};

use crate::Cli;

pub fn run(input: &Path, to: &str, output: Option<&Path>, cli: &Cli) -> Result<()> {
    let json = std::fs::read_to_string(input)
        .with_context(|| format!("Failed to read report {}", input.display()))?;
    let report: Report = serde_json::from_str(&json)
        .with_context(|| format!("{} is not a valid classification report", input.display()))?;

    let format: ExportFormat = to.parse()?;
    let content = export_regions(&report.regions, format)?;

    match output {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write {}", path.display()))?;
        }
        None => {
            if !cli.quiet {
                print!("{content}");
            }
        }
    }

    Ok(())
}
