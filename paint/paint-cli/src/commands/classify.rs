//! paint classify command - partition a mesh into painting regions.

use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;
use paint_report::{analyze_mesh_with, IndexDetail, Report};

use crate::{output, Cli, OutputFormat, Profile};

pub fn run(
    input: &Path,
    profile: Profile,
    preview: bool,
    report_path: Option<&Path>,
    cli: &Cli,
) -> Result<()> {
    let data = std::fs::read(input)
        .with_context(|| format!("Failed to read {}", input.display()))?;

    let detail = if preview {
        IndexDetail::Preview
    } else {
        IndexDetail::Full
    };
    let catalog = profile.catalog();

    let report = analyze_mesh_with(&data, &catalog, detail)
        .with_context(|| format!("Failed to classify {}", input.display()))?;

    if let Some(path) = report_path {
        let json = serde_json::to_string_pretty(&report)?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write report to {}", path.display()))?;
    }

    match cli.format {
        OutputFormat::Json => output::print_json(&report, cli.quiet),
        OutputFormat::Text => print_text(&report, cli.quiet),
    }

    Ok(())
}

fn print_text(report: &Report, quiet: bool) {
    if quiet {
        return;
    }

    println!("{}", "Painting Regions".bold().underline());
    if let Some(ref info) = report.mesh_info {
        println!(
            "  {}: {} vertices, {} faces",
            "Mesh".cyan(),
            info.vertices,
            info.faces
        );
    }

    for region in &report.regions {
        println!(
            "  {} ({}): {} vertices ({:.1}%)",
            region.name.bold(),
            region.color,
            region.vertex_count,
            region.vertex_percentage
        );
        if !region.description.is_empty() {
            println!("    {}", region.description.dimmed());
        }
    }
}
