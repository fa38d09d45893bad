//! paint: Command-line interface for miniature painting-region
//! classification.
//!
//! Classifies the vertices of a miniature mesh into named painting regions
//! (base, legs, torso, arms, head) using geometric heuristics.
//!
//! # Logging
//!
//! Set the `RUST_LOG` environment variable to control log output:
//! - `RUST_LOG=paint_region=info` - Classification stats
//! - `RUST_LOG=paint_region=debug` - Per-region breakdown
//! - `RUST_LOG=debug` - All debug output
//!
//! # Example
//!
//! ```bash
//! # Classify a miniature and print the region report
//! paint classify knight.stl
//!
//! # JSON report with the creature profile, preview-capped indices
//! paint classify wolf.stl --profile creature --preview --format json
//! ```

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use paint_region::RegionCatalog;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod output;

use commands::{classify, export, info};

/// paint - classify miniature meshes into painting regions.
#[derive(Parser)]
#[command(name = "paint")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format for results
    #[arg(long, global = true, default_value = "text")]
    format: OutputFormat,

    /// Suppress all non-error output
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Increase output verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(long, short, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    Text,
    /// JSON output for scripting
    Json,
}

/// Region display profile to label results with.
#[derive(Clone, Copy, ValueEnum)]
pub enum Profile {
    /// Standard humanoid miniature (base, legs, torso, arms, head)
    Humanoid,
    /// Simplified creature labels (base, body, head)
    Creature,
    /// Vehicle labels (chassis, hull, turret)
    Vehicle,
}

impl Profile {
    fn catalog(self) -> RegionCatalog {
        match self {
            Self::Humanoid => RegionCatalog::humanoid(),
            Self::Creature => RegionCatalog::creature(),
            Self::Vehicle => RegionCatalog::vehicle(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Display mesh statistics
    Info {
        /// Input STL file
        input: PathBuf,
    },

    /// Classify mesh vertices into painting regions
    Classify {
        /// Input STL file
        input: PathBuf,

        /// Region display profile
        #[arg(long, default_value = "humanoid")]
        profile: Profile,

        /// Cap index lists at 100 entries per region
        #[arg(long)]
        preview: bool,

        /// Write the JSON report to a file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Re-emit a saved JSON report in another format
    Export {
        /// Input report (JSON, as written by `classify -o`)
        input: PathBuf,

        /// Target format (json or obj)
        #[arg(long = "to", default_value = "obj")]
        to: String,

        /// Output file path (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Initialize the tracing subscriber based on verbosity level.
fn init_tracing(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    // RUST_LOG wins; otherwise derive a filter from -v flags
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        let level = match verbose {
            0 => "warn",
            1 => "paint_region=info,paint_report=info",
            2 => "paint_region=debug,paint_report=debug,paint_io=debug",
            _ => "trace",
        };
        EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose, cli.quiet);

    let result = match &cli.command {
        Commands::Info { input } => info::run(input, &cli),
        Commands::Classify {
            input,
            profile,
            preview,
            output,
        } => classify::run(input, *profile, *preview, output.as_deref(), &cli),
        Commands::Export { input, to, output } => export::run(input, to, output.as_deref(), &cli),
    };

    if let Err(e) = &result {
        if !cli.quiet {
            eprintln!("{}: {}", "Error".red().bold(), e);
            for cause in e.chain().skip(1) {
                eprintln!("  {}: {}", "Caused by".yellow(), cause);
            }
        }
        std::process::exit(1);
    }

    Ok(())
}
