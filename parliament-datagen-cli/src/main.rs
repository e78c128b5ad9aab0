//! Command-line entry point for parliament-datagen.
//!
//! Loads a scraped IAM permission document, writes the generated
//! `parliament.go` data file, and post-processes it with gofmt. The run is
//! linear and synchronous; any failure propagates out and exits non-zero.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use parliament_datagen_core::{load_services, write_permissions_file};

#[derive(Parser, Debug)]
#[command(
    name = "parliament-datagen",
    version,
    about = "Generate the plugin's statically-compiled IAM permission data file"
)]
struct Args {
    /// Scraped IAM permission document (JSON)
    #[arg(long, default_value = "iam-definition.json")]
    input: PathBuf,

    /// Destination for the generated Go source file
    #[arg(long, default_value = "parliament.go")]
    output: PathBuf,

    /// Skip the gofmt post-processing step
    #[arg(long)]
    no_format: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let document = std::fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;
    let services = load_services(&document)?;
    log::debug!(
        "Rendering {} services into {}",
        services.len(),
        args.output.display()
    );

    write_permissions_file(&services, &args.output, !args.no_format)?;

    println!("Done");
    Ok(())
}
