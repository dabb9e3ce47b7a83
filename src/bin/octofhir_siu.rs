//! Command-line interface for SIU appointment extraction
//!
//! Reads an HL7 file holding one or more SIU^S12 messages and prints the
//! extracted appointments as a JSON array.

use anyhow::{Context, Result};
use clap::Parser;
use octofhir_siu::{BatchConfig, ErrorPolicy, TriggerPolicy, ValidationConfig, parse_file};
use std::fs;
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "octofhir-siu")]
#[command(about = "Parse HL7 SIU^S12 messages from a file into JSON appointments")]
#[command(version)]
#[command(author = "OctoFHIR Team <funyloony@gmail.com>")]
struct Cli {
    /// Path to the HL7 file
    input: PathBuf,
    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Pretty-print JSON output
    #[arg(short, long)]
    pretty: bool,
    /// How to handle messages that fail to parse
    #[arg(short, long, value_enum, default_value_t = ErrorPolicy::Warn)]
    errors: ErrorPolicy,
    /// How to handle trigger events other than S12
    #[arg(short, long, value_enum, default_value_t = TriggerPolicy::Warn)]
    trigger: TriggerPolicy,
    /// Parse messages in parallel
    #[arg(long)]
    parallel: bool,
    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    human_panic::setup_panic!();

    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new().filter_level(level).init();

    match run(&cli) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> Result<bool> {
    let config = BatchConfig {
        validation: ValidationConfig::default().with_trigger_policy(cli.trigger),
        error_policy: cli.errors,
        parallel: cli.parallel,
    };

    let report = parse_file(&cli.input, &config)?;

    if !report.is_success() {
        eprintln!(
            "Error: {} message(s) failed to parse",
            report.failures.len()
        );
        return Ok(false);
    }

    let output = if cli.pretty {
        serde_json::to_string_pretty(&report.appointments)?
    } else {
        serde_json::to_string(&report.appointments)?
    };

    match &cli.output {
        Some(path) => {
            fs::write(path, output)
                .with_context(|| format!("Could not write output file {}", path.display()))?;
            eprintln!(
                "Parsed {} appointments to {}",
                report.appointments.len(),
                path.display()
            );
        }
        None => println!("{output}"),
    }

    Ok(true)
}
