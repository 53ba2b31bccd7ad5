//! sifter CLI - extract structured data from HTML with declarative rules
//!
//! Reads an HTML file and a YAML rules file, evaluates the rules, and
//! prints the extracted container as JSON or YAML.

mod output;

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;

use output::OutputFormat;
use sifter_core::Value;
use sifter_rules::{load_rules_from_file, transform_markup, TransformOptions};

#[derive(Parser)]
#[command(name = "sifter")]
#[command(version = "0.1.0")]
#[command(about = "Extract structured data from HTML with declarative rules")]
struct Cli {
    /// HTML file to extract from
    html: PathBuf,

    /// YAML rules file
    #[arg(long, short = 'r', value_name = "PATH")]
    rules: PathBuf,

    /// Collect results into a top-level list instead of a map
    #[arg(long)]
    list: bool,

    /// Parse the input as an HTML fragment
    #[arg(long)]
    fragment: bool,

    /// Output format: json, yaml
    #[arg(long, value_name = "FORMAT", default_value = "json")]
    format: String,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// Maximum rule recursion depth
    #[arg(long, value_name = "N", default_value_t = 1000)]
    depth_limit: usize,

    /// Show rule evaluation debug output
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", "Error".red(), e);
            ExitCode::from(1)
        }
    }
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();

    let mut logger = env_logger::Builder::from_default_env();
    if cli.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    let format = OutputFormat::from_str(&cli.format).ok_or_else(|| {
        anyhow::anyhow!(
            "Invalid output format '{}'. Valid options: json, yaml",
            cli.format
        )
    })?;

    let rules = load_rules_from_file(&cli.rules)
        .with_context(|| format!("loading rules from {}", cli.rules.display()))?;

    let markup = fs::read_to_string(&cli.html)
        .with_context(|| format!("reading {}", cli.html.display()))?;

    let mut data = if cli.list { Value::list() } else { Value::map() };
    let opts = TransformOptions {
        depth_limit: cli.depth_limit,
        fragment: cli.fragment,
    };
    transform_markup(&mut data, &markup, &rules, &opts)
        .with_context(|| format!("extracting from {}", cli.html.display()))?;

    println!("{}", output::render(&data, format, cli.pretty)?);

    Ok(ExitCode::SUCCESS)
}
