use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::{debug, info};

use data_extraction::data_classifier::Category;
use data_extraction::harness::{self, HarnessConfig, OutputFormat};
use data_extraction::utils::logger::init_logger;

/// Validate emails, URLs, phone numbers, credit card numbers and times
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Output format for the report (overrides the config file)
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Only report this category; repeat for several
    #[arg(long = "category", value_name = "NAME", value_parser = Category::from_name)]
    categories: Vec<Category>,

    /// Validate TEXT instead of running the sample table
    #[arg(long, value_name = "TEXT")]
    check: Option<String>,

    /// TOML configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write logs to a timestamped file in DIR instead of stderr
    #[arg(long, value_name = "DIR")]
    log_dir: Option<PathBuf>,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let mut config = HarnessConfig::load(cli.config.as_deref())?;
    if let Some(format) = cli.format {
        config.format = format;
    }
    if cli.log_dir.is_some() {
        config.log_dir = cli.log_dir;
    }

    init_logger(config.log_dir.as_deref())?;
    debug!("Effective configuration: {:?}", config);

    if let Some(text) = cli.check.as_deref() {
        return check(text, &cli.categories, &config);
    }

    let reports = if cli.categories.is_empty() {
        harness::run_all()
    } else {
        harness::run(&cli.categories)
    };

    match config.format {
        OutputFormat::Text => print!("{}", harness::render_text(&reports, config.sample_width)),
        OutputFormat::Json => println!("{}", harness::render_json(&reports)?),
    }

    Ok(ExitCode::SUCCESS)
}

fn check(text: &str, categories: &[Category], config: &HarnessConfig) -> Result<ExitCode> {
    let results = harness::check(text, categories);
    let any_match = results.iter().any(|(_, matched)| *matched);
    info!("Checked {:?} against {} categories, matched: {}", text, results.len(), any_match);

    match config.format {
        OutputFormat::Text => {
            for (category, matched) in &results {
                println!(
                    "  {:<14} -> {}",
                    category.as_ref(),
                    harness::Verdict::from(*matched)
                );
            }
        }
        OutputFormat::Json => {
            let value: serde_json::Map<String, serde_json::Value> = results
                .iter()
                .map(|(category, matched)| (category.to_string(), (*matched).into()))
                .collect();
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
    }

    Ok(if any_match { ExitCode::SUCCESS } else { ExitCode::from(1) })
}
