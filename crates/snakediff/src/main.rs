mod config;
mod output;

use anyhow::{Context, Result};
use clap::Parser;
use config::{Config, OutputFormat};
use snakediff_core::{DiffEngine, Granularity, LimitBehavior};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "snakediff")]
#[command(about = "Show the minimal edit script between two files")]
#[command(version)]
pub struct Cli {
    #[arg(help = "Path to the old file")]
    old: PathBuf,
    #[arg(help = "Path to the new file")]
    new: PathBuf,
    #[arg(
        long,
        short,
        value_parser = parse_granularity,
        help = "Unit of comparison: lines, words, chars, or graphemes"
    )]
    granularity: Option<Granularity>,
    #[arg(long, short, value_enum, help = "Output format")]
    format: Option<OutputFormat>,
    #[arg(long, value_name = "N", help = "Cap the rounds of each middle-snake search")]
    max_rounds: Option<usize>,
    #[arg(long, value_name = "N", help = "Cap the split depth")]
    max_depth: Option<usize>,
    #[arg(long, help = "Fail instead of falling back when a cap is hit")]
    strict: bool,
    #[arg(long, value_name = "PATH", help = "Config file (TOML)")]
    config: Option<PathBuf>,
}

fn parse_granularity(value: &str) -> Result<Granularity, String> {
    match value {
        "lines" => Ok(Granularity::Lines),
        "words" => Ok(Granularity::Words),
        "chars" => Ok(Granularity::Chars),
        "graphemes" => Ok(Granularity::Graphemes),
        other => Err(format!(
            "unknown granularity `{other}` (expected lines, words, chars, or graphemes)"
        )),
    }
}

impl Cli {
    /// Command line flags win over the config file
    fn apply_overrides(&self, config: &mut Config) {
        if let Some(granularity) = self.granularity {
            config.output.granularity = granularity;
        }
        if let Some(format) = self.format {
            config.output.format = format;
        }
        if self.max_rounds.is_some() {
            config.diff.max_rounds = self.max_rounds;
        }
        if self.max_depth.is_some() {
            config.diff.max_depth = self.max_depth;
        }
        if self.strict {
            config.diff.on_limit_exceeded = LimitBehavior::ReturnError;
        }
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_env("SNAKEDIFF_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();
}

fn run(cli: &Cli) -> Result<bool> {
    let mut config = Config::resolve(cli.config.as_deref())?;
    cli.apply_overrides(&mut config);

    let old = std::fs::read_to_string(&cli.old)
        .with_context(|| format!("failed to read {}", cli.old.display()))?;
    let new = std::fs::read_to_string(&cli.new)
        .with_context(|| format!("failed to read {}", cli.new.display()))?;

    let engine = DiffEngine::new()
        .with_config(config.diff)
        .with_granularity(config.output.granularity);
    let diff = engine.diff_text(&old, &new)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    output::write_diff(&mut out, &diff, config.output.format)?;
    Ok(diff.has_changes())
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(false) => ExitCode::SUCCESS,
        Ok(true) => ExitCode::from(1),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}
