//! Print one labelled line per disk metric found in a controller report.

use std::io::{self, BufWriter};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use diskstat::conf::ReportConfig;
use diskstat::parser::PatternSet;
use diskstat::runtime::boot;
use diskstat::runtime::input::InputSource;
use diskstat::runtime::report::{write_report, OutputMode};

#[derive(Parser)]
#[command(name = "smart-lines")]
#[command(about = "Print disk metrics from a RAID/SMART report, one line per metric", long_about = None)]
struct Cli {
    /// Path to the input file containing disk details
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Optional TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    boot::init_logging();
    let cli = Cli::parse();

    let config = ReportConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    let data = InputSource::from_flag(cli.file.as_deref(), false)?.read()?;
    let patterns = PatternSet::new()?;

    let stdout = BufWriter::new(io::stdout().lock());
    write_report(OutputMode::Stream, &data, &patterns, &config, stdout).context("Failed to write metrics")?;
    Ok(())
}
