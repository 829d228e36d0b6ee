//! Print one line-protocol record per disk found in a controller report.
//! Reads standard input when no file is given.

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
#[command(name = "smart-influx")]
#[command(about = "Convert a RAID/SMART report to line protocol, one record per disk", long_about = None)]
struct Cli {
    /// Path to the input file containing disk details (leave empty to read from stdin)
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
    let data = InputSource::from_flag(cli.file.as_deref(), true)?.read()?;
    let patterns = PatternSet::new()?;

    let stdout = BufWriter::new(io::stdout().lock());
    write_report(OutputMode::LineProtocol, &data, &patterns, &config, stdout)
        .context("Failed to write line protocol")?;
    Ok(())
}
