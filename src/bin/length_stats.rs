use std::path::PathBuf;

use clap::Parser;
use color_eyre::Result;
use log::warn;

use ethics_prep::config;
use ethics_prep::report::{build_report, write_report};

/// Compute per-file and overall text-length statistics from JSONL files
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Compute per-file and overall text-length statistics from JSONL files"
)]
struct Args {
    /// Glob pattern selecting the JSONL files to scan
    #[arg(long, value_name = "GLOB")]
    glob: Option<String>,

    /// Destination path of the TOML report
    #[arg(long, value_name = "OUT")]
    out: Option<PathBuf>,

    /// Name of the text field to measure
    #[arg(long, value_name = "NAME")]
    field: Option<String>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    color_eyre::install()?;

    let config_result = config::load_config();
    if let Some(warning) = config_result.warning {
        warn!("{}", warning);
    }
    let config = config_result.config;

    let args = Args::parse();
    let pattern = args.glob.unwrap_or(config.data.raw_glob);
    let field = args.field.unwrap_or(config.data.field);
    let out = args.out.unwrap_or_else(|| PathBuf::from(config.stats.out));

    let report = build_report(&pattern, &field)?;
    write_report(&report, &out)?;

    println!(
        "Wrote {} with stats for {} file(s).",
        out.display(),
        report.files.len()
    );

    Ok(())
}
