use std::fs;
use std::path::PathBuf;

use clap::Parser;
use color_eyre::Result;
use log::warn;

use ethics_prep::PrepError;
use ethics_prep::config;
use ethics_prep::fetch::{self, SPLITS, Subset};

/// Download the raw ETHICS CSV subsets and rewrite them as JSONL
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Download raw ETHICS dataset subsets and convert them to JSONL"
)]
struct Args {
    /// Output directory for the JSONL files
    #[arg(long, value_name = "DIR")]
    out: PathBuf,

    /// Override the configured download base URL
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    color_eyre::install()?;

    let config_result = config::load_config();
    if let Some(warning) = config_result.warning {
        warn!("{}", warning);
    }

    let args = Args::parse();
    let base_url = args
        .base_url
        .unwrap_or(config_result.config.fetch.base_url);

    fs::create_dir_all(&args.out)?;

    for subset in Subset::ALL {
        for split in SPLITS {
            let url = fetch::csv_url(&base_url, subset, split);
            let out_path = args.out.join(format!("{}-{}.jsonl", subset, split));

            // A failed unit is skipped, not retried; the rest still run.
            let csv_text = match fetch::download_csv(&url) {
                Ok(text) => text,
                Err(e) => {
                    warn!("skip {}/{}: {}", subset, split, e);
                    continue;
                }
            };

            // A body that isn't CSV skips the unit; an unwritable output
            // directory still aborts the run.
            let counts = match fetch::export_split(&csv_text, subset, split, &out_path) {
                Ok(counts) => counts,
                Err(e @ PrepError::Csv(_)) => {
                    warn!("skip {}/{}: {}", subset, split, e);
                    continue;
                }
                Err(e) => return Err(e.into()),
            };
            println!(
                "wrote {}  ok={} skipped={}",
                out_path.display(),
                counts.ok,
                counts.skipped
            );
        }
    }

    Ok(())
}
