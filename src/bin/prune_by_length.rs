use std::path::PathBuf;

use clap::Parser;
use color_eyre::Result;
use log::warn;

use ethics_prep::config;
use ethics_prep::prune::prune_file;

/// Filter JSONL records whose text field exceeds a length cutoff
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Prune JSONL records whose text field exceeds a length cutoff"
)]
struct Args {
    /// JSONL files to prune (defaults to the configured raw glob)
    files: Vec<PathBuf>,

    /// Maximum character count (after trim) a record may have and survive
    #[arg(long, value_name = "N")]
    cutoff: Option<usize>,

    /// Directory the surviving records are written to
    #[arg(long, value_name = "DIR")]
    outdir: Option<PathBuf>,

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
    let cutoff = args.cutoff.unwrap_or(config.prune.cutoff);
    let outdir = args
        .outdir
        .unwrap_or_else(|| PathBuf::from(config.prune.outdir));
    let field = args.field.unwrap_or(config.data.field);

    let inputs: Vec<PathBuf> = if args.files.is_empty() {
        let mut paths = Vec::new();
        for entry in glob::glob(&config.data.raw_glob)? {
            match entry {
                Ok(path) => paths.push(path),
                Err(e) => warn!("glob match error: {}", e),
            }
        }
        paths
    } else {
        args.files
    };

    for inpath in inputs {
        if !inpath.exists() {
            eprintln!("skip: {} not found", inpath.display());
            continue;
        }

        let (outpath, outcome) = prune_file(&inpath, &outdir, &field, cutoff)?;
        println!(
            "{}: kept={} dropped={} -> {}",
            inpath.file_name().unwrap_or_default().to_string_lossy(),
            outcome.kept,
            outcome.dropped,
            outpath.display()
        );
    }

    Ok(())
}
