// Configuration type definitions

use serde::Deserialize;

/// Raw data input section
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    /// Glob pattern selecting the JSONL files to scan
    #[serde(default = "default_raw_glob")]
    pub raw_glob: String,
    /// Name of the text field measured and filtered on
    #[serde(default = "default_field")]
    pub field: String,
}

fn default_raw_glob() -> String {
    "data/raw/commonsense-*.jsonl".to_string()
}

fn default_field() -> String {
    "text".to_string()
}

impl Default for DataConfig {
    fn default() -> Self {
        DataConfig {
            raw_glob: default_raw_glob(),
            field: default_field(),
        }
    }
}

/// Length-stats report section
#[derive(Debug, Clone, Deserialize)]
pub struct StatsConfig {
    /// Destination path of the TOML report
    #[serde(default = "default_stats_out")]
    pub out: String,
}

fn default_stats_out() -> String {
    "data/stats/commonsense_length_stats.toml".to_string()
}

impl Default for StatsConfig {
    fn default() -> Self {
        StatsConfig {
            out: default_stats_out(),
        }
    }
}

/// Pruning section
#[derive(Debug, Clone, Deserialize)]
pub struct PruneConfig {
    /// Maximum character count (after trim) a record may have and survive
    #[serde(default = "default_cutoff")]
    pub cutoff: usize,
    /// Directory the surviving records are written to
    #[serde(default = "default_prune_outdir")]
    pub outdir: String,
}

fn default_cutoff() -> usize {
    1000
}

fn default_prune_outdir() -> String {
    "data/filtered".to_string()
}

impl Default for PruneConfig {
    fn default() -> Self {
        PruneConfig {
            cutoff: default_cutoff(),
            outdir: default_prune_outdir(),
        }
    }
}

/// Remote fetch section
#[derive(Debug, Clone, Deserialize)]
pub struct FetchConfig {
    /// Base URL the per-subset CSV files are resolved against
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "https://huggingface.co/datasets/hendrycks/ethics/resolve/main/data".to_string()
}

impl Default for FetchConfig {
    fn default() -> Self {
        FetchConfig {
            base_url: default_base_url(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub stats: StatsConfig,
    #[serde(default)]
    pub prune: PruneConfig,
    #[serde(default)]
    pub fetch: FetchConfig,
}
