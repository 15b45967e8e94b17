// Configuration module for ethics-prep
// Handles loading and parsing configuration from ./ethics-prep.toml

mod types;

pub use types::{Config, DataConfig, FetchConfig, PruneConfig, StatsConfig};

use std::fs;
use std::path::{Path, PathBuf};

/// Name of the optional configuration file, looked up in the working
/// directory. The binaries all operate on project-relative `data/` paths,
/// so the config lives next to the data rather than under the home dir.
const CONFIG_FILE: &str = "ethics-prep.toml";

/// Result of loading configuration
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

/// Loads configuration from ./ethics-prep.toml
/// Returns default configuration if the file doesn't exist or on parse errors
pub fn load_config() -> ConfigResult {
    load_config_from(&config_path())
}

fn load_config_from(path: &Path) -> ConfigResult {
    // If file doesn't exist, return defaults silently
    if !path.exists() {
        return ConfigResult {
            config: Config::default(),
            warning: None,
        };
    }

    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            return ConfigResult {
                config: Config::default(),
                warning: Some(format!("Failed to read config: {}", e)),
            };
        }
    };

    match toml::from_str::<Config>(&contents) {
        Ok(config) => ConfigResult {
            config,
            warning: None,
        },
        Err(e) => ConfigResult {
            config: Config::default(),
            warning: Some(format!("Invalid config: {}", e)),
        },
    }
}

fn config_path() -> PathBuf {
    PathBuf::from(CONFIG_FILE)
}
