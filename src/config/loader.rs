//! `.archrec.toml` discovery and loading.
//!
//! Configuration is optional. An unreadable or invalid file warns and falls
//! back to defaults; it never aborts a run.

use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::scoring::EngineConfig;

const CONFIG_FILE_NAME: &str = ".archrec.toml";
const ANCESTOR_SEARCH_DEPTH: usize = 4;

/// Pure function to read config file contents.
pub(crate) fn read_config_file(path: &Path) -> Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Pure function to parse and validate config from a TOML string. Invalid
/// sections are reported; the caller decides whether to fall back.
pub fn parse_and_validate_config(contents: &str) -> Result<EngineConfig, String> {
    let mut config = toml::from_str::<EngineConfig>(contents)
        .map_err(|e| format!("failed to parse {CONFIG_FILE_NAME}: {e}"))?;

    if let Err(e) = config.weights.validate() {
        // A near-miss sum is normalized; anything else falls back.
        let sum = config.weights.sum();
        if (sum - 1.0).abs() <= 0.01 && sum > 0.0 {
            config.weights.normalize();
        } else {
            return Err(format!("invalid scoring weights: {e}"));
        }
    }
    config.validate()?;
    Ok(config)
}

fn try_load_config_from_path(config_path: &Path) -> Option<EngineConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!("failed to read config file {}: {}", config_path.display(), e);
            }
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            tracing::debug!("loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            tracing::warn!("{e}; using defaults");
            None
        }
    }
}

/// Load configuration from an explicit path. Unlike discovery, an explicit
/// path that does not parse is an error the caller surfaces.
pub fn load_config_from(path: &Path) -> Result<EngineConfig, String> {
    let contents =
        read_config_file(path).map_err(|e| format!("failed to read {}: {e}", path.display()))?;
    parse_and_validate_config(&contents)
}

/// Discover `.archrec.toml` starting at `start` and walking up a bounded
/// number of ancestors. Returns defaults when nothing is found.
pub fn discover_config(start: &Path) -> EngineConfig {
    let mut dir: Option<&Path> = Some(start);
    for _ in 0..=ANCESTOR_SEARCH_DEPTH {
        let Some(current) = dir else { break };
        if let Some(config) = try_load_config_from_path(&current.join(CONFIG_FILE_NAME)) {
            return config;
        }
        dir = current.parent();
    }
    EngineConfig::default()
}

/// Resolve the effective configuration: explicit path if given, otherwise
/// discovery from the current directory.
pub fn resolve_config(explicit: Option<&PathBuf>) -> Result<EngineConfig, String> {
    match explicit {
        Some(path) => load_config_from(path),
        None => {
            let cwd = std::env::current_dir().map_err(|e| e.to_string())?;
            Ok(discover_config(&cwd))
        }
    }
}
