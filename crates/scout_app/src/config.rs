use std::fs;
use std::path::{Path, PathBuf};

use scout_core::AlertConfig;
use scout_logging::scout_info;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not parse config {path:?}: {message}")]
    Parse { path: PathBuf, message: String },
}

/// Loads alert tunables from a RON file; `None` means stock settings.
/// Fields missing from the file keep their defaults.
pub fn load(path: Option<&Path>) -> Result<AlertConfig, ConfigError> {
    let Some(path) = path else {
        return Ok(AlertConfig::default());
    };
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse(&content).map_err(|message| ConfigError::Parse {
        path: path.to_path_buf(),
        message,
    })?;
    scout_info!("Loaded alert config from {:?}", path);
    Ok(config)
}

fn parse(content: &str) -> Result<AlertConfig, String> {
    ron::from_str::<AlertConfig>(content)
        .map(AlertConfig::normalized)
        .map_err(|err| err.to_string())
}
