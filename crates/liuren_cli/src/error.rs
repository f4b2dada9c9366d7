use std::path::PathBuf;

use liuren_base::LiurenError;
use liuren_time::TimeError;
use thiserror::Error;

/// Anything that can stop a CLI command.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CliError {
    #[error(transparent)]
    Engine(#[from] LiurenError),
    #[error(transparent)]
    Time(#[from] TimeError),
    #[error("cannot read config {}: {source}", path.display())]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("cannot encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}
