//! Optional TOML defaults for the CLI.
//!
//! ```toml
//! region = "australia"
//! seed = 7
//! log_filter = "info"
//! ```
//!
//! Command-line flags always win over file values.

use std::path::Path;

use liuren_base::Region;
use serde::Deserialize;

use crate::error::CliError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Region used when `--region` is absent.
    pub region: Option<Region>,
    /// Hint seed used when `--seed` is absent.
    pub seed: Option<u64>,
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub log_filter: Option<String>,
}

impl CliConfig {
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let content = std::fs::read_to_string(path).map_err(|source| CliError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content).map_err(|source| CliError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn region(&self, flag: Option<Region>) -> Region {
        flag.or(self.region).unwrap_or_default()
    }

    pub fn seed(&self, flag: Option<u64>) -> Option<u64> {
        flag.or(self.seed)
    }
}
