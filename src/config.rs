//! Configuration module for tally.
//!
//! Settings are layered:
//! - Default values
//! - Optional TOML file (`--config <FILE>`)
//! - Environment variable overrides
//!
//! # Environment Variables
//!
//! Environment variables must be prefixed with `TALLY_` and use double underscores
//! to separate nested levels:
//! - `TALLY_RECORDS__EXTENSION=csv` sets `records.extension`
//! - `TALLY_RECORDS__REQUIRE_EXTENSION=false` sets `records.require_extension`
//! - `TALLY_LOGGING__DEFAULT=debug` sets `logging.default`

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use crate::error::{TallyError, TallyResult};

const ENV_PREFIX: &str = "TALLY_";

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Settings {
    /// Record file settings
    #[serde(default)]
    pub records: RecordsConfig,

    /// Diagnostic logging
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct RecordsConfig {
    /// Extension record files must carry (without the dot)
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Reject files whose extension does not match `extension`
    #[serde(default = "default_true")]
    pub require_extension: bool,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    /// Default level for every target (`error`, `warn`, `info`, `debug`, `trace`)
    #[serde(default = "default_log_level")]
    pub default: String,

    /// Per-target overrides, e.g. `tally = "debug"`
    #[serde(default)]
    pub modules: HashMap<String, String>,
}

fn default_extension() -> String {
    "txt".to_string()
}
fn default_true() -> bool {
    true
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for RecordsConfig {
    fn default() -> Self {
        Self {
            extension: default_extension(),
            require_extension: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            default: default_log_level(),
            modules: HashMap::new(),
        }
    }
}

impl Settings {
    /// Load settings from defaults and environment, plus `path` when given.
    pub fn load(path: Option<&Path>) -> TallyResult<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Settings::default()));
        if let Some(path) = path {
            figment = figment.merge(Toml::file_exact(path));
        }
        figment
            .merge(Self::env_provider())
            .extract()
            .map_err(|e| TallyError::from(Box::new(e)))
    }

    // Double underscore becomes a dot, single underscores stay inside field names.
    fn env_provider() -> Env {
        Env::prefixed(ENV_PREFIX).map(|key| key.as_str().to_lowercase().replace("__", ".").into())
    }
}
