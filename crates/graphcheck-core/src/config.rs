//! Configuration for graphcheck
//!
//! Read from `config.toml` in `$GRAPHCHECK_CONFIG_DIR`, falling back to the
//! platform config directory (`~/.config/graphcheck/` on Linux). A missing
//! default file means default settings; an explicit `--config` path must
//! exist.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{GraphError, Result};
use crate::graph::AnalyzeOptions;

pub use types::{AnalysisConfig, Config, ReportConfig, ReportMode};

const CONFIG_DIR: &str = "graphcheck";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "GRAPHCHECK_CONFIG_DIR";

impl Config {
    /// Default config file location, if one can be determined
    pub fn default_path() -> Option<PathBuf> {
        let config_dir = match std::env::var(CONFIG_DIR_ENV_VAR) {
            Ok(env_dir) => PathBuf::from(env_dir),
            Err(_) => dirs::config_dir()?.join(CONFIG_DIR),
        };
        Some(config_dir.join(CONFIG_FILE))
    }

    /// Load from an explicit path, or from the default location when present
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => {
                debug!("no config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load from a file that must exist
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| GraphError::io_operation("read config", path.display(), e))?;
        let config = Self::from_toml_str(&content)?;
        debug!(path = %path.display(), mode = %config.report.mode, "load_config");
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn analyze_options(&self) -> AnalyzeOptions {
        AnalyzeOptions {
            short_circuit: self.analysis.short_circuit,
        }
    }
}
