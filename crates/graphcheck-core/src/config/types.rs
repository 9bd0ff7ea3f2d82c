//! Configuration type definitions

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::bail_invalid;
use crate::error::GraphError;

/// Which verdicts the report presents. The analysis always computes both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportMode {
    /// Bipartite and cycle verdicts
    #[default]
    Cycle,
    /// Bipartite verdict only
    Bipartite,
}

impl ReportMode {
    pub fn includes_cycle(&self) -> bool {
        matches!(self, ReportMode::Cycle)
    }
}

impl FromStr for ReportMode {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cycle" => Ok(ReportMode::Cycle),
            "bipartite" => Ok(ReportMode::Bipartite),
            other => bail_invalid!("report mode (expected: cycle, bipartite)", other),
        }
    }
}

impl fmt::Display for ReportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportMode::Cycle => write!(f, "cycle"),
            ReportMode::Bipartite => write!(f, "bipartite"),
        }
    }
}

/// `[report]` table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub mode: ReportMode,
    /// Echo the loaded adjacency before the component report
    pub show_graph: bool,
}

/// `[analysis]` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub short_circuit: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        AnalysisConfig {
            short_circuit: true,
        }
    }
}

/// Top-level configuration file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub report: ReportConfig,
    pub analysis: AnalysisConfig,
}
