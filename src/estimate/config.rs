use serde::{Deserialize, Serialize};

use crate::factors::{GridKind, ModelEfficiency};

/// Environmental parameters for one estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EstimateConfig {
    /// Grid category supplying the electricity.
    pub grid: GridKind,
    /// Efficiency class of the AI models used.
    pub efficiency: ModelEfficiency,
}

impl EstimateConfig {
    /// Creates the default configuration (mixed grid, less-efficient models).
    pub fn new() -> Self {
        Self {
            grid: GridKind::Mixed,
            efficiency: ModelEfficiency::LessEfficient,
        }
    }

    /// Creates a configuration with explicit selections.
    pub fn with(grid: GridKind, efficiency: ModelEfficiency) -> Self {
        Self { grid, efficiency }
    }
}

impl Default for EstimateConfig {
    fn default() -> Self {
        Self::new()
    }
}
