//! Scenario and result JSON documents.
//!
//! The scenario format mirrors the estimator's input surface: a `usage`
//! object with camelCase task keys and a `config` object with `grid` and
//! `efficiency` selections. Missing fields fall back to defaults, so `{}`
//! is a valid (empty) scenario.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::estimate::{EstimateConfig, ImpactResult, UsageInput};

/// A stored calculation request: usage counts plus environment selection.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Scenario {
    pub usage: UsageInput,
    pub config: EstimateConfig,
}

/// Reads a scenario from a JSON file.
pub fn read_scenario(path: &Path) -> Result<Scenario> {
    let file =
        File::open(path).with_context(|| format!("Failed to open file: {}", path.display()))?;
    let reader = BufReader::new(file);

    let scenario: Scenario = serde_json::from_reader(reader)
        .with_context(|| format!("Failed to deserialize scenario from: {}", path.display()))?;

    Ok(scenario)
}

/// Writes a scenario to a JSON file.
pub fn write_scenario(path: &Path, scenario: &Scenario) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("Failed to create file: {}", path.display()))?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, scenario)
        .with_context(|| format!("Failed to serialize scenario to: {}", path.display()))?;

    Ok(())
}

/// Deserializes a scenario from a JSON string.
///
/// Useful for in-memory operations or embedding.
pub fn from_scenario_string(json: &str) -> Result<Scenario> {
    serde_json::from_str(json).context("Failed to deserialize scenario from string")
}

/// Serializes a scenario to a JSON string.
pub fn to_scenario_string(scenario: &Scenario) -> Result<String> {
    serde_json::to_string_pretty(scenario).context("Failed to serialize scenario to string")
}

/// Writes an estimate result to a JSON file.
pub fn write_result(path: &Path, result: &ImpactResult) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("Failed to create file: {}", path.display()))?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, result)
        .with_context(|| format!("Failed to serialize result to: {}", path.display()))?;

    Ok(())
}

/// Serializes an estimate result to a JSON string.
pub fn to_result_string(result: &ImpactResult) -> Result<String> {
    serde_json::to_string_pretty(result).context("Failed to serialize result to string")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimate::estimate;
    use crate::factors::{GridKind, ModelEfficiency, TaskKind};
    use tempfile::tempdir;

    #[test]
    fn test_write_and_read_scenario() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("usage.json");

        let mut original = Scenario::default();
        original.usage.text_gen = 250.0;
        original.usage.video = 2.0;
        original.config.grid = GridKind::CoalHeavy;
        original.config.efficiency = ModelEfficiency::MoreEfficient;

        write_scenario(&path, &original)?;
        let loaded = read_scenario(&path)?;

        assert!((loaded.usage.text_gen - 250.0).abs() < 1e-12);
        assert!((loaded.usage.video - 2.0).abs() < 1e-12);
        assert_eq!(loaded.config, original.config);
        Ok(())
    }

    #[test]
    fn test_scenario_keys_match_input_surface() -> Result<()> {
        let json = r#"{
            "usage": { "textGen": 1000, "deepResearch": 5 },
            "config": { "grid": "mixed", "efficiency": "lessEfficient" }
        }"#;
        let scenario = from_scenario_string(json)?;

        assert!((scenario.usage.count(TaskKind::TextGen) - 1000.0).abs() < 1e-12);
        assert!((scenario.usage.count(TaskKind::DeepResearch) - 5.0).abs() < 1e-12);
        // Unlisted tasks default to zero.
        assert_eq!(scenario.usage.count(TaskKind::Video), 0.0);
        assert_eq!(scenario.config.grid, GridKind::Mixed);
        Ok(())
    }

    #[test]
    fn test_empty_document_is_default_scenario() -> Result<()> {
        let scenario = from_scenario_string("{}")?;
        assert!(scenario.usage.is_empty());
        assert_eq!(scenario.config, EstimateConfig::default());
        Ok(())
    }

    #[test]
    fn test_unknown_grid_key_is_rejected() {
        let json = r#"{ "config": { "grid": "fusion" } }"#;
        assert!(from_scenario_string(json).is_err());
    }

    #[test]
    fn test_result_export() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("result.json");

        let mut scenario = Scenario::default();
        scenario.usage.images = 10.0;
        let result = estimate(&scenario.usage, &scenario.config);

        write_result(&path, &result)?;
        let json = std::fs::read_to_string(&path)?;
        assert!(json.contains("totals"), "{json}");
        assert!(json.contains("images"), "{json}");

        let round_trip: ImpactResult = serde_json::from_str(&json)?;
        assert!((round_trip.totals.energy_kwh - result.totals.energy_kwh).abs() < 1e-12);
        Ok(())
    }
}
