use serde::{Deserialize, Serialize};

use crate::factors::TaskKind;

use super::equivalency::Equivalencies;
use super::projection::Projections;

/// Aggregate footprint across all task kinds.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactTotals {
    /// Electricity use in kWh.
    pub energy_kwh: f64,
    /// Emissions in kg CO2.
    pub co2_kg: f64,
    /// Water use in liters.
    pub water_l: f64,
}

impl ImpactTotals {
    /// All fields multiplied by `factor`.
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            energy_kwh: self.energy_kwh * factor,
            co2_kg: self.co2_kg * factor,
            water_l: self.water_l * factor,
        }
    }
}

/// Footprint contribution of a single task kind.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskImpact {
    pub task: TaskKind,
    /// Normalized count, in the task's own unit.
    pub count: f64,
    /// Energy in kWh, efficiency multiplier applied.
    pub energy_kwh: f64,
    /// Emissions in kg CO2.
    pub co2_kg: f64,
    /// Water use in liters.
    pub water_l: f64,
}

/// Full result of one impact estimate.
///
/// Recomputed from scratch on every [`estimate`](super::estimate) call and
/// never cached; nothing in it outlives the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactResult {
    /// Aggregate energy, CO2, and water.
    pub totals: ImpactTotals,
    /// Per-task contributions in table order, zero-count kinds excluded.
    pub task_breakdown: Vec<TaskImpact>,
    /// Everyday-activity equivalents of the totals.
    pub equivalencies: Equivalencies,
    /// Totals and equivalencies projected over fixed horizons.
    pub projections: Projections,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_totals_scaling() {
        let totals = ImpactTotals {
            energy_kwh: 1.0,
            co2_kg: 2.0,
            water_l: 3.0,
        };
        let weekly = totals.scaled(7.0);
        assert!((weekly.energy_kwh - 7.0).abs() < 1e-10);
        assert!((weekly.co2_kg - 14.0).abs() < 1e-10);
        assert!((weekly.water_l - 21.0).abs() < 1e-10);
    }
}
