use crate::factors::{TaskKind, WATER_L_PER_KWH};

use super::config::EstimateConfig;
use super::equivalency::Equivalencies;
use super::input::UsageInput;
use super::projection::Projections;
use super::result::{ImpactResult, ImpactTotals, TaskImpact};

/// Estimates the footprint of the given usage under the given grid and
/// model-efficiency selection.
///
/// Total over well-formed input: counts are normalized through
/// [`UsageInput::count`] (negative and non-finite values become zero) and
/// zero-count task kinds are excluded from the breakdown. Reads nothing but
/// its arguments and the static tables; returns a fresh result each call.
pub fn estimate(usage: &UsageInput, config: &EstimateConfig) -> ImpactResult {
    let emissions_g_per_kwh = config.grid.profile().emissions_g_per_kwh;
    let multiplier = config.efficiency.multiplier();

    let mut totals = ImpactTotals::default();
    let mut task_breakdown = Vec::new();

    for task in TaskKind::ALL {
        let count = usage.count(task);
        if count <= 0.0 {
            continue;
        }

        let factor = task.factor();
        let energy_kwh = count * factor.energy_kwh_per_unit * multiplier;
        let co2_kg = energy_kwh * emissions_g_per_kwh / 1000.0;
        let water_l = match factor.water_ml_per_unit {
            // Direct measurement path (text generation).
            Some(water_per_unit) => count * water_per_unit * multiplier,
            // Derived from energy via water usage effectiveness.
            None => energy_kwh * WATER_L_PER_KWH,
        };

        totals.energy_kwh += energy_kwh;
        totals.co2_kg += co2_kg;
        totals.water_l += water_l;
        task_breakdown.push(TaskImpact {
            task,
            count,
            energy_kwh,
            co2_kg,
            water_l,
        });
    }

    let equivalencies = Equivalencies::from_totals(&totals);
    let projections = Projections::from_base(&totals, &equivalencies);

    ImpactResult {
        totals,
        task_breakdown,
        equivalencies,
        projections,
    }
}
