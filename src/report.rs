//! Plain-text rendering of an estimate.
//!
//! Number formatting follows the display precision of the companion UI:
//! totals at 4 decimals (water 2), equivalencies at 1, per-task rows at 5
//! (water 2), projected CO2 at 4.

use crate::estimate::{Horizon, ImpactResult, TaskImpact};

/// Unit used for the driving-distance equivalence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistanceUnit {
    Kilometers,
    Miles,
}

/// Quantity used for the per-task comparison section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImpactUnit {
    Energy,
    Carbon,
}

/// Rendering options for [`render_report`].
#[derive(Debug, Clone, Copy)]
pub struct ReportOptions {
    pub distance_unit: DistanceUnit,
    pub impact_unit: ImpactUnit,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            distance_unit: DistanceUnit::Kilometers,
            impact_unit: ImpactUnit::Carbon,
        }
    }
}

/// Renders a plain-text report of an estimate.
pub fn render_report(result: &ImpactResult, options: &ReportOptions) -> String {
    let mut out = String::new();

    out.push_str("Daily impact\n");
    out.push_str(&format!(
        "  Energy: {:.4} kWh\n",
        result.totals.energy_kwh
    ));
    out.push_str(&format!("  CO2:    {:.4} kg\n", result.totals.co2_kg));
    out.push_str(&format!("  Water:  {:.2} L\n", result.totals.water_l));

    out.push_str("\nEquivalent to\n");
    out.push_str(&format!(
        "  {:.1} {} driven\n",
        distance(result, options),
        distance_label(options)
    ));
    out.push_str(&format!(
        "  {:.1} months of tree growth\n",
        result.equivalencies.tree_months
    ));
    out.push_str(&format!(
        "  {:.1} phone charges\n",
        result.equivalencies.phone_charges
    ));
    out.push_str(&format!("  {:.1} showers\n", result.equivalencies.showers));
    out.push_str(&format!(
        "  {:.1} lightbulb-hours\n",
        result.equivalencies.lightbulb_hours
    ));

    if !result.task_breakdown.is_empty() {
        out.push_str("\nBreakdown by task\n");
        for task in &result.task_breakdown {
            out.push_str(&task_line(task));
        }

        out.push_str(&format!(
            "\nComparison ({})\n",
            impact_label(options.impact_unit)
        ));
        for task in &result.task_breakdown {
            let value = match options.impact_unit {
                ImpactUnit::Energy => task.energy_kwh,
                ImpactUnit::Carbon => task.co2_kg,
            };
            out.push_str(&format!("  {:<16} {:.5}\n", task.task.factor().name, value));
        }
    }

    out.push_str("\nProjections (same usage every day)\n");
    for horizon in Horizon::ALL {
        let p = result.projections.get(horizon);
        out.push_str(&format!("  {}\n", horizon.label()));
        out.push_str(&format!("    {:.4} kg CO2\n", p.totals.co2_kg));
        let dist = match options.distance_unit {
            DistanceUnit::Kilometers => p.equivalencies.km_driven,
            DistanceUnit::Miles => p.equivalencies.miles_driven,
        };
        out.push_str(&format!(
            "    = {:.1} {} driven\n",
            dist,
            distance_label(options)
        ));
        out.push_str(&format!(
            "    = {:.1} months of tree growth\n",
            p.equivalencies.tree_months
        ));
        out.push_str(&format!(
            "    = {:.1} phone charges\n",
            p.equivalencies.phone_charges
        ));
        out.push_str(&format!("    = {:.1} showers\n", p.equivalencies.showers));
        out.push_str(&format!(
            "    = {:.1} lightbulb-hours\n",
            p.equivalencies.lightbulb_hours
        ));
    }

    out
}

fn task_line(task: &TaskImpact) -> String {
    let factor = task.task.factor();
    format!(
        "  {} ({} {}): {:.5} kWh, {:.5} kg CO2, {:.2} L\n",
        factor.name, task.count, factor.unit, task.energy_kwh, task.co2_kg, task.water_l
    )
}

fn distance(result: &ImpactResult, options: &ReportOptions) -> f64 {
    match options.distance_unit {
        DistanceUnit::Kilometers => result.equivalencies.km_driven,
        DistanceUnit::Miles => result.equivalencies.miles_driven,
    }
}

fn distance_label(options: &ReportOptions) -> &'static str {
    match options.distance_unit {
        DistanceUnit::Kilometers => "km",
        DistanceUnit::Miles => "miles",
    }
}

fn impact_label(unit: ImpactUnit) -> &'static str {
    match unit {
        ImpactUnit::Energy => "kWh",
        ImpactUnit::Carbon => "kg CO2",
    }
}

/// Renders the available grid and efficiency selections, for interactive
/// front-ends and demo output.
pub fn render_selection_help() -> String {
    use crate::factors::{GridKind, ModelEfficiency};

    let mut out = String::new();
    out.push_str("Grid types:\n");
    for grid in GridKind::ALL {
        let profile = grid.profile();
        out.push_str(&format!(
            "  {:<15} {:>5} g CO2/kWh  {} ({})\n",
            grid.key(),
            profile.emissions_g_per_kwh,
            profile.description,
            profile.examples
        ));
    }
    out.push_str("Model efficiency:\n");
    for eff in ModelEfficiency::ALL {
        out.push_str(&format!(
            "  {:<15} x{}\n",
            eff.key(),
            eff.multiplier()
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimate::{estimate, EstimateConfig, UsageInput};
    use crate::factors::{GridKind, ModelEfficiency};

    fn reference_result() -> ImpactResult {
        let mut usage = UsageInput::new();
        usage.text_gen = 1000.0;
        estimate(
            &usage,
            &EstimateConfig::with(GridKind::Mixed, ModelEfficiency::LessEfficient),
        )
    }

    #[test]
    fn test_report_precision() {
        let report = render_report(&reference_result(), &ReportOptions::default());
        assert!(report.contains("0.2700 kWh"), "{report}");
        assert!(report.contains("0.1215 kg"), "{report}");
        assert!(report.contains("0.26 L"), "{report}");
        // 0.1215 / 0.25 = 0.486 -> 0.5 km.
        assert!(report.contains("0.5 km driven"), "{report}");
    }

    #[test]
    fn test_distance_unit_toggle() {
        let options = ReportOptions {
            distance_unit: DistanceUnit::Miles,
            ..ReportOptions::default()
        };
        let report = render_report(&reference_result(), &options);
        assert!(report.contains("miles driven"), "{report}");
        assert!(!report.contains("km driven"), "{report}");
    }

    #[test]
    fn test_impact_unit_toggle() {
        let options = ReportOptions {
            impact_unit: ImpactUnit::Energy,
            ..ReportOptions::default()
        };
        let report = render_report(&reference_result(), &options);
        assert!(report.contains("Comparison (kWh)"), "{report}");
    }

    #[test]
    fn test_empty_usage_omits_breakdown() {
        let result = estimate(&UsageInput::new(), &EstimateConfig::new());
        let report = render_report(&result, &ReportOptions::default());
        assert!(!report.contains("Breakdown"), "{report}");
        assert!(report.contains("Projections"), "{report}");
    }

    #[test]
    fn test_selection_help_lists_all_options() {
        let help = render_selection_help();
        for grid in GridKind::ALL {
            assert!(help.contains(grid.key()), "{help}");
        }
        for eff in ModelEfficiency::ALL {
            assert!(help.contains(eff.key()), "{help}");
        }
    }
}
