use aifootprint::estimate::Horizon;
use aifootprint::{estimate, EstimateConfig, UsageInput};
use anyhow::Result;

/// Projects one day of usage over a week, a month, and a semester.
fn main() -> Result<()> {
    let mut usage = UsageInput::new();
    usage.text_gen = 50.0;
    usage.deep_research = 3.0;

    let config = EstimateConfig::new();
    let result = estimate(&usage, &config);

    println!(
        "One day: {:.4} kWh, {:.4} kg CO2, {:.2} L water",
        result.totals.energy_kwh, result.totals.co2_kg, result.totals.water_l
    );

    for horizon in Horizon::ALL {
        let p = result.projections.get(horizon);
        println!();
        println!("{}", horizon.label());
        println!("  {:.4} kg CO2", p.totals.co2_kg);
        println!("  = {:.1} km driven", p.equivalencies.km_driven);
        println!("  = {:.1} months of tree growth", p.equivalencies.tree_months);
        println!("  = {:.1} phone charges", p.equivalencies.phone_charges);
    }

    Ok(())
}
