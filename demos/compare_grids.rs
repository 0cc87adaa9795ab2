use aifootprint::{estimate, EstimateConfig, GridKind, ModelEfficiency, UsageInput};
use anyhow::Result;

/// Same daily usage under every grid and efficiency combination.
fn main() -> Result<()> {
    let mut usage = UsageInput::new();
    usage.text_gen = 100.0;
    usage.images = 10.0;
    usage.video = 1.0;

    println!("Daily usage: 100 text queries, 10 images, 1 minute of video");
    println!();

    for efficiency in ModelEfficiency::ALL {
        println!("Model efficiency: {} (x{})", efficiency.key(), efficiency.multiplier());
        for grid in GridKind::ALL {
            let config = EstimateConfig::with(grid, efficiency);
            let result = estimate(&usage, &config);
            println!(
                "  {:<15} {:>8.4} kWh  {:>8.4} kg CO2  {:>7.2} L",
                grid.profile().name,
                result.totals.energy_kwh,
                result.totals.co2_kg,
                result.totals.water_l
            );
        }
        println!();
    }

    Ok(())
}
