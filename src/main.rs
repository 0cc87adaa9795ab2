use std::path::Path;

use aifootprint::io::{read_scenario, Scenario};
use aifootprint::{estimate, render_report, ReportOptions, UsageInput};
use anyhow::Result;

fn main() -> Result<()> {
    // Optional argument: path to a scenario JSON document.
    let scenario = match std::env::args().nth(1) {
        Some(path) => read_scenario(Path::new(&path))?,
        None => {
            // A day of typical student usage.
            let mut usage = UsageInput::new();
            usage.text_gen = 40.0;
            usage.coding = 10.0;
            usage.images = 3.0;
            usage.deep_research = 2.0;
            Scenario {
                usage,
                ..Scenario::default()
            }
        }
    };

    let result = estimate(&scenario.usage, &scenario.config);
    println!("{}", render_report(&result, &ReportOptions::default()));
    Ok(())
}
