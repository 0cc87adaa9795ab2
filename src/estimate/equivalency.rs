use serde::{Deserialize, Serialize};

use super::result::ImpactTotals;

/// kg CO2 emitted per km driven by an average passenger car.
pub const CO2_KG_PER_KM: f64 = 0.25;

/// Miles per kilometer.
pub const MILES_PER_KM: f64 = 0.6214;

/// kg CO2 sequestered by one average tree over one month.
pub const CO2_KG_PER_TREE_MONTH: f64 = 1.75;

/// kWh for one full smartphone charge.
pub const KWH_PER_PHONE_CHARGE: f64 = 0.015;

/// mL of water for one average shower.
pub const WATER_ML_PER_SHOWER: f64 = 65_000.0;

/// kWh for one hour of a reference bulb.
pub const KWH_PER_LIGHTBULB_HOUR: f64 = 0.06;

/// Everyday-activity equivalents of an aggregate footprint.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Equivalencies {
    /// Car travel with the same emissions, in km.
    pub km_driven: f64,
    /// Car travel with the same emissions, in miles.
    pub miles_driven: f64,
    /// Months of sequestration by one tree to offset the emissions.
    pub tree_months: f64,
    /// Full smartphone charges with the same energy.
    pub phone_charges: f64,
    /// Average showers with the same water use.
    pub showers: f64,
    /// Hours of a reference bulb with the same energy.
    pub lightbulb_hours: f64,
}

impl Equivalencies {
    /// Derives the equivalencies from aggregate totals.
    pub fn from_totals(totals: &ImpactTotals) -> Self {
        let km_driven = totals.co2_kg / CO2_KG_PER_KM;
        Self {
            km_driven,
            miles_driven: km_driven * MILES_PER_KM,
            tree_months: totals.co2_kg / CO2_KG_PER_TREE_MONTH,
            phone_charges: totals.energy_kwh / KWH_PER_PHONE_CHARGE,
            showers: totals.water_l * 1000.0 / WATER_ML_PER_SHOWER,
            lightbulb_hours: totals.energy_kwh / KWH_PER_LIGHTBULB_HOUR,
        }
    }

    /// All fields multiplied by `factor`.
    ///
    /// Projection horizons override `tree_months` separately; see
    /// [`Projections`](super::Projections).
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            km_driven: self.km_driven * factor,
            miles_driven: self.miles_driven * factor,
            tree_months: self.tree_months * factor,
            phone_charges: self.phone_charges * factor,
            showers: self.showers * factor,
            lightbulb_hours: self.lightbulb_hours * factor,
        }
    }
}
