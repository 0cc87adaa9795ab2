//! Impact estimation: a pure transform from usage counts and environment
//! selection to energy, carbon, and water totals with derived
//! equivalencies and projections.

pub mod config;
pub mod equivalency;
pub mod estimator;
pub mod input;
pub mod projection;
pub mod result;

pub use config::EstimateConfig;
pub use equivalency::Equivalencies;
pub use estimator::estimate;
pub use input::UsageInput;
pub use projection::{Horizon, ProjectedImpact, Projections};
pub use result::{ImpactResult, ImpactTotals, TaskImpact};
