pub mod estimate;
pub mod factors;
pub mod io;
pub mod report;

// Prelude
pub use estimate::{estimate, EstimateConfig, ImpactResult, UsageInput};
pub use factors::{GridKind, ModelEfficiency, TaskKind};
pub use report::{render_report, ReportOptions};
