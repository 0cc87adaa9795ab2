//! Static coefficient tables: task factors, grid profiles, and model
//! efficiency classes.
//!
//! The domain set is closed and fixed at design time, so each table is an
//! enum with `&'static` data behind it rather than an extensible map.

use serde::{Deserialize, Serialize};

/// Data-center water usage effectiveness in liters per kWh.
///
/// Applied to every task kind except text generation, whose water use is
/// measured directly per query.
pub const WATER_L_PER_KWH: f64 = 1.9;

/// Energy and water coefficients for one AI task kind.
#[derive(Debug, Clone, Copy)]
pub struct TaskFactor {
    /// Display name.
    pub name: &'static str,
    /// What one count of this task means ("queries", "images", "tasks", "minutes").
    pub unit: &'static str,
    /// Energy per unit in kWh.
    pub energy_kwh_per_unit: f64,
    /// Directly measured water per unit in mL (text generation only).
    /// All other kinds derive water from energy via [`WATER_L_PER_KWH`].
    pub water_ml_per_unit: Option<f64>,
}

const TEXT_GEN: TaskFactor = TaskFactor {
    name: "Text Generation",
    unit: "queries",
    energy_kwh_per_unit: 0.00027,
    water_ml_per_unit: Some(0.00026),
};

const IMAGES: TaskFactor = TaskFactor {
    name: "Image Generation",
    unit: "images",
    energy_kwh_per_unit: 0.0014,
    water_ml_per_unit: None,
};

const CODING: TaskFactor = TaskFactor {
    name: "Coding Tasks",
    unit: "tasks",
    energy_kwh_per_unit: 0.0003,
    water_ml_per_unit: None,
};

const VIDEO: TaskFactor = TaskFactor {
    name: "Video Generation",
    unit: "minutes",
    energy_kwh_per_unit: 12.0,
    water_ml_per_unit: None,
};

const AUDIO: TaskFactor = TaskFactor {
    name: "Audio Generation",
    unit: "minutes",
    energy_kwh_per_unit: 0.06,
    water_ml_per_unit: None,
};

const ANALYSIS: TaskFactor = TaskFactor {
    name: "Data Analysis",
    unit: "tasks",
    energy_kwh_per_unit: 0.0005,
    water_ml_per_unit: None,
};

const DEEP_RESEARCH: TaskFactor = TaskFactor {
    name: "Deep Research",
    unit: "queries",
    energy_kwh_per_unit: 0.0054,
    water_ml_per_unit: None,
};

/// The supported AI task kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TaskKind {
    TextGen,
    Images,
    Coding,
    Video,
    Audio,
    Analysis,
    DeepResearch,
}

impl TaskKind {
    /// All task kinds in display order.
    pub const ALL: [TaskKind; 7] = [
        TaskKind::TextGen,
        TaskKind::Images,
        TaskKind::Coding,
        TaskKind::Video,
        TaskKind::Audio,
        TaskKind::Analysis,
        TaskKind::DeepResearch,
    ];

    /// Stable key used in scenario documents.
    pub fn key(&self) -> &'static str {
        match self {
            TaskKind::TextGen => "textGen",
            TaskKind::Images => "images",
            TaskKind::Coding => "coding",
            TaskKind::Video => "video",
            TaskKind::Audio => "audio",
            TaskKind::Analysis => "analysis",
            TaskKind::DeepResearch => "deepResearch",
        }
    }

    /// Looks up a task kind by its document key.
    pub fn from_key(key: &str) -> Option<TaskKind> {
        TaskKind::ALL.into_iter().find(|t| t.key() == key)
    }

    /// Coefficients for this task kind.
    pub fn factor(&self) -> &'static TaskFactor {
        match self {
            TaskKind::TextGen => &TEXT_GEN,
            TaskKind::Images => &IMAGES,
            TaskKind::Coding => &CODING,
            TaskKind::Video => &VIDEO,
            TaskKind::Audio => &AUDIO,
            TaskKind::Analysis => &ANALYSIS,
            TaskKind::DeepResearch => &DEEP_RESEARCH,
        }
    }
}

/// Emissions profile of a regional electricity grid category.
#[derive(Debug, Clone, Copy)]
pub struct GridProfile {
    /// Display name.
    pub name: &'static str,
    /// Grams of CO2 emitted per kWh drawn from this grid.
    pub emissions_g_per_kwh: f64,
    /// Example regions with published factors.
    pub examples: &'static str,
    /// Dominant generation mix.
    pub description: &'static str,
}

const CLEAN: GridProfile = GridProfile {
    name: "Clean Grid",
    emissions_g_per_kwh: 15.0,
    examples: "Norway (17), Iceland (8), France (21-57)",
    description: "Predominantly hydro, nuclear, and geothermal",
};

const RENEWABLE_HEAVY: GridProfile = GridProfile {
    name: "Renewable Heavy",
    emissions_g_per_kwh: 150.0,
    examples: "Denmark (156-173), EU average (213)",
    description: "Wind and solar dominant with fossil backup",
};

const MIXED: GridProfile = GridProfile {
    name: "Mixed Grid",
    emissions_g_per_kwh: 450.0,
    examples: "Global average (473), US (400-450)",
    description: "Mix of fossil fuels, nuclear, and renewables",
};

const COAL_HEAVY: GridProfile = GridProfile {
    name: "Coal-Heavy",
    emissions_g_per_kwh: 650.0,
    examples: "Poland (618-836), China (560)",
    description: "Coal-dominant generation",
};

/// Grid categories, ordered by increasing emissions factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GridKind {
    Clean,
    RenewableHeavy,
    Mixed,
    CoalHeavy,
}

impl GridKind {
    /// All grid categories, cleanest first.
    pub const ALL: [GridKind; 4] = [
        GridKind::Clean,
        GridKind::RenewableHeavy,
        GridKind::Mixed,
        GridKind::CoalHeavy,
    ];

    /// Stable key used in scenario documents.
    pub fn key(&self) -> &'static str {
        match self {
            GridKind::Clean => "clean",
            GridKind::RenewableHeavy => "renewableHeavy",
            GridKind::Mixed => "mixed",
            GridKind::CoalHeavy => "coalHeavy",
        }
    }

    /// Looks up a grid category by its document key.
    pub fn from_key(key: &str) -> Option<GridKind> {
        GridKind::ALL.into_iter().find(|g| g.key() == key)
    }

    /// Emissions profile for this grid category.
    pub fn profile(&self) -> &'static GridProfile {
        match self {
            GridKind::Clean => &CLEAN,
            GridKind::RenewableHeavy => &RENEWABLE_HEAVY,
            GridKind::Mixed => &MIXED,
            GridKind::CoalHeavy => &COAL_HEAVY,
        }
    }
}

/// AI model efficiency class relative to the less-efficient baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ModelEfficiency {
    /// Locally hosted models; baseline energy, local power source.
    Local,
    /// Older hosted models; baseline energy.
    LessEfficient,
    /// Newer hosted models; 70% less energy than baseline.
    MoreEfficient,
}

impl ModelEfficiency {
    /// All efficiency classes.
    pub const ALL: [ModelEfficiency; 3] = [
        ModelEfficiency::Local,
        ModelEfficiency::LessEfficient,
        ModelEfficiency::MoreEfficient,
    ];

    /// Stable key used in scenario documents.
    pub fn key(&self) -> &'static str {
        match self {
            ModelEfficiency::Local => "local",
            ModelEfficiency::LessEfficient => "lessEfficient",
            ModelEfficiency::MoreEfficient => "moreEfficient",
        }
    }

    /// Looks up an efficiency class by its document key.
    pub fn from_key(key: &str) -> Option<ModelEfficiency> {
        ModelEfficiency::ALL.into_iter().find(|e| e.key() == key)
    }

    /// Dimensionless scalar applied to base energy.
    pub fn multiplier(&self) -> f64 {
        match self {
            ModelEfficiency::Local => 1.0,
            ModelEfficiency::LessEfficient => 1.0,
            ModelEfficiency::MoreEfficient => 0.3,
        }
    }
}
