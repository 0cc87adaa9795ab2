use serde::{Deserialize, Serialize};

use crate::factors::TaskKind;

/// Per-task usage counts entered by the user.
///
/// Each count is in the task's own unit (queries, images, tasks, minutes).
/// Values are stored as given; reads through [`UsageInput::count`] clamp
/// negative and non-finite values to zero, since the domain does not
/// represent negative usage.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UsageInput {
    pub text_gen: f64,
    pub images: f64,
    pub coding: f64,
    pub video: f64,
    pub audio: f64,
    pub analysis: f64,
    pub deep_research: f64,
}

impl UsageInput {
    /// Creates an empty input (all counts zero).
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalized count for one task kind.
    ///
    /// Negative, NaN, and infinite values normalize to zero.
    pub fn count(&self, task: TaskKind) -> f64 {
        let raw = match task {
            TaskKind::TextGen => self.text_gen,
            TaskKind::Images => self.images,
            TaskKind::Coding => self.coding,
            TaskKind::Video => self.video,
            TaskKind::Audio => self.audio,
            TaskKind::Analysis => self.analysis,
            TaskKind::DeepResearch => self.deep_research,
        };
        if raw.is_finite() && raw > 0.0 { raw } else { 0.0 }
    }

    /// Sets the count for one task kind.
    pub fn set_count(&mut self, task: TaskKind, count: f64) {
        let slot = match task {
            TaskKind::TextGen => &mut self.text_gen,
            TaskKind::Images => &mut self.images,
            TaskKind::Coding => &mut self.coding,
            TaskKind::Video => &mut self.video,
            TaskKind::Audio => &mut self.audio,
            TaskKind::Analysis => &mut self.analysis,
            TaskKind::DeepResearch => &mut self.deep_research,
        };
        *slot = count;
    }

    /// True if every count normalizes to zero.
    pub fn is_empty(&self) -> bool {
        TaskKind::ALL.into_iter().all(|t| self.count(t) == 0.0)
    }
}
