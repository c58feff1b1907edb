use crate::types::progress::BlockProgress;
use crate::types::scoring::{
    ChartPoint, NextBlockRecommendations, PreferenceBands, ScoreMode, ScoreStatistics, StyleScore,
};
use serde::Serialize;

/// Snapshot of everything the dashboard shows for one session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileReport {
    pub generated_at: String,
    pub mode: ScoreMode,
    pub greeting: String,
    pub progress: BlockProgress,
    pub scores: Vec<StyleScore>,
    pub bands: PreferenceBands,
    pub statistics: ScoreStatistics,
    pub recommendations: NextBlockRecommendations,
    pub chart: Vec<ChartPoint>,
}
