use serde::Serialize;

pub type Score = f64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreMode {
    /// Raw responses, grouped by the full style key.
    #[default]
    Simple,
    /// Occasion suffix stripped, later blocks weighted.
    Final,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyleScore {
    pub style_name: String,
    pub total_score: Score,
    pub response_count: usize,
    pub average_score: Score,
}

impl StyleScore {
    pub fn new(style_name: impl Into<String>, total_score: Score, response_count: usize) -> Self {
        Self {
            style_name: style_name.into(),
            total_score,
            response_count,
            average_score: round_to(total_score / response_count as Score, 2),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PreferenceBands {
    pub loved: Vec<StyleScore>,
    pub liked: Vec<StyleScore>,
    pub neutral: Vec<StyleScore>,
    pub disliked: Vec<StyleScore>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScoreStatistics {
    pub total_styles: usize,
    pub average_score: Score,
    pub highest_score: Score,
    pub lowest_score: Score,
    pub total_responses: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NextBlockRecommendations {
    pub recommended: Vec<StyleScore>,
    pub secondary: Vec<StyleScore>,
    pub avoid: Vec<StyleScore>,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub name: String,
    pub score: Score,
    pub total: Score,
    pub responses: usize,
    pub percentage: Score,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BrandWithScore {
    pub brand_name: String,
    pub frequency: usize,
    pub score: u8,
    pub styles: Vec<String>,
}

pub fn round_to(value: Score, decimals: i32) -> Score {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
