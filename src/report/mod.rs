pub mod json;
pub mod md;

use crate::error::ClosyError;
use crate::scoring::{
    categorize_by_preference, chart_points, greeting, next_block_recommendations,
    score_statistics,
};
use crate::session::Session;
use crate::types::report::ProfileReport;
use chrono::Utc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Md,
}

impl OutputFormat {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "json" => Some(Self::Json),
            "md" => Some(Self::Md),
            _ => None,
        }
    }
}

/// Builds the report from the session's live scores.
pub fn build(session: &Session) -> ProfileReport {
    let scores = session.live_scores();
    ProfileReport {
        generated_at: Utc::now().to_rfc3339(),
        mode: session.live_mode(),
        greeting: greeting(&scores),
        progress: session.progress(),
        bands: categorize_by_preference(&scores),
        statistics: score_statistics(&scores),
        recommendations: next_block_recommendations(&scores),
        chart: chart_points(&scores),
        scores,
    }
}

pub fn render(report: &ProfileReport, format: OutputFormat) -> Result<String, ClosyError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(ClosyError::Json),
        OutputFormat::Md => Ok(md::to_markdown(report)),
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::session::Session;

    pub fn rated_session() -> Session {
        let mut session = Session::new();
        for (id, style, rating) in [
            (1, "Básica", 2),
            (2, "Boho", 5),
            (7, "Pija", 4),
            (9, "ST", 5),
            (8, "Sexy", 3),
        ] {
            session
                .record_rating(id, style, rating)
                .expect("fixture rating should record");
        }
        session
    }
}
