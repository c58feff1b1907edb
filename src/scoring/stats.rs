use crate::types::scoring::{round_to, ChartPoint, Score, ScoreStatistics, StyleScore};

const RATING_SCALE_MAX: Score = 5.0;

pub fn score_statistics(scores: &[StyleScore]) -> ScoreStatistics {
    if scores.is_empty() {
        return ScoreStatistics::default();
    }

    let averages = scores.iter().map(|style| style.average_score);
    let sum: Score = averages.clone().sum();

    ScoreStatistics {
        total_styles: scores.len(),
        average_score: round_to(sum / scores.len() as Score, 2),
        highest_score: averages.clone().fold(Score::MIN, Score::max),
        lowest_score: averages.fold(Score::MAX, Score::min),
        total_responses: scores.iter().map(|style| style.response_count).sum(),
    }
}

/// Rows for dashboard charts; `percentage` is the average on a 0..100 scale.
pub fn chart_points(scores: &[StyleScore]) -> Vec<ChartPoint> {
    scores
        .iter()
        .map(|style| ChartPoint {
            name: style.style_name.clone(),
            score: style.average_score,
            total: style.total_score,
            responses: style.response_count,
            percentage: round_to(style.average_score / RATING_SCALE_MAX * 100.0, 1),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_table_is_all_zero() {
        assert_eq!(score_statistics(&[]), ScoreStatistics::default());
        assert_eq!(score_statistics(&[]).highest_score, 0.0);
    }

    #[test]
    fn statistics_summarise_table() {
        let scores = vec![
            StyleScore::new("Boho", 9.0, 2),
            StyleScore::new("Pija", 4.0, 1),
            StyleScore::new("ST", 2.0, 1),
        ];
        let stats = score_statistics(&scores);
        assert_eq!(stats.total_styles, 3);
        assert_eq!(stats.average_score, 3.5);
        assert_eq!(stats.highest_score, 4.5);
        assert_eq!(stats.lowest_score, 2.0);
        assert_eq!(stats.total_responses, 4);
    }

    #[test]
    fn chart_percentage_uses_five_point_scale() {
        let points = chart_points(&[StyleScore::new("Boho", 13.0, 3)]);
        assert_eq!(points[0].score, 4.33);
        assert_eq!(points[0].percentage, 86.6);
        assert_eq!(points[0].responses, 3);
    }
}
