pub mod filter;
pub mod preference;
pub mod stats;

pub use filter::{favorites, filter_top, styles_in_range, FilterOptions};
pub use preference::{
    categorize_by_preference, greeting, next_block_recommendations, recommendation_text,
};
pub use stats::{chart_points, score_statistics};

use crate::types::response::ResponseEvent;
use crate::types::scoring::{Score, ScoreMode, StyleScore};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Full recompute of the ranked style table from a response log.
///
/// Sorted by average descending; equal averages keep the order in which
/// their style was first seen in `events`.
pub fn compute_scores(events: &[ResponseEvent], mode: ScoreMode) -> Vec<StyleScore> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut totals: Vec<(String, Score, usize)> = Vec::new();

    for event in events {
        let (key, weight) = match mode {
            ScoreMode::Simple => (event.style.to_string(), 1.0),
            ScoreMode::Final => (event.style.base.clone(), event.source.weight()),
        };

        let slot = *index.entry(key.clone()).or_insert_with(|| {
            totals.push((key, 0.0, 0));
            totals.len() - 1
        });
        let entry = &mut totals[slot];
        entry.1 += event.response * weight;
        entry.2 += 1;
    }

    let mut scores: Vec<StyleScore> = totals
        .into_iter()
        .map(|(style_name, total, count)| StyleScore::new(style_name, total, count))
        .collect();
    sort_by_average(&mut scores);
    scores
}

pub fn compute_final_scores(events: &[ResponseEvent]) -> Vec<StyleScore> {
    compute_scores(events, ScoreMode::Final)
}

/// Stable descending sort on `average_score`.
pub(crate) fn sort_by_average(scores: &mut [StyleScore]) {
    scores.sort_by(|a, b| {
        b.average_score
            .partial_cmp(&a.average_score)
            .unwrap_or(Ordering::Equal)
    });
}
