use super::sort_by_average;
use crate::types::scoring::{Score, StyleScore};

#[derive(Debug, Clone, PartialEq)]
pub struct FilterOptions {
    pub min_score: Score,
    pub max_results: usize,
    pub exclude: Vec<String>,
    pub include_only: Vec<String>,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            min_score: 3.0,
            max_results: 5,
            exclude: Vec::new(),
            include_only: Vec::new(),
        }
    }
}

/// Best styles at or above `min_score`. An empty `include_only` means no restriction.
pub fn filter_top(scores: &[StyleScore], options: &FilterOptions) -> Vec<StyleScore> {
    let mut filtered: Vec<StyleScore> = scores
        .iter()
        .filter(|style| style.average_score >= options.min_score)
        .filter(|style| !options.exclude.contains(&style.style_name))
        .filter(|style| {
            options.include_only.is_empty() || options.include_only.contains(&style.style_name)
        })
        .cloned()
        .collect();

    sort_by_average(&mut filtered);
    filtered.truncate(options.max_results);
    filtered
}

/// Styles whose average lies in `min..=max`, best first.
pub fn styles_in_range(scores: &[StyleScore], min: Score, max: Score) -> Vec<StyleScore> {
    let mut matched: Vec<StyleScore> = scores
        .iter()
        .filter(|style| (min..=max).contains(&style.average_score))
        .cloned()
        .collect();
    sort_by_average(&mut matched);
    matched
}

/// Names of the first `limit` styles averaging at least `threshold`, in table order.
pub fn favorites(scores: &[StyleScore], threshold: Score, limit: usize) -> Vec<String> {
    scores
        .iter()
        .filter(|style| style.average_score >= threshold)
        .take(limit)
        .map(|style| style.style_name.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> Vec<StyleScore> {
        vec![
            StyleScore::new("Boho", 5.0, 1),
            StyleScore::new("Pija", 4.0, 1),
            StyleScore::new("Sexy", 7.0, 2),
            StyleScore::new("ST", 3.0, 1),
            StyleScore::new("Básica", 2.0, 1),
            StyleScore::new("Cayetana -20", 9.0, 2),
        ]
    }

    fn names(scores: &[StyleScore]) -> Vec<&str> {
        scores.iter().map(|s| s.style_name.as_str()).collect()
    }

    #[test]
    fn defaults_keep_three_and_above_sorted_and_truncated() {
        let top = filter_top(&table(), &FilterOptions::default());
        assert_eq!(names(&top), vec!["Boho", "Cayetana -20", "Pija", "Sexy", "ST"]);
    }

    #[test]
    fn max_results_truncates() {
        let options = FilterOptions {
            max_results: 2,
            ..FilterOptions::default()
        };
        assert_eq!(names(&filter_top(&table(), &options)), vec!["Boho", "Cayetana -20"]);
    }

    #[test]
    fn exclude_and_include_only_apply_together() {
        let options = FilterOptions {
            min_score: 0.0,
            exclude: vec!["Boho".to_string()],
            include_only: vec!["Boho".to_string(), "Básica".to_string(), "ST".to_string()],
            ..FilterOptions::default()
        };
        assert_eq!(names(&filter_top(&table(), &options)), vec!["ST", "Básica"]);
    }

    #[test]
    fn range_is_inclusive_on_both_ends() {
        let matched = styles_in_range(&table(), 3.0, 4.0);
        assert_eq!(names(&matched), vec!["Pija", "Sexy", "ST"]);
    }

    #[test]
    fn favorites_respects_threshold_and_limit() {
        let mut scores = table();
        sort_by_average(&mut scores);
        assert_eq!(favorites(&scores, 4.0, 2), vec!["Boho", "Cayetana -20"]);
        assert!(favorites(&scores, 5.5, 2).is_empty());
    }
}
