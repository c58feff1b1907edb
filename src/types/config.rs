use crate::error::ClosyError;
use crate::scoring::FilterOptions;
use serde::Deserialize;

const ALLOWED_LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];
const ALLOWED_REPORT_FORMATS: [&str; 2] = ["md", "json"];
const MAX_RATING: f64 = 5.0;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClosyConfig {
    pub scoring: Option<ScoringConfig>,
    pub outfits: Option<OutfitConfig>,
    pub logging: Option<LoggingConfig>,
    pub report: Option<ReportConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScoringConfig {
    pub min_score: Option<f64>,
    pub max_results: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutfitConfig {
    pub min_score: Option<f64>,
    pub candidates: Option<usize>,
    pub min_candidates: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    pub format: Option<String>,
}

/// Block-2 candidate selection limits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutfitThresholds {
    pub min_score: f64,
    pub candidates: usize,
    pub min_candidates: usize,
}

impl Default for OutfitThresholds {
    fn default() -> Self {
        Self {
            min_score: 2.5,
            candidates: 4,
            min_candidates: 3,
        }
    }
}

impl ClosyConfig {
    pub fn filter_options(&self) -> FilterOptions {
        let defaults = FilterOptions::default();
        match &self.scoring {
            Some(scoring) => FilterOptions {
                min_score: scoring.min_score.unwrap_or(defaults.min_score),
                max_results: scoring.max_results.unwrap_or(defaults.max_results),
                ..defaults
            },
            None => defaults,
        }
    }

    pub fn outfit_thresholds(&self) -> OutfitThresholds {
        let defaults = OutfitThresholds::default();
        match &self.outfits {
            Some(outfits) => OutfitThresholds {
                min_score: outfits.min_score.unwrap_or(defaults.min_score),
                candidates: outfits.candidates.unwrap_or(defaults.candidates),
                min_candidates: outfits.min_candidates.unwrap_or(defaults.min_candidates),
            },
            None => defaults,
        }
    }

    pub fn log_level(&self) -> &str {
        self.logging
            .as_ref()
            .and_then(|logging| logging.level.as_deref())
            .unwrap_or("warn")
    }

    pub fn report_format(&self) -> Option<&str> {
        self.report
            .as_ref()
            .and_then(|report| report.format.as_deref())
    }

    pub fn validate(&self) -> Result<(), ClosyError> {
        if let Some(scoring) = &self.scoring {
            if let Some(min_score) = scoring.min_score {
                if !(0.0..=MAX_RATING).contains(&min_score) {
                    return Err(ClosyError::ConfigParse(
                        "scoring.min_score must be between 0.0 and 5.0".to_string(),
                    ));
                }
            }
            if scoring.max_results == Some(0) {
                return Err(ClosyError::ConfigParse(
                    "scoring.max_results must be greater than 0".to_string(),
                ));
            }
        }

        if let Some(outfits) = &self.outfits {
            if let Some(min_score) = outfits.min_score {
                if !(0.0..=MAX_RATING).contains(&min_score) {
                    return Err(ClosyError::ConfigParse(
                        "outfits.min_score must be between 0.0 and 5.0".to_string(),
                    ));
                }
            }
            let thresholds = self.outfit_thresholds();
            if thresholds.candidates == 0 {
                return Err(ClosyError::ConfigParse(
                    "outfits.candidates must be greater than 0".to_string(),
                ));
            }
            if thresholds.min_candidates > thresholds.candidates {
                return Err(ClosyError::ConfigParse(format!(
                    "outfits.min_candidates ({}) cannot exceed outfits.candidates ({})",
                    thresholds.min_candidates, thresholds.candidates
                )));
            }
        }

        let level = self.log_level();
        if !ALLOWED_LOG_LEVELS.contains(&level.to_ascii_lowercase().as_str()) {
            return Err(ClosyError::ConfigParse(format!(
                "unsupported logging.level: {level}"
            )));
        }

        if let Some(format) = self.report_format() {
            if !ALLOWED_REPORT_FORMATS.contains(&format) {
                return Err(ClosyError::ConfigParse(format!(
                    "unsupported report.format: {format}"
                )));
            }
        }

        Ok(())
    }
}
