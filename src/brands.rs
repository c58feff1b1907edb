//! Unified brand candidates for block 3, ranked by how specific they are to the user's top styles.

use crate::catalog;
use crate::error::InsufficientData;
use crate::scoring::compute_final_scores;
use crate::types::progress::Block;
use crate::types::response::ResponseEvent;
use crate::types::scoring::{BrandWithScore, StyleScore};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const TOP_STYLE_COUNT: usize = 3;
pub const MIN_QUALIFYING_STYLES: usize = 2;
pub const MIN_STYLE_AVERAGE: f64 = 2.0;

/// Top final-mode styles that have catalog brands and average at least 2.
pub fn top_styles_for_brands(events: &[ResponseEvent]) -> Vec<StyleScore> {
    compute_final_scores(events)
        .into_iter()
        .filter(|style| {
            catalog::has_brands(&style.style_name) && style.average_score >= MIN_STYLE_AVERAGE
        })
        .take(TOP_STYLE_COUNT)
        .collect()
}

/// 3 points for a brand unique to one style, 2 when shared by two, 1 when shared by three or more.
pub fn scarcity_score(frequency: usize) -> u8 {
    match frequency {
        0 | 1 => 3,
        2 => 2,
        _ => 1,
    }
}

pub fn unified_brands(events: &[ResponseEvent]) -> Result<Vec<BrandWithScore>, InsufficientData> {
    let top_styles = top_styles_for_brands(events);
    if top_styles.len() < MIN_QUALIFYING_STYLES {
        debug!(
            qualifying = top_styles.len(),
            "not enough styles to derive brands"
        );
        return Err(InsufficientData::new(
            format!(
                "need at least {MIN_QUALIFYING_STYLES} well-rated styles with brands, found {}",
                top_styles.len()
            ),
            Block::Two,
        ));
    }

    let mut brands: Vec<BrandWithScore> = Vec::new();
    for style in &top_styles {
        for brand in catalog::brands_for_style(&style.style_name) {
            match brands.iter_mut().find(|entry| entry.brand_name == brand) {
                Some(entry) => {
                    if !entry.styles.contains(&style.style_name) {
                        entry.styles.push(style.style_name.clone());
                        entry.frequency += 1;
                    }
                }
                None => brands.push(BrandWithScore {
                    brand_name: brand.to_string(),
                    frequency: 1,
                    score: 0,
                    styles: vec![style.style_name.clone()],
                }),
            }
        }
    }

    for brand in &mut brands {
        brand.score = scarcity_score(brand.frequency);
    }
    brands.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then_with(|| a.brand_name.cmp(&b.brand_name))
    });

    debug!(
        styles = top_styles.len(),
        brands = brands.len(),
        "derived unified brands"
    );
    Ok(brands)
}

/// Points each selected brand hands to every style it came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandPoints {
    pub brand_name: String,
    pub points: u8,
    pub styles: Vec<String>,
}

/// Looks up the selected brands in the unified set. Unknown names are skipped.
pub fn brand_points(selected: &[String], unified: &[BrandWithScore]) -> Vec<BrandPoints> {
    selected
        .iter()
        .filter_map(|name| unified.iter().find(|brand| &brand.brand_name == name))
        .map(|brand| BrandPoints {
            brand_name: brand.brand_name.clone(),
            points: brand.score,
            styles: brand.styles.clone(),
        })
        .collect()
}
