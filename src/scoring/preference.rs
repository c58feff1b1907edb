use super::filter::favorites;
use crate::types::scoring::{NextBlockRecommendations, PreferenceBands, Score, StyleScore};

const LOVED_FROM: Score = 4.5;
const LIKED_FROM: Score = 3.5;
const NEUTRAL_FROM: Score = 2.5;
const CLEAR_PREFERENCE_COUNT: usize = 3;

pub fn categorize_by_preference(scores: &[StyleScore]) -> PreferenceBands {
    let mut bands = PreferenceBands::default();
    for style in scores {
        let band = if style.average_score >= LOVED_FROM {
            &mut bands.loved
        } else if style.average_score >= LIKED_FROM {
            &mut bands.liked
        } else if style.average_score >= NEUTRAL_FROM {
            &mut bands.neutral
        } else {
            &mut bands.disliked
        };
        band.push(style.clone());
    }
    bands
}

pub fn recommendation_text(bands: &PreferenceBands) -> String {
    if bands.loved.len() >= CLEAR_PREFERENCE_COUNT {
        format!(
            "¡Excelente! Tienes preferencias muy claras. Te encantan {} estilos: {}.",
            bands.loved.len(),
            join_names(&bands.loved, bands.loved.len())
        )
    } else if bands.liked.len() >= CLEAR_PREFERENCE_COUNT {
        format!(
            "Tienes buenas preferencias definidas. Te gustan especialmente: {}.",
            join_names(&bands.liked, CLEAR_PREFERENCE_COUNT)
        )
    } else if bands.neutral.len() >= CLEAR_PREFERENCE_COUNT {
        "Tu gusto es bastante equilibrado. Vamos a explorar más opciones para definir mejor tu estilo."
            .to_string()
    } else {
        "Parece que tienes un estilo muy específico. Vamos a encontrar exactamente lo que te gusta."
            .to_string()
    }
}

pub fn next_block_recommendations(scores: &[StyleScore]) -> NextBlockRecommendations {
    let bands = categorize_by_preference(scores);
    let message = recommendation_text(&bands);
    NextBlockRecommendations {
        recommended: bands
            .loved
            .iter()
            .chain(bands.liked.iter())
            .take(6)
            .cloned()
            .collect(),
        secondary: bands.neutral.iter().take(3).cloned().collect(),
        avoid: bands.disliked,
        message,
    }
}

/// Dashboard greeting naming up to two favourite styles.
pub fn greeting(scores: &[StyleScore]) -> String {
    let top = favorites(scores, 4.0, 2);
    if top.is_empty() {
        "¿Con qué puedo ayudarte hoy?".to_string()
    } else {
        format!(
            "¡Hola! He visto que te encantan los estilos {}. ¿En qué puedo ayudarte hoy?",
            top.join(" y ")
        )
    }
}

fn join_names(styles: &[StyleScore], limit: usize) -> String {
    styles
        .iter()
        .take(limit)
        .map(|style| style.style_name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
