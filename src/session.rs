//! Owned questionnaire state: the response log plus the flow records kept alongside it.
//!
//! Every score, ranking and progress flag is recomputed from the log on read.

use crate::brands::{self, BrandPoints};
use crate::catalog::{self, SelectionType, SubcategoryOption};
use crate::error::{ClosyError, InsufficientData, Result, SelectionError};
use crate::log::ResponseLog;
use crate::progress::{block_progress, ALL_BLOCKS_MARKER};
use crate::scoring::{compute_scores, filter_top, FilterOptions};
use crate::selection::{self, SelectionLimits};
use crate::types::config::OutfitThresholds;
use crate::types::progress::{Block, BlockProgress, FlowFlags};
use crate::types::response::{
    LegacyResponse, LookElement, Occasion, ResponseEvent, ResponseSource, StyleKey,
    OCCASION_ID_STRIDE,
};
use crate::types::scoring::{BrandWithScore, ScoreMode, StyleScore};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

pub const DEFAULT_OPTION_COUNT: usize = 3;
const SESSION_FORMAT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandSubmission {
    pub selected_brands: Vec<String>,
    pub top_styles: Vec<String>,
    pub points: Vec<BrandPoints>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubcategorySubmission {
    pub element: LookElement,
    pub selections: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    log: ResponseLog,
    #[serde(default)]
    flags: FlowFlags,
    #[serde(default)]
    look_priorities: Option<Vec<LookElement>>,
    #[serde(default)]
    brand_submission: Option<BrandSubmission>,
    #[serde(default)]
    subcategory_submissions: Vec<SubcategorySubmission>,
}

#[derive(Debug, Serialize, Deserialize)]
struct SessionFile {
    version: u32,
    saved_at: String,
    session: Session,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log(&self) -> &ResponseLog {
        &self.log
    }

    pub fn flags(&self) -> &FlowFlags {
        &self.flags
    }

    pub fn look_priorities(&self) -> Option<&[LookElement]> {
        self.look_priorities.as_deref()
    }

    pub fn brand_submission(&self) -> Option<&BrandSubmission> {
        self.brand_submission.as_ref()
    }

    pub fn subcategory_submissions(&self) -> &[SubcategorySubmission] {
        &self.subcategory_submissions
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ClosyError::SessionNotFound(path.display().to_string()));
        }
        let content = fs::read_to_string(path)?;
        let file: SessionFile = serde_json::from_str(&content)?;
        debug!(
            path = %path.display(),
            responses = file.session.log.len(),
            "loaded session"
        );
        Ok(file.session)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let file = SessionFile {
            version: SESSION_FORMAT_VERSION,
            saved_at: Utc::now().to_rfc3339(),
            session: self.clone(),
        };
        if let Some(parent) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(&file)?)?;
        debug!(path = %path.display(), responses = self.log.len(), "saved session");
        Ok(())
    }

    /// Writes an empty session, refusing to clobber an existing file unless `force`.
    pub fn create(path: &Path, force: bool) -> Result<Self> {
        if path.exists() && !force {
            return Err(ClosyError::SessionExists(path.display().to_string()));
        }
        let session = Self::new();
        session.save(path)?;
        info!(path = %path.display(), "created session");
        Ok(session)
    }

    pub fn append_or_update(&mut self, event: ResponseEvent) {
        self.log.append_or_update(event);
    }

    /// Block-1 rating on the 1..=5 scale.
    pub fn record_rating(&mut self, question_id: u64, style: &str, rating: u8) -> Result<()> {
        if !(1..=5).contains(&rating) {
            return Err(ClosyError::InvalidResponse(format!(
                "rating must be between 1 and 5 (got {rating})"
            )));
        }
        if question_id == 0 || question_id >= OCCASION_ID_STRIDE {
            return Err(ClosyError::InvalidResponse(format!(
                "block-1 question ids run from 1 to {} (got {question_id})",
                OCCASION_ID_STRIDE - 1
            )));
        }
        self.log
            .append_or_update(ResponseEvent::rating(question_id, style, f64::from(rating)));
        Ok(())
    }

    /// Simple mode until anything past block 1 has been answered.
    pub fn live_mode(&self) -> ScoreMode {
        if self.log.any(|event| event.source.is_block2_or_later()) {
            ScoreMode::Final
        } else {
            ScoreMode::Simple
        }
    }

    pub fn live_scores(&self) -> Vec<StyleScore> {
        compute_scores(self.log.events(), self.live_mode())
    }

    pub fn scores(&self, mode: ScoreMode) -> Vec<StyleScore> {
        compute_scores(self.log.events(), mode)
    }

    pub fn progress(&self) -> BlockProgress {
        block_progress(&self.log, &self.flags)
    }

    /// Simple-mode scores over the block-1 ratings only.
    pub fn rating_scores(&self) -> Vec<StyleScore> {
        let ratings: Vec<ResponseEvent> = self
            .log
            .events()
            .iter()
            .filter(|event| event.source == ResponseSource::BaseRating)
            .cloned()
            .collect();
        compute_scores(&ratings, ScoreMode::Simple)
    }

    /// Styles offered for every block-2 occasion question.
    ///
    /// Ranked on block-1 ratings alone, so every occasion sees the same list.
    /// Tops up to `thresholds.candidates` with the best remaining styles once
    /// at least `thresholds.min_candidates` clear the score bar.
    pub fn outfit_candidates(
        &self,
        thresholds: &OutfitThresholds,
    ) -> std::result::Result<Vec<StyleScore>, InsufficientData> {
        let scores = self.rating_scores();
        let mut candidates = filter_top(
            &scores,
            &FilterOptions {
                min_score: thresholds.min_score,
                max_results: thresholds.candidates,
                ..FilterOptions::default()
            },
        );

        if candidates.len() < thresholds.min_candidates {
            return Err(InsufficientData::new(
                format!(
                    "need at least {} styles rated {} or higher, found {}",
                    thresholds.min_candidates,
                    thresholds.min_score,
                    candidates.len()
                ),
                Block::One,
            ));
        }

        let missing = thresholds.candidates.saturating_sub(candidates.len());
        let fillers: Vec<StyleScore> = scores
            .iter()
            .filter(|style| {
                !candidates
                    .iter()
                    .any(|picked| picked.style_name == style.style_name)
            })
            .take(missing)
            .cloned()
            .collect();
        candidates.extend(fillers);
        Ok(candidates)
    }

    /// Records the outfits picked for one occasion, in preference order.
    pub fn submit_outfit_picks(
        &mut self,
        occasion: Occasion,
        candidates: &[String],
        picks: &[usize],
    ) -> Result<()> {
        let out_of_range: Vec<String> = picks
            .iter()
            .filter(|index| **index >= candidates.len())
            .map(ToString::to_string)
            .collect();
        if !out_of_range.is_empty() {
            return Err(SelectionError::InvalidItem(out_of_range).into());
        }
        if let Some(repeat) = first_repeat(picks) {
            return Err(SelectionError::InvalidItem(vec![candidates[repeat].clone()]).into());
        }

        let names: Vec<&str> = picks.iter().map(|index| candidates[*index].as_str()).collect();
        selection::validate_selection(&names, candidates, selection::OUTFIT_PICKS)?;

        for (position, index) in picks.iter().enumerate() {
            self.log.append_or_update(ResponseEvent::occasion_pick(
                occasion,
                *index,
                position,
                candidates[*index].as_str(),
            ));
        }
        info!(occasion = %occasion, picks = picks.len(), "recorded outfit picks");
        Ok(())
    }

    /// Unified brand candidates, once blocks 1 and 2 have answers.
    pub fn unified_brands(&self) -> std::result::Result<Vec<BrandWithScore>, InsufficientData> {
        if self.log.is_empty() {
            return Err(InsufficientData::new("no style ratings yet", Block::One));
        }
        if !self.log.any(|event| event.source.is_block2_or_later()) {
            return Err(InsufficientData::new("no outfit picks yet", Block::Two));
        }
        brands::unified_brands(self.log.events())
    }

    /// Validates the picks against the unified set and feeds each brand's score back to its styles.
    pub fn submit_brand_selection(&mut self, selected: &[String]) -> Result<Vec<BrandPoints>> {
        if self.brand_submission.is_some() {
            return Err(ClosyError::InvalidResponse(
                "brands were already selected for this session".to_string(),
            ));
        }

        let unified = self.unified_brands()?;
        let available: Vec<&str> = unified
            .iter()
            .map(|brand| brand.brand_name.as_str())
            .collect();
        selection::validate_selection(selected, &available, selection::UNIFIED_BRAND_PICKS)?;

        let top_styles = brands::top_styles_for_brands(self.log.events())
            .into_iter()
            .map(|style| style.style_name)
            .collect();
        let points = brands::brand_points(selected, &unified);
        for brand in &points {
            for style in &brand.styles {
                let question_id = self.log.inject(
                    ResponseSource::BrandInjection,
                    style.as_str(),
                    f64::from(brand.points),
                )?;
                debug!(question_id, brand = %brand.brand_name, style = %style, "injected brand points");
            }
        }

        info!(brands = selected.len(), "recorded brand selection");
        self.brand_submission = Some(BrandSubmission {
            selected_brands: selected.to_vec(),
            top_styles,
            points: points.clone(),
        });
        Ok(points)
    }

    pub fn submit_look_priorities(&mut self, order: &[LookElement]) -> Result<()> {
        selection::validate_look_priorities(order)?;
        self.look_priorities = Some(order.to_vec());
        Ok(())
    }

    /// The highest-priority look element without a submission yet.
    pub fn next_subcategory(&self) -> Option<LookElement> {
        self.look_priorities.as_ref().and_then(|order| {
            order
                .iter()
                .copied()
                .find(|element| !self.is_answered(*element))
        })
    }

    /// Options offered for a look element.
    ///
    /// Multi-choice elements are ranked by the mean live average of the styles
    /// each option maps to; options whose styles were never scored rank as 0.
    pub fn subcategory_options(&self, element: LookElement, max: usize) -> Vec<SubcategoryOption> {
        let options = catalog::subcategory_options(element);
        if matches!(catalog::selection_type(element), SelectionType::Single) {
            return options.to_vec();
        }

        let scores = self.live_scores();
        let mut ranked: Vec<(SubcategoryOption, f64)> = options
            .iter()
            .map(|option| {
                let matched: Vec<f64> = option
                    .style_mapping
                    .iter()
                    .filter_map(|style| {
                        scores
                            .iter()
                            .find(|score| score.style_name == *style)
                            .map(|score| score.average_score)
                    })
                    .collect();
                let mean = if matched.is_empty() {
                    0.0
                } else {
                    matched.iter().sum::<f64>() / matched.len() as f64
                };
                (*option, mean)
            })
            .collect();

        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
        ranked
            .into_iter()
            .take(max)
            .map(|(option, _)| option)
            .collect()
    }

    /// Records a subcategory answer and injects its style points.
    ///
    /// Returns how many responses were injected. Answering the last ranked
    /// element completes onboarding.
    pub fn submit_subcategory(&mut self, element: LookElement, selections: &[String]) -> Result<usize> {
        if self.look_priorities.is_none() {
            return Err(ClosyError::InvalidResponse(
                "rank the look elements before answering subcategories".to_string(),
            ));
        }
        if self.is_answered(element) {
            return Err(ClosyError::InvalidResponse(format!(
                "{element} was already answered for this session"
            )));
        }
        if let Some(next) = self.next_subcategory().filter(|next| *next != element) {
            return Err(ClosyError::InvalidResponse(format!(
                "answer {next} before {element}"
            )));
        }

        let limits = match catalog::selection_type(element) {
            SelectionType::Single => SelectionLimits::exactly(1),
            SelectionType::Multiple { max } => SelectionLimits::new(1, max),
        };
        let offered: Vec<&str> = self
            .subcategory_options(element, DEFAULT_OPTION_COUNT)
            .iter()
            .map(|option| option.id)
            .collect();
        selection::validate_selection(selections, &offered, limits)?;

        let points = element.points_per_style();
        let mut injected = 0;
        if points > 0.0 {
            for id in selections {
                let Some(option) = catalog::find_option(element, id) else {
                    continue;
                };
                for style in option.style_mapping {
                    self.log
                        .inject(ResponseSource::SubcategoryInjection(element), *style, points)?;
                    injected += 1;
                }
            }
        }

        self.subcategory_submissions.push(SubcategorySubmission {
            element,
            selections: selections.to_vec(),
        });
        info!(element = %element, injected, "recorded subcategory answer");

        if self.next_subcategory().is_none() {
            self.complete_onboarding();
            self.set_current_block(ALL_BLOCKS_MARKER);
            info!("questionnaire complete");
        }
        Ok(injected)
    }

    pub fn complete_onboarding(&mut self) {
        self.flags.onboarding_completed = true;
    }

    pub fn set_current_block(&mut self, block: u8) {
        self.flags.current_block = block;
    }

    /// Back to the initial state; the log is cleared with everything else.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Replaces the response log with records in the app's flat legacy shape.
    ///
    /// Injected responses are renumbered into their synthetic ranges, so
    /// importing the same export again yields the same log.
    pub fn import_legacy(&mut self, records: &[LegacyResponse]) -> Result<usize> {
        let mut imported = ResponseLog::new();
        for record in records {
            let source = record.source();
            if source.is_injection() {
                let style = StyleKey::parse(&record.style_name).base;
                imported.inject(source, style, record.response)?;
            } else {
                imported.append_or_update(ResponseEvent {
                    question_id: record.question_id as u64,
                    response: record.response,
                    style: StyleKey::parse(&record.style_name),
                    source,
                });
            }
        }
        self.log.replace_all(imported.events().to_vec());
        info!(records = records.len(), responses = self.log.len(), "imported legacy responses");
        Ok(records.len())
    }

    fn is_answered(&self, element: LookElement) -> bool {
        self.subcategory_submissions
            .iter()
            .any(|submission| submission.element == element)
    }
}

fn first_repeat(picks: &[usize]) -> Option<usize> {
    picks
        .iter()
        .enumerate()
        .find(|(position, index)| picks[..*position].contains(*index))
        .map(|(_, index)| *index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn rate_all(session: &mut Session, ratings: &[(&str, u8)]) {
        for (style, rating) in ratings {
            let id = catalog::question_id_for_style(style).expect("catalog style");
            session
                .record_rating(id, style, *rating)
                .expect("rating should record");
        }
    }

    fn names(scores: &[StyleScore]) -> Vec<String> {
        scores.iter().map(|s| s.style_name.clone()).collect()
    }

    fn through_block2() -> Session {
        let mut session = Session::new();
        rate_all(
            &mut session,
            &[
                ("Básica", 2),
                ("Boho", 5),
                ("Cayetana -20", 1),
                ("ST", 4),
                ("Moderna Trendy", 4),
                ("Pija", 3),
            ],
        );
        let candidates = names(
            &session
                .outfit_candidates(&OutfitThresholds::default())
                .expect("enough rated styles"),
        );
        session
            .submit_outfit_picks(Occasion::DayToDay, &candidates, &[0, 1])
            .expect("picks should record");
        session
    }

    #[test]
    fn record_rating_rejects_out_of_scale_values() {
        let mut session = Session::new();
        assert!(matches!(
            session.record_rating(1, "Básica", 6),
            Err(ClosyError::InvalidResponse(_))
        ));
        assert!(matches!(
            session.record_rating(1200, "Básica", 3),
            Err(ClosyError::InvalidResponse(_))
        ));
        assert!(session.log().is_empty());
    }

    #[test]
    fn live_scores_switch_to_final_after_block_two() {
        let mut session = Session::new();
        rate_all(&mut session, &[("Boho", 4)]);
        assert_eq!(session.live_mode(), ScoreMode::Simple);

        session.append_or_update(ResponseEvent::occasion_pick(Occasion::DayToDay, 0, 0, "Boho"));
        assert_eq!(session.live_mode(), ScoreMode::Final);
        assert_eq!(names(&session.live_scores()), vec!["Boho"]);
    }

    #[test]
    fn outfit_candidates_pad_to_four() {
        let mut session = Session::new();
        rate_all(
            &mut session,
            &[("Boho", 5), ("Pija", 4), ("ST", 3), ("Sexy", 2), ("Básica", 1)],
        );
        let candidates = session
            .outfit_candidates(&OutfitThresholds::default())
            .expect("three styles clear 2.5");
        assert_eq!(names(&candidates), vec!["Boho", "Pija", "ST", "Sexy"]);
    }

    #[test]
    fn outfit_candidates_need_three_good_styles() {
        let mut session = Session::new();
        rate_all(&mut session, &[("Boho", 5), ("Pija", 4), ("ST", 2)]);
        let err = session
            .outfit_candidates(&OutfitThresholds::default())
            .expect_err("only two styles clear 2.5");
        assert_eq!(err.redirect, Block::One);
    }

    #[test]
    fn outfit_picks_use_occasion_ids_and_pick_order() {
        let session = through_block2();
        let first = session.log().get(3000).expect("first candidate picked");
        assert_eq!(first.style.to_string(), "Boho (día a día)");
        assert_eq!(first.response, 1.0);
        let second = session.log().get(3001).expect("second candidate picked");
        assert_eq!(second.response, 2.0);
        assert!(session.progress().block2_complete);
    }

    #[test]
    fn outfit_picks_reject_bad_indexes() {
        let mut session = Session::new();
        let candidates: Vec<String> = ["Boho", "Pija", "ST"].iter().map(|s| s.to_string()).collect();
        assert!(matches!(
            session.submit_outfit_picks(Occasion::NightOut, &candidates, &[5]),
            Err(ClosyError::Selection(SelectionError::InvalidItem(_)))
        ));
        assert!(matches!(
            session.submit_outfit_picks(Occasion::NightOut, &candidates, &[1, 1]),
            Err(ClosyError::Selection(SelectionError::InvalidItem(_)))
        ));
        assert!(matches!(
            session.submit_outfit_picks(Occasion::NightOut, &candidates, &[]),
            Err(ClosyError::Selection(SelectionError::TooFew { .. }))
        ));
        assert!(session.log().is_empty());
    }

    #[test]
    fn unified_brands_redirect_to_missing_block() {
        let mut session = Session::new();
        assert_eq!(
            session.unified_brands().expect_err("empty").redirect,
            Block::One
        );
        rate_all(&mut session, &[("Boho", 5), ("ST", 4)]);
        assert_eq!(
            session.unified_brands().expect_err("no block 2").redirect,
            Block::Two
        );
    }

    #[test]
    fn brand_selection_injects_scarcity_points() {
        let mut session = through_block2();
        let unified = session.unified_brands().expect("blocks 1 and 2 done");
        let rare = unified
            .iter()
            .find(|brand| brand.score == 3)
            .expect("a brand unique to one style")
            .clone();
        let selected = vec![rare.brand_name.clone(), "Zara".to_string()];

        let before = session.log().len();
        let points = session
            .submit_brand_selection(&selected)
            .expect("valid selection");
        let injected: usize = points.iter().map(|brand| brand.styles.len()).sum();
        assert_eq!(session.log().len(), before + injected);
        assert!(session.progress().block3_complete);
        assert!(session
            .log()
            .events()
            .iter()
            .filter(|event| event.source == ResponseSource::BrandInjection)
            .all(|event| event.question_id >= 35000));

        assert!(matches!(
            session.submit_brand_selection(&selected),
            Err(ClosyError::InvalidResponse(_))
        ));
    }

    #[test]
    fn brand_selection_validation_keeps_log_untouched() {
        let mut session = through_block2();
        let before = session.log().clone();
        assert!(matches!(
            session.submit_brand_selection(&["Zara".to_string()]),
            Err(ClosyError::Selection(SelectionError::TooFew { min: 2, actual: 1 }))
        ));
        assert!(matches!(
            session.submit_brand_selection(&["Zara".to_string(), "Gucci".to_string()]),
            Err(ClosyError::Selection(SelectionError::InvalidItem(_)))
        ));
        assert_eq!(session.log(), &before);
        assert!(session.brand_submission().is_none());
    }

    #[test]
    fn multi_choice_options_rank_by_mapped_styles() {
        let session = through_block2();
        let options = session.subcategory_options(LookElement::Shoes, DEFAULT_OPTION_COUNT);
        let ids: Vec<&str> = options.iter().map(|option| option.id).collect();
        assert_eq!(ids, vec!["trendy", "streetwear", "boho"]);

        let accessories = session.subcategory_options(LookElement::Accessories, 1);
        assert_eq!(accessories.len(), 3);
    }

    #[test]
    fn subcategories_follow_priorities_and_complete_onboarding() {
        use LookElement::*;
        let mut session = through_block2();
        assert!(matches!(
            session.submit_subcategory(Shoes, &["boho".to_string()]),
            Err(ClosyError::InvalidResponse(_))
        ));

        session
            .submit_look_priorities(&[Shoes, Outerwear, Base, Accessories])
            .expect("full permutation");
        assert_eq!(session.next_subcategory(), Some(Shoes));

        let injected = session
            .submit_subcategory(Shoes, &["boho".to_string()])
            .expect("shoe pick");
        assert_eq!(injected, 1);
        let shoe_event = session
            .log()
            .events()
            .iter()
            .find(|event| event.source == ResponseSource::SubcategoryInjection(Shoes))
            .expect("shoe injection");
        assert_eq!(shoe_event.response, 2.0);
        assert_eq!(session.next_subcategory(), Some(Outerwear));

        let outerwear = session.subcategory_options(Outerwear, DEFAULT_OPTION_COUNT);
        let pick = outerwear[0].id.to_string();
        session
            .submit_subcategory(Outerwear, &[pick])
            .expect("outerwear pick");
        assert_eq!(session.next_subcategory(), Some(Base));

        assert!(matches!(
            session.submit_subcategory(Base, &["vestidos".to_string(), "pantalones".to_string()]),
            Err(ClosyError::Selection(SelectionError::TooMany { max: 1, .. }))
        ));
        assert_eq!(
            session
                .submit_subcategory(Base, &["vestidos".to_string()])
                .expect("base pick"),
            0
        );
        assert!(!session.flags().onboarding_completed);

        session
            .submit_subcategory(Accessories, &["bolsos".to_string()])
            .expect("accessory pick");
        assert!(session.flags().onboarding_completed);
        assert_eq!(session.flags().current_block, ALL_BLOCKS_MARKER);
        assert!(session.progress().all_complete());
        assert!(matches!(
            session.submit_subcategory(Shoes, &["pija".to_string()]),
            Err(ClosyError::InvalidResponse(_))
        ));
    }

    #[test]
    fn subcategories_must_follow_ranked_order() {
        use LookElement::*;
        let mut session = through_block2();
        session
            .submit_look_priorities(&[Shoes, Outerwear, Base, Accessories])
            .expect("full permutation");
        let before = session.log().clone();

        assert!(matches!(
            session.submit_subcategory(Accessories, &["bolsos".to_string()]),
            Err(ClosyError::InvalidResponse(_))
        ));
        assert!(matches!(
            session.submit_subcategory(Base, &["vestidos".to_string()]),
            Err(ClosyError::InvalidResponse(_))
        ));
        assert_eq!(session.log(), &before);
        assert!(session.subcategory_submissions().is_empty());
        assert_eq!(session.next_subcategory(), Some(Shoes));
    }

    #[test]
    fn outfit_candidates_stay_fixed_across_occasions() {
        let mut session = Session::new();
        rate_all(
            &mut session,
            &[("Boho", 3), ("ST", 3), ("Pija", 3), ("Sexy", 1)],
        );
        let thresholds = OutfitThresholds::default();
        let first = names(
            &session
                .outfit_candidates(&thresholds)
                .expect("three styles clear 2.5"),
        );
        assert_eq!(first, vec!["Boho", "ST", "Pija", "Sexy"]);

        for occasion in Occasion::ALL {
            let candidates = names(
                &session
                    .outfit_candidates(&thresholds)
                    .expect("block-1 ratings still qualify"),
            );
            assert_eq!(candidates, first);
            session
                .submit_outfit_picks(occasion, &candidates, &[0])
                .expect("pick should record");
        }

        for occasion in Occasion::ALL {
            let id = occasion.id() * OCCASION_ID_STRIDE + 2000;
            assert_eq!(
                session.log().get(id).map(|event| event.style.to_string()),
                Some(format!("Boho ({occasion})"))
            );
        }
        assert_eq!(session.live_mode(), ScoreMode::Final);
    }

    #[test]
    fn import_legacy_twice_yields_the_same_log() {
        let records: Vec<LegacyResponse> = serde_json::from_str(
            r#"[
                {"questionId": 2, "response": 5, "styleName": "Boho"},
                {"questionId": 3000, "response": 1, "styleName": "Boho (día a día)"},
                {"questionId": 1730000035000.42, "response": 3, "styleName": "Boho"}
            ]"#,
        )
        .expect("legacy json should parse");

        let mut session = Session::new();
        session.import_legacy(&records).expect("first import");
        let once = session.log().clone();
        let scores = session.scores(ScoreMode::Final);
        assert_eq!(scores[0].total_score, 11.0);
        assert_eq!(scores[0].response_count, 3);

        session.import_legacy(&records).expect("second import");
        assert_eq!(session.log(), &once);
        assert_eq!(session.scores(ScoreMode::Final), scores);
    }

    #[test]
    fn import_legacy_reissues_synthetic_ids() {
        let records: Vec<LegacyResponse> = serde_json::from_str(
            r#"[
                {"questionId": 2, "response": 5, "styleName": "Boho"},
                {"questionId": 3001, "response": 1, "styleName": "Boho (día a día)"},
                {"questionId": 1730000035000.42, "response": 3, "styleName": "Boho"},
                {"questionId": 2, "response": 4, "styleName": "Boho"}
            ]"#,
        )
        .expect("legacy json should parse");

        let mut session = Session::new();
        assert_eq!(session.import_legacy(&records).expect("import should succeed"), 4);
        assert_eq!(session.log().len(), 3);
        assert_eq!(session.log().get(2).map(|event| event.response), Some(4.0));
        assert!(session.log().get(35000).is_some());
        assert_eq!(
            session.log().get(3001).and_then(|event| event.style.occasion),
            Some(Occasion::DayToDay)
        );
    }

    #[test]
    fn save_and_load_preserve_session() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("session.json");
        let session = through_block2();
        session.save(&path).expect("save should succeed");

        let loaded = Session::load(&path).expect("load should succeed");
        assert_eq!(loaded, session);
        assert_eq!(loaded.live_scores(), session.live_scores());
    }

    #[test]
    fn create_refuses_to_overwrite_without_force() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("session.json");
        Session::create(&path, false).expect("first create succeeds");
        assert!(matches!(
            Session::create(&path, false),
            Err(ClosyError::SessionExists(_))
        ));
        assert!(Session::create(&path, true).is_ok());
        assert!(matches!(
            Session::load(&dir.path().join("missing.json")),
            Err(ClosyError::SessionNotFound(_))
        ));
    }

    #[test]
    fn reset_clears_everything() {
        let mut session = through_block2();
        session.complete_onboarding();
        session.reset();
        assert_eq!(session, Session::new());
        assert!(!session.progress().block1_complete);
    }
}
