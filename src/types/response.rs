use serde::{Deserialize, Serialize};
use std::fmt;

pub const OCCASION_ID_STRIDE: u64 = 1000;
pub const OCCASION_ID_OFFSET: u64 = 2000;
pub const SUBCATEGORY_ID_BASE: u64 = 30000;
pub const BRAND_ID_BASE: u64 = 35000;

/// Weight applied in final mode to every response past block 1.
pub const LATE_BLOCK_WEIGHT: f64 = 1.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Occasion {
    DayToDay,
    FormalEvent,
    NightOut,
}

impl Occasion {
    pub const ALL: [Occasion; 3] = [Occasion::DayToDay, Occasion::FormalEvent, Occasion::NightOut];

    pub fn id(self) -> u64 {
        match self {
            Occasion::DayToDay => 1,
            Occasion::FormalEvent => 2,
            Occasion::NightOut => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Occasion::DayToDay => "día a día",
            Occasion::FormalEvent => "evento formal",
            Occasion::NightOut => "salir de fiesta",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|occasion| occasion.label() == label.trim())
    }
}

impl fmt::Display for Occasion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The four parts of a look ranked in block 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LookElement {
    Shoes,
    Accessories,
    Base,
    Outerwear,
}

impl LookElement {
    pub const ALL: [LookElement; 4] = [
        LookElement::Shoes,
        LookElement::Accessories,
        LookElement::Base,
        LookElement::Outerwear,
    ];

    pub fn id(self) -> &'static str {
        match self {
            LookElement::Shoes => "shoes",
            LookElement::Accessories => "accessories",
            LookElement::Base => "base",
            LookElement::Outerwear => "outerwear",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            LookElement::Shoes => "Zapatos",
            LookElement::Accessories => "Accesorios",
            LookElement::Base => "Base",
            LookElement::Outerwear => "Capa Exterior",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        let id = id.trim();
        Self::ALL
            .into_iter()
            .find(|element| element.id().eq_ignore_ascii_case(id))
    }

    /// Points injected into each mapped style per selected option.
    pub fn points_per_style(self) -> f64 {
        match self {
            LookElement::Shoes => 2.0,
            LookElement::Outerwear => 1.0,
            LookElement::Accessories | LookElement::Base => 0.0,
        }
    }
}

impl fmt::Display for LookElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Where a response came from. Decides its weight in final mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "element", rename_all = "snake_case")]
pub enum ResponseSource {
    BaseRating,
    OccasionPick,
    SubcategoryInjection(LookElement),
    BrandInjection,
}

impl ResponseSource {
    pub fn weight(self) -> f64 {
        match self {
            ResponseSource::BaseRating => 1.0,
            _ => LATE_BLOCK_WEIGHT,
        }
    }

    pub fn is_block2_or_later(self) -> bool {
        !matches!(self, ResponseSource::BaseRating)
    }

    pub fn is_injection(self) -> bool {
        matches!(
            self,
            ResponseSource::SubcategoryInjection(_) | ResponseSource::BrandInjection
        )
    }

    /// First id and width of the range injected ids are drawn from.
    ///
    /// Sources without a range of their own share the brand range.
    pub fn synthetic_range(self) -> (u64, u64) {
        match self {
            ResponseSource::SubcategoryInjection(_) => {
                (SUBCATEGORY_ID_BASE, BRAND_ID_BASE - SUBCATEGORY_ID_BASE)
            }
            _ => (BRAND_ID_BASE, u64::MAX - BRAND_ID_BASE),
        }
    }

    /// First id of the synthetic range for injected responses.
    pub fn synthetic_id_base(self) -> Option<u64> {
        match self {
            ResponseSource::SubcategoryInjection(_) => Some(SUBCATEGORY_ID_BASE),
            ResponseSource::BrandInjection => Some(BRAND_ID_BASE),
            ResponseSource::BaseRating | ResponseSource::OccasionPick => None,
        }
    }
}

/// A style, optionally qualified by the occasion it was picked for.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StyleKey {
    pub base: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occasion: Option<Occasion>,
}

impl StyleKey {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            occasion: None,
        }
    }

    pub fn with_occasion(base: impl Into<String>, occasion: Occasion) -> Self {
        Self {
            base: base.into(),
            occasion: Some(occasion),
        }
    }

    /// Parses the `"<style> (<occasion>)"` form. Unknown suffixes stay part of the base name.
    pub fn parse(raw: &str) -> Self {
        if let Some((base, rest)) = raw.split_once(" (") {
            if let Some(occasion) = rest.strip_suffix(')').and_then(Occasion::from_label) {
                return Self::with_occasion(base, occasion);
            }
        }
        Self::new(raw)
    }
}

impl fmt::Display for StyleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.occasion {
            Some(occasion) => write!(f, "{} ({})", self.base, occasion),
            None => f.write_str(&self.base),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseEvent {
    pub question_id: u64,
    pub response: f64,
    pub style: StyleKey,
    pub source: ResponseSource,
}

impl ResponseEvent {
    /// Block-1 rating of a style on the 1..=5 scale.
    pub fn rating(question_id: u64, style: impl Into<String>, rating: f64) -> Self {
        Self {
            question_id,
            response: rating,
            style: StyleKey::new(style),
            source: ResponseSource::BaseRating,
        }
    }

    /// Block-2 outfit pick. `position` is the zero-based pick order.
    pub fn occasion_pick(
        occasion: Occasion,
        style_index: usize,
        position: usize,
        style: impl Into<String>,
    ) -> Self {
        Self {
            question_id: occasion.id() * OCCASION_ID_STRIDE + style_index as u64 + OCCASION_ID_OFFSET,
            response: (position + 1) as f64,
            style: StyleKey::with_occasion(style, occasion),
            source: ResponseSource::OccasionPick,
        }
    }
}

/// Response record in the app's original flat shape.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyResponse {
    pub question_id: f64,
    pub response: f64,
    pub style_name: String,
}

impl LegacyResponse {
    /// Classifies the record by the id range it was written under.
    pub fn source(&self) -> ResponseSource {
        let id = self.question_id;
        if id >= BRAND_ID_BASE as f64 {
            ResponseSource::BrandInjection
        } else if id >= SUBCATEGORY_ID_BASE as f64 {
            // Shoes were the only subcategory worth two points.
            if self.response == LookElement::Shoes.points_per_style() {
                ResponseSource::SubcategoryInjection(LookElement::Shoes)
            } else {
                ResponseSource::SubcategoryInjection(LookElement::Outerwear)
            }
        } else if id > OCCASION_ID_OFFSET as f64 {
            ResponseSource::OccasionPick
        } else {
            ResponseSource::BaseRating
        }
    }
}
