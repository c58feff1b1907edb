//! Static questionnaire reference data: styles, their brands, and the block-3 option sets.

use crate::types::response::LookElement;

/// Block-1 styles in question order; the question id is the position plus one.
pub const STYLES: [&str; 9] = [
    "Básica",
    "Boho",
    "Cayetana -20",
    "Cayetana +20",
    "Formal Clásica",
    "Moderna Trendy",
    "Pija",
    "Sexy",
    "ST",
];

pub const RATING_LABELS: [(u8, &str); 5] = [
    (1, "No me gusta nada"),
    (2, "Me gusta poco"),
    (3, "Me gusta"),
    (4, "Me gusta mucho"),
    (5, "Me encanta"),
];

pub const STYLE_BRANDS: [(&str, [&str; 5]); 9] = [
    ("Básica", ["Zara", "Stradivarius", "Mango", "Pull & Bear", "H&M"]),
    ("Pija", ["Zara", "Massimo Dutti", "Scalpers", "Mango", "Ralph Lauren"]),
    (
        "Formal Clásica",
        ["Massimo Dutti", "Zara", "Mango", "Eseoese", "Scalpers"],
    ),
    ("Boho", ["Zara", "Sézane", "Scalpers", "Ese o Ese", "Mango"]),
    ("ST", ["Bershka", "Pull & Bear", "Asos", "Urban Outfitter", "Zara"]),
    (
        "Moderna Trendy",
        ["Zara", "Renatta & Go", "Nicoli", "Noon", "Mango"],
    ),
    (
        "Cayetana -20",
        ["Zara", "Stradivarius", "Mango", "Pull & Bear", "Bershka"],
    ),
    (
        "Cayetana +20",
        ["Massimo Dutti", "Zara", "Mango", "Eseoese", "Scalpers"],
    ),
    ("Sexy", ["Zara", "Mango", "Renatta & Go", "Nicoli", "Bershka"]),
];

pub fn question_id_for_style(style: &str) -> Option<u64> {
    STYLES
        .iter()
        .position(|candidate| *candidate == style)
        .map(|index| index as u64 + 1)
}

pub fn style_for_question_id(question_id: u64) -> Option<&'static str> {
    usize::try_from(question_id)
        .ok()
        .and_then(|id| id.checked_sub(1))
        .and_then(|index| STYLES.get(index).copied())
}

pub fn has_brands(style: &str) -> bool {
    STYLE_BRANDS.iter().any(|(name, _)| *name == style)
}

/// Candidate brands for a style; empty for styles outside the catalog.
pub fn brands_for_style(style: &str) -> Vec<&'static str> {
    STYLE_BRANDS
        .iter()
        .find(|(name, _)| *name == style)
        .map(|(_, brands)| brands.to_vec())
        .unwrap_or_default()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionType {
    Single,
    Multiple { max: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubcategoryOption {
    pub id: &'static str,
    pub display_name: &'static str,
    pub style_mapping: &'static [&'static str],
}

const fn opt(
    id: &'static str,
    display_name: &'static str,
    style_mapping: &'static [&'static str],
) -> SubcategoryOption {
    SubcategoryOption {
        id,
        display_name,
        style_mapping,
    }
}

static ACCESSORY_OPTIONS: [SubcategoryOption; 3] = [
    opt("bisuteria", "Bisutería", &[]),
    opt("bolsos", "Bolsos", &[]),
    opt("otro", "Otros", &[]),
];

static BASE_OPTIONS: [SubcategoryOption; 3] = [
    opt("vestidos", "Vestidos", &[]),
    opt("pantalones", "Pantalones", &[]),
    opt("partesArriba", "Partes de Arriba", &[]),
];

static SHOE_OPTIONS: [SubcategoryOption; 9] = [
    opt("boho", "Boho", &["Boho"]),
    opt("formal", "Formal", &["Formal Clásica"]),
    opt("trendy", "Trendy", &["Moderna Trendy"]),
    opt("basica", "Básica", &["Básica"]),
    opt("sexy", "Sexy", &["Sexy"]),
    opt("streetwear", "Streetwear", &["ST"]),
    opt("pija", "Pija", &["Pija"]),
    opt("caye-20", "Caye-20", &["Cayetana -20"]),
    opt("caye20", "Caye+20", &["Cayetana +20"]),
];

static OUTERWEAR_OPTIONS: [SubcategoryOption; 6] = [
    opt("boho", "Boho", &["Boho"]),
    opt(
        "formal-caye20-pija-sexy",
        "Formal/Elegante",
        &["Formal Clásica", "Cayetana -20", "Cayetana +20", "Pija", "Sexy"],
    ),
    opt(
        "basica-st-trendy",
        "Básica/Trendy",
        &["Básica", "ST", "Moderna Trendy"],
    ),
    opt("pija-formal", "Pija/Formal", &["Pija", "Formal Clásica"]),
    opt(
        "caye20-formal",
        "Caye-20/Formal",
        &["Cayetana -20", "Cayetana +20", "Formal Clásica"],
    ),
    opt(
        "caye-20-pija",
        "Caye-20/Pija",
        &["Cayetana -20", "Cayetana +20", "Pija"],
    ),
];

pub fn selection_type(element: LookElement) -> SelectionType {
    match element {
        LookElement::Accessories | LookElement::Base => SelectionType::Single,
        LookElement::Shoes | LookElement::Outerwear => SelectionType::Multiple { max: 3 },
    }
}

pub fn subcategory_options(element: LookElement) -> &'static [SubcategoryOption] {
    match element {
        LookElement::Accessories => &ACCESSORY_OPTIONS,
        LookElement::Base => &BASE_OPTIONS,
        LookElement::Shoes => &SHOE_OPTIONS,
        LookElement::Outerwear => &OUTERWEAR_OPTIONS,
    }
}

pub fn find_option(element: LookElement, id: &str) -> Option<&'static SubcategoryOption> {
    subcategory_options(element)
        .iter()
        .find(|option| option.id == id)
}
