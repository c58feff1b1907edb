use crate::error::SelectionError;
use crate::types::response::LookElement;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionLimits {
    pub min: usize,
    pub max: usize,
}

impl SelectionLimits {
    pub const fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    pub const fn exactly(count: usize) -> Self {
        Self::new(count, count)
    }
}

/// Block-2 outfit picks per occasion.
pub const OUTFIT_PICKS: SelectionLimits = SelectionLimits::new(1, 3);
/// Per-style brand picks from a single style's list.
pub const STYLE_BRAND_PICKS: SelectionLimits = SelectionLimits::new(2, 3);
/// Picks from the unified brand set.
pub const UNIFIED_BRAND_PICKS: SelectionLimits = SelectionLimits::new(2, 5);
/// The look-element ranking is a full permutation.
pub const LOOK_PRIORITIES: SelectionLimits = SelectionLimits::exactly(LookElement::ALL.len());

/// Checks count first, then membership in `available`.
pub fn validate_selection<S: AsRef<str>, A: AsRef<str>>(
    selected: &[S],
    available: &[A],
    limits: SelectionLimits,
) -> Result<(), SelectionError> {
    if selected.len() < limits.min {
        return Err(SelectionError::TooFew {
            min: limits.min,
            actual: selected.len(),
        });
    }
    if selected.len() > limits.max {
        return Err(SelectionError::TooMany {
            max: limits.max,
            actual: selected.len(),
        });
    }

    let invalid: Vec<String> = selected
        .iter()
        .map(|item| item.as_ref())
        .filter(|item| !available.iter().any(|candidate| candidate.as_ref() == *item))
        .map(ToString::to_string)
        .collect();
    if !invalid.is_empty() {
        return Err(SelectionError::InvalidItem(invalid));
    }

    Ok(())
}

/// Every look element exactly once, most important first.
pub fn validate_look_priorities(order: &[LookElement]) -> Result<(), SelectionError> {
    let ids: Vec<&str> = order.iter().map(|element| element.id()).collect();
    let all: Vec<&str> = LookElement::ALL.iter().map(|element| element.id()).collect();
    validate_selection(&ids, &all, LOOK_PRIORITIES)?;

    let mut repeated: Vec<String> = Vec::new();
    for (position, id) in ids.iter().enumerate() {
        if ids[..position].contains(id) && !repeated.iter().any(|seen| seen == id) {
            repeated.push(id.to_string());
        }
    }
    if !repeated.is_empty() {
        return Err(SelectionError::InvalidItem(repeated));
    }
    Ok(())
}
