use crate::types::progress::Block;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClosyError {
    #[error("session file not found: {0}")]
    SessionNotFound(String),

    #[error("session file already exists: {0}")]
    SessionExists(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("invalid response: {0}")]
    InvalidResponse(String),

    #[error("invalid selection: {0}")]
    Selection(#[from] SelectionError),

    #[error(transparent)]
    InsufficientData(#[from] InsufficientData),

    #[error("logging setup failed: {0}")]
    Telemetry(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ClosyError>;

/// Cardinality and membership failures for a selection step.
///
/// The caller keeps the in-progress selection; these only describe what is wrong with it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("select at least {min} (got {actual})")]
    TooFew { min: usize, actual: usize },

    #[error("select at most {max} (got {actual})")]
    TooMany { max: usize, actual: usize },

    #[error("not available: {}", .0.join(", "))]
    InvalidItem(Vec<String>),
}

/// An earlier questionnaire block has to be finished first.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("insufficient prior data: {reason} (complete {redirect} first)")]
pub struct InsufficientData {
    pub reason: String,
    pub redirect: Block,
}

impl InsufficientData {
    pub fn new(reason: impl Into<String>, redirect: Block) -> Self {
        Self {
            reason: reason.into(),
            redirect,
        }
    }
}
