use serde::{Deserialize, Serialize};
use std::fmt;

/// One stage of the onboarding questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Block {
    One,
    Two,
    Three,
}

impl Block {
    pub fn number(self) -> u8 {
        match self {
            Block::One => 1,
            Block::Two => 2,
            Block::Three => 3,
        }
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "block {}", self.number())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurrentBlock {
    Block(Block),
    Complete,
}

impl fmt::Display for CurrentBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurrentBlock::Block(block) => block.fmt(f),
            CurrentBlock::Complete => f.write_str("complete"),
        }
    }
}

/// Flags set by terminal actions rather than derived from responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowFlags {
    pub onboarding_completed: bool,
    /// Block marker; 4 means every block was finished.
    pub current_block: u8,
}

impl Default for FlowFlags {
    fn default() -> Self {
        Self {
            onboarding_completed: false,
            current_block: 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BlockProgress {
    pub block1_complete: bool,
    pub block2_complete: bool,
    pub block3_complete: bool,
    pub current_block: CurrentBlock,
}

impl BlockProgress {
    pub fn all_complete(&self) -> bool {
        self.block1_complete && self.block2_complete && self.block3_complete
    }
}
