use crate::log::ResponseLog;
use crate::types::progress::{Block, BlockProgress, CurrentBlock, FlowFlags};

/// Block marker meaning every questionnaire block has been finished.
pub const ALL_BLOCKS_MARKER: u8 = 4;

/// Advisory completion state for routing. Always derived from the log; never store the result.
pub fn block_progress(log: &ResponseLog, flags: &FlowFlags) -> BlockProgress {
    let block1_complete = flags.onboarding_completed || !log.is_empty();
    let block2_complete = log.any(|event| event.source.is_block2_or_later());
    let block3_complete =
        log.any(|event| event.source.is_injection()) || flags.current_block >= ALL_BLOCKS_MARKER;

    let current_block = if !block1_complete {
        CurrentBlock::Block(Block::One)
    } else if !block2_complete {
        CurrentBlock::Block(Block::Two)
    } else if !block3_complete {
        CurrentBlock::Block(Block::Three)
    } else {
        CurrentBlock::Complete
    };

    BlockProgress {
        block1_complete,
        block2_complete,
        block3_complete,
        current_block,
    }
}
