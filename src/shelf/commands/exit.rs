use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

/// Farewell message only. Every mutation was already saved when it happened,
/// so there is nothing to flush and nothing is closed.
pub fn run() -> Result<CmdResult> {
    Ok(CmdResult::default().with_message(CmdMessage::success("Library saved! Come back soon!")))
}
