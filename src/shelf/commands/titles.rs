use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Library;

/// Titles in library order, duplicates included. These are the choices
/// offered when removing a book.
pub fn run(library: &Library) -> Result<CmdResult> {
    Ok(CmdResult::default().with_titles(library.titles()))
}
