use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::{Library, LibraryStats};

pub fn run(library: &Library) -> Result<CmdResult> {
    Ok(CmdResult::default().with_stats(LibraryStats::from_books(library.books())))
}
