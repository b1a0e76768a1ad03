use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Library;

pub fn run(library: &Library) -> Result<CmdResult> {
    if library.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::info("Your library is empty!")));
    }
    Ok(CmdResult::default().with_listed_books(library.books().to_vec()))
}
