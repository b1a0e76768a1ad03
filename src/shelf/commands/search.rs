use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Library, SearchField};

/// Case-insensitive substring search on one field. Matches keep library order.
pub fn run(library: &Library, field: SearchField, query: &str) -> Result<CmdResult> {
    let matches: Vec<_> = library
        .iter()
        .filter(|book| field.matches(book, query))
        .cloned()
        .collect();

    let mut result = CmdResult::default();
    if matches.is_empty() {
        result.add_message(CmdMessage::error("No matches found."));
    }
    Ok(result.with_listed_books(matches))
}
