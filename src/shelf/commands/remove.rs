use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Library;
use crate::store::DataStore;
use tracing::info;

/// Removes every book titled exactly `title`, then persists.
///
/// Titles are the only handle on a book, so duplicates go together.
pub fn run<S: DataStore>(store: &mut S, library: &mut Library, title: &str) -> Result<CmdResult> {
    if library.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::info("Library is empty.")));
    }

    if !library.contains_title(title) {
        return Ok(CmdResult::default().with_message(CmdMessage::error(format!(
            "No book titled '{}' in your library.",
            title
        ))));
    }

    let removed: Vec<_> = library
        .iter()
        .filter(|b| b.title == title)
        .cloned()
        .collect();
    library.remove_title(title);
    store.save(library)?;
    info!(title, removed = removed.len(), "books removed");

    Ok(CmdResult::default()
        .with_affected_books(removed)
        .with_message(CmdMessage::warning(format!("Book '{}' removed!", title))))
}
