use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, ShelfError};
use crate::model::{Book, Library};
use chrono::{DateTime, Local};
use flate2::write::GzEncoder;
use flate2::Compression;
use pulldown_cmark::{CowStr, Event, HeadingLevel, Tag, TagEnd};
use pulldown_cmark_to_cmark::cmark;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

const CATALOG_TITLE: &str = "Library Catalog";

/// Output format for single-file export, picked from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Text,
    Markdown,
    Json,
}

impl ExportFormat {
    pub fn from_filename(filename: &str) -> Self {
        let lower = filename.to_lowercase();
        if lower.ends_with(".md") || lower.ends_with(".markdown") {
            ExportFormat::Markdown
        } else if lower.ends_with(".json") {
            ExportFormat::Json
        } else {
            ExportFormat::Text
        }
    }

    fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Text => "txt",
            ExportFormat::Markdown => "md",
            ExportFormat::Json => "json",
        }
    }
}

/// Writes a gzipped tarball with the library file and a markdown catalog into
/// `out_dir`.
pub fn run(library: &Library, out_dir: &Path) -> Result<CmdResult> {
    if library.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::info("No books to export.")));
    }

    let path = out_dir.join(archive_filename(Local::now()));
    let file = File::create(&path).map_err(ShelfError::Io)?;
    write_archive(file, library)?;
    info!(path = %path.display(), books = library.len(), "archive exported");

    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Exported {} books to {}",
            library.len(),
            path.display()
        )))
        .with_written_file(path))
}

/// Writes the whole library to one file named after `name`.
pub fn run_single_file(library: &Library, out_dir: &Path, name: &str) -> Result<CmdResult> {
    if library.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::info("No books to export.")));
    }

    let format = ExportFormat::from_filename(name);
    let content = render_catalog(library, format)?;
    let path: PathBuf = out_dir.join(output_filename(name, format));
    std::fs::write(&path, content).map_err(ShelfError::Io)?;
    info!(path = %path.display(), ?format, "catalog exported");

    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Exported {} books to {}",
            library.len(),
            path.display()
        )))
        .with_written_file(path))
}

pub fn render_catalog(library: &Library, format: ExportFormat) -> Result<String> {
    match format {
        ExportFormat::Markdown => catalog_markdown(library.books()),
        ExportFormat::Text => Ok(catalog_text(library.books())),
        ExportFormat::Json => {
            serde_json::to_string_pretty(library).map_err(ShelfError::Serialization)
        }
    }
}

/// `shelf-YYYY-mm-dd_HH-MM-SS.tar.gz`; no colons so the name is valid everywhere.
fn archive_filename(now: DateTime<Local>) -> String {
    format!("shelf-{}.tar.gz", now.format("%Y-%m-%d_%H-%M-%S"))
}

fn write_archive<W: Write>(writer: W, library: &Library) -> Result<()> {
    let enc = GzEncoder::new(writer, Compression::default());
    let mut tar = tar::Builder::new(enc);

    let json = serde_json::to_string_pretty(library).map_err(ShelfError::Serialization)?;
    let markdown = catalog_markdown(library.books())?;

    for (name, content) in [
        ("shelf/library.json", json.as_bytes()),
        ("shelf/catalog.md", markdown.as_bytes()),
    ] {
        let mut header = tar::Header::new_gnu();
        header.set_size(content.len() as u64);
        header.set_mode(0o644);
        header.set_cksum();
        tar.append_data(&mut header, name, content)
            .map_err(ShelfError::Io)?;
    }

    tar.into_inner()
        .map_err(ShelfError::Io)?
        .finish()
        .map_err(ShelfError::Io)?;
    Ok(())
}

fn display_title(book: &Book) -> &str {
    if book.title.trim().is_empty() {
        "Untitled"
    } else {
        &book.title
    }
}

fn heading(level: HeadingLevel, text: String) -> [Event<'static>; 3] {
    [
        Event::Start(Tag::Heading {
            level,
            id: None,
            classes: vec![],
            attrs: vec![],
        }),
        Event::Text(CowStr::from(text)),
        Event::End(TagEnd::Heading(level)),
    ]
}

fn list_item(text: String) -> [Event<'static>; 3] {
    [
        Event::Start(Tag::Item),
        Event::Text(CowStr::from(text)),
        Event::End(TagEnd::Item),
    ]
}

/// Catalog as markdown: the catalog title as H1, one H2 per book followed by
/// a bullet list of its details.
pub fn catalog_markdown(books: &[Book]) -> Result<String> {
    let mut events: Vec<Event<'static>> = Vec::new();
    events.extend(heading(HeadingLevel::H1, CATALOG_TITLE.to_string()));

    for book in books {
        events.extend(heading(HeadingLevel::H2, display_title(book).to_string()));
        events.push(Event::Start(Tag::List(None)));
        events.extend(list_item(format!("Author: {}", book.author)));
        events.extend(list_item(format!("Year: {}", book.year)));
        events.extend(list_item(format!("Genre: {}", book.genre)));
        events.extend(list_item(format!("Status: {}", book.status_label())));
        events.push(Event::End(TagEnd::List(false)));
    }

    let mut output = String::new();
    cmark(events.iter(), &mut output).map_err(|e| ShelfError::Export(e.to_string()))?;
    output.push('\n');
    Ok(output)
}

/// Catalog as plain text cards separated by blank lines.
pub fn catalog_text(books: &[Book]) -> String {
    books
        .iter()
        .map(|book| {
            format!(
                "{} by {} ({})\n    Genre: {}\n    {}\n",
                display_title(book),
                book.author,
                book.year,
                book.genre,
                book.status_label()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_alphanumeric() || c == ' ' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect::<String>()
        .trim()
        .to_string()
}

/// Sanitized file name with the extension matching `format`.
fn output_filename(name: &str, format: ExportFormat) -> String {
    let base = match name.rfind('.') {
        Some(dot) if ExportFormat::from_filename(name) != ExportFormat::Text => &name[..dot],
        Some(dot) if name[dot..].eq_ignore_ascii_case(".txt") => &name[..dot],
        _ => name,
    };
    let base = sanitize_filename(base);
    let base = if base.is_empty() {
        "catalog".to_string()
    } else {
        base
    };
    format!("{}.{}", base, format.extension())
}
