//! # Rendering
//!
//! Styled terminal output through the `outstanding` crate. Every function
//! takes a color override: `None` lets `outstanding` check whether stdout
//! is a color terminal, `Some(flag)` forces it (from the `color` config key,
//! and in tests).
//!
//! Column math for the compact list (truncation, widths) happens here
//! because it needs Unicode-aware measuring. Templates only pad and style.

use super::styles::{names, SHELF_THEME};
use super::templates::{
    BOOK_LIST_TEMPLATE, BOOK_TABLE_TEMPLATE, MESSAGES_TEMPLATE, STATS_TEMPLATE,
    TEXT_LIST_TEMPLATE,
};
use outstanding::{render, render_with_color, ThemeChoice};
use serde::Serialize;
use shelf::api::{CmdMessage, MessageLevel};
use shelf::model::{Book, LibraryStats};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const MAX_TITLE_WIDTH: usize = 40;
pub const MAX_AUTHOR_WIDTH: usize = 28;

#[derive(Serialize)]
struct BookCard {
    title: String,
    author: String,
    year: i32,
    genre: String,
    status: &'static str,
    status_style: &'static str,
}

#[derive(Serialize)]
struct BookListData {
    books: Vec<BookCard>,
}

#[derive(Serialize)]
struct BookRow {
    index: String,
    title: String,
    author: String,
    year: i32,
    status: &'static str,
    status_style: &'static str,
}

#[derive(Serialize)]
struct BookTableData {
    rows: Vec<BookRow>,
    title_width: usize,
    author_width: usize,
}

#[derive(Serialize)]
struct StatsData {
    total: usize,
    read: usize,
    unread: usize,
    completion: String,
}

#[derive(Serialize)]
struct TextListData {
    lines: Vec<String>,
    empty_message: String,
}

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: &'static str,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageData>,
}

fn render_themed<T: Serialize>(
    template: &str,
    data: &T,
    use_color: Option<bool>,
) -> Result<String, String> {
    let theme = ThemeChoice::from(&*SHELF_THEME);
    match use_color {
        Some(c) => render_with_color(template, data, theme, c),
        None => render(template, data, theme),
    }
    .map_err(|e| e.to_string())
}

fn status_style(book: &Book) -> &'static str {
    if book.read {
        names::STATUS_READ
    } else {
        names::STATUS_UNREAD
    }
}

/// Renders books as cards, or as aligned one-line rows when `compact`.
/// An empty slice renders nothing; callers report emptiness via messages.
pub fn render_books(books: &[Book], compact: bool, use_color: Option<bool>) -> String {
    if books.is_empty() {
        return String::new();
    }
    if compact {
        render_book_table(books, use_color)
    } else {
        render_book_cards(books, use_color)
    }
}

fn render_book_cards(books: &[Book], use_color: Option<bool>) -> String {
    let data = BookListData {
        books: books
            .iter()
            .map(|book| BookCard {
                title: book.title.clone(),
                author: book.author.clone(),
                year: book.year,
                genre: book.genre.clone(),
                status: book.status_label(),
                status_style: status_style(book),
            })
            .collect(),
    };

    render_themed(BOOK_LIST_TEMPLATE, &data, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

fn render_book_table(books: &[Book], use_color: Option<bool>) -> String {
    let index_width = books.len().to_string().len();

    let rows: Vec<BookRow> = books
        .iter()
        .enumerate()
        .map(|(i, book)| BookRow {
            index: format!("{:>width$}.", i + 1, width = index_width),
            title: truncate_to_width(&book.title, MAX_TITLE_WIDTH),
            author: truncate_to_width(&book.author, MAX_AUTHOR_WIDTH),
            year: book.year,
            status: book.status_label(),
            status_style: status_style(book),
        })
        .collect();

    let title_width = rows.iter().map(|r| r.title.width()).max().unwrap_or(0);
    let author_width = rows.iter().map(|r| r.author.width()).max().unwrap_or(0);

    let data = BookTableData {
        rows,
        title_width,
        author_width,
    };

    render_themed(BOOK_TABLE_TEMPLATE, &data, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

pub fn render_stats(stats: &LibraryStats, use_color: Option<bool>) -> String {
    let data = StatsData {
        total: stats.total,
        read: stats.read,
        unread: stats.unread,
        completion: stats.completion_label(),
    };

    let mut output = render_themed(STATS_TEMPLATE, &data, use_color).unwrap_or_else(|_| {
        format!(
            "Library Statistics\nTotal Books: {}\nBooks Read: {}\nUnread Books: {}\nCompletion Rate: {}",
            data.total, data.read, data.unread, data.completion
        )
    });
    output.push('\n');
    output
}

pub fn render_text_list(lines: &[String], empty_message: &str, use_color: Option<bool>) -> String {
    let data = TextListData {
        lines: lines.to_vec(),
        empty_message: empty_message.to_string(),
    };

    render_themed(TEXT_LIST_TEMPLATE, &data, use_color)
        .unwrap_or_else(|_| format!("{}\n", empty_message))
}

pub fn render_messages(messages: &[CmdMessage], use_color: Option<bool>) -> String {
    if messages.is_empty() {
        return String::new();
    }

    let data = MessagesData {
        messages: messages
            .iter()
            .map(|msg| MessageData {
                content: msg.content.clone(),
                style: match msg.level {
                    MessageLevel::Info => names::INFO,
                    MessageLevel::Success => names::SUCCESS,
                    MessageLevel::Warning => names::WARNING,
                    MessageLevel::Error => names::ERROR,
                },
            })
            .collect(),
    };

    render_themed(MESSAGES_TEMPLATE, &data, use_color).unwrap_or_else(|_| {
        messages
            .iter()
            .map(|m| format!("{}\n", m.content))
            .collect()
    })
}

pub fn print_messages(messages: &[CmdMessage], use_color: Option<bool>) {
    let output = render_messages(messages, use_color);
    if !output.is_empty() {
        print!("{}", output);
    }
}

/// Cuts `s` to at most `max_width` display columns, ending in an ellipsis
/// when anything was dropped.
fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let limit = max_width.saturating_sub(1);
    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
