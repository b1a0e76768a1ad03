//! # CLI Templates
//!
//! Terminal output goes through minijinja templates rendered by `outstanding`.
//! Each template lives in its own file under `templates/` so it can be edited
//! and diffed apart from the code, and is embedded here as a string constant.
//!
//! Conventions:
//!
//! - Loops open with `{%- for ... -%}` so every line a template emits ends
//!   with an explicit newline from the template body itself.
//! - Templates pick styles from data (`book.status_style`) rather than
//!   branching on flags; the branching happens in `render.rs`.
//! - Column widths and truncation are computed in Rust, templates only pad.

pub const BOOK_LIST_TEMPLATE: &str = include_str!("templates/book_list.tmp");
pub const BOOK_TABLE_TEMPLATE: &str = include_str!("templates/book_table.tmp");
pub const STATS_TEMPLATE: &str = include_str!("templates/stats.tmp");
pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.tmp");
pub const TEXT_LIST_TEMPLATE: &str = include_str!("templates/text_list.tmp");
