use console::Style;
use once_cell::sync::Lazy;
use outstanding::{rgb_to_ansi256, AdaptiveTheme, Theme};

/// Style names referenced from templates and render code.
pub mod names {
    pub const TITLE: &str = "title";
    pub const AUTHOR: &str = "author";
    pub const YEAR: &str = "year";
    pub const LABEL: &str = "label";
    pub const GENRE: &str = "genre";
    pub const INDEX: &str = "index";
    pub const STATUS_READ: &str = "status_read";
    pub const STATUS_UNREAD: &str = "status_unread";
    pub const HEADING: &str = "heading";
    pub const VALUE: &str = "value";
    pub const COMPLETION: &str = "completion";
    pub const INFO: &str = "info";
    pub const SUCCESS: &str = "success";
    pub const WARNING: &str = "warning";
    pub const ERROR: &str = "error";
}

fn gray(level: u8) -> Style {
    Style::new().color256(rgb_to_ansi256((level, level, level)))
}

/// Styles shared by both variants; only the muted tones differ.
fn base_theme(muted: u8) -> Theme {
    Theme::new()
        .add(names::TITLE, Style::new().bold())
        .add(names::AUTHOR, Style::new().cyan())
        .add(names::YEAR, gray(muted))
        .add(names::LABEL, gray(muted).italic())
        .add(names::GENRE, Style::new().magenta())
        .add(names::INDEX, gray(muted))
        .add(names::STATUS_READ, Style::new().green())
        .add(names::STATUS_UNREAD, Style::new().yellow())
        .add(names::HEADING, Style::new().bold().underlined())
        .add(names::VALUE, Style::new().bold())
        .add(names::COMPLETION, Style::new().green().bold())
        .add(names::INFO, gray(muted))
        .add(names::SUCCESS, Style::new().green())
        .add(names::WARNING, Style::new().yellow())
        .add(names::ERROR, Style::new().red())
}

pub static SHELF_THEME: Lazy<AdaptiveTheme> =
    Lazy::new(|| AdaptiveTheme::new(base_theme(110), base_theme(154)));
