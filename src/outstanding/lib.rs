//! # Outstanding
//!
//! Terminal output for shelf is written as minijinja templates. This crate
//! supplies the two filters those templates lean on and decides whether ANSI
//! styling is emitted at all.
//!
//! - `style("name")` wraps a value in the `console::Style` registered under
//!   `name` in the active [`Theme`]. With color off the value passes through
//!   untouched, so piping `shelf list` into a file yields plain text.
//! - `pad(width)` right-pads a value to a display width (wide glyphs count as
//!   two columns), used for column layouts.
//!
//! A [`Theme`] is a flat map of style names. An [`AdaptiveTheme`] carries a
//! light and a dark variant and picks one from the desktop appearance reported
//! by `dark-light` at render time.
//!
//! ```rust
//! use console::Style;
//! use outstanding::{render_with_color, Theme, ThemeChoice};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Card { title: String, year: i32 }
//!
//! let theme = Theme::new().add("title", Style::new().bold());
//! let out = render_with_color(
//!     r#"{{ title | style("title") }} ({{ year }})"#,
//!     &Card { title: "Emma".into(), year: 1815 },
//!     ThemeChoice::from(&theme),
//!     false,
//! )
//! .unwrap();
//! assert_eq!(out, "Emma (1815)");
//! ```
//!
//! Unknown style names are not silently dropped: the text is prefixed with
//! [`DEFAULT_MISSING_STYLE_INDICATOR`] so typos in templates show up in output.

use console::{Style, Term};
use minijinja::{Environment, Error, Value};
use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Mutex;
use unicode_width::UnicodeWidthStr;

/// Prefix shown in front of text whose style name is not registered.
pub const DEFAULT_MISSING_STYLE_INDICATOR: &str = "(!?)";

/// Named `console` styles plus the marker used for unknown names.
#[derive(Clone)]
pub struct Styles {
    styles: HashMap<String, Style>,
    missing_indicator: String,
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            styles: HashMap::new(),
            missing_indicator: DEFAULT_MISSING_STYLE_INDICATOR.to_string(),
        }
    }
}

impl Styles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the unknown-style marker. An empty marker disables it.
    pub fn missing_indicator(mut self, indicator: &str) -> Self {
        self.missing_indicator = indicator.to_string();
        self
    }

    /// Registers `style` under `name`, replacing any previous entry.
    pub fn add(mut self, name: &str, style: Style) -> Self {
        self.styles.insert(name.to_string(), style);
        self
    }

    pub fn has(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Styles `text` with ANSI codes when `use_color` is set, otherwise returns
    /// it as is. Unknown names get the missing marker in both modes.
    pub fn apply(&self, name: &str, text: &str, use_color: bool) -> String {
        match self.styles.get(name) {
            // The caller already decided on color; console must not second-guess it.
            Some(style) if use_color => style
                .clone()
                .force_styling(true)
                .apply_to(text)
                .to_string(),
            Some(_) => text.to_string(),
            None if self.missing_indicator.is_empty() => text.to_string(),
            None => format!("{} {}", self.missing_indicator, text),
        }
    }
}

#[derive(Clone, Default)]
pub struct Theme {
    styles: Styles,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_styles(styles: Styles) -> Self {
        Self { styles }
    }

    pub fn add(mut self, name: &str, style: Style) -> Self {
        self.styles = self.styles.add(name, style);
        self
    }

    pub fn styles(&self) -> &Styles {
        &self.styles
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Light,
    Dark,
}

/// A light/dark pair resolved against the detected [`ColorMode`].
#[derive(Clone)]
pub struct AdaptiveTheme {
    light: Theme,
    dark: Theme,
}

impl AdaptiveTheme {
    pub fn new(light: Theme, dark: Theme) -> Self {
        Self { light, dark }
    }

    pub fn for_mode(&self, mode: ColorMode) -> &Theme {
        match mode {
            ColorMode::Light => &self.light,
            ColorMode::Dark => &self.dark,
        }
    }
}

pub enum ThemeChoice<'a> {
    Theme(&'a Theme),
    Adaptive(&'a AdaptiveTheme),
}

impl ThemeChoice<'_> {
    fn resolve(&self) -> Theme {
        match self {
            ThemeChoice::Theme(theme) => (*theme).clone(),
            ThemeChoice::Adaptive(adaptive) => adaptive.for_mode(detect_color_mode()).clone(),
        }
    }
}

impl<'a> From<&'a Theme> for ThemeChoice<'a> {
    fn from(theme: &'a Theme) -> Self {
        ThemeChoice::Theme(theme)
    }
}

impl<'a> From<&'a AdaptiveTheme> for ThemeChoice<'a> {
    fn from(adaptive: &'a AdaptiveTheme) -> Self {
        ThemeChoice::Adaptive(adaptive)
    }
}

type ModeDetector = fn() -> ColorMode;

fn system_color_mode() -> ColorMode {
    match dark_light::detect() {
        dark_light::Mode::Dark => ColorMode::Dark,
        dark_light::Mode::Light => ColorMode::Light,
    }
}

static MODE_DETECTOR: Lazy<Mutex<ModeDetector>> = Lazy::new(|| Mutex::new(system_color_mode));

/// Swaps the appearance detector. Tests use this to pin a mode.
pub fn set_mode_detector(detector: ModeDetector) {
    let mut guard = MODE_DETECTOR.lock().unwrap_or_else(|e| e.into_inner());
    *guard = detector;
}

pub fn detect_color_mode() -> ColorMode {
    let detector = *MODE_DETECTOR.lock().unwrap_or_else(|e| e.into_inner());
    detector()
}

/// True when stdout is a terminal that accepts ANSI colors.
pub fn stdout_supports_color() -> bool {
    Term::stdout().features().colors_supported()
}

/// Renders `template` with color decided by [`stdout_supports_color`].
pub fn render<T: Serialize>(
    template: &str,
    data: &T,
    theme: ThemeChoice<'_>,
) -> Result<String, Error> {
    render_with_color(template, data, theme, stdout_supports_color())
}

/// Renders `template` with color forced on or off.
pub fn render_with_color<T: Serialize>(
    template: &str,
    data: &T,
    theme: ThemeChoice<'_>,
    use_color: bool,
) -> Result<String, Error> {
    let mut env = Environment::new();
    register_filters(&mut env, theme.resolve(), use_color);
    env.add_template_owned("_inline".to_string(), template.to_string())?;
    env.get_template("_inline")?.render(data)
}

fn register_filters(env: &mut Environment<'static>, theme: Theme, use_color: bool) {
    let styles = theme.styles;
    env.add_filter("style", move |value: Value, name: String| -> String {
        styles.apply(&name, &value.to_string(), use_color)
    });
    env.add_filter("pad", |value: Value, width: usize| -> String {
        pad_to_width(&value.to_string(), width)
    });
}

/// Right-pads `text` with spaces up to `width` display columns.
pub fn pad_to_width(text: &str, width: usize) -> String {
    let missing = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(missing))
}

/// Nearest xterm-256 palette index for an RGB color.
pub fn rgb_to_ansi256((r, g, b): (u8, u8, u8)) -> u8 {
    if r == g && g == b {
        match r {
            0..=7 => 16,
            249..=255 => 231,
            _ => 232 + ((r as u16 - 8) * 24 / 247) as u8,
        }
    } else {
        let scale = |c: u8| (c as u16 * 5 / 255) as u8;
        16 + 36 * scale(r) + 6 * scale(g) + scale(b)
    }
}
