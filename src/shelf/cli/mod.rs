//! # CLI Behavior
//!
//! This is **one possible UI client** for shelf, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes and
//! output formatting.
//!
//! ## One Mode Per Invocation
//!
//! Each run performs exactly one mode (add, remove, search, list, stats,
//! exit) and quits. Modes never share state beyond the library file, which
//! every mutating mode rewrites before returning.
//!
//! Running `shelf` with no arguments is `shelf list`.
//!
//! ## Picking a Title
//!
//! `shelf remove` needs an exact title. `shelf titles` prints them all, and
//! the shell completion scripts (`shelf completions bash|zsh`) offer them
//! through the hidden `__complete-titles` command.
//!
//! ## Module Structure
//!
//! - `commands`: Per-command handlers that call the API and print output
//! - `render`: Output formatting (cards, compact rows, stats, messages)
//! - `setup`: Argument parsing via clap, grouped help
//! - `styles`: Theme and style names
//! - `templates`: Output templates

mod commands;
mod render;
pub mod setup;
mod styles;
mod templates;

pub use commands::run;
