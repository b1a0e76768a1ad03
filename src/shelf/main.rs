//! # Shelf CLI
//!
//! The binary is thin: the CLI lives in `cli/`, this file only calls
//! [`cli::run`] and turns an error into `Error: <message>` on stderr with
//! exit status 1.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (src/shelf/cli/)                                 │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Dispatch + context wiring (commands.rs)                  │
//! │  - Terminal rendering via outstanding templates (render.rs) │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  shelf library (api.rs → commands/ → store/)                │
//! │  - Returns structured `CmdResult` values, never prints      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Where the library lives: `SHELF_HOME` (or the platform data directory)
//! holds `config.json` and, by default, `library.json`. `--file` points a
//! single run at another library file.

use colored::*;

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(1);
    }
}
