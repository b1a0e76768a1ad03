//! # Shelf Architecture
//!
//! Shelf is a personal library catalog: a list of books persisted to a single
//! JSON file. The crate is a **UI-agnostic library** with a terminal client on
//! top, not a CLI with some helpers underneath.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders templates, handles exit codes  │
//! │  - The ONLY place that knows about stdout/stderr            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the store handle and the in-memory Library          │
//! │  - Dispatches one Action per user selection                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per mode: add, remove, search, list, stats... │
//! │  - Takes the library (and store when mutating) explicitly   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait: load everything, save everything        │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Lifecycle
//!
//! The library is read once when the API is opened. A missing file means an
//! empty library; a malformed one is a hard error. Each mutation (add, remove,
//! import) rewrites the whole file before returning. Everything else only
//! reads the in-memory copy.
//!
//! ## No I/O Assumptions in Core
//!
//! From `api.rs` inward, code returns [`commands::CmdResult`] values carrying
//! books, statistics and leveled messages. It never prints and never exits.
//!
//! ## Module Overview
//!
//! - [`api`]: the facade and action dispatch
//! - [`commands`]: per-mode logic
//! - [`store`]: persistence boundary
//! - [`model`]: `Book`, `Library`, `SearchField`, `LibraryStats`
//! - [`config`]: user configuration
//! - [`init`]: path resolution and API bootstrap
//! - [`error`]: error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod model;
pub mod store;
