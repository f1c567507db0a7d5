//! # Bline Architecture
//!
//! Bline turns stored templates into ready-to-paste command lines:
//!
//! ```text
//! template "ping":  ping -c {{N}} {{HOST}}     {{N}} -> count, {{HOST}} -> host
//! config.json:      count = 4, host = example.com
//! --set count=10
//! ──────────────────────────────────────────────
//! output:           ping -c 10 example.com
//! ```
//!
//! Like any good CLI tool it is a library first; the binary is one client.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs)                               │
//! │  - Parses arguments, prints, runs the editor and clipboard  │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Builds the per-invocation Context                        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Profiles, templates, variables, merge, resolution        │
//! │  - Returns `Result<CmdResult>`, no I/O assumptions          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait over names and raw bytes                 │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Variable Precedence
//!
//! For a single run, a placeholder's variable is looked up in:
//!
//! 1. `--set key=value` overrides (later ones win, never persisted)
//! 2. variables persisted in `config.json`
//! 3. the template's own `defaults`
//!
//! If none has a value, the [`model::MissingPolicy`] decides: empty string
//! (the default), the literal placeholder, or an error.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: `Template`, `VariableSet`, `Context`, `MissingPolicy`
//! - [`config`]: The persisted configuration record
//! - [`init`]: Locating the configuration root and wiring the file store
//! - [`editor`]: External editor integration
//! - [`clipboard`]: Cross-platform clipboard support
//! - [`error`]: Error types

pub mod api;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod editor;
pub mod error;
pub mod init;
pub mod model;
pub mod store;
