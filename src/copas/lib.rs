//! # Copas Architecture
//!
//! Copas keeps a short list of text snippets at hand so any of them can be copied to the
//! clipboard in one step. The crate is a **UI-agnostic library** with a thin CLI client on
//! top; the same core could back a tray window, a web page or a REPL.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders cards, talks to the clipboard  │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Resolves selectors (display index / id) into ids         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per operation, returns `CmdResult`            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - `SnippetStore`: owned collection + filtered view         │
//! │  - `BlobStore` trait: FsBlobStore, MemBlobStore             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular Rust values and returns `Result<CmdResult>`.
//! It never prints, never exits the process and never touches the clipboard. Copying is
//! the render surface's job; the core only hands out the snippet content.
//!
//! ## Testing Strategy
//!
//! - `store/`: the collection rules (ordering, title derivation, persistence round-trips)
//!   against `MemBlobStore`.
//! - `commands/`: business logic with structured results.
//! - `api.rs`: selector resolution and dispatch.
//! - `tests/`: the binary end to end, with a temporary data directory.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic per operation
//! - [`store`]: Snippet store and blob backends
//! - [`model`]: `Snippet`, title derivation, id generation
//! - [`index`]: Display indexes and selectors
//! - [`config`]: Configuration file
//! - [`editor`]: External editor integration
//! - [`clipboard`]: System clipboard writer
//! - [`error`]: Error types

pub mod api;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod editor;
pub mod error;
pub mod index;
pub mod model;
pub mod store;
