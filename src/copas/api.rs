//! # API Facade
//!
//! The single entry point for UI clients. The facade:
//! - **Dispatches** to the command functions
//! - **Normalizes inputs**: selector strings (`"3"`, `"0190f3a2"`) become [`SnippetSelector`]s
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It holds no business logic and does no I/O of its own. `CopasApi<B: BlobStore>` is
//! generic over the blob backend: `FsBlobStore` in the binary, `MemBlobStore` in tests.

use crate::commands::{self, CmdResult};
use crate::error::Result;
use crate::index::{parse_selectors, SnippetSelector};
use crate::store::snippet_store::SnippetStore;
use crate::store::BlobStore;
use std::path::{Path, PathBuf};

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{CmdMessage, ListStats, MessageLevel};

pub struct CopasApi<B: BlobStore> {
    store: SnippetStore<B>,
    config_dir: PathBuf,
}

impl<B: BlobStore> CopasApi<B> {
    /// Wraps `backend` and loads the snippet collection from it.
    pub fn new(backend: B, config_dir: impl Into<PathBuf>) -> Self {
        Self {
            store: SnippetStore::open(backend),
            config_dir: config_dir.into(),
        }
    }

    pub fn store(&self) -> &SnippetStore<B> {
        &self.store
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn create_snippet(&mut self, content: &str) -> Result<CmdResult> {
        commands::create::run(&mut self.store, content)
    }

    pub fn update_snippet(&mut self, selector: &str, content: &str) -> Result<CmdResult> {
        let selector: SnippetSelector = selector.parse()?;
        commands::update::run(&mut self.store, &selector, content)
    }

    pub fn delete_snippets<I: AsRef<str>>(&mut self, selectors: &[I]) -> Result<CmdResult> {
        let selectors = parse_selectors(selectors)?;
        commands::delete::run(&mut self.store, &selectors)
    }

    pub fn list_snippets(&mut self, search: Option<&str>) -> Result<CmdResult> {
        commands::list::run(&mut self.store, search)
    }

    pub fn search_snippets(&mut self, term: &str) -> Result<CmdResult> {
        commands::search::run(&mut self.store, term)
    }

    pub fn view_snippets<I: AsRef<str>>(&self, selectors: &[I]) -> Result<CmdResult> {
        let selectors = parse_selectors(selectors)?;
        commands::view::run(&self.store, &selectors)
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.config_dir, action)
    }
}
