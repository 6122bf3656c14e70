//! # Command Layer
//!
//! The business logic of copas. Each operation lives in its own submodule as a plain
//! function over a [`SnippetStore`](crate::store::snippet_store::SnippetStore) and
//! returns a structured [`CmdResult`].
//!
//! Commands never print, prompt or exit. Confirmation for destructive operations and
//! clipboard writes belong to the UI; commands only return data and messages.
//!
//! Tests here run against `MemBlobStore` and check the `CmdResult` contents.
//!
//! ## Command Modules
//!
//! - [`create`]: Add a snippet
//! - [`update`]: Replace a snippet's content
//! - [`delete`]: Remove snippets
//! - [`list`]: The full collection
//! - [`search`]: The filtered view for a term
//! - [`view`]: Selected snippets in full
//! - [`config`]: Show and change settings
//! - [`helpers`]: Selector resolution

use crate::config::CopasConfig;
use crate::index::DisplaySnippet;
use serde::Serialize;

pub mod config;
pub mod create;
pub mod delete;
pub mod helpers;
pub mod list;
pub mod search;
pub mod update;
pub mod view;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Counts shown alongside a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListStats {
    pub total: usize,
    pub shown: usize,
    /// The trimmed search term, when one is active.
    pub search_term: Option<String>,
}

impl ListStats {
    pub fn is_filtered(&self) -> bool {
        self.search_term.is_some()
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Snippets created, changed or removed by the command.
    pub affected_snippets: Vec<DisplaySnippet>,
    /// Snippets to show.
    pub listed_snippets: Vec<DisplaySnippet>,
    pub stats: Option<ListStats>,
    pub config: Option<CopasConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_snippets(mut self, snippets: Vec<DisplaySnippet>) -> Self {
        self.affected_snippets = snippets;
        self
    }

    pub fn with_listed_snippets(mut self, snippets: Vec<DisplaySnippet>) -> Self {
        self.listed_snippets = snippets;
        self
    }

    pub fn with_stats(mut self, stats: ListStats) -> Self {
        self.stats = Some(stats);
        self
    }

    pub fn with_config(mut self, config: CopasConfig) -> Self {
        self.config = Some(config);
        self
    }
}
