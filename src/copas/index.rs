//! # Display Indexes
//!
//! Snippet ids are long and opaque, so users address snippets by a 1-based display
//! index: the snippet's position in the full, newest-first collection.
//!
//! Indexes are **canonical**: a filtered listing shows each match with the index it has
//! in the full collection, so `copas search foo` followed by `copas copy 3` copies the
//! same snippet that `copas list` shows as `3`.
//!
//! Ids (or an unambiguous id prefix of at least [`MIN_ID_PREFIX`] characters) are
//! accepted anywhere an index is. A purely numeric token is always an index.

use crate::error::{CopasError, Result};
use crate::model::Snippet;
use std::fmt;
use std::str::FromStr;

pub const MIN_ID_PREFIX: usize = 4;

/// A user input that selects one snippet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnippetSelector {
    Index(usize),
    Id(String),
}

impl fmt::Display for SnippetSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnippetSelector::Index(i) => write!(f, "{}", i),
            SnippetSelector::Id(id) => write!(f, "{}", id),
        }
    }
}

impl FromStr for SnippetSelector {
    type Err = CopasError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if !s.is_empty() && s.chars().all(|c| c.is_ascii_digit()) {
            return match s.parse::<usize>() {
                Ok(n) if n > 0 => Ok(SnippetSelector::Index(n)),
                _ => Err(CopasError::InvalidSelector(s.to_string())),
            };
        }
        if s.chars().count() >= MIN_ID_PREFIX && s.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Ok(SnippetSelector::Id(s.to_ascii_lowercase()));
        }
        Err(CopasError::InvalidSelector(s.to_string()))
    }
}

/// A snippet paired with its canonical display index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplaySnippet {
    pub snippet: Snippet,
    pub index: usize,
}

impl DisplaySnippet {
    /// Builds a display entry from a 0-based collection position.
    pub fn at(position: usize, snippet: &Snippet) -> Self {
        Self {
            snippet: snippet.clone(),
            index: position + 1,
        }
    }
}

/// Finds the collection position a selector refers to.
pub fn resolve(snippets: &[Snippet], selector: &SnippetSelector) -> Result<usize> {
    match selector {
        SnippetSelector::Index(n) => {
            if *n >= 1 && *n <= snippets.len() {
                Ok(n - 1)
            } else {
                Err(CopasError::SnippetNotFound(format!("index {}", n)))
            }
        }
        SnippetSelector::Id(id) => {
            if let Some(pos) = snippets.iter().position(|s| s.id.eq_ignore_ascii_case(id)) {
                return Ok(pos);
            }
            let matches: Vec<usize> = snippets
                .iter()
                .enumerate()
                .filter(|(_, s)| s.id.to_ascii_lowercase().starts_with(id.as_str()))
                .map(|(pos, _)| pos)
                .collect();
            match matches.as_slice() {
                [pos] => Ok(*pos),
                [] => Err(CopasError::SnippetNotFound(id.clone())),
                _ => Err(CopasError::InvalidSelector(format!(
                    "id prefix '{}' matches {} snippets",
                    id,
                    matches.len()
                ))),
            }
        }
    }
}

pub fn parse_selectors<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<SnippetSelector>> {
    inputs.iter().map(|s| s.as_ref().parse()).collect()
}
