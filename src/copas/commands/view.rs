use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::SnippetSelector;
use crate::store::snippet_store::SnippetStore;
use crate::store::BlobStore;

use super::helpers::snippets_by_selectors;

pub fn run<B: BlobStore>(
    store: &SnippetStore<B>,
    selectors: &[SnippetSelector],
) -> Result<CmdResult> {
    let snippets = snippets_by_selectors(store, selectors)?;
    Ok(CmdResult::default().with_listed_snippets(snippets))
}
