use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::snippet_store::SnippetStore;
use crate::store::BlobStore;

/// Lists the collection, narrowed by `search` when given.
pub fn run<B: BlobStore>(store: &mut SnippetStore<B>, search: Option<&str>) -> Result<CmdResult> {
    super::search::run(store, search.unwrap_or_default())
}
