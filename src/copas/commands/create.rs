use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::DisplaySnippet;
use crate::store::snippet_store::SnippetStore;
use crate::store::BlobStore;

pub fn run<B: BlobStore>(store: &mut SnippetStore<B>, content: &str) -> Result<CmdResult> {
    let snippet = store.create(content)?;

    // New snippets always land at the front
    let display = DisplaySnippet::at(0, snippet);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Snippet added: {}",
        display.snippet.title
    )));
    Ok(result.with_affected_snippets(vec![display]))
}
