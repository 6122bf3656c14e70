use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::{resolve, DisplaySnippet, SnippetSelector};
use crate::store::snippet_store::SnippetStore;
use crate::store::BlobStore;

pub fn run<B: BlobStore>(
    store: &mut SnippetStore<B>,
    selector: &SnippetSelector,
    content: &str,
) -> Result<CmdResult> {
    let pos = resolve(store.snippets(), selector)?;
    let id = store.snippets()[pos].id.clone();

    let snippet = store.update(&id, content)?;
    // Position does not change on edit
    let display = DisplaySnippet::at(pos, snippet);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Snippet updated ({}): {}",
        display.index, display.snippet.title
    )));
    Ok(result.with_affected_snippets(vec![display]))
}
