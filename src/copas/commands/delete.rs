use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::{DisplaySnippet, SnippetSelector};
use crate::store::snippet_store::SnippetStore;
use crate::store::BlobStore;

use super::helpers::resolve_selectors;

/// Removes the selected snippets. Selectors are resolved up front; a snippet that is
/// already gone by the time it is removed is skipped with a warning.
pub fn run<B: BlobStore>(
    store: &mut SnippetStore<B>,
    selectors: &[SnippetSelector],
) -> Result<CmdResult> {
    let resolved = resolve_selectors(store, selectors)?;
    let mut result = CmdResult::default();

    for (index, id) in resolved {
        match store.remove(&id)? {
            Some(snippet) => {
                result.add_message(CmdMessage::success(format!(
                    "Snippet deleted ({}): {}",
                    index, snippet.title
                )));
                result
                    .affected_snippets
                    .push(DisplaySnippet { snippet, index });
            }
            None => {
                result.add_message(CmdMessage::warning(format!(
                    "Snippet {} was already gone",
                    id
                )));
            }
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::create;
    use crate::store::memory::MemBlobStore;

    #[test]
    fn deletes_selected_snippets() {
        let mut store = SnippetStore::open(MemBlobStore::new());
        create::run(&mut store, "c").unwrap();
        create::run(&mut store, "b").unwrap();
        create::run(&mut store, "a").unwrap();

        let result = run(
            &mut store,
            &[SnippetSelector::Index(1), SnippetSelector::Index(3)],
        )
        .unwrap();

        assert_eq!(result.affected_snippets.len(), 2);
        assert_eq!(result.affected_snippets[0].snippet.content, "a");
        assert_eq!(result.affected_snippets[1].snippet.content, "c");
        assert_eq!(store.len(), 1);
        assert_eq!(store.snippets()[0].content, "b");
    }

    #[test]
    fn unknown_selector_deletes_nothing() {
        let mut store = SnippetStore::open(MemBlobStore::new());
        create::run(&mut store, "a").unwrap();

        let result = run(
            &mut store,
            &[SnippetSelector::Index(1), SnippetSelector::Index(9)],
        );

        assert!(result.is_err());
        assert_eq!(store.len(), 1);
    }
}
