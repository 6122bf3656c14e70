use crate::error::Result;
use crate::index::{resolve, DisplaySnippet, SnippetSelector};
use crate::store::snippet_store::SnippetStore;
use crate::store::BlobStore;

/// Resolves selectors against the current collection into `(display index, id)` pairs.
///
/// All selectors are resolved before anything is changed, so a batch delete of `1 2`
/// removes the snippets that were `1` and `2` when the command started. Duplicates
/// (e.g. an index and the id of the same snippet) collapse to their first occurrence.
pub fn resolve_selectors<B: BlobStore>(
    store: &SnippetStore<B>,
    selectors: &[SnippetSelector],
) -> Result<Vec<(usize, String)>> {
    let mut resolved: Vec<(usize, String)> = Vec::with_capacity(selectors.len());
    for selector in selectors {
        let pos = resolve(store.snippets(), selector)?;
        let id = store.snippets()[pos].id.clone();
        if !resolved.iter().any(|(_, existing)| *existing == id) {
            resolved.push((pos + 1, id));
        }
    }
    Ok(resolved)
}

pub fn snippets_by_selectors<B: BlobStore>(
    store: &SnippetStore<B>,
    selectors: &[SnippetSelector],
) -> Result<Vec<DisplaySnippet>> {
    let mut snippets = Vec::with_capacity(selectors.len());
    for selector in selectors {
        let pos = resolve(store.snippets(), selector)?;
        snippets.push(DisplaySnippet::at(pos, &store.snippets()[pos]));
    }
    Ok(snippets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemBlobStore;

    #[test]
    fn resolves_indexes_and_dedupes() {
        let mut store = SnippetStore::open(MemBlobStore::new());
        store.create("older").unwrap();
        let newest = store.create("newer").unwrap().id.clone();

        let resolved = resolve_selectors(
            &store,
            &[
                SnippetSelector::Index(1),
                SnippetSelector::Id(newest.clone()),
                SnippetSelector::Index(2),
            ],
        )
        .unwrap();

        assert_eq!(resolved.len(), 2);
        assert_eq!(resolved[0], (1, newest));
        assert_eq!(resolved[1].0, 2);
    }

    #[test]
    fn any_unknown_selector_fails_the_batch() {
        let mut store = SnippetStore::open(MemBlobStore::new());
        store.create("only").unwrap();

        let result = resolve_selectors(
            &store,
            &[SnippetSelector::Index(1), SnippetSelector::Index(5)],
        );
        assert!(result.is_err());
    }
}
