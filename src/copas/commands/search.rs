use crate::commands::{CmdMessage, CmdResult, ListStats};
use crate::error::Result;
use crate::index::DisplaySnippet;
use crate::store::snippet_store::SnippetStore;
use crate::store::BlobStore;

/// Applies `term` to the store and lists the resulting view.
///
/// Matches keep their canonical index and the collection order; a blank term lists
/// everything.
pub fn run<B: BlobStore>(store: &mut SnippetStore<B>, term: &str) -> Result<CmdResult> {
    store.search(term);

    let listed: Vec<DisplaySnippet> = store
        .filtered_with_positions()
        .into_iter()
        .map(|(pos, snippet)| DisplaySnippet::at(pos, snippet))
        .collect();

    let trimmed = term.trim();
    let stats = ListStats {
        total: store.len(),
        shown: listed.len(),
        search_term: (!trimmed.is_empty()).then(|| trimmed.to_string()),
    };

    let mut result = CmdResult::default();
    if listed.is_empty() {
        let message = match &stats.search_term {
            Some(term) => format!("No snippets found matching \"{}\".", term),
            None => "No snippets yet. Run \"copas add\" to create your first snippet.".to_string(),
        };
        result.add_message(CmdMessage::info(message));
    }

    Ok(result.with_listed_snippets(listed).with_stats(stats))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::create;
    use crate::store::memory::MemBlobStore;

    fn seeded() -> SnippetStore<MemBlobStore> {
        let mut store = SnippetStore::open(MemBlobStore::new());
        create::run(&mut store, "ssh deploy@host").unwrap();
        create::run(&mut store, "Standup notes\nyesterday: deploy").unwrap();
        create::run(&mut store, "grocery list").unwrap();
        store
    }

    #[test]
    fn keeps_canonical_indexes() {
        let mut store = seeded();
        let result = run(&mut store, "DEPLOY").unwrap();

        let indexes: Vec<usize> = result.listed_snippets.iter().map(|d| d.index).collect();
        assert_eq!(indexes, vec![2, 3]);
        assert_eq!(
            result.stats,
            Some(ListStats {
                total: 3,
                shown: 2,
                search_term: Some("DEPLOY".into()),
            })
        );
        assert!(result.messages.is_empty());
    }

    #[test]
    fn blank_term_lists_everything() {
        let mut store = seeded();
        let result = run(&mut store, "  ").unwrap();
        assert_eq!(result.listed_snippets.len(), 3);
        assert!(!result.stats.unwrap().is_filtered());
    }

    #[test]
    fn no_matches_reports_the_term() {
        let mut store = seeded();
        let result = run(&mut store, "kubernetes").unwrap();
        assert!(result.listed_snippets.is_empty());
        assert!(result.messages[0].content.contains("\"kubernetes\""));
    }

    #[test]
    fn empty_store_suggests_adding() {
        let mut store = SnippetStore::open(MemBlobStore::new());
        let result = run(&mut store, "").unwrap();
        assert!(result.messages[0].content.contains("No snippets yet"));
    }
}
