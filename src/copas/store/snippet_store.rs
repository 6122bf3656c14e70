use super::{BlobStore, SNIPPETS_KEY};
use crate::error::{CopasError, Result};
use crate::model::{generate_id, Snippet};
use log::{debug, warn};

/// The authoritative snippet collection plus its filtered view.
///
/// Order is newest first. The filtered view is a list of positions into the collection,
/// recomputed from the last search term after every mutation and every search, so it
/// always subsets the collection without reordering it.
///
/// Mutations are all-or-nothing: if persisting fails, the in-memory collection is
/// rolled back and the error is returned.
pub struct SnippetStore<B: BlobStore> {
    backend: B,
    key: String,
    snippets: Vec<Snippet>,
    search_term: String,
    filtered: Vec<usize>,
}

impl<B: BlobStore> SnippetStore<B> {
    /// Creates an empty store over `backend`. Nothing is read until [`Self::load`].
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            key: SNIPPETS_KEY.to_string(),
            snippets: Vec::new(),
            search_term: String::new(),
            filtered: Vec::new(),
        }
    }

    /// Creates a store and loads whatever the backend holds.
    pub fn open(backend: B) -> Self {
        let mut store = Self::new(backend);
        store.load();
        store
    }

    pub fn with_key(mut self, key: &str) -> Self {
        self.key = key.to_string();
        self
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Replaces the in-memory collection with the persisted one.
    ///
    /// Never fails: a missing, unreadable or unparseable blob all mean "no snippets".
    /// The search term is cleared and the filtered view reset to the full collection.
    pub fn load(&mut self) {
        self.snippets = match self.backend.get(&self.key) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<Snippet>>(&raw) {
                Ok(snippets) => snippets,
                Err(e) => {
                    warn!("Discarding unreadable snippet data under '{}': {}", self.key, e);
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("Could not read snippet data under '{}': {}", self.key, e);
                Vec::new()
            }
        };
        debug!("Loaded {} snippets from '{}'", self.snippets.len(), self.key);
        self.search_term.clear();
        self.refilter();
    }

    /// Writes the full collection as a single blob, replacing the previous one.
    pub fn persist(&self) -> Result<()> {
        let raw = serde_json::to_string(&self.snippets).map_err(CopasError::Serialization)?;
        self.backend.set(&self.key, &raw)?;
        debug!("Persisted {} snippets to '{}'", self.snippets.len(), self.key);
        Ok(())
    }

    /// Adds a snippet at the front of the collection.
    ///
    /// Blank content is rejected with [`CopasError::EmptyContent`] and nothing changes.
    /// Generated ids are re-rolled in the unlikely case they collide with an existing one.
    pub fn create(&mut self, content: &str) -> Result<&Snippet> {
        if content.trim().is_empty() {
            return Err(CopasError::EmptyContent);
        }

        let mut id = generate_id();
        while self.position(&id).is_some() {
            id = generate_id();
        }

        self.snippets.insert(0, Snippet::with_id(id, content));
        if let Err(e) = self.persist() {
            self.snippets.remove(0);
            return Err(e);
        }
        self.refilter();

        Ok(&self.snippets[0])
    }

    /// Replaces the content of snippet `id` in place, re-deriving its title.
    ///
    /// Position, id and creation time are preserved.
    pub fn update(&mut self, id: &str, content: &str) -> Result<&Snippet> {
        if content.trim().is_empty() {
            return Err(CopasError::EmptyContent);
        }
        let pos = self
            .position(id)
            .ok_or_else(|| CopasError::SnippetNotFound(id.to_string()))?;

        let previous = self.snippets[pos].clone();
        self.snippets[pos].set_content(content);
        if let Err(e) = self.persist() {
            self.snippets[pos] = previous;
            return Err(e);
        }
        self.refilter();

        Ok(&self.snippets[pos])
    }

    /// Removes snippet `id` if present and returns it.
    ///
    /// An absent id is not an error; the collection is still persisted and the view
    /// recomputed, and `None` is returned.
    pub fn remove(&mut self, id: &str) -> Result<Option<Snippet>> {
        let removed = self.position(id).map(|pos| (pos, self.snippets.remove(pos)));

        if let Err(e) = self.persist() {
            if let Some((pos, snippet)) = removed {
                self.snippets.insert(pos, snippet);
            }
            return Err(e);
        }
        self.refilter();

        Ok(removed.map(|(_, snippet)| snippet))
    }

    /// Sets the search term and returns the resulting view.
    ///
    /// A blank term selects everything; otherwise a snippet is kept when the term
    /// (case-insensitive) occurs in its title or content.
    pub fn search(&mut self, term: &str) -> Vec<&Snippet> {
        self.search_term = term.to_string();
        self.refilter();
        self.filtered()
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// The filtered view, in collection order.
    pub fn filtered(&self) -> Vec<&Snippet> {
        self.filtered.iter().map(|&pos| &self.snippets[pos]).collect()
    }

    /// The filtered view paired with each snippet's position in the full collection.
    pub fn filtered_with_positions(&self) -> Vec<(usize, &Snippet)> {
        self.filtered
            .iter()
            .map(|&pos| (pos, &self.snippets[pos]))
            .collect()
    }

    pub fn snippets(&self) -> &[Snippet] {
        &self.snippets
    }

    pub fn get(&self, id: &str) -> Option<&Snippet> {
        self.snippets.iter().find(|s| s.id == id)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.snippets.iter().position(|s| s.id == id)
    }

    pub fn len(&self) -> usize {
        self.snippets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snippets.is_empty()
    }

    fn refilter(&mut self) {
        self.filtered = if self.search_term.trim().is_empty() {
            (0..self.snippets.len()).collect()
        } else {
            let needle = self.search_term.to_lowercase();
            self.snippets
                .iter()
                .enumerate()
                .filter(|(_, s)| s.matches(&needle))
                .map(|(pos, _)| pos)
                .collect()
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::derive_title;
    use crate::store::memory::MemBlobStore;

    fn store() -> SnippetStore<MemBlobStore> {
        SnippetStore::open(MemBlobStore::new())
    }

    fn ids(snippets: &[&Snippet]) -> Vec<String> {
        snippets.iter().map(|s| s.id.clone()).collect()
    }

    #[test]
    fn load_missing_blob_is_empty() {
        let store = store();
        assert!(store.is_empty());
        assert!(store.filtered().is_empty());
    }

    #[test]
    fn load_corrupt_blob_is_empty() {
        let backend = MemBlobStore::new().with_blob(SNIPPETS_KEY, "{not json");
        let store = SnippetStore::open(backend);
        assert!(store.is_empty());
    }

    #[test]
    fn load_structurally_invalid_blob_is_empty() {
        let backend = MemBlobStore::new().with_blob(SNIPPETS_KEY, r#"[{"id": 1}]"#);
        let store = SnippetStore::open(backend);
        assert!(store.is_empty());

        let backend = MemBlobStore::new().with_blob(SNIPPETS_KEY, "null");
        let store = SnippetStore::open(backend);
        assert!(store.is_empty());
    }

    #[test]
    fn corrupt_blob_heals_on_next_write() {
        let backend = MemBlobStore::new().with_blob(SNIPPETS_KEY, "garbage");
        let mut store = SnippetStore::open(backend);
        store.create("fresh").unwrap();

        let mut reloaded = SnippetStore::new(store.backend());
        reloaded.load();
        assert_eq!(reloaded.len(), 1);
        assert_eq!(reloaded.snippets()[0].content, "fresh");
    }

    #[test]
    fn create_inserts_at_front_with_derived_title() {
        let mut store = store();
        store.create("first").unwrap();
        let content = "second snippet\nwith body";
        let created = store.create(content).unwrap().clone();

        assert_eq!(store.len(), 2);
        assert_eq!(store.snippets()[0], created);
        assert_eq!(created.title, derive_title(content));
        assert_eq!(store.snippets()[1].content, "first");
    }

    #[test]
    fn create_rejects_blank_content() {
        let mut store = store();
        assert!(matches!(store.create(""), Err(CopasError::EmptyContent)));
        assert!(matches!(store.create("   \n\t"), Err(CopasError::EmptyContent)));
        assert!(store.is_empty());
        assert_eq!(store.backend().write_count(), 0);
    }

    #[test]
    fn each_mutation_persists_once() {
        let mut store = store();
        let id = store.create("one").unwrap().id.clone();
        assert_eq!(store.backend().write_count(), 1);
        store.update(&id, "two").unwrap();
        assert_eq!(store.backend().write_count(), 2);
        store.remove(&id).unwrap();
        assert_eq!(store.backend().write_count(), 3);
    }

    #[test]
    fn update_preserves_identity_and_position() {
        let mut store = store();
        store.create("c").unwrap();
        let id = store.create("b").unwrap().id.clone();
        store.create("a").unwrap();
        let before = store.get(&id).unwrap().clone();

        let updated = store.update(&id, "B changed\nmore").unwrap().clone();

        assert_eq!(updated.id, before.id);
        assert_eq!(updated.created_at, before.created_at);
        assert_eq!(updated.title, "B changed");
        assert_eq!(updated.content, "B changed\nmore");
        assert!(updated.updated_at >= before.updated_at);
        assert_eq!(store.position(&id), Some(1));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn update_absent_id_is_noop() {
        let mut store = store();
        store.create("a").unwrap();
        let snapshot = store.snippets().to_vec();

        let result = store.update("missing", "x");

        assert!(matches!(result, Err(CopasError::SnippetNotFound(_))));
        assert_eq!(store.snippets(), snapshot.as_slice());
        assert_eq!(store.backend().write_count(), 1);
    }

    #[test]
    fn update_with_blank_content_is_noop() {
        let mut store = store();
        let id = store.create("keep me").unwrap().id.clone();

        assert!(matches!(
            store.update(&id, "  "),
            Err(CopasError::EmptyContent)
        ));
        assert_eq!(store.get(&id).unwrap().content, "keep me");
        assert_eq!(store.backend().write_count(), 1);
    }

    #[test]
    fn remove_present_id() {
        let mut store = store();
        store.create("a").unwrap();
        let id = store.create("b").unwrap().id.clone();

        let removed = store.remove(&id).unwrap();

        assert_eq!(removed.map(|s| s.id), Some(id.clone()));
        assert_eq!(store.len(), 1);
        assert!(store.get(&id).is_none());
    }

    #[test]
    fn remove_absent_id_is_noop() {
        let mut store = store();
        store.create("a").unwrap();
        let snapshot = store.snippets().to_vec();

        assert!(store.remove("missing").unwrap().is_none());
        assert_eq!(store.snippets(), snapshot.as_slice());
    }

    #[test]
    fn search_blank_returns_everything_in_order() {
        let mut store = store();
        store.create("one").unwrap();
        store.create("two").unwrap();
        store.create("three").unwrap();

        let all: Vec<String> = store.snippets().iter().map(|s| s.id.clone()).collect();
        assert_eq!(ids(&store.search("")), all);
        assert_eq!(ids(&store.search("   ")), all);
    }

    #[test]
    fn search_matches_title_or_content_case_insensitively() {
        let mut store = store();
        store.create("Alpha\nshared body").unwrap();
        store.create("beta").unwrap();
        store.create("Gamma\nSHARED").unwrap();

        let found = store.search("Shared");
        let contents: Vec<&str> = found.iter().map(|s| s.content.as_str()).collect();
        assert_eq!(contents, vec!["Gamma\nSHARED", "Alpha\nshared body"]);

        let found = store.search("BETA");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "beta");
    }

    #[test]
    fn mutations_refilter_with_last_term() {
        let mut store = store();
        store.create("apple pie").unwrap();
        store.search("apple");
        assert_eq!(store.filtered().len(), 1);

        store.create("banana").unwrap();
        assert_eq!(store.filtered().len(), 1);

        let id = store.create("apple crumble").unwrap().id.clone();
        assert_eq!(store.filtered().len(), 2);
        assert_eq!(store.filtered()[0].id, id);

        store.update(&id, "pear crumble").unwrap();
        assert_eq!(store.filtered().len(), 1);

        let pie = store.filtered()[0].id.clone();
        store.remove(&pie).unwrap();
        assert!(store.filtered().is_empty());
        assert_eq!(store.search_term(), "apple");
    }

    #[test]
    fn filtered_positions_refer_to_full_collection() {
        let mut store = store();
        store.create("match one").unwrap();
        store.create("other").unwrap();
        store.create("match two").unwrap();

        store.search("match");
        let positions: Vec<usize> = store
            .filtered_with_positions()
            .iter()
            .map(|(pos, _)| *pos)
            .collect();
        assert_eq!(positions, vec![0, 2]);
    }

    #[test]
    fn persist_load_round_trip() {
        let mut store = store();
        store.create("first\nbody").unwrap();
        store.create("second").unwrap();
        let second_id = store.snippets()[0].id.clone();
        store.update(&second_id, "second edited").unwrap();
        let expected = store.snippets().to_vec();

        let mut reloaded = SnippetStore::new(store.backend());
        reloaded.load();

        assert_eq!(reloaded.snippets(), expected.as_slice());
    }

    #[test]
    fn load_resets_filtered_view() {
        let mut store = store();
        store.create("one").unwrap();
        store.create("two").unwrap();
        store.search("one");
        assert_eq!(store.filtered().len(), 1);

        store.load();

        assert_eq!(store.search_term(), "");
        assert_eq!(store.filtered().len(), 2);
    }

    #[test]
    fn failed_persist_rolls_back() {
        let mut store = store();
        let id = store.create("stable").unwrap().id.clone();
        store.backend().set_simulate_write_error(true);

        assert!(store.create("lost").is_err());
        assert!(store.update(&id, "changed").is_err());
        assert!(store.remove(&id).is_err());

        assert_eq!(store.len(), 1);
        assert_eq!(store.snippets()[0].content, "stable");
        assert_eq!(store.filtered().len(), 1);
    }

    #[test]
    fn custom_key_is_isolated() {
        let backend = MemBlobStore::new();
        let mut store = SnippetStore::new(&backend).with_key("scratch");
        store.load();
        store.create("x").unwrap();
        assert!(backend.get(SNIPPETS_KEY).unwrap().is_none());
        assert!(backend.get("scratch").unwrap().is_some());
    }

    #[test]
    fn end_to_end_scenario() {
        let mut store = store();
        let id = store.create("foo bar").unwrap().id.clone();
        assert_eq!(store.len(), 1);
        assert_eq!(store.snippets()[0].title, "foo bar");

        let found = store.search("BAR");
        assert_eq!(ids(&found), vec![id.clone()]);

        store.remove(&id).unwrap();
        assert!(store.is_empty());

        store.load();
        assert!(store.is_empty());
    }
}
