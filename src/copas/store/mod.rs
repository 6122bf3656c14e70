//! # Storage Layer
//!
//! Two levels, split the same way the rest of the crate splits "how" from "what":
//!
//! 1. [`BlobStore`]: a key-value slot store. It knows nothing about snippets; it reads
//!    and writes opaque strings.
//! 2. [`snippet_store::SnippetStore`]: owns the snippet collection, its filtered view,
//!    and the rules for creating, editing and removing snippets. It persists the whole
//!    collection as one JSON blob under [`SNIPPETS_KEY`] after every mutation.
//!
//! ## Persistence Rules
//!
//! - **Whole-collection writes**: every mutation rewrites the full list. No partial
//!   writes, no versioning, no migrations.
//! - **Corruption is absence**: a blob that does not parse as a snippet list is dropped on
//!   load and the store starts empty. The next successful write replaces it.
//! - **Atomicity is inherited**: whatever a single `set` guarantees is all the store gets.
//!   [`fs::FsBlobStore`] writes to a temp file and renames it over the target.
//!
//! ## Implementations
//!
//! - [`fs::FsBlobStore`]: one `<key>.json` file per key under a root directory.
//! - [`memory::MemBlobStore`]: in-memory map, for tests.
//!
//! ## Storage Layout
//!
//! ```text
//! <data dir>/
//! ├── snippets.json      # the collection
//! └── config.json        # settings (see config.rs)
//! ```

use crate::error::Result;

pub mod fs;
pub mod memory;
pub mod snippet_store;

/// Key under which the snippet collection is persisted.
pub const SNIPPETS_KEY: &str = "snippets";

/// Abstract interface for a key-value blob store.
///
/// Methods take `&self`; implementations that hold state in memory use interior
/// mutability since the store is only ever used from one thread.
pub trait BlobStore {
    /// Read the value stored under `key`. `Ok(None)` if nothing was ever written.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite the value stored under `key`.
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

impl<B: BlobStore + ?Sized> BlobStore for &B {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}
