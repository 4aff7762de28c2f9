//! # Storage Layer
//!
//! The [`ItemStore`] trait is the sole authority for item identity,
//! durability, and mutual exclusion over the collection. Nothing outside
//! this module touches the backing file.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production store. Items live in memory and are
//!   mirrored to a single JSON file; every mutation rewrites the file
//!   under the same lock that applied the change.
//! - [`memory::InMemoryStore`]: no persistence, for tests.
//!
//! ## Exclusion model
//!
//! Methods take `&self`; implementations lock internally. Each call is
//! one critical section: a mutation plus its flush, or the taking of a
//! snapshot. The lock is never held across calls, and filter/sort work
//! on returned snapshots happens outside it.

use crate::error::Result;
use crate::model::{Item, ItemDraft};

pub mod fs;
pub mod memory;

/// Abstract interface for item storage.
pub trait ItemStore: Send + Sync {
    /// Create a new item from the draft, assigning a fresh id and
    /// timestamps. Returns the stored item.
    fn create(&self, draft: ItemDraft) -> Result<Item>;

    /// Look up an item by id.
    fn find_by_id(&self, id: u64) -> Result<Option<Item>>;

    /// Replace name/description/price of an existing item, bumping
    /// `updated_at`. Returns `None` without flushing if the id is
    /// unknown; `id` and `created_at` are never touched.
    fn update(&self, id: u64, draft: ItemDraft) -> Result<Option<Item>>;

    /// Hard-delete an item. Returns whether a removal occurred; flushes
    /// only when it did.
    fn delete_by_id(&self, id: u64) -> Result<bool>;

    /// Snapshot copy of the whole collection, in insertion order.
    fn find_all(&self) -> Result<Vec<Item>>;
}
