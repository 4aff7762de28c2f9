//! Thin orchestration over the store and the query engine.
//!
//! Read paths take one snapshot and hand it to the pure query functions;
//! write paths validate the draft and forward to the store. No locking
//! happens here and no I/O beyond the store calls.

use crate::error::{Result, WaresError};
use crate::model::{Item, ItemDraft};
use crate::query::{self, SortSpec};
use crate::store::ItemStore;
use serde::Serialize;

/// One page of list results plus the total match count for the same
/// filter, independent of the page bounds.
#[derive(Debug, Clone, Serialize)]
pub struct ItemPage {
    pub items: Vec<Item>,
    pub page: i64,
    pub size: i64,
    pub total: usize,
}

/// The facade all boundary layers (HTTP, tests) call into.
///
/// Generic over [`ItemStore`] so the service can run against the file
/// store in production and the in-memory store in tests.
pub struct ItemService<S: ItemStore> {
    store: S,
}

impl<S: ItemStore> ItemService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Create an item. The sole content check is a non-blank name;
    /// rejection happens before any state change.
    pub fn create(&self, draft: ItemDraft) -> Result<Item> {
        validate(&draft)?;
        self.store.create(draft)
    }

    pub fn get(&self, id: u64) -> Result<Option<Item>> {
        self.store.find_by_id(id)
    }

    /// Replace the mutable fields of an existing item. `None` passes
    /// through untouched when the id is unknown.
    pub fn update(&self, id: u64, draft: ItemDraft) -> Result<Option<Item>> {
        validate(&draft)?;
        self.store.update(id, draft)
    }

    pub fn delete(&self, id: u64) -> Result<bool> {
        self.store.delete_by_id(id)
    }

    /// Filter, sort, and paginate one snapshot of the collection.
    pub fn list(
        &self,
        term: Option<&str>,
        sort: Option<&str>,
        page: i64,
        size: i64,
    ) -> Result<ItemPage> {
        let snapshot = self.store.find_all()?;
        let total = query::count(&snapshot, term);

        let mut matched = query::filter(snapshot, term);
        if let Some(spec) = sort.and_then(SortSpec::parse) {
            query::sort(&mut matched, spec);
        }
        let items = query::paginate(matched, page, size);

        Ok(ItemPage {
            items,
            page,
            size,
            total,
        })
    }

    /// Full unfiltered snapshot, for the export endpoint.
    pub fn export_all(&self) -> Result<Vec<Item>> {
        self.store.find_all()
    }
}

fn validate(draft: &ItemDraft) -> Result<()> {
    if draft.name.trim().is_empty() {
        return Err(WaresError::Validation("name must not be blank".to_string()));
    }
    Ok(())
}
