use super::ItemStore;
use crate::error::{Result, WaresError};
use crate::model::{Item, ItemDraft};
use chrono::Utc;
use std::sync::{Mutex, MutexGuard};

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    items: Vec<Item>,
    next_id: u64,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn locked(&self) -> Result<MutexGuard<'_, Inner>> {
        self.inner
            .lock()
            .map_err(|_| WaresError::Store("item store lock poisoned".to_string()))
    }
}

impl ItemStore for InMemoryStore {
    fn create(&self, draft: ItemDraft) -> Result<Item> {
        let mut inner = self.locked()?;
        inner.next_id += 1;
        let now = Utc::now();
        let item = Item {
            id: inner.next_id,
            name: draft.name,
            description: draft.description,
            price: draft.price,
            created_at: now,
            updated_at: now,
        };
        inner.items.push(item.clone());
        Ok(item)
    }

    fn find_by_id(&self, id: u64) -> Result<Option<Item>> {
        let inner = self.locked()?;
        Ok(inner.items.iter().find(|i| i.id == id).cloned())
    }

    fn update(&self, id: u64, draft: ItemDraft) -> Result<Option<Item>> {
        let mut inner = self.locked()?;
        let Some(item) = inner.items.iter_mut().find(|i| i.id == id) else {
            return Ok(None);
        };
        item.name = draft.name;
        item.description = draft.description;
        item.price = draft.price;
        item.updated_at = Utc::now();
        Ok(Some(item.clone()))
    }

    fn delete_by_id(&self, id: u64) -> Result<bool> {
        let mut inner = self.locked()?;
        let before = inner.items.len();
        inner.items.retain(|i| i.id != id);
        Ok(inner.items.len() != before)
    }

    fn find_all(&self) -> Result<Vec<Item>> {
        let inner = self.locked()?;
        Ok(inner.items.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_assigns_sequential_ids() {
        let store = InMemoryStore::new();
        let a = store.create(ItemDraft::new("A", "", 0.0)).unwrap();
        let b = store.create(ItemDraft::new("B", "", 0.0)).unwrap();
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
    }

    #[test]
    fn delete_is_reported_accurately() {
        let store = InMemoryStore::new();
        let a = store.create(ItemDraft::new("A", "", 0.0)).unwrap();
        assert!(store.delete_by_id(a.id).unwrap());
        assert!(!store.delete_by_id(a.id).unwrap());
        assert!(store.find_by_id(a.id).unwrap().is_none());
    }
}
