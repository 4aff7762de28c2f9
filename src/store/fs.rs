use super::ItemStore;
use crate::error::{Result, WaresError};
use crate::model::{Item, ItemDraft};
use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

/// File-backed item store.
///
/// The authoritative collection lives in memory behind one mutex; the
/// JSON file at `path` is a durable mirror rewritten on every mutation.
/// Mutation and flush run in the same critical section, so no caller
/// observes a collection mid-mutation and no two flushes interleave. If
/// the flush fails the operation reports the error but the in-memory
/// change stays applied; memory and disk then diverge until the next
/// successful flush.
pub struct FileStore {
    path: PathBuf,
    inner: Mutex<Inner>,
}

struct Inner {
    items: Vec<Item>,
    next_id: u64,
}

impl FileStore {
    /// Open the store at `path`, loading any existing collection.
    ///
    /// An existing non-empty file is parsed and the id counter seeded
    /// from the highest id found. A missing file is established as an
    /// empty collection, creating parent directories as needed. An
    /// unparsable file or an uncreatable directory is a startup error;
    /// the process must not serve in that state.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let mut items: Vec<Item> = Vec::new();

        if path.exists() {
            let content = fs::read_to_string(&path).map_err(WaresError::Io)?;
            if !content.trim().is_empty() {
                items = serde_json::from_str(&content).map_err(WaresError::Serialization)?;
            }
        } else {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    fs::create_dir_all(parent).map_err(WaresError::Io)?;
                }
            }
            write_collection(&path, &items)?;
        }

        let max_id = items.iter().map(|i| i.id).max().unwrap_or(0);
        Ok(Self {
            path,
            inner: Mutex::new(Inner {
                items,
                next_id: max_id + 1,
            }),
        })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn locked(&self) -> Result<MutexGuard<'_, Inner>> {
        self.inner
            .lock()
            .map_err(|_| WaresError::Store("item store lock poisoned".to_string()))
    }

    fn flush(&self, inner: &Inner) -> Result<()> {
        write_collection(&self.path, &inner.items)
    }
}

/// Serialize `items` to a sibling temp file, then rename over `path`.
/// The rename keeps the backing file whole even if the process dies
/// mid-write.
fn write_collection(path: &Path, items: &[Item]) -> Result<()> {
    let content = serde_json::to_string_pretty(items).map_err(WaresError::Serialization)?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, content).map_err(WaresError::Io)?;
    fs::rename(&tmp, path).map_err(WaresError::Io)?;
    Ok(())
}

impl ItemStore for FileStore {
    fn create(&self, draft: ItemDraft) -> Result<Item> {
        let mut inner = self.locked()?;
        let now = Utc::now();
        let item = Item {
            id: inner.next_id,
            name: draft.name,
            description: draft.description,
            price: draft.price,
            created_at: now,
            updated_at: now,
        };
        inner.next_id += 1;
        inner.items.push(item.clone());
        self.flush(&inner)?;
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
        let updated = item.clone();
        self.flush(&inner)?;
        Ok(Some(updated))
    }

    fn delete_by_id(&self, id: u64) -> Result<bool> {
        let mut inner = self.locked()?;
        let before = inner.items.len();
        inner.items.retain(|i| i.id != id);
        let removed = inner.items.len() != before;
        if removed {
            self.flush(&inner)?;
        }
        Ok(removed)
    }

    fn find_all(&self) -> Result<Vec<Item>> {
        let inner = self.locked()?;
        Ok(inner.items.clone())
    }
}
