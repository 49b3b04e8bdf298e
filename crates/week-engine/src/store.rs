//! The storage contract consumed by caller layers, plus an in-memory
//! implementation for tests and embedding.
//!
//! The engine's pure functions never touch a store. Callers fetch entries,
//! run them through the engine, and write results back themselves; this
//! trait pins down the four operations those callers need.

use crate::entry::{EntryId, ScheduleEntry};

/// Durable CRUD over schedule entries with query-by-predicate.
///
/// The engine assumes single-writer call sequences: a check-then-insert is
/// one logical unit on the caller's side, and implementations do not need
/// to provide transactions beyond that.
pub trait Store {
    /// Entries satisfying `predicate`, in the store's stable order.
    fn query(&self, predicate: &dyn Fn(&ScheduleEntry) -> bool) -> Vec<ScheduleEntry>;

    /// Add a new entry.
    fn insert(&mut self, entry: ScheduleEntry);

    /// Replace the stored entry carrying the same id. Returns false when no
    /// such entry exists.
    fn update(&mut self, entry: ScheduleEntry) -> bool;

    /// Remove an entry. Removing an unknown id is a no-op; the return value
    /// says whether anything was removed.
    fn delete(&mut self, id: EntryId) -> bool;
}

/// Vec-backed store preserving insertion order.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Vec<ScheduleEntry>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }

    /// Every stored entry, in insertion order.
    pub fn all(&self) -> Vec<ScheduleEntry> {
        self.entries.clone()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Store for MemoryStore {
    fn query(&self, predicate: &dyn Fn(&ScheduleEntry) -> bool) -> Vec<ScheduleEntry> {
        self.entries.iter().filter(|e| predicate(e)).cloned().collect()
    }

    fn insert(&mut self, entry: ScheduleEntry) {
        self.entries.push(entry);
    }

    fn update(&mut self, entry: ScheduleEntry) -> bool {
        match self.entries.iter_mut().find(|e| e.id == entry.id) {
            Some(stored) => {
                *stored = entry;
                true
            }
            None => false,
        }
    }

    fn delete(&mut self, id: EntryId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }
}
