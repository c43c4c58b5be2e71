//! # Record Store
//!
//! Ordered `id → CardRecord` mapping. Insertion order is the only ordering
//! used downstream.
//!
//! Every mutation builds a new store and leaves `self` untouched, so a
//! caller holding an older store (for example an in-flight export) keeps a
//! consistent view without locking.

use std::collections::BTreeSet;

use uuid::Uuid;

use super::record::{CardFields, CardRecord};

/// Length of a generated card id.
const ID_LEN: usize = 8;

/// Immutable, ordered collection of card records.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<CardRecord>,
    /// Every id ever handed out, including deleted ones.
    issued: BTreeSet<String>,
}

impl RecordStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in insertion order.
    pub fn records(&self) -> &[CardRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &CardRecord> {
        self.records.iter()
    }

    pub fn get(&self, id: &str) -> Option<&CardRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Ids in insertion order.
    pub fn ids(&self) -> Vec<String> {
        self.records.iter().map(|record| record.id.clone()).collect()
    }

    /// Return a new store with `batch` appended, each under a fresh id.
    ///
    /// The new ids are returned alongside the store in batch order.
    pub fn with_appended(&self, batch: Vec<CardFields>) -> (RecordStore, Vec<String>) {
        let mut next = self.clone();
        let mut ids = Vec::with_capacity(batch.len());

        for fields in batch {
            let id = next.issue_id();
            next.records.push(CardRecord::new(id.clone(), fields));
            ids.push(id);
        }

        (next, ids)
    }

    /// Return a new store without the record `id`, plus the removed record.
    ///
    /// Returns `None` when the id is not present.
    pub fn without(&self, id: &str) -> Option<(RecordStore, CardRecord)> {
        let index = self.records.iter().position(|record| record.id == id)?;
        let mut next = self.clone();
        let removed = next.records.remove(index);
        Some((next, removed))
    }

    /// Draw ids until one has never been issued by this store.
    fn issue_id(&mut self) -> String {
        loop {
            let mut candidate = Uuid::new_v4().simple().to_string();
            candidate.truncate(ID_LEN);
            if self.issued.insert(candidate.clone()) {
                return candidate;
            }
        }
    }
}
