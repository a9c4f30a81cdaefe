use crate::domain::{TransferId, TransferRecord};
use std::collections::{HashMap, HashSet};

/// All transfers currently held by the ledger, keyed by id.
#[derive(Debug)]
pub struct TransferBook(HashMap<TransferId, TransferRecord>);

impl Default for TransferBook {
    fn default() -> Self {
        Self::new()
    }
}

impl TransferBook {
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    /// Caller guarantees the id is not already present.
    pub fn insert(&mut self, record: TransferRecord) -> &TransferRecord {
        self.0.entry(record.id).or_insert(record)
    }

    pub fn get(&self, id: &TransferId) -> Option<&TransferRecord> {
        self.0.get(id)
    }

    pub fn get_mut(&mut self, id: &TransferId) -> Option<&mut TransferRecord> {
        self.0.get_mut(id)
    }

    pub fn remove(&mut self, id: &TransferId) -> Option<TransferRecord> {
        self.0.remove(id)
    }

    pub fn contains(&self, id: &TransferId) -> bool {
        self.0.contains_key(id)
    }

    pub fn records(&self) -> impl Iterator<Item = &TransferRecord> {
        self.0.values()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Maps each incoming transfer to the set of outgoing transfers that draw on
/// it, so a remaining-balance query only visits the linked children instead
/// of re-scanning the whole book.
#[derive(Debug, Default)]
pub struct ChildIndex(HashMap<TransferId, HashSet<TransferId>>);

impl ChildIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn link(&mut self, parent: TransferId, child: TransferId) {
        self.0.entry(parent).or_default().insert(child);
    }

    pub fn unlink(&mut self, parent: TransferId, child: TransferId) {
        if let Some(children) = self.0.get_mut(&parent) {
            children.remove(&child);
            if children.is_empty() {
                self.0.remove(&parent);
            }
        }
    }

    pub fn children(&self, parent: &TransferId) -> impl Iterator<Item = &TransferId> {
        self.0.get(parent).into_iter().flatten()
    }
}
