use pharmstock_core::{DomainError, DomainResult, Entity, MedicineId};

use crate::medicine::{Medicine, MedicineDraft};

/// Index of the entity keyed by `id`, if present.
fn position_of<E: Entity>(records: &[E], id: &E::Id) -> Option<usize> {
    records.iter().position(|r| r.id() == id)
}

/// The authoritative in-memory collection of medicine records.
///
/// The store exclusively owns the collection. Insertion order carries no
/// semantic meaning; every ordered or filtered view is a projection
/// recomputed from `list()` by the view layer, never mutated separately.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MedicineStore {
    records: Vec<Medicine>,
}

impl MedicineStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with an initial collection.
    pub fn with_records(records: Vec<Medicine>) -> Self {
        Self { records }
    }

    /// Snapshot of all records, no implied order.
    pub fn list(&self) -> &[Medicine] {
        &self.records
    }

    pub fn get(&self, id: &MedicineId) -> Option<&Medicine> {
        position_of(&self.records, id).and_then(|i| self.records.get(i))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Replace the record with the same id wholesale, or append if absent.
    ///
    /// Records are never patched field-by-field; callers hand over the full
    /// replacement.
    pub fn upsert(&mut self, record: Medicine) -> DomainResult<()> {
        if record.id.is_empty() {
            return Err(DomainError::validation("record id cannot be empty"));
        }
        match position_of(&self.records, &record.id) {
            Some(i) => {
                tracing::debug!(id = %record.id, "replacing medicine record");
                self.records[i] = record;
            }
            None => {
                tracing::debug!(id = %record.id, "inserting medicine record");
                self.records.push(record);
            }
        }
        Ok(())
    }

    /// Validate a draft, assign it a fresh unique id, insert, and return the
    /// finalized record.
    pub fn create(&mut self, draft: MedicineDraft) -> DomainResult<Medicine> {
        let mut id = MedicineId::generate();
        // Time-ordered ids collide only in pathological cases; re-draw until
        // the id is unused rather than assume.
        while self.get(&id).is_some() {
            id = MedicineId::generate();
        }
        let record = draft.finalize(id)?;
        tracing::info!(id = %record.id, name = %record.name, "created medicine record");
        self.records.push(record.clone());
        Ok(record)
    }

    /// Remove the record with the given id. Absent ids are a no-op, not an
    /// error: the store must not fault on a stale delete intent.
    pub fn remove(&mut self, id: &MedicineId) {
        if let Some(i) = position_of(&self.records, id) {
            let removed = self.records.remove(i);
            tracing::info!(id = %removed.id, "removed medicine record");
        }
    }
}
