use std::collections::{BTreeMap, HashMap};

use tracing::trace;

use shop_core::{DomainError, DomainResult, Entity};

use super::r#trait::Repository;

/// In-memory repository keyed by entity identifier.
///
/// Entries live in an ordered map keyed by an insertion sequence number, with a
/// hash index from identifier to sequence number. Lookups and existence checks
/// are O(1); enumeration follows insertion order. The index stays valid because
/// an [`Entity`] identifier never changes.
#[derive(Debug)]
pub struct InMemoryRepository<E: Entity> {
    entries: BTreeMap<u64, E>,
    index: HashMap<E::Id, u64>,
    next_sequence: u64,
}

impl<E: Entity> InMemoryRepository<E> {
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
            index: HashMap::new(),
            next_sequence: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, id: &E::Id) -> bool {
        self.index.contains_key(id)
    }
}

impl<E: Entity> Default for InMemoryRepository<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Entity + Clone> Repository<E> for InMemoryRepository<E> {
    fn find_by_id(&self, id: &E::Id) -> Option<E> {
        self.index
            .get(id)
            .and_then(|sequence| self.entries.get(sequence))
            .cloned()
    }

    fn add(&mut self, entity: E) -> DomainResult<()> {
        let id = entity.id().clone();
        if self.index.contains_key(&id) {
            return Err(DomainError::already_exists(&id));
        }

        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.entries.insert(sequence, entity);
        self.index.insert(id.clone(), sequence);

        trace!(%id, len = self.entries.len(), "entity added");
        Ok(())
    }

    fn remove_by_id(&mut self, id: &E::Id) -> DomainResult<()> {
        let sequence = self
            .index
            .remove(id)
            .ok_or_else(|| DomainError::not_found(id))?;
        self.entries.remove(&sequence);

        trace!(%id, len = self.entries.len(), "entity removed");
        Ok(())
    }

    fn find_all(&self) -> Vec<E> {
        self.entries.values().cloned().collect()
    }
}
