use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use catalog_core::{DomainError, DomainResult, Entity, EntityId};

use super::Repository;

/// In-memory entity store.
///
/// One `RwLock` guards the whole map and each operation takes it exactly once,
/// so the existence check and the write of `add`/`update`/`delete` cannot
/// interleave with another writer. Iteration order is ascending id.
#[derive(Debug)]
pub struct InMemoryRepository<T> {
    inner: RwLock<BTreeMap<EntityId, T>>,
}

impl<T> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(BTreeMap::new()),
        }
    }
}

impl<T> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> InMemoryRepository<T> {
    // Every critical section is a single map call, so the map behind a
    // poisoned lock is still consistent.
    fn read(&self) -> RwLockReadGuard<'_, BTreeMap<EntityId, T>> {
        self.inner.read().unwrap_or_else(|poisoned| {
            tracing::warn!("entity store lock poisoned; recovering");
            poisoned.into_inner()
        })
    }

    fn write(&self) -> RwLockWriteGuard<'_, BTreeMap<EntityId, T>> {
        self.inner.write().unwrap_or_else(|poisoned| {
            tracing::warn!("entity store lock poisoned; recovering");
            poisoned.into_inner()
        })
    }
}

impl<T: Entity> Repository<T> for InMemoryRepository<T> {
    fn get_by_id(&self, id: EntityId) -> Option<T> {
        self.read().get(&id).cloned()
    }

    fn get_all(&self) -> Vec<T> {
        self.read().values().cloned().collect()
    }

    fn add(&self, entity: T) -> DomainResult<()> {
        let id = entity.id();
        let mut map = self.write();
        if map.contains_key(&id) {
            return Err(DomainError::conflict(format!(
                "Entity with Id {id} already exists."
            )));
        }
        map.insert(id, entity);
        tracing::debug!(%id, "entity added");
        Ok(())
    }

    fn update(&self, entity: T) -> DomainResult<()> {
        let id = entity.id();
        let mut map = self.write();
        match map.get_mut(&id) {
            Some(slot) => {
                *slot = entity;
                tracing::debug!(%id, "entity replaced");
                Ok(())
            }
            None => Err(DomainError::not_found(format!("Entity with Id {id} not found."))),
        }
    }

    fn delete(&self, id: EntityId) -> DomainResult<()> {
        let mut map = self.write();
        match map.remove(&id) {
            Some(_) => {
                tracing::debug!(%id, "entity deleted");
                Ok(())
            }
            None => Err(DomainError::not_found(format!("Entity with Id {id} not found."))),
        }
    }

    fn next_id(&self) -> EntityId {
        self.read()
            .keys()
            .next_back()
            .map(EntityId::next)
            .unwrap_or(EntityId::FIRST)
    }

    fn len(&self) -> usize {
        self.read().len()
    }
}
