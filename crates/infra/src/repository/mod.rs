//! Keyed entity storage abstractions.

pub mod in_memory;

pub use in_memory::InMemoryRepository;

use std::sync::Arc;

use catalog_core::{DomainResult, Entity, EntityId};

/// CRUD contract over entities keyed by [`EntityId`].
///
/// - `get_by_id` reports absence as `None`, never as an error.
/// - `add` fails with `Conflict` when the id is taken.
/// - `update` and `delete` fail with `NotFound` when the id is absent.
///
/// A failed mutation leaves the store unchanged.
pub trait Repository<T: Entity>: Send + Sync {
    fn get_by_id(&self, id: EntityId) -> Option<T>;
    fn get_all(&self) -> Vec<T>;
    fn add(&self, entity: T) -> DomainResult<()>;
    /// Full replacement of the entity stored under `entity.id()`.
    fn update(&self, entity: T) -> DomainResult<()>;
    fn delete(&self, id: EntityId) -> DomainResult<()>;
    /// `max(id) + 1`, or [`EntityId::FIRST`] when empty. Does not reserve the id.
    fn next_id(&self) -> EntityId;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T, R> Repository<T> for Arc<R>
where
    T: Entity,
    R: Repository<T> + ?Sized,
{
    fn get_by_id(&self, id: EntityId) -> Option<T> {
        (**self).get_by_id(id)
    }

    fn get_all(&self) -> Vec<T> {
        (**self).get_all()
    }

    fn add(&self, entity: T) -> DomainResult<()> {
        (**self).add(entity)
    }

    fn update(&self, entity: T) -> DomainResult<()> {
        (**self).update(entity)
    }

    fn delete(&self, id: EntityId) -> DomainResult<()> {
        (**self).delete(id)
    }

    fn next_id(&self) -> EntityId {
        (**self).next_id()
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}
