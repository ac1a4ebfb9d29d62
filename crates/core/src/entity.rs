//! Entity trait: identity + continuity across state changes.

use crate::id::EntityId;

/// Anything that can be stored under a unique integer identifier.
///
/// The identifier is fixed for the lifetime of the entity; stores key on it and
/// never rewrite it.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Returns the entity identifier.
    fn id(&self) -> EntityId;
}
