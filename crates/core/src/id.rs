//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Integer identifier of a stored entity.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(i32);

impl EntityId {
    /// Identifier handed out when nothing has been stored yet.
    pub const FIRST: EntityId = EntityId(1);

    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    pub const fn get(&self) -> i32 {
        self.0
    }

    /// The identifier directly after this one.
    pub fn next(&self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl core::fmt::Display for EntityId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<i32> for EntityId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl From<EntityId> for i32 {
    fn from(value: EntityId) -> Self {
        value.0
    }
}

impl FromStr for EntityId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<i32>()
            .map_err(|e| DomainError::invalid_id(format!("EntityId: {e}")))?;
        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_integers() {
        assert_eq!("42".parse::<EntityId>().unwrap(), EntityId::new(42));
        assert_eq!(" 7 ".parse::<EntityId>().unwrap(), EntityId::new(7));
    }

    #[test]
    fn rejects_non_integers() {
        let err = "abc".parse::<EntityId>().unwrap_err();
        assert!(matches!(err, DomainError::InvalidId(_)));
    }

    #[test]
    fn serializes_as_a_plain_number() {
        let json = serde_json::to_string(&EntityId::new(3)).unwrap();
        assert_eq!(json, "3");
        let back: EntityId = serde_json::from_str("3").unwrap();
        assert_eq!(back, EntityId::new(3));
    }

    #[test]
    fn next_increments() {
        assert_eq!(EntityId::FIRST.next(), EntityId::new(2));
    }
}
