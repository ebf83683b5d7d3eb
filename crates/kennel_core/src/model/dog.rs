//! Dog domain model.
//!
//! # Responsibility
//! - Define the record shape persisted in the `dogs` table.
//! - Track persistence state through the optional surrogate key.
//!
//! # Invariants
//! - `id` is `None` until a save assigns the storage-generated key.
//! - Once `id` is `Some`, it is stable and identifies exactly one row.

use serde::{Deserialize, Serialize};

/// Surrogate primary key assigned by the storage engine on first insert.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type DogId = i64;

/// A dog record as persisted in the `dogs` table.
///
/// Instances start unsaved (`id = None`) and acquire their key from the
/// auto-increment mechanism when first written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dog {
    /// Auto-increment primary key; `None` for in-memory instances.
    pub id: Option<DogId>,
    /// Call name, matched exactly by name lookups.
    pub name: String,
    /// Free-text breed label.
    pub breed: String,
}

impl Dog {
    /// Creates an unsaved dog with no assigned id.
    pub fn new(name: impl Into<String>, breed: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            breed: breed.into(),
        }
    }

    /// Materializes a dog already backed by a persisted row.
    ///
    /// Used by read paths where identity already exists in storage.
    pub fn with_id(id: DogId, name: impl Into<String>, breed: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            name: name.into(),
            breed: breed.into(),
        }
    }

    /// Returns whether this instance is backed by a persisted row.
    pub fn is_saved(&self) -> bool {
        self.id.is_some()
    }
}
