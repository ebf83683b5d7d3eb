//! Dog registry use-case service.
//!
//! # Responsibility
//! - Provide stable registry entry points for core callers.
//! - Delegate persistence to repository implementations.
//!
//! # Invariants
//! - Service APIs never bypass repository persistence contracts.
//! - Service layer remains storage-agnostic.

use crate::model::dog::{Dog, DogId};
use crate::repo::dog_repo::{DogRepository, RepoResult};

/// Use-case service wrapper for dog registry operations.
pub struct DogService<R: DogRepository> {
    repo: R,
}

impl<R: DogRepository> DogService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Ensures the backing table exists before registry use.
    pub fn create_table(&self) -> RepoResult<()> {
        self.repo.create_table()
    }

    /// Drops the backing table and every registered dog.
    pub fn drop_table(&self) -> RepoResult<()> {
        self.repo.drop_table()
    }

    /// Registers a new dog and returns the persisted instance.
    ///
    /// # Contract
    /// - Always inserts; duplicate name/breed pairs produce distinct rows.
    /// - Returned instance carries the assigned id.
    pub fn register(&self, name: &str, breed: &str) -> RepoResult<Dog> {
        self.repo.create(name, breed)
    }

    /// Returns the registered dog matching both fields, registering it
    /// first when absent.
    ///
    /// # Contract
    /// - Sequential callers observe a stable id for the same pair.
    /// - Concurrent callers may race; see the repository contract.
    pub fn find_or_register(&self, name: &str, breed: &str) -> RepoResult<Dog> {
        self.repo.find_or_create_by(name, breed)
    }

    /// Gets one dog by id.
    pub fn get(&self, id: DogId) -> RepoResult<Option<Dog>> {
        self.repo.find_by_id(id)
    }

    /// Looks up the first dog matching `name` exactly.
    pub fn lookup(&self, name: &str) -> RepoResult<Option<Dog>> {
        self.repo.find_by_name(name)
    }

    /// Persists field changes on an already-saved dog.
    ///
    /// Returns repository-level not-found or precondition errors unchanged.
    pub fn update(&self, dog: &Dog) -> RepoResult<()> {
        self.repo.update(dog)
    }

    /// Lists every registered dog in storage default order.
    pub fn all(&self) -> RepoResult<Vec<Dog>> {
        self.repo.get_all()
    }
}
