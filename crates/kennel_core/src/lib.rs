//! Core data-access logic for the kennel dog registry.
//! This crate is the single source of truth for dog persistence.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::dog::{Dog, DogId};
pub use repo::dog_repo::{DogRepository, RepoError, RepoResult, SqliteDogRepository};
pub use service::dog_service::DogService;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
