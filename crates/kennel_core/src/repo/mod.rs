//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts.
//! - Isolate SQLite query details from service/business orchestration.
//!
//! # Invariants
//! - Repository APIs return semantic errors (`NotFound`, `Unsaved`) in
//!   addition to DB transport errors.
//! - Absent lookups return `None` instead of an error.

pub mod dog_repo;
