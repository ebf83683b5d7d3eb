//! Domain model for the dog registry.
//!
//! # Responsibility
//! - Define the canonical data structure used by persistence and services.
//!
//! # Invariants
//! - Every persisted object is identified by a stable `DogId`.
//! - Unsaved instances carry no id until storage assigns one.

pub mod dog;
