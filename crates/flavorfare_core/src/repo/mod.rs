//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the data access contract the restaurant service depends on.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Repository writes enforce model validation before persistence.
//! - Repository APIs return semantic errors (`NotFound`) in addition to DB
//!   transport errors.

pub mod restaurant_repo;
