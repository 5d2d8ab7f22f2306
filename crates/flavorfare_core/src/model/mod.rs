//! Restaurant domain model.
//!
//! # Responsibility
//! - Define the canonical restaurant entity and its identifier type.
//! - Own field-level invariants checked before persistence.
//!
//! # Invariants
//! - Every persisted restaurant carries a positive `RestaurantId`.
//! - Deletion is a hard delete; there is no tombstone state.

pub mod restaurant;
