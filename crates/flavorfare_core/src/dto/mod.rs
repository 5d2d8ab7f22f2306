//! Transfer shapes exchanged with service callers.
//!
//! # Responsibility
//! - Define plain serde data used at the service boundary.
//! - Keep persistence entities out of caller-facing signatures.

pub mod restaurant_dto;
