//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Keep adapter layers (CLI, future HTTP) decoupled from storage details.

pub mod restaurant_service;
