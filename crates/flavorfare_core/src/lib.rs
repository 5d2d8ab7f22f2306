//! Core domain logic for FlavorFare restaurant management.
//! This crate owns the restaurant lifecycle and its persistence contract.

pub mod db;
pub mod dto;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use dto::restaurant_dto::{AddRestaurantDto, RestaurantDto, UpdateRestaurantDto};
pub use logging::{default_log_level, init_logging, logging_status, normalize_level};
pub use model::restaurant::{NewRestaurant, Restaurant, RestaurantId, RestaurantValidationError};
pub use repo::restaurant_repo::{
    RepoError, RepoResult, RestaurantRepository, SqliteRestaurantRepository,
};
pub use service::restaurant_service::{RestaurantService, RestaurantServiceError, ServiceResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
