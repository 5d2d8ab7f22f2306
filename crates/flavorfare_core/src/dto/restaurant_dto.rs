//! Restaurant transfer shapes.
//!
//! # Invariants
//! - `RestaurantDto.id` is always a store-assigned positive id.
//! - Create and update payloads never carry an id.

use crate::model::restaurant::{NewRestaurant, Restaurant, RestaurantId};
use serde::{Deserialize, Serialize};

/// Full restaurant representation returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestaurantDto {
    pub id: RestaurantId,
    pub name: String,
    pub address: Option<String>,
    pub description: Option<String>,
}

/// Payload for creating a restaurant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddRestaurantDto {
    pub name: String,
    pub address: Option<String>,
    pub description: Option<String>,
}

/// Payload replacing every mutable field of an existing restaurant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateRestaurantDto {
    pub name: String,
    pub address: Option<String>,
    pub description: Option<String>,
}

impl From<Restaurant> for RestaurantDto {
    fn from(value: Restaurant) -> Self {
        Self {
            id: value.id,
            name: value.name,
            address: value.address,
            description: value.description,
        }
    }
}

impl From<&AddRestaurantDto> for NewRestaurant {
    fn from(value: &AddRestaurantDto) -> Self {
        Self {
            name: value.name.clone(),
            address: value.address.clone(),
            description: value.description.clone(),
        }
    }
}
