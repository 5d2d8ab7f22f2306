//! Canonical payloads shared by integration tests.

#![allow(dead_code)]

use flavorfare_core::{AddRestaurantDto, UpdateRestaurantDto};

pub fn add_restaurant_dto_a() -> AddRestaurantDto {
    AddRestaurantDto {
        name: "Restaurant A".to_string(),
        address: Some("Gedimino pr. 1, Vilnius".to_string()),
        description: Some("Lithuanian cuisine".to_string()),
    }
}

pub fn add_restaurant_dto_b() -> AddRestaurantDto {
    AddRestaurantDto {
        name: "Restaurant B".to_string(),
        address: Some("Laisves al. 10, Kaunas".to_string()),
        description: None,
    }
}

pub fn update_restaurant_dto_a() -> UpdateRestaurantDto {
    UpdateRestaurantDto {
        name: "Restaurant A (renovated)".to_string(),
        address: Some("Pilies g. 5, Vilnius".to_string()),
        description: Some("Seasonal tasting menu".to_string()),
    }
}
