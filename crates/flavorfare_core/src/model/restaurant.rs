//! Restaurant entity and identifier.
//!
//! # Responsibility
//! - Define the persisted `Restaurant` shape and its transient
//!   `NewRestaurant` counterpart used before the store assigns an id.
//! - Provide validation shared by repository write and read paths.
//!
//! # Invariants
//! - `RestaurantId` is always strictly positive.
//! - `id` is assigned by the store and never changes after creation.
//! - `name` is never blank.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Store-assigned restaurant identifier.
///
/// Wraps a positive `i64` so a zero or negative id cannot be represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct RestaurantId(i64);

impl RestaurantId {
    /// Returns `None` for zero or negative values.
    pub fn new(value: i64) -> Option<Self> {
        (value > 0).then_some(Self(value))
    }

    /// Raw integer value as stored in `restaurants.id`.
    pub fn get(self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for RestaurantId {
    type Error = RestaurantValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(RestaurantValidationError::NonPositiveId(value))
    }
}

impl From<RestaurantId> for i64 {
    fn from(value: RestaurantId) -> Self {
        value.0
    }
}

impl Display for RestaurantId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Field-level validation failures for restaurant data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RestaurantValidationError {
    /// Identifier was zero or negative.
    NonPositiveId(i64),
    /// `name` was empty or whitespace only.
    EmptyName,
}

impl Display for RestaurantValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonPositiveId(value) => {
                write!(f, "restaurant id must be positive, got {value}")
            }
            Self::EmptyName => write!(f, "restaurant name must not be empty"),
        }
    }
}

impl Error for RestaurantValidationError {}

/// Restaurant that has not been persisted yet.
///
/// Carries no id: the store assigns one on insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRestaurant {
    pub name: String,
    pub address: Option<String>,
    pub description: Option<String>,
}

impl NewRestaurant {
    /// Creates a transient restaurant with only the required name set.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: None,
            description: None,
        }
    }

    /// Checks field invariants before insert.
    pub fn validate(&self) -> Result<(), RestaurantValidationError> {
        validate_name(&self.name)
    }
}

/// Persisted restaurant record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Restaurant {
    /// Store-assigned identity. Immutable once set.
    pub id: RestaurantId,
    /// Display name. Required.
    pub name: String,
    /// Free-form postal address. Opaque to core logic.
    pub address: Option<String>,
    /// Free-form description. Opaque to core logic.
    pub description: Option<String>,
}

impl Restaurant {
    /// Binds a store-assigned id to transient restaurant data.
    pub fn from_new(id: RestaurantId, restaurant: NewRestaurant) -> Self {
        Self {
            id,
            name: restaurant.name,
            address: restaurant.address,
            description: restaurant.description,
        }
    }

    /// Checks field invariants before update and after read-back.
    pub fn validate(&self) -> Result<(), RestaurantValidationError> {
        validate_name(&self.name)
    }
}

fn validate_name(name: &str) -> Result<(), RestaurantValidationError> {
    if name.trim().is_empty() {
        return Err(RestaurantValidationError::EmptyName);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{NewRestaurant, Restaurant, RestaurantId, RestaurantValidationError};

    #[test]
    fn restaurant_id_rejects_non_positive_values() {
        assert!(RestaurantId::new(0).is_none());
        assert!(RestaurantId::new(-7).is_none());
        assert_eq!(RestaurantId::new(3).map(RestaurantId::get), Some(3));
        assert_eq!(
            RestaurantId::try_from(-1),
            Err(RestaurantValidationError::NonPositiveId(-1))
        );
    }

    #[test]
    fn blank_name_fails_validation() {
        let err = NewRestaurant::new("  \t").validate().unwrap_err();
        assert_eq!(err, RestaurantValidationError::EmptyName);
    }

    #[test]
    fn from_new_keeps_descriptive_fields() {
        let mut draft = NewRestaurant::new("Trattoria");
        draft.address = Some("Via Roma 1".to_string());
        let id = RestaurantId::new(9).unwrap();

        let restaurant = Restaurant::from_new(id, draft);
        assert_eq!(restaurant.id, id);
        assert_eq!(restaurant.name, "Trattoria");
        assert_eq!(restaurant.address.as_deref(), Some("Via Roma 1"));
        assert_eq!(restaurant.description, None);
        assert!(restaurant.validate().is_ok());
    }
}
