//! Restaurant use-case service.
//!
//! # Responsibility
//! - Own the restaurant lifecycle: list, get, add, update, delete.
//! - Translate repository outcomes into `RestaurantDto` or a typed not-found.
//!
//! # Invariants
//! - Id generation stays inside the repository; the service never picks ids.
//! - Update and delete on a missing id return `NotFound` without writing.
//! - `NotFound` is never retried or swallowed.

use crate::dto::restaurant_dto::{AddRestaurantDto, RestaurantDto, UpdateRestaurantDto};
use crate::model::restaurant::{NewRestaurant, RestaurantId};
use crate::repo::restaurant_repo::{RepoError, RestaurantRepository};
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, RestaurantServiceError>;

/// Service error for restaurant use-cases.
#[derive(Debug)]
pub enum RestaurantServiceError {
    /// Target restaurant does not exist.
    NotFound(RestaurantId),
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl Display for RestaurantServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "restaurant not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RestaurantServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::NotFound(_) => None,
        }
    }
}

impl From<RepoError> for RestaurantServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(id) => Self::NotFound(id),
            other => Self::Repo(other),
        }
    }
}

/// Restaurant service facade over a repository implementation.
pub struct RestaurantService<R: RestaurantRepository> {
    repo: R,
}

impl<R: RestaurantRepository> RestaurantService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Lists every restaurant in store order. Empty when none exist.
    pub fn get_restaurants(&self) -> ServiceResult<Vec<RestaurantDto>> {
        let restaurants = self.repo.find_all()?;
        debug!(
            "event=restaurant_list module=service status=ok count={}",
            restaurants.len()
        );
        Ok(restaurants.into_iter().map(RestaurantDto::from).collect())
    }

    /// Gets one restaurant by id.
    pub fn get_restaurant(&self, id: RestaurantId) -> ServiceResult<RestaurantDto> {
        match self.repo.find_by_id(id)? {
            Some(restaurant) => Ok(restaurant.into()),
            None => Err(not_found("restaurant_get", id)),
        }
    }

    /// Creates a restaurant and returns it with its store-assigned id.
    pub fn add_restaurant(&self, data: &AddRestaurantDto) -> ServiceResult<RestaurantDto> {
        let created = self.repo.insert(&NewRestaurant::from(data))?;
        info!(
            "event=restaurant_create module=service status=ok id={}",
            created.id
        );
        Ok(created.into())
    }

    /// Replaces every mutable field of an existing restaurant.
    ///
    /// # Contract
    /// - `id` is preserved.
    /// - Missing id yields `NotFound` and nothing is written.
    pub fn update_restaurant(
        &self,
        id: RestaurantId,
        data: &UpdateRestaurantDto,
    ) -> ServiceResult<RestaurantDto> {
        let Some(mut restaurant) = self.repo.find_by_id(id)? else {
            return Err(not_found("restaurant_update", id));
        };

        restaurant.name = data.name.clone();
        restaurant.address = data.address.clone();
        restaurant.description = data.description.clone();

        let updated = self.repo.save(&restaurant).map_err(|err| match err {
            RepoError::NotFound(id) => not_found("restaurant_update", id),
            other => RestaurantServiceError::Repo(other),
        })?;
        info!(
            "event=restaurant_update module=service status=ok id={}",
            updated.id
        );
        Ok(updated.into())
    }

    /// Deletes a restaurant by id.
    ///
    /// Deleting an id that is already gone yields `NotFound` again.
    pub fn delete_restaurant(&self, id: RestaurantId) -> ServiceResult<()> {
        if !self.repo.exists_by_id(id)? {
            return Err(not_found("restaurant_delete", id));
        }

        self.repo.delete_by_id(id).map_err(|err| match err {
            RepoError::NotFound(id) => not_found("restaurant_delete", id),
            other => RestaurantServiceError::Repo(other),
        })?;
        info!("event=restaurant_delete module=service status=ok id={id}");
        Ok(())
    }
}

fn not_found(event: &str, id: RestaurantId) -> RestaurantServiceError {
    warn!("event={event} module=service status=error error_code=restaurant_not_found id={id}");
    RestaurantServiceError::NotFound(id)
}
