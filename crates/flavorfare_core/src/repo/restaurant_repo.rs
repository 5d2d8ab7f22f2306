//! Restaurant repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide id-keyed CRUD primitives over the `restaurants` table.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - Ids are assigned by SQLite (`AUTOINCREMENT`) and never reused.
//! - Write paths validate the model before issuing SQL.
//! - Read paths reject invalid persisted state instead of masking it.

use crate::db::migrations::{current_user_version, latest_version};
use crate::db::DbError;
use crate::model::restaurant::{
    NewRestaurant, Restaurant, RestaurantId, RestaurantValidationError,
};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const RESTAURANT_SELECT_SQL: &str = "SELECT
    id,
    name,
    address,
    description
FROM restaurants";

const REQUIRED_COLUMNS: [&str; 5] = ["id", "name", "address", "description", "updated_at"];

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for restaurant persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    /// Entity failed model validation before a write.
    Validation(RestaurantValidationError),
    /// Underlying SQLite/bootstrap error.
    Db(DbError),
    /// No row exists for the given id.
    NotFound(RestaurantId),
    /// Connection schema is not at the expected migrated version.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    /// Required table is missing.
    MissingRequiredTable(&'static str),
    /// Required column is missing from expected table.
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
    /// Persisted row cannot be converted into a valid entity.
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "restaurant not found: {id}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "restaurant repository requires schema version {expected_version}, got {actual_version}"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "restaurant repository requires table `{table}`")
            }
            Self::MissingRequiredColumn { table, column } => write!(
                f,
                "restaurant repository requires column `{column}` in table `{table}`"
            ),
            Self::InvalidData(message) => {
                write!(f, "invalid persisted restaurant data: {message}")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::NotFound(_) => None,
            Self::UninitializedConnection { .. } => None,
            Self::MissingRequiredTable(_) => None,
            Self::MissingRequiredColumn { .. } => None,
            Self::InvalidData(_) => None,
        }
    }
}

impl From<RestaurantValidationError> for RepoError {
    fn from(value: RestaurantValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Id-keyed store of restaurants.
///
/// Implementations own id generation; callers may only rely on ids being
/// unique and positive.
pub trait RestaurantRepository {
    /// Returns every stored restaurant in store-defined order.
    fn find_all(&self) -> RepoResult<Vec<Restaurant>>;

    /// Returns the restaurant with the given id, if any.
    fn find_by_id(&self, id: RestaurantId) -> RepoResult<Option<Restaurant>>;

    /// Persists a transient restaurant and returns it with its assigned id.
    fn insert(&self, restaurant: &NewRestaurant) -> RepoResult<Restaurant>;

    /// Overwrites the stored row with the same id.
    ///
    /// Returns `RepoError::NotFound` when no such row exists.
    fn save(&self, restaurant: &Restaurant) -> RepoResult<Restaurant>;

    /// Removes the row with the given id.
    ///
    /// Returns `RepoError::NotFound` when no such row exists.
    fn delete_by_id(&self, id: RestaurantId) -> RepoResult<()>;

    /// Number of stored restaurants.
    fn count(&self) -> RepoResult<u64>;

    fn exists_by_id(&self, id: RestaurantId) -> RepoResult<bool> {
        Ok(self.find_by_id(id)?.is_some())
    }
}

/// SQLite-backed restaurant repository.
pub struct SqliteRestaurantRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteRestaurantRepository<'conn> {
    /// Constructs a repository from a migrated connection.
    ///
    /// # Errors
    /// - `UninitializedConnection` when migrations were not applied.
    /// - `MissingRequiredTable`/`MissingRequiredColumn` when the schema does
    ///   not have the expected shape.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl RestaurantRepository for SqliteRestaurantRepository<'_> {
    fn find_all(&self) -> RepoResult<Vec<Restaurant>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{RESTAURANT_SELECT_SQL} ORDER BY id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut restaurants = Vec::new();

        while let Some(row) = rows.next()? {
            restaurants.push(parse_restaurant_row(row)?);
        }

        Ok(restaurants)
    }

    fn find_by_id(&self, id: RestaurantId) -> RepoResult<Option<Restaurant>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{RESTAURANT_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query([id.get()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_restaurant_row(row)?));
        }

        Ok(None)
    }

    fn insert(&self, restaurant: &NewRestaurant) -> RepoResult<Restaurant> {
        restaurant.validate()?;

        self.conn.execute(
            "INSERT INTO restaurants (name, address, description)
             VALUES (?1, ?2, ?3);",
            params![
                restaurant.name.as_str(),
                restaurant.address.as_deref(),
                restaurant.description.as_deref(),
            ],
        )?;

        let rowid = self.conn.last_insert_rowid();
        let id = RestaurantId::new(rowid).ok_or_else(|| {
            RepoError::InvalidData(format!("store assigned non-positive id `{rowid}`"))
        })?;

        Ok(Restaurant::from_new(id, restaurant.clone()))
    }

    fn save(&self, restaurant: &Restaurant) -> RepoResult<Restaurant> {
        restaurant.validate()?;

        let changed = self.conn.execute(
            "UPDATE restaurants
             SET
                name = ?1,
                address = ?2,
                description = ?3,
                updated_at = (strftime('%s', 'now') * 1000)
             WHERE id = ?4;",
            params![
                restaurant.name.as_str(),
                restaurant.address.as_deref(),
                restaurant.description.as_deref(),
                restaurant.id.get(),
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(restaurant.id));
        }

        Ok(restaurant.clone())
    }

    fn delete_by_id(&self, id: RestaurantId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM restaurants WHERE id = ?1;", [id.get()])?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }

    fn count(&self) -> RepoResult<u64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM restaurants;", [], |row| row.get(0))?;
        u64::try_from(count)
            .map_err(|_| RepoError::InvalidData(format!("negative row count `{count}`")))
    }

    fn exists_by_id(&self, id: RestaurantId) -> RepoResult<bool> {
        let found = self
            .conn
            .query_row(
                "SELECT 1 FROM restaurants WHERE id = ?1;",
                [id.get()],
                |row| row.get::<_, i64>(0),
            )
            .optional()?;
        Ok(found.is_some())
    }
}

fn parse_restaurant_row(row: &Row<'_>) -> RepoResult<Restaurant> {
    let raw_id: i64 = row.get("id")?;
    let id = RestaurantId::new(raw_id).ok_or_else(|| {
        RepoError::InvalidData(format!("invalid id value `{raw_id}` in restaurants.id"))
    })?;

    let restaurant = Restaurant {
        id,
        name: row.get("name")?,
        address: row.get("address")?,
        description: row.get("description")?,
    };
    restaurant
        .validate()
        .map_err(|err| RepoError::InvalidData(format!("restaurant {id}: {err}")))?;
    Ok(restaurant)
}

fn ensure_connection_ready(conn: &Connection) -> RepoResult<()> {
    let expected_version = latest_version();
    let actual_version = current_user_version(conn)?;
    if actual_version < expected_version {
        return Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    if !table_exists(conn, "restaurants")? {
        return Err(RepoError::MissingRequiredTable("restaurants"));
    }

    for column in REQUIRED_COLUMNS {
        if !table_has_column(conn, "restaurants", column)? {
            return Err(RepoError::MissingRequiredColumn {
                table: "restaurants",
                column,
            });
        }
    }

    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> RepoResult<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table});"))?;
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let current: String = row.get(1)?;
        if current == column {
            return Ok(true);
        }
    }
    Ok(false)
}
