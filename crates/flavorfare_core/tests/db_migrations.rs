use flavorfare_core::db::migrations::latest_version;
use flavorfare_core::db::{open_db, open_db_in_memory, DbError};
use flavorfare_core::{NewRestaurant, RestaurantRepository, SqliteRestaurantRepository};
use rusqlite::Connection;

#[test]
fn open_db_in_memory_applies_all_migrations() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(schema_version(&conn), latest_version());
    assert_table_exists(&conn, "restaurants");
}

#[test]
fn in_memory_databases_are_independent() {
    let first = open_db_in_memory().unwrap();
    let second = open_db_in_memory().unwrap();

    SqliteRestaurantRepository::try_new(&first)
        .unwrap()
        .insert(&NewRestaurant::new("only in first"))
        .unwrap();

    let repo = SqliteRestaurantRepository::try_new(&second).unwrap();
    assert_eq!(repo.count().unwrap(), 0);
}

#[test]
fn reopening_file_database_keeps_schema_and_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("flavorfare.db");

    let conn_first = open_db(&path).unwrap();
    let created = SqliteRestaurantRepository::try_new(&conn_first)
        .unwrap()
        .insert(&NewRestaurant::new("persisted"))
        .unwrap();
    drop(conn_first);

    let conn_second = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn_second), latest_version());
    let repo = SqliteRestaurantRepository::try_new(&conn_second).unwrap();
    assert_eq!(repo.find_by_id(created.id).unwrap(), Some(created));
}

#[test]
fn opening_database_with_newer_schema_version_returns_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    let err = open_db(&path).unwrap_err();
    match err {
        DbError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        } => {
            assert_eq!(db_version, 999);
            assert_eq!(latest_supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
}

fn schema_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}

fn assert_table_exists(conn: &Connection, table_name: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [table_name],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1, "table {table_name} does not exist");
}
