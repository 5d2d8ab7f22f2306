//! Subcommands and their dispatch onto `RestaurantService`.

use anyhow::Result;
use clap::{Args, Subcommand};
use flavorfare_core::{
    AddRestaurantDto, RestaurantId, RestaurantRepository, RestaurantService, UpdateRestaurantDto,
};
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List all restaurants
    List,
    /// Show one restaurant
    Get {
        #[arg(value_parser = parse_restaurant_id)]
        id: RestaurantId,
    },
    /// Create a restaurant
    Add(RestaurantFields),
    /// Replace every field of a restaurant
    Update {
        #[arg(value_parser = parse_restaurant_id)]
        id: RestaurantId,
        #[command(flatten)]
        fields: RestaurantFields,
    },
    /// Delete a restaurant
    Delete {
        #[arg(value_parser = parse_restaurant_id)]
        id: RestaurantId,
    },
}

/// Mutable restaurant fields accepted by `add` and `update`.
#[derive(Debug, Clone, Args)]
pub struct RestaurantFields {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub address: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
}

impl From<&RestaurantFields> for AddRestaurantDto {
    fn from(value: &RestaurantFields) -> Self {
        Self {
            name: value.name.clone(),
            address: value.address.clone(),
            description: value.description.clone(),
        }
    }
}

impl From<&RestaurantFields> for UpdateRestaurantDto {
    fn from(value: &RestaurantFields) -> Self {
        Self {
            name: value.name.clone(),
            address: value.address.clone(),
            description: value.description.clone(),
        }
    }
}

/// Runs one command and writes its JSON result to `out`.
///
/// Service errors are returned unwrapped so callers can downcast to
/// `RestaurantServiceError`.
pub fn execute<R: RestaurantRepository>(
    service: &RestaurantService<R>,
    command: &Command,
    out: &mut impl Write,
) -> Result<()> {
    match command {
        Command::List => write_json(out, &service.get_restaurants()?),
        Command::Get { id } => write_json(out, &service.get_restaurant(*id)?),
        Command::Add(fields) => {
            write_json(out, &service.add_restaurant(&AddRestaurantDto::from(fields))?)
        }
        Command::Update { id, fields } => write_json(
            out,
            &service.update_restaurant(*id, &UpdateRestaurantDto::from(fields))?,
        ),
        Command::Delete { id } => {
            service.delete_restaurant(*id)?;
            write_json(out, &serde_json::json!({ "deleted": id }))
        }
    }
}

fn write_json(out: &mut impl Write, value: &impl Serialize) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

fn parse_restaurant_id(raw: &str) -> Result<RestaurantId, String> {
    let value: i64 = raw
        .trim()
        .parse()
        .map_err(|err| format!("`{raw}` is not an integer id: {err}"))?;
    RestaurantId::new(value).ok_or_else(|| format!("restaurant id must be positive, got {value}"))
}

#[cfg(test)]
mod tests {
    use super::{execute, Command, RestaurantFields};
    use flavorfare_core::db::open_db_in_memory;
    use flavorfare_core::{
        RestaurantDto, RestaurantId, RestaurantService, RestaurantServiceError,
        SqliteRestaurantRepository,
    };

    fn fields(name: &str) -> RestaurantFields {
        RestaurantFields {
            name: name.to_string(),
            address: None,
            description: None,
        }
    }

    #[test]
    fn add_then_list_prints_json() {
        let conn = open_db_in_memory().unwrap();
        let service = RestaurantService::new(SqliteRestaurantRepository::try_new(&conn).unwrap());

        let mut out = Vec::new();
        let mut sweet_root = fields(" Sweet Root ");
        sweet_root.address = Some(" Main St 4 ".to_string());
        execute(&service, &Command::Add(sweet_root), &mut out).unwrap();
        let created: RestaurantDto = serde_json::from_slice(&out).unwrap();
        assert_eq!(created.name, " Sweet Root ");
        assert_eq!(created.address.as_deref(), Some(" Main St 4 "));

        let mut out = Vec::new();
        execute(&service, &Command::List, &mut out).unwrap();
        let listed: Vec<RestaurantDto> = serde_json::from_slice(&out).unwrap();
        assert_eq!(listed, vec![created]);
    }

    #[test]
    fn delete_unknown_id_downcasts_to_not_found() {
        let conn = open_db_in_memory().unwrap();
        let service = RestaurantService::new(SqliteRestaurantRepository::try_new(&conn).unwrap());
        let id = RestaurantId::new(9).unwrap();

        let mut out = Vec::new();
        let err = execute(&service, &Command::Delete { id }, &mut out).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<RestaurantServiceError>(),
            Some(RestaurantServiceError::NotFound(missing)) if *missing == id
        ));
        assert!(out.is_empty());
    }

    #[test]
    fn update_prints_updated_restaurant() {
        let conn = open_db_in_memory().unwrap();
        let service = RestaurantService::new(SqliteRestaurantRepository::try_new(&conn).unwrap());

        let mut out = Vec::new();
        execute(&service, &Command::Add(fields("Old")), &mut out).unwrap();
        let created: RestaurantDto = serde_json::from_slice(&out).unwrap();

        let mut out = Vec::new();
        let mut new_fields = fields("New");
        new_fields.address = Some("Harbour 3".to_string());
        execute(
            &service,
            &Command::Update {
                id: created.id,
                fields: new_fields,
            },
            &mut out,
        )
        .unwrap();
        let updated: RestaurantDto = serde_json::from_slice(&out).unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "New");
        assert_eq!(updated.address.as_deref(), Some("Harbour 3"));
    }
}
