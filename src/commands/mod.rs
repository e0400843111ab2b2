use std::path::Path;

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File};
use diesel::prelude::*;
use dotenvy::dotenv;

pub mod browse;
pub mod db;
pub mod search;

pub(crate) fn load_settings(config: &Path) -> Result<Config, Box<dyn std::error::Error>> {
    dotenv().ok();
    let config_file = config.to_str().ok_or("Invalid config path")?;
    let settings = ConfigBuilder::<DefaultState>::default()
        .add_source(File::with_name(config_file))
        .add_source(Environment::default())
        .build()?;

    Ok(settings)
}

pub(crate) fn establish_connection(
    settings: &Config,
) -> Result<SqliteConnection, Box<dyn std::error::Error>> {
    let database_url: String = settings.get("DATABASE_URL")?;
    let mut connection = SqliteConnection::establish(&database_url)
        .map_err(|e| format!("Error connecting to {}: {}", database_url, e))?;

    // Enforced per connection, not per database.
    diesel::sql_query("PRAGMA foreign_keys = ON").execute(&mut connection)?;

    Ok(connection)
}
