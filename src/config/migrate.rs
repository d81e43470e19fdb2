//! Configuration file upgrades.
//!
//! Older config files may lack keys added in later releases. `check` reports
//! them; `migrate` writes them back with their default values, keeping the
//! keys already present untouched.

use super::Config;
use crate::db::migrate::{is_migration_applied, mark_migration_applied};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use rusqlite::Connection;
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

const VERSION: &str = "20260101_0002_config_defaults";

/// Every key a current config file is expected to contain, with its default.
fn expected_keys() -> AppResult<Mapping> {
    let defaults = serde_yaml::to_value(Config::default())?;
    match defaults {
        Value::Mapping(map) => Ok(map),
        _ => Err(AppError::Config("default configuration is not a mapping".into())),
    }
}

fn read_mapping(path: &Path) -> AppResult<Mapping> {
    let content = fs::read_to_string(path)
        .map_err(|e| AppError::Config(format!("cannot read {}: {}", path.display(), e)))?;

    match serde_yaml::from_str::<Value>(&content)? {
        Value::Mapping(map) => Ok(map),
        Value::Null => Ok(Mapping::new()),
        _ => Err(AppError::Config(format!(
            "{} does not contain a YAML mapping",
            path.display()
        ))),
    }
}

/// Keys missing from the config file at `path`.
pub fn missing_keys(path: &Path) -> AppResult<Vec<String>> {
    let current = read_mapping(path)?;

    Ok(expected_keys()?
        .keys()
        .filter(|k| !current.contains_key(*k))
        .filter_map(|k| k.as_str().map(str::to_string))
        .collect())
}

/// Add missing keys with default values. Returns the keys that were added.
pub fn migrate_config_file(path: &Path) -> AppResult<Vec<String>> {
    let mut current = read_mapping(path)?;
    let mut added = Vec::new();

    for (key, value) in expected_keys()? {
        if !current.contains_key(&key) {
            if let Some(name) = key.as_str() {
                added.push(name.to_string());
            }
            current.insert(key, value);
        }
    }

    if !added.is_empty() {
        let serialized = serde_yaml::to_string(&Value::Mapping(current))?;
        fs::write(path, serialized)?;
        info(format!("Config migration ({}) added: {}", VERSION, added.join(", ")));
    }

    Ok(added)
}

/// Run the file migration and record it in the `log` table of `conn`.
/// Already-applied versions are skipped.
pub fn run_config_migration(conn: &Connection, path: &Path) -> AppResult<Vec<String>> {
    if is_migration_applied(conn, VERSION)? && missing_keys(path)?.is_empty() {
        return Ok(Vec::new());
    }

    let added = migrate_config_file(path)?;

    if !is_migration_applied(conn, VERSION)? {
        mark_migration_applied(conn, VERSION, "Added missing configuration keys")?;
        success(format!("Migration applied: {}", VERSION));
    }

    Ok(added)
}
