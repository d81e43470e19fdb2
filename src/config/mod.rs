use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub mod migrate; // use submodule at src/config/migrate.rs

pub const DEFAULT_STORE_KEY: &str = "dietAppData";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_store_key")]
    pub store_key: String,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
    #[serde(default = "default_wrap_width")]
    pub wrap_width: usize,
}

fn default_store_key() -> String {
    DEFAULT_STORE_KEY.to_string()
}
fn default_separator_char() -> String {
    "-".to_string()
}
fn default_wrap_width() -> usize {
    60
}

impl Default for Config {
    fn default() -> Self {
        Self::with_database(Self::database_file())
    }
}

impl Config {
    fn with_database(db_path: PathBuf) -> Self {
        Self {
            database: db_path.to_string_lossy().to_string(),
            store_key: default_store_key(),
            separator_char: default_separator_char(),
            wrap_width: default_wrap_width(),
        }
    }

    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rdiettracker")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rdiettracker")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rdiettracker.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rdiettracker.sqlite")
    }

    /// First character of `separator_char`, '-' when empty.
    pub fn separator(&self) -> char {
        self.separator_char.chars().next().unwrap_or('-')
    }

    /// Load configuration from the standard file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    /// Load configuration from an explicit path, or return defaults if not found
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {}", path.display(), e)))?;
        Ok(serde_yaml::from_str(&content)?)
    }

    /// Write this configuration as YAML.
    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        let yaml = serde_yaml::to_string(self)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = fs::File::create(path)?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }

    /// Initialize configuration and database files.
    /// Returns the database path that was configured.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<String> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB name: user provided or default
        let db_path = if let Some(name) = custom_db {
            PathBuf::from(crate::utils::path::resolve_db_path(&name))
        } else {
            Self::database_file()
        };

        let config = Self::with_database(db_path.clone());

        // Write config file
        if !is_test {
            config.save_to(&Self::config_file())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        // Create empty DB file if not exists
        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }
        if !db_path.exists() {
            fs::File::create(&db_path).map_err(|e| {
                AppError::Io(io::Error::new(
                    e.kind(),
                    format!("cannot create database {}: {}", db_path.display(), e),
                ))
            })?;
        }

        println!("✅ Database:    {:?}", db_path);

        Ok(config.database)
    }
}
