//! Configuration management for the agenda server.
//!
//! Configuration comes from environment variables, optionally seeded from a
//! `.env` file. Nothing here writes to stdout, which the MCP transport owns.

use crate::error::{ConfigError, ConfigResult};
use crate::persistence::{FileSlotStore, MemorySlotStore, SlotStore};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

/// Where the contact slot is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageBackend {
    /// One JSON file per slot under the data directory
    #[default]
    File,
    /// Process memory only; contacts are lost on exit
    Memory,
}

impl FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "file" => Ok(Self::File),
            "memory" => Ok(Self::Memory),
            other => Err(format!("Must be 'file' or 'memory', got: {}", other)),
        }
    }
}

/// Configuration for the agenda server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Slot medium (default: file)
    pub storage: StorageBackend,

    /// Directory for the file backend (default: "./agenda-data")
    pub data_dir: PathBuf,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `AGENDA_STORAGE`: `file` or `memory` (default: file)
    /// - `AGENDA_DATA_DIR`: directory holding slot files (default: ./agenda-data)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine
        let _ = dotenvy::dotenv();

        let defaults = Self::default();

        let storage = match env::var("AGENDA_STORAGE") {
            Ok(val) => val
                .parse::<StorageBackend>()
                .map_err(|reason| ConfigError::InvalidValue {
                    var: "AGENDA_STORAGE".to_string(),
                    reason,
                })?,
            Err(_) => defaults.storage,
        };

        let data_dir = match env::var("AGENDA_DATA_DIR") {
            Ok(val) if val.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    var: "AGENDA_DATA_DIR".to_string(),
                    reason: "Cannot be empty".to_string(),
                });
            }
            Ok(val) => PathBuf::from(val),
            Err(_) => defaults.data_dir,
        };

        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);

        Ok(Config {
            storage,
            data_dir,
            log_level,
        })
    }

    /// Build the slot medium this configuration selects.
    pub fn slot_store(&self) -> Arc<dyn SlotStore> {
        match self.storage {
            StorageBackend::File => Arc::new(FileSlotStore::new(&self.data_dir)),
            StorageBackend::Memory => Arc::new(MemorySlotStore::new()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            storage: StorageBackend::File,
            data_dir: PathBuf::from("./agenda-data"),
            log_level: "error".to_string(),
        }
    }
}
