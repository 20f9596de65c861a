//! Configuration management for todolist.
//!
//! Settings live in a JSON file inside the platform data directory (see
//! [`DataStorage`]). Every section is optional; a missing file or section
//! falls back to the defaults.
//!
//! ```rust,no_run
//! use todolist::libs::config::Config;
//!
//! let config = Config::read()?;
//! let policy = config.admission_policy();
//! println!("reminder from {} tasks, limit {}", policy.notify_at, policy.reject_at);
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::admission::AdmissionPolicy;
use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::{msg_debug, msg_info};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

/// Configuration file name inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Default SQLite file name.
pub const DB_FILE_NAME: &str = "tasks.db";

/// Database location settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DatabaseConfig {
    /// SQLite file name, resolved inside the data directory.
    pub file_name: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        DatabaseConfig {
            file_name: DB_FILE_NAME.to_string(),
        }
    }
}

/// Root configuration.
///
/// Unset sections are omitted from the written file so it only ever contains
/// what the user changed.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<DatabaseConfig>,

    /// Task capacity thresholds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admission: Option<AdmissionPolicy>,
}

impl Config {
    /// Loads the configuration file, or the defaults when there is none.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            msg_debug!(Message::ConfigFileNotFound);
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Writes the configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        msg_info!(Message::ConfigSaved);
        Ok(())
    }

    pub fn database(&self) -> DatabaseConfig {
        self.database.clone().unwrap_or_default()
    }

    /// Configured task thresholds, or the defaults.
    ///
    /// [`User::add_task`](crate::libs::user::User::add_task) always uses the
    /// defaults; callers pass this to `add_task_with_policy` themselves.
    pub fn admission_policy(&self) -> AdmissionPolicy {
        self.admission.unwrap_or_default()
    }
}
