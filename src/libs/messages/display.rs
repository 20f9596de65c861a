//! Display implementation for todolist messages.
//!
//! All user-facing and log text lives here so the stores and the aggregate only
//! ever deal with `Message` variants.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(id) => format!("Task {} created", id),
            Message::TaskUpdated(id) => format!("Task {} updated", id),
            Message::TaskDeleted(id) => format!("Task {} deleted", id),
            Message::TaskDeleteNoRows(id) => format!("Task {} was not in the database, nothing deleted", id),
            Message::TaskLookupFailed(id, error) => format!("Failed to look up task {}: {}", id, error),
            Message::TaskSaveFailed(index, error) => format!("Failed to save task #{}: {}", index, error),

            // === USER MESSAGES ===
            Message::UserCreated(id) => format!("User {} created", id),
            Message::UserUpdated(id) => format!("User {} updated", id),
            Message::UserDeleted(id) => format!("User {} deleted", id),
            Message::UserLookupFailed(id, error) => format!("Failed to look up user {}: {}", id, error),
            Message::UserSaveRolledBack(error) => format!("User save rolled back: {}", error),
            Message::UserTaskAdded(count) => format!("Task added, user now has {} task(s)", count),

            // === CAPACITY MESSAGES ===
            Message::CapacityWarning { email, count } => format!("User {} already has {} tasks, sending a reminder", email, count),
            Message::CapacityExceeded(limit) => format!("Task rejected, the limit of {} tasks is reached", limit),

            // === NOTIFICATION MESSAGES ===
            Message::NotificationSent { to, subject, body } => format!("Mocked email sent:\nTo: {}\nSubject: {}\nBody: {}", to, subject, body),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigFileNotFound => "Configuration file not found, using defaults".to_string(),

            // === DATABASE MESSAGES ===
            Message::DatabaseOpened(path) => format!("Opened database at {}", path),
            Message::DatabaseCleared => "All users and tasks removed".to_string(),

            // === MIGRATION MESSAGES ===
            Message::MigrationsFound(count) => format!("Found {} pending database migrations", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationCompleted(version) => format!("Migration v{} completed", version),
            Message::MigrationFailed(version, error) => format!("Migration v{} failed: {}", version, error),
            Message::AllMigrationsCompleted => "All database migrations completed successfully".to_string(),
            Message::DatabaseUpToDate => "Database schema is up to date".to_string(),
        };

        write!(f, "{}", text)
    }
}
