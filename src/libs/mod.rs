//! Domain model and supporting infrastructure.
//!
//! ## Features
//!
//! - **Aggregates**: Tasks and the users owning them
//! - **Admission Policy**: Soft and hard limits on the number of tasks per user
//! - **Notifications**: The notifier seam and its logging stub
//! - **Core Infrastructure**: Configuration, data storage, errors, messaging and logging
//!
//! ## Usage
//!
//! ```rust,no_run
//! use todolist::db::db::Db;
//! use todolist::libs::task::Task;
//!
//! let db = Db::open_in_memory()?;
//! let mut task = Task::new("Buy milk");
//! db.tasks().create_or_update(&mut task)?;
//! assert!(task.id > 0);
//! # Ok::<(), todolist::libs::error::TodoError>(())
//! ```

pub mod admission;
pub mod config;
pub mod data_storage;
pub mod error;
pub mod logging;
pub mod messages;
pub mod notifier;
pub mod task;
pub mod user;
pub mod validation;
