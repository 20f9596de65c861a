//! # Todolist - personal task management backend
//!
//! A small library that keeps users and their tasks in SQLite.
//!
//! ## Features
//!
//! - **Task Store**: Create, update, fetch and delete task records
//! - **User Aggregate**: Users own an ordered list of tasks and are validated as a unit
//! - **Admission Policy**: A soft task limit that notifies the user and a hard limit that rejects
//! - **Notifications**: Pluggable notifier with a logging stub
//!
//! ## Usage
//!
//! ```rust,no_run
//! use todolist::db::db::Db;
//! use todolist::libs::notifier::LogNotifier;
//! use todolist::libs::task::Task;
//! use todolist::libs::user::User;
//!
//! let mut db = Db::open_in_memory()?;
//! let notifier = LogNotifier::new();
//!
//! let mut user = User::new("Ada", "Lovelace", "ada@example.com", None);
//! user.parse_birthdate("1815-12-10")?;
//! user.add_task(Task::new("Write notes"), &notifier)?;
//! user.save(&mut db)?;
//! # Ok::<(), todolist::libs::error::TodoError>(())
//! ```

pub mod db;
pub mod libs;
