//! Database layer for todolist.
//!
//! SQLite persistence for users and their tasks. [`db::Db`] owns the
//! connection and applies the schema migrations when it is opened, the stores
//! borrow that connection (or a transaction on it).
//!
//! ## Usage
//!
//! ```rust
//! use todolist::db::db::Db;
//! use todolist::libs::task::Task;
//!
//! let db = Db::open_in_memory()?;
//! let mut task = Task::new("Review code");
//! let id = db.tasks().create_or_update(&mut task)?;
//! assert!(db.tasks().exists(id));
//! # Ok::<(), todolist::libs::error::TodoError>(())
//! ```

/// Connection handle, store factories and transactions.
pub mod db;

/// Versioned schema changes applied when the database is opened.
pub mod migrations;

/// CRUD for task rows.
pub mod tasks;

/// User rows and aggregate reassembly.
pub mod users;
