use super::migrations::init_with_migrations;
use super::tasks::Tasks;
use super::users::Users;
use crate::libs::config::Config;
use crate::libs::data_storage::DataStorage;
use crate::libs::error::Result;
use crate::libs::messages::Message;
use crate::{msg_debug, msg_info};
use rusqlite::{Connection, Transaction};
use std::path::Path;

/// Handle on the SQLite database shared by the task and user stores.
pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the configured database file inside the data directory.
    pub fn new() -> anyhow::Result<Db> {
        let config = Config::read()?;
        let db_file_path = DataStorage::new().get_path(&config.database().file_name)?;

        Ok(Self::open(db_file_path)?)
    }

    /// Opens (or creates) the database at `path` and brings its schema up to date.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Db> {
        let mut conn = Connection::open(path.as_ref())?;
        init_with_migrations(&mut conn)?;
        msg_debug!(Message::DatabaseOpened(path.as_ref().display().to_string()));

        Ok(Db { conn })
    }

    pub fn open_in_memory() -> Result<Db> {
        let mut conn = Connection::open_in_memory()?;
        init_with_migrations(&mut conn)?;

        Ok(Db { conn })
    }

    /// Opens the configured database file without touching its schema.
    pub fn new_without_migrations() -> anyhow::Result<Connection> {
        let config = Config::read()?;
        let db_file_path = DataStorage::new().get_path(&config.database().file_name)?;

        Ok(Connection::open(db_file_path)?)
    }

    pub fn tasks(&self) -> Tasks<'_> {
        Tasks::new(&self.conn)
    }

    pub fn users(&self) -> Users<'_> {
        Users::new(&self.conn)
    }

    pub fn transaction(&mut self) -> Result<Transaction<'_>> {
        Ok(self.conn.transaction()?)
    }

    /// Removes every task and user row.
    pub fn clear(&self) -> Result<()> {
        self.conn.execute("DELETE FROM tasks", [])?;
        self.conn.execute("DELETE FROM users", [])?;
        msg_info!(Message::DatabaseCleared);

        Ok(())
    }
}
