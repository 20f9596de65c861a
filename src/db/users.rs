use super::tasks::Tasks;
use crate::libs::error::Result;
use crate::libs::messages::Message;
use crate::libs::user::User;
use crate::msg_debug;
use chrono::Local;
use rusqlite::{params, Connection, OptionalExtension, Row};

const USER_COLUMNS: &str = "id, firstname, lastname, email, birthdate, password, created_at, updated_at";
const INSERT_USER: &str = "INSERT INTO users (firstname, lastname, email, birthdate, password, created_at, updated_at)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)";
const UPDATE_USER: &str = "UPDATE users SET firstname = ?1, lastname = ?2, email = ?3, birthdate = ?4, password = ?5,
    created_at = ?6, updated_at = ?7 WHERE id = ?8";
const DELETE_USER: &str = "DELETE FROM users WHERE id = ?1";
const DELETE_USER_TASKS: &str = "DELETE FROM tasks WHERE user_id = ?1";
const COUNT_USER_BY_ID: &str = "SELECT COUNT(*) FROM users WHERE id = ?1";

/// User rows over a borrowed connection.
///
/// Only the `users` row is written here, owned tasks are persisted by
/// [`User::save`]. Reads reassemble the whole aggregate.
pub struct Users<'a> {
    conn: &'a Connection,
}

impl<'a> Users<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Users { conn }
    }

    pub fn exists(&self, id: i64) -> bool {
        match self.conn.query_row(COUNT_USER_BY_ID, params![id], |row| row.get::<_, i64>(0)) {
            Ok(count) => count > 0,
            Err(e) => {
                msg_debug!(Message::UserLookupFailed(id, e.to_string()));
                false
            }
        }
    }

    /// Inserts or updates the user row, following the same id rule as tasks.
    pub fn create_or_update(&self, user: &mut User) -> Result<i64> {
        if user.id == 0 {
            let mut stmt = self.conn.prepare(INSERT_USER)?;
            let id = stmt.insert(params![
                user.firstname,
                user.lastname,
                user.email,
                user.birthdate,
                user.password,
                user.created_at,
                user.updated_at,
            ])?;

            user.id = id;
            msg_debug!(Message::UserCreated(id));
        } else {
            let updated_at = Local::now().naive_local().max(user.updated_at);
            let mut stmt = self.conn.prepare(UPDATE_USER)?;
            stmt.execute(params![
                user.firstname,
                user.lastname,
                user.email,
                user.birthdate,
                user.password,
                user.created_at,
                updated_at,
                user.id,
            ])?;

            user.updated_at = updated_at;
            msg_debug!(Message::UserUpdated(user.id));
        }

        Ok(user.id)
    }

    /// Loads a user together with its tasks.
    pub fn get(&self, id: i64) -> Result<Option<User>> {
        let user = self
            .conn
            .query_row(&format!("SELECT {} FROM users WHERE id = ?1", USER_COLUMNS), params![id], user_from_row)
            .optional()?;

        match user {
            Some(mut user) => {
                user.tasks = Tasks::new(self.conn).list_by_user(user.id)?;
                Ok(Some(user))
            }
            None => Ok(None),
        }
    }

    /// Every user with its tasks, ordered by id.
    pub fn list_all(&self) -> Result<Vec<User>> {
        let mut stmt = self.conn.prepare(&format!("SELECT {} FROM users ORDER BY id", USER_COLUMNS))?;
        let mut users = stmt.query_map([], user_from_row)?.collect::<rusqlite::Result<Vec<_>>>()?;

        let tasks = Tasks::new(self.conn);
        for user in users.iter_mut() {
            user.tasks = tasks.list_by_user(user.id)?;
        }

        Ok(users)
    }

    /// Deletes the user row and every task row it owns.
    ///
    /// Run it inside a transaction to make both deletes atomic, as
    /// [`User::delete`] does.
    pub fn delete(&self, id: i64) -> Result<()> {
        self.conn.execute(DELETE_USER_TASKS, params![id])?;
        self.conn.execute(DELETE_USER, params![id])?;
        msg_debug!(Message::UserDeleted(id));

        Ok(())
    }
}

fn user_from_row(row: &Row) -> rusqlite::Result<User> {
    Ok(User {
        id: row.get(0)?,
        firstname: row.get(1)?,
        lastname: row.get(2)?,
        email: row.get(3)?,
        birthdate: row.get(4)?,
        password: row.get(5)?,
        tasks: Vec::new(),
        created_at: row.get(6)?,
        updated_at: row.get(7)?,
    })
}
