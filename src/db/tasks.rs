use crate::libs::error::Result;
use crate::libs::messages::Message;
use crate::libs::task::Task;
use crate::msg_debug;
use chrono::Local;
use rusqlite::{params, Connection, OptionalExtension, Row};

const TASK_COLUMNS: &str = "id, name, description, completed, end_date, begin_date, priority, location, label, user_id, created_at, updated_at";
const INSERT_TASK: &str = "INSERT INTO tasks (name, description, completed, end_date, begin_date, priority, location, label, user_id, created_at, updated_at)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)";
const UPDATE_TASK: &str = "UPDATE tasks SET name = ?1, description = ?2, completed = ?3, end_date = ?4, begin_date = ?5, priority = ?6,
    location = ?7, label = ?8, user_id = ?9, created_at = ?10, updated_at = ?11 WHERE id = ?12";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE id = ?1";
const COUNT_TASK_BY_ID: &str = "SELECT COUNT(*) FROM tasks WHERE id = ?1";

/// Task rows over a borrowed connection.
///
/// Works the same on a plain connection and inside a transaction.
pub struct Tasks<'a> {
    conn: &'a Connection,
}

impl<'a> Tasks<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Tasks { conn }
    }

    /// Whether a row with `id` exists. Query failures count as "no".
    pub fn exists(&self, id: i64) -> bool {
        match self.conn.query_row(COUNT_TASK_BY_ID, params![id], |row| row.get::<_, i64>(0)) {
            Ok(count) => count > 0,
            Err(e) => {
                msg_debug!(Message::TaskLookupFailed(id, e.to_string()));
                false
            }
        }
    }

    /// Inserts a transient task or updates a persisted one.
    ///
    /// On insert the generated id is written back into `task`; on update
    /// `updated_at` is refreshed.
    pub fn create_or_update(&self, task: &mut Task) -> Result<i64> {
        if task.id == 0 {
            let mut stmt = self.conn.prepare(INSERT_TASK)?;
            let id = stmt.insert(params![
                task.name,
                task.description,
                task.completed,
                task.end_date,
                task.begin_date,
                task.priority,
                task.location,
                task.label,
                task.user_id,
                task.created_at,
                task.updated_at,
            ])?;

            task.id = id;
            msg_debug!(Message::TaskCreated(id));
        } else {
            let updated_at = Local::now().naive_local().max(task.updated_at);
            let mut stmt = self.conn.prepare(UPDATE_TASK)?;
            stmt.execute(params![
                task.name,
                task.description,
                task.completed,
                task.end_date,
                task.begin_date,
                task.priority,
                task.location,
                task.label,
                task.user_id,
                task.created_at,
                updated_at,
                task.id,
            ])?;

            task.updated_at = updated_at;
            msg_debug!(Message::TaskUpdated(task.id));
        }

        Ok(task.id)
    }

    /// Deletes the task's row. A task without a row is not an error.
    pub fn delete(&self, task: &Task) -> Result<()> {
        let mut stmt = self.conn.prepare(DELETE_TASK)?;
        let affected = stmt.execute(params![task.id])?;

        if affected == 0 {
            msg_debug!(Message::TaskDeleteNoRows(task.id));
        } else {
            msg_debug!(Message::TaskDeleted(task.id));
        }

        Ok(())
    }

    pub fn get(&self, id: i64) -> Result<Option<Task>> {
        let task = self
            .conn
            .query_row(&format!("SELECT {} FROM tasks WHERE id = ?1", TASK_COLUMNS), params![id], task_from_row)
            .optional()?;

        Ok(task)
    }

    /// All tasks owned by `user_id`, oldest first.
    pub fn list_by_user(&self, user_id: i64) -> Result<Vec<Task>> {
        let mut stmt = self.conn.prepare(&format!("SELECT {} FROM tasks WHERE user_id = ?1 ORDER BY id", TASK_COLUMNS))?;
        let task_iter = stmt.query_map(params![user_id], task_from_row)?;

        let mut tasks = Vec::new();
        for task_result in task_iter {
            tasks.push(task_result?);
        }

        Ok(tasks)
    }

    pub fn list_all(&self) -> Result<Vec<Task>> {
        let mut stmt = self.conn.prepare(&format!("SELECT {} FROM tasks ORDER BY id", TASK_COLUMNS))?;
        let tasks = stmt.query_map([], task_from_row)?.collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(tasks)
    }
}

fn task_from_row(row: &Row) -> rusqlite::Result<Task> {
    Ok(Task {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
        completed: row.get(3)?,
        end_date: row.get(4)?,
        begin_date: row.get(5)?,
        priority: row.get(6)?,
        location: row.get(7)?,
        label: row.get(8)?,
        user_id: row.get(9)?,
        created_at: row.get(10)?,
        updated_at: row.get(11)?,
    })
}
