//! The user aggregate.
//!
//! A [`User`] owns an ordered list of [`Task`]s. Tasks are addressed by their
//! position in that list, not by their database id. Adding tasks goes through
//! the [`AdmissionPolicy`], saving writes the user row and then every owned
//! task inside one transaction.
//!
//! ```rust,no_run
//! use todolist::db::db::Db;
//! use todolist::libs::notifier::LogNotifier;
//! use todolist::libs::task::Task;
//! use todolist::libs::user::User;
//!
//! let mut db = Db::open("tasks.db")?;
//! let notifier = LogNotifier::new();
//!
//! let mut user = User::new("Grace", "Hopper", "grace@example.com", None);
//! user.parse_birthdate("1906-12-09")?;
//! user.validate()?;
//!
//! user.add_task(Task::new("Find the moth"), &notifier)?;
//! user.complete_task(0)?;
//! user.save(&mut db)?;
//! # Ok::<(), todolist::libs::error::TodoError>(())
//! ```

use super::admission::{AdmissionPolicy, REMINDER_SUBJECT};
use super::error::{Result, TaskSaveFailure, TodoError};
use super::notifier::Notifier;
use super::task::Task;
use super::validation::{is_valid_email, parse_date, ValidationIssue, MIN_AGE};
use crate::db::db::Db;
use crate::db::tasks::Tasks;
use crate::db::users::Users;
use crate::libs::messages::Message;
use crate::{msg_debug, msg_error, msg_warning};
use chrono::{Datelike, Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// 0 until the user is saved for the first time
    pub id: i64,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub birthdate: Option<NaiveDate>,
    #[serde(skip_serializing, default)]
    pub password: String,
    #[serde(default)]
    pub(crate) tasks: Vec<Task>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl User {
    pub fn new(firstname: &str, lastname: &str, email: &str, tasks: Option<Vec<Task>>) -> Self {
        let now = Local::now().naive_local();
        User {
            id: 0,
            firstname: firstname.to_string(),
            lastname: lastname.to_string(),
            email: email.to_string(),
            birthdate: None,
            password: String::new(),
            tasks: tasks.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_persisted(&self) -> bool {
        self.id != 0
    }

    /// Sets the birthdate from a `YYYY-MM-DD` string.
    pub fn parse_birthdate(&mut self, date: &str) -> Result<()> {
        let birthdate = parse_date(date).map_err(|issue| TodoError::ValidationFailure(vec![issue]))?;
        self.birthdate = Some(birthdate);
        Ok(())
    }

    /// Checks every rule and reports all of the failing ones.
    pub fn validate(&self) -> Result<()> {
        let mut issues = Vec::new();

        if self.firstname.is_empty() {
            issues.push(ValidationIssue::EmptyFirstname);
        }
        if self.lastname.is_empty() {
            issues.push(ValidationIssue::EmptyLastname);
        }
        if self.email.is_empty() {
            issues.push(ValidationIssue::EmptyEmail);
        } else if !is_valid_email(&self.email) {
            issues.push(ValidationIssue::InvalidEmail(self.email.clone()));
        }
        match self.birthdate {
            None => issues.push(ValidationIssue::MissingBirthdate),
            Some(_) if self.get_age() < MIN_AGE => issues.push(ValidationIssue::TooYoung(self.get_age())),
            Some(_) => {}
        }

        if issues.is_empty() {
            Ok(())
        } else {
            Err(TodoError::ValidationFailure(issues))
        }
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Age as the difference between the current year and the birth year.
    ///
    /// Month and day are ignored. Without a birthdate the age is 0.
    pub fn get_age(&self) -> i32 {
        match self.birthdate {
            Some(birthdate) => Local::now().year() - birthdate.year(),
            None => 0,
        }
    }

    /// Adds a task under the default [`AdmissionPolicy`].
    ///
    /// Thresholds from [`Config`](crate::libs::config::Config) are not read
    /// here. Pass `config.admission_policy()` to [`User::add_task_with_policy`]
    /// to apply them.
    pub fn add_task(&mut self, task: Task, notifier: &dyn Notifier) -> Result<()> {
        self.add_task_with_policy(task, notifier, &AdmissionPolicy::default())
    }

    /// Adds a task, reminding the user once the soft limit is reached and
    /// refusing it at the hard limit.
    ///
    /// A failed reminder aborts the add.
    pub fn add_task_with_policy(&mut self, task: Task, notifier: &dyn Notifier, policy: &AdmissionPolicy) -> Result<()> {
        let count = self.tasks.len();
        let admission = policy.decide(count);

        if admission.notifies() {
            msg_debug!(Message::CapacityWarning {
                email: self.email.clone(),
                count,
            });
            notifier.send(&self.email, REMINDER_SUBJECT, &policy.reminder_body())?;
        }

        if !admission.admits() {
            msg_warning!(Message::CapacityExceeded(policy.reject_at));
            return Err(TodoError::CapacityExceeded { limit: policy.reject_at });
        }

        self.tasks.push(task);
        msg_debug!(Message::UserTaskAdded(self.tasks.len()));

        Ok(())
    }

    pub fn get_task(&self, index: usize) -> Result<&Task> {
        let len = self.tasks.len();
        self.tasks.get(index).ok_or(TodoError::IndexOutOfRange { index, len })
    }

    pub fn get_task_mut(&mut self, index: usize) -> Result<&mut Task> {
        let len = self.tasks.len();
        self.tasks.get_mut(index).ok_or(TodoError::IndexOutOfRange { index, len })
    }

    pub fn get_tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Deletes the task at `index` from the store, then from the list.
    ///
    /// If the store fails the task stays in the list.
    pub fn delete_task(&mut self, index: usize, tasks: &Tasks) -> Result<Task> {
        tasks.delete(self.get_task(index)?)?;
        Ok(self.tasks.remove(index))
    }

    /// Flips the completion flag of the task at `index`.
    pub fn complete_task(&mut self, index: usize) -> Result<()> {
        self.get_task_mut(index)?.complete();
        Ok(())
    }

    /// Persists the user row and every owned task in one transaction.
    ///
    /// Every task is attempted even after a failure so all of them are
    /// reported. On error nothing is committed and `self` is left exactly as
    /// it was before the call.
    pub fn save(&mut self, db: &mut Db) -> Result<()> {
        let snapshot = self.clone();

        let result = self.save_in_transaction(db);
        if let Err(e) = &result {
            msg_warning!(Message::UserSaveRolledBack(e.to_string()));
            *self = snapshot;
        }

        result
    }

    fn save_in_transaction(&mut self, db: &mut Db) -> Result<()> {
        let tx = db.transaction()?;
        let user_id = Users::new(&tx).create_or_update(self)?;

        let tasks = Tasks::new(&tx);
        let mut failures = Vec::new();
        for (index, task) in self.tasks.iter_mut().enumerate() {
            task.user_id = Some(user_id);
            if let Err(e) = tasks.create_or_update(task) {
                msg_error!(Message::TaskSaveFailed(index, e.to_string()));
                failures.push(TaskSaveFailure { index, reason: e.to_string() });
            }
        }

        if !failures.is_empty() {
            return Err(TodoError::TaskSaveFailed(failures));
        }

        tx.commit()?;
        Ok(())
    }

    /// Removes the user and all of its tasks from the database.
    pub fn delete(&self, db: &mut Db) -> Result<()> {
        let tx = db.transaction()?;
        Users::new(&tx).delete(self.id)?;
        tx.commit()?;
        Ok(())
    }
}
