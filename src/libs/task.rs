use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single to-do item.
///
/// `id` is 0 until the task store inserts it for the first time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub completed: bool,
    pub end_date: Option<NaiveDateTime>,
    pub begin_date: Option<NaiveDateTime>,
    pub priority: Option<i32>,
    pub location: Option<String>,
    pub label: Option<String>,
    /// Owning user, `None` while unassigned
    pub user_id: Option<i64>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Task {
    pub fn new(name: &str) -> Self {
        let now = Local::now().naive_local();
        Task {
            id: 0,
            name: name.to_string(),
            description: None,
            completed: false,
            end_date: None,
            begin_date: None,
            priority: None,
            location: None,
            label: None,
            user_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn is_persisted(&self) -> bool {
        self.id != 0
    }

    /// Flips the completion flag.
    pub fn complete(&mut self) {
        self.completed = !self.completed;
    }

    /// Multi-line description, optional fields only when set.
    pub fn details(&self) -> String {
        let mut lines = vec![
            format!("Id:           {}", self.id),
            format!("Name:         {}", self.name),
            format!("Completed:    {}", self.completed),
        ];

        if let Some(description) = self.description.as_deref().filter(|d| !d.is_empty()) {
            lines.push(format!("Description:  {}", description));
        }
        if let Some(priority) = self.priority.filter(|p| *p != 0) {
            lines.push(format!("Priority:     {}", priority));
        }
        if let Some(location) = self.location.as_deref().filter(|l| !l.is_empty()) {
            lines.push(format!("Location:     {}", location));
        }
        if let Some(label) = self.label.as_deref().filter(|l| !l.is_empty()) {
            lines.push(format!("Label:        {}", label));
        }

        lines.join("\n")
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = if self.completed { "x" } else { " " };
        write!(f, "[{}] [{}] {}", mark, self.id, self.name)
    }
}
