//! Task domain model
//!
//! Wire-faithful types for the TaskFlow HTTP API. The server owns the
//! tasks; the client only ever holds the last fetched snapshot.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{CoreError, Result};

/// Task lifecycle status.
///
/// The API transports statuses as Russian display strings, so the
/// wire form and the enum variants are mapped explicitly here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    Created,
    InProgress,
    Completed,
}

impl TaskStatus {
    /// The exact string the API uses for this status.
    pub fn as_wire(&self) -> &'static str {
        match self {
            TaskStatus::Created => "Создана",
            TaskStatus::InProgress => "В работе",
            TaskStatus::Completed => "Завершена",
        }
    }

    /// Map a wire string back to a status.
    ///
    /// Anything unrecognized collapses to `Created`, so a task with an
    /// unknown status is still offered the forward transition.
    pub fn from_wire(s: &str) -> Self {
        match s {
            "В работе" => TaskStatus::InProgress,
            "Завершена" => TaskStatus::Completed,
            _ => TaskStatus::Created,
        }
    }

    /// The single forward transition the UI offers, if any.
    pub fn next(&self) -> Option<TaskStatus> {
        match self {
            TaskStatus::Created => Some(TaskStatus::InProgress),
            TaskStatus::InProgress => Some(TaskStatus::Completed),
            TaskStatus::Completed => None,
        }
    }

    /// Translation key for the localized status label.
    pub fn label_key(&self) -> &'static str {
        match self {
            TaskStatus::Created => "status_created",
            TaskStatus::InProgress => "status_in_progress",
            TaskStatus::Completed => "status_completed",
        }
    }
}

impl Serialize for TaskStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_wire())
    }
}

impl<'de> Deserialize<'de> for TaskStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(TaskStatus::from_wire(&s))
    }
}

/// A single task as returned by the API.
///
/// Fields the server sends but the client does not render are ignored
/// during deserialization.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Task {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    pub status: TaskStatus,
    pub created_at: NaiveDateTime,
}

impl Task {
    /// Whether the task is past its due date and not yet completed.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        match self.due_date {
            Some(due) => due < today && self.status != TaskStatus::Completed,
            None => false,
        }
    }
}

/// Parse a user-supplied due date in the API's `YYYY-MM-DD` form.
pub fn parse_due_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|e| CoreError::parse_with_source(format!("Invalid due date '{raw}'"), e))
}

/// Request body for creating a task.
#[derive(Serialize, Debug, Clone)]
pub struct NewTask {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
}

impl NewTask {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            due_date: None,
        }
    }

    /// Builder method to set the description
    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    /// Builder method to set the due date
    pub fn with_due_date(mut self, due_date: Option<NaiveDate>) -> Self {
        self.due_date = due_date;
        self
    }
}
