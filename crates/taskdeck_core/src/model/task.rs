//! Task record and category vocabulary.
//!
//! # Invariants
//! - `id`, `category` and `created_at` never change after creation.
//! - Serialized field names match the persisted `tasks` slot format.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type TaskId = Uuid;

/// Category preselected by the creation form.
pub const DEFAULT_CATEGORY: &str = "General";

/// Categories offered by the creation form, in display order.
pub const CATEGORIES: &[&str] = &[DEFAULT_CATEGORY, "Work", "Study", "Personal"];

/// Returns the fixed category equal to `value`, if any.
pub fn known_category(value: &str) -> Option<&'static str> {
    CATEGORIES.iter().copied().find(|known| *known == value)
}

/// A single to-do record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub completed: bool,
    pub category: String,
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Builds a pending task with a fresh id, stamped with the current time.
    pub fn new(title: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            completed: false,
            category: category.into(),
            created_at: Utc::now(),
        }
    }
}
