//! The task record stored in the collection.

use serde::{Deserialize, Serialize};

use super::Priority;

/// A single to-do item.
///
/// Records are created through `TaskStore::add`, which assigns the id,
/// applies defaults, and normalizes the date; code elsewhere treats the
/// fields as plain data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Opaque unique identifier, assigned at creation and never reused
    /// while the task lives in the collection.
    pub id: String,
    /// Short description of the work; never empty once stored.
    pub title: String,
    /// Free-form context line; empty when the user gave none.
    #[serde(default)]
    pub subject: String,
    /// Due date in the stored RFC 3339 form.
    pub date: String,
    /// Urgency level.
    #[serde(default)]
    pub priority: Priority,
    /// Whether the task has been marked done.
    #[serde(default)]
    pub completed: bool,
}
