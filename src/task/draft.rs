//! Draft records collected by the add form.

use super::Priority;

/// A candidate task as collected from a form, before validation.
///
/// There is no id and no completion flag here: ids are assigned by the
/// store and new tasks always start open. `TaskStore::add` validates the
/// draft, trims its text, and fills in defaults in one place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    /// Proposed title; must be non-empty after trimming.
    pub title: String,
    /// Optional context line.
    pub subject: Option<String>,
    /// Proposed due date; required, and must parse as a calendar date.
    pub date: Option<String>,
    /// Requested priority; medium when absent.
    pub priority: Option<Priority>,
}
