//! The authoritative in-memory task collection.
//!
//! [`TaskStore`] owns the ordered sequence of [`Task`] records and exposes
//! the four mutation primitives: add, update, remove, and toggle. All
//! validation and defaulting happens here, so records read back from the
//! store are always well formed. Nothing in this module performs I/O.

mod seed;

use thiserror::Error;

pub use seed::{builtin_tasks, parse_seed_file};

use crate::ports::IdGenerator;
use crate::task::{parse_date, to_stored, Task, TaskDraft};

/// Why an add or update was rejected.
///
/// Absence of a targeted id is not represented here: update, remove,
/// and toggle report it through their return values instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The title was empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,
    /// No due date was supplied.
    #[error("a due date is required")]
    MissingDate,
    /// The due date did not parse as a calendar date.
    #[error("`{0}` is not a valid calendar date")]
    InvalidDate(String),
}

/// Ordered task collection with insertion-order iteration.
///
/// Not synchronized: each operation runs to completion between two user
/// actions, and callers that need concurrency must serialize mutations
/// behind one owner.
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with a seed collection.
    ///
    /// The tasks are trusted as-is; seed loaders validate before calling
    /// this. Seeds are the only way a record can enter the store already
    /// completed.
    #[must_use]
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    /// All tasks in insertion order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Number of tasks in the collection.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// True when the collection holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Looks up a task by exact id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Validates a draft and appends it as a new open task.
    ///
    /// The title and subject are trimmed, the date is normalized to the
    /// stored form, missing priority falls back to medium, and a fresh id
    /// is drawn from `id_gen` (re-drawing on the off chance of a clash).
    /// Returns a copy of the stored record.
    ///
    /// # Errors
    ///
    /// [`ValidationError::EmptyTitle`] when the trimmed title is empty,
    /// [`ValidationError::MissingDate`] when no date was given, and
    /// [`ValidationError::InvalidDate`] when the date does not parse.
    pub fn add(
        &mut self,
        draft: TaskDraft,
        id_gen: &dyn IdGenerator,
    ) -> Result<Task, ValidationError> {
        let title = draft.title.trim();
        if title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        let date = normalize_date(draft.date.as_deref())?;

        let mut id = id_gen.generate_id();
        while self.get(&id).is_some() {
            id = id_gen.generate_id();
        }

        let task = Task {
            id,
            title: title.to_string(),
            subject: draft
                .subject
                .as_deref()
                .map(str::trim)
                .unwrap_or_default()
                .to_string(),
            date,
            priority: draft.priority.unwrap_or_default(),
            completed: false,
        };
        self.tasks.push(task.clone());
        Ok(task)
    }

    /// Replaces the stored record whose id matches `task.id`.
    ///
    /// The replacement passes through the same trimming and date
    /// normalization as [`TaskStore::add`]; position in the collection and
    /// the completion flag carried by `task` are preserved. Returns
    /// `Ok(false)` without touching anything when no record has that id.
    ///
    /// # Errors
    ///
    /// Same validation failures as [`TaskStore::add`].
    pub fn update(&mut self, task: Task) -> Result<bool, ValidationError> {
        let title = task.title.trim();
        if title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        let date = normalize_date(Some(task.date.as_str()))?;

        let Some(slot) = self.tasks.iter_mut().find(|t| t.id == task.id) else {
            return Ok(false);
        };
        *slot = Task {
            id: task.id,
            title: title.to_string(),
            subject: task.subject.trim().to_string(),
            date,
            priority: task.priority,
            completed: task.completed,
        };
        Ok(true)
    }

    /// Removes a task by id, returning the removed record.
    ///
    /// Returns `None`, leaving the collection untouched, when no record
    /// has that id.
    pub fn remove(&mut self, id: &str) -> Option<Task> {
        let index = self.tasks.iter().position(|task| task.id == id)?;
        Some(self.tasks.remove(index))
    }

    /// Flips a task's completion flag, returning the new value.
    ///
    /// Returns `None`, leaving the collection untouched, when no record
    /// has that id.
    pub fn toggle_completed(&mut self, id: &str) -> Option<bool> {
        let task = self.tasks.iter_mut().find(|task| task.id == id)?;
        task.completed = !task.completed;
        Some(task.completed)
    }
}

/// Shared date validation for add and update.
fn normalize_date(raw: Option<&str>) -> Result<String, ValidationError> {
    let Some(value) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return Err(ValidationError::MissingDate);
    };
    let date =
        parse_date(value).ok_or_else(|| ValidationError::InvalidDate(value.to_string()))?;
    Ok(to_stored(date))
}
