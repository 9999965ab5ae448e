//! Shell command handlers.
//!
//! Each submodule turns one verb into a rendered reply string. Handlers
//! take the store or session plus already-collected input; prompting for
//! that input is the shell's job. `Err` strings are user mistakes (bad
//! references, validation failures) that the shell prints and survives.

pub mod add;
pub mod auth;
pub mod done;
pub mod edit;
pub mod export;
pub mod list;
pub mod remove;
pub mod show;

use crate::store::TaskStore;
use crate::task::Task;

/// Resolves a user-facing task reference to a stored task.
///
/// A reference is, in order of precedence: an exact id, a 1-based row
/// number as printed by `list`, or an unambiguous id prefix.
///
/// # Errors
///
/// Returns a message naming the reference when nothing matches or an id
/// prefix matches more than one task.
pub fn resolve_reference<'a>(store: &'a TaskStore, reference: &str) -> Result<&'a Task, String> {
    if let Some(task) = store.get(reference) {
        return Ok(task);
    }
    if let Ok(row) = reference.parse::<usize>() {
        if (1..=store.len()).contains(&row) {
            return Ok(&store.tasks()[row - 1]);
        }
    }
    let mut matches = store
        .tasks()
        .iter()
        .filter(|task| task.id.starts_with(reference));
    match (matches.next(), matches.next()) {
        (Some(task), None) => Ok(task),
        (Some(_), Some(_)) => Err(format!("`{reference}` matches more than one task id")),
        (None, _) => Err(format!("no task matches `{reference}`")),
    }
}

/// First characters of an id, enough to reference it unambiguously in
/// everyday use.
#[must_use]
pub fn short_id(id: &str) -> String {
    id.chars().take(8).collect()
}
