//! `done` command.

use crate::commands::resolve_reference;
use crate::store::TaskStore;

/// Flips the completion flag of the referenced task.
///
/// # Errors
///
/// Returns a message when the reference does not resolve to exactly one
/// task.
pub fn run(store: &mut TaskStore, reference: &str) -> Result<String, String> {
    let task = resolve_reference(store, reference)?;
    let id = task.id.clone();
    let title = task.title.clone();
    match store.toggle_completed(&id) {
        Some(true) => Ok(format!("Marked '{title}' as done.")),
        Some(false) => Ok(format!("Marked '{title}' as open again.")),
        None => Err(format!("no task matches `{reference}`")),
    }
}
