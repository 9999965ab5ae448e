//! `add` command.

use crate::commands::short_id;
use crate::ports::IdGenerator;
use crate::store::TaskStore;
use crate::task::{format_display_date, TaskDraft};

/// Validates the draft and appends it to the collection.
///
/// # Errors
///
/// Relays the store's validation failures (blank title, missing or
/// invalid date) as user-facing messages.
pub fn run(
    store: &mut TaskStore,
    id_gen: &dyn IdGenerator,
    draft: TaskDraft,
) -> Result<String, String> {
    let task = store.add(draft, id_gen).map_err(|e| e.to_string())?;
    Ok(format!(
        "Added '{}' ({}) due {}.",
        task.title,
        short_id(&task.id),
        format_display_date(&task.date)
    ))
}
