//! `show` command.

use std::fmt::Write as _;

use crate::commands::resolve_reference;
use crate::store::TaskStore;
use crate::task::format_display_date;

/// Renders one task's full record.
///
/// # Errors
///
/// Returns a message when the reference resolves to no task or to more
/// than one.
pub fn run(store: &TaskStore, reference: &str) -> Result<String, String> {
    let task = resolve_reference(store, reference)?;

    let mut out = String::new();
    let _ = writeln!(out, "Task {}", task.id);
    let _ = writeln!(out, "  Title:    {}", task.title);
    if !task.subject.is_empty() {
        let _ = writeln!(out, "  Subject:  {}", task.subject);
    }
    let _ = writeln!(out, "  Due:      {}", format_display_date(&task.date));
    let _ = writeln!(
        out,
        "  Priority: {} ({})",
        task.priority.label(),
        task.priority.color()
    );
    let _ = write!(
        out,
        "  Status:   {}",
        if task.completed { "done" } else { "open" }
    );
    Ok(out)
}
