//! `rm` command.

use crate::commands::resolve_reference;
use crate::store::TaskStore;

/// Removes the referenced task and reports which one went away.
///
/// # Errors
///
/// Returns a message when the reference does not resolve to exactly one
/// task.
pub fn run(store: &mut TaskStore, reference: &str) -> Result<String, String> {
    let id = resolve_reference(store, reference)?.id.clone();
    match store.remove(&id) {
        Some(task) => Ok(format!("Removed '{}'.", task.title)),
        None => Err(format!("no task matches `{reference}`")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::builtin_tasks;

    #[test]
    fn removes_by_id_and_reports_the_title() {
        let mut store = TaskStore::with_tasks(builtin_tasks());

        let reply = run(&mut store, "3").unwrap();

        assert_eq!(reply, "Removed 'Enviar relatório do estágio'.");
        assert_eq!(store.len(), 3);
        assert!(store.get("3").is_none());
    }

    #[test]
    fn later_tasks_keep_their_order() {
        let mut store = TaskStore::with_tasks(builtin_tasks());

        run(&mut store, "2").unwrap();

        let ids: Vec<&str> = store.tasks().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["1", "3", "4"]);
    }

    #[test]
    fn unknown_references_are_an_error() {
        let mut store = TaskStore::with_tasks(builtin_tasks());
        assert!(run(&mut store, "missing").is_err());
        assert_eq!(store.len(), 4);
    }
}
