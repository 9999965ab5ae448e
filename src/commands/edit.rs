//! `edit` command.

use crate::store::TaskStore;
use crate::task::Task;

/// Applies a revised record prepared by the edit form.
///
/// The record's id decides which task is replaced; the store keeps its
/// position and reports whether anything matched.
///
/// # Errors
///
/// Relays the store's validation failures as user-facing messages.
pub fn run(store: &mut TaskStore, revised: Task) -> Result<String, String> {
    let title = revised.title.trim().to_string();
    let id = revised.id.clone();
    let replaced = store.update(revised).map_err(|e| e.to_string())?;
    if replaced {
        Ok(format!("Updated '{title}'."))
    } else {
        Ok(format!("No task with id {id}; nothing changed."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::builtin_tasks;
    use crate::task::Priority;

    #[test]
    fn reports_the_updated_title() {
        let mut store = TaskStore::with_tasks(builtin_tasks());
        let mut revised = store.get("4").unwrap().clone();
        revised.title = "Ler 30 páginas do livro".to_string();

        let reply = run(&mut store, revised).unwrap();

        assert_eq!(reply, "Updated 'Ler 30 páginas do livro'.");
        assert_eq!(store.get("4").unwrap().title, "Ler 30 páginas do livro");
    }

    #[test]
    fn reports_a_missing_id_without_failing() {
        let mut store = TaskStore::with_tasks(builtin_tasks());

        let reply = run(
            &mut store,
            Task {
                id: "ghost".to_string(),
                title: "Phantom".to_string(),
                subject: String::new(),
                date: "2025-05-25".to_string(),
                priority: Priority::Medium,
                completed: false,
            },
        )
        .unwrap();

        assert!(reply.contains("nothing changed"));
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn relays_validation_failures() {
        let mut store = TaskStore::with_tasks(builtin_tasks());
        let mut revised = store.get("4").unwrap().clone();
        revised.date = "whenever".to_string();

        let err = run(&mut store, revised).unwrap_err();

        assert_eq!(err, "`whenever` is not a valid calendar date");
    }
}
