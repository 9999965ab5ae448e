//! `export` command.

use crate::store::TaskStore;

/// Renders every task as pretty-printed JSON, suitable for piping into
/// other tools.
///
/// # Errors
///
/// Returns a message when serialization fails.
pub fn run(store: &TaskStore) -> Result<String, String> {
    serde_json::to_string_pretty(store.tasks())
        .map_err(|e| format!("failed to render tasks as JSON: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::builtin_tasks;
    use crate::task::Task;

    #[test]
    fn exports_the_whole_collection() {
        let store = TaskStore::with_tasks(builtin_tasks());

        let json = run(&store).unwrap();
        let back: Vec<Task> = serde_json::from_str(&json).unwrap();

        assert_eq!(back, store.tasks());
    }

    #[test]
    fn uses_lowercase_priority_names() {
        let store = TaskStore::with_tasks(builtin_tasks());

        let json = run(&store).unwrap();

        assert!(json.contains("\"priority\": \"high\""));
        assert!(json.contains("\"completed\": true"));
    }

    #[test]
    fn empty_store_exports_an_empty_array() {
        let store = TaskStore::new();
        assert_eq!(run(&store).unwrap(), "[]");
    }
}
