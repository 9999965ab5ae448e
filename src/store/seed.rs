//! Seed collections: the built-in samples and YAML seed files.

use std::collections::HashSet;

use crate::task::{parse_date, to_stored, Priority, Task};

/// The four sample tasks the app starts with by default.
#[must_use]
pub fn builtin_tasks() -> Vec<Task> {
    vec![
        sample(
            "1",
            "Estudar para a prova de design",
            "Revisar os capítulos 3 e 4",
            "2025-05-25T00:00:00Z",
            Priority::High,
            false,
        ),
        sample(
            "2",
            "Fazer compras no mercado",
            "Leite, pão, ovos",
            "2025-05-23T00:00:00Z",
            Priority::Medium,
            true,
        ),
        sample(
            "3",
            "Enviar relatório do estágio",
            "Relatório final do mês",
            "2025-05-26T00:00:00Z",
            Priority::High,
            false,
        ),
        sample(
            "4",
            "Ler 20 páginas do livro",
            "Capítulo 4 de Design",
            "2025-05-22T00:00:00Z",
            Priority::Low,
            false,
        ),
    ]
}

fn sample(
    id: &str,
    title: &str,
    subject: &str,
    date: &str,
    priority: Priority,
    completed: bool,
) -> Task {
    Task {
        id: id.to_string(),
        title: title.to_string(),
        subject: subject.to_string(),
        date: date.to_string(),
        priority,
        completed,
    }
}

/// Parses and validates the contents of a YAML seed file.
///
/// Each entry needs at least `id`, `title`, and `date`; subject, priority,
/// and completed fall back to their defaults. Titles are trimmed and dates
/// normalized to the stored form, so a loaded collection satisfies the
/// same invariants as one built through the store.
///
/// # Errors
///
/// Returns a description of the first problem found: YAML that does not
/// parse, a duplicate or blank id, a blank title, or an invalid date.
pub fn parse_seed_file(contents: &str) -> Result<Vec<Task>, String> {
    let raw: Vec<Task> = serde_yaml::from_str(contents)
        .map_err(|e| format!("seed file is not a valid task list: {e}"))?;

    let mut seen: HashSet<String> = HashSet::new();
    let mut tasks = Vec::with_capacity(raw.len());
    for (index, task) in raw.into_iter().enumerate() {
        let entry = index + 1;
        let id = task.id.trim();
        if id.is_empty() {
            return Err(format!("seed task {entry} has a blank id"));
        }
        if !seen.insert(id.to_string()) {
            return Err(format!("seed task {entry} reuses id `{id}`"));
        }
        let title = task.title.trim();
        if title.is_empty() {
            return Err(format!("seed task {entry} ({id}) has an empty title"));
        }
        let Some(date) = parse_date(&task.date) else {
            return Err(format!(
                "seed task {entry} ({id}) has an invalid date `{}`",
                task.date
            ));
        };
        tasks.push(Task {
            id: id.to_string(),
            title: title.to_string(),
            subject: task.subject.trim().to_string(),
            date: to_stored(date),
            priority: task.priority,
            completed: task.completed,
        });
    }
    Ok(tasks)
}
