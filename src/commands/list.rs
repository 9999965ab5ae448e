//! `list` command.

use std::fmt::Write as _;

use crate::commands::short_id;
use crate::store::TaskStore;
use crate::task::{format_display_date, Task};

/// Which slice of the collection to show.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListFilter {
    /// Every task.
    #[default]
    All,
    /// Only tasks not yet done.
    Open,
    /// Only tasks marked done.
    Done,
}

impl ListFilter {
    /// Parses the optional `list` argument.
    ///
    /// # Errors
    ///
    /// Returns a usage message for anything other than `all`, `open`,
    /// or `done`.
    pub fn parse(value: &str) -> Result<Self, String> {
        match value.trim().to_lowercase().as_str() {
            "" | "all" => Ok(Self::All),
            "open" => Ok(Self::Open),
            "done" => Ok(Self::Done),
            other => Err(format!(
                "unknown filter `{other}`. Use `list`, `list open`, or `list done`"
            )),
        }
    }

    fn keeps(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Open => !task.completed,
            Self::Done => task.completed,
        }
    }
}

/// Renders the task table.
///
/// # Errors
///
/// Returns a usage message when the filter argument is not recognized.
pub fn run(store: &TaskStore, filter_arg: &str) -> Result<String, String> {
    let filter = ListFilter::parse(filter_arg)?;
    let rows: Vec<&Task> = store.tasks().iter().filter(|t| filter.keeps(t)).collect();

    if rows.is_empty() {
        let message = match filter {
            ListFilter::All => "No tasks yet. `add` creates one.".to_string(),
            ListFilter::Open => "No open tasks.".to_string(),
            ListFilter::Done => "No tasks marked done.".to_string(),
        };
        return Ok(message);
    }

    let mut id_width = "ID".len();
    let mut due_width = "DUE".len();
    let mut title_width = "TITLE".len();
    let mut subject_width = "SUBJECT".len();
    for task in &rows {
        id_width = id_width.max(short_id(&task.id).chars().count());
        due_width = due_width.max(format_display_date(&task.date).chars().count());
        title_width = title_width.max(task.title.chars().count());
        subject_width = subject_width.max(task.subject.chars().count());
    }

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>3}  {:<id_width$}  {:<4}  {:<8}  {:<due_width$}  {:<title_width$}  {:<subject_width$}",
        "#", "ID", "DONE", "PRIORITY", "DUE", "TITLE", "SUBJECT"
    );
    let _ = writeln!(
        out,
        "{:>3}  {:-<id_width$}  {:-<4}  {:-<8}  {:-<due_width$}  {:-<title_width$}  {:-<subject_width$}",
        "---", "", "", "", "", "", ""
    );
    for task in &rows {
        let row = store
            .tasks()
            .iter()
            .position(|t| t.id == task.id)
            .map_or(0, |i| i + 1);
        let check = if task.completed { "[x]" } else { "[ ]" };
        let _ = writeln!(
            out,
            "{row:>3}  {:<id_width$}  {check:<4}  {:<8}  {:<due_width$}  {:<title_width$}  {:<subject_width$}",
            short_id(&task.id),
            task.priority.label(),
            format_display_date(&task.date),
            task.title,
            task.subject
        );
    }

    let open = store.tasks().iter().filter(|t| !t.completed).count();
    let _ = write!(out, "\n{} task(s), {open} open.", store.len());
    Ok(out)
}
