//! Interactive shell over stdin/stdout.
//!
//! One input line is one action. Task verbs are gated behind the mock
//! sign-in; `login`, `register`, `logout`, `help`, and `quit` always
//! work. User mistakes are printed and the loop keeps going; only I/O
//! failures end the session early.

use std::fmt::Write as _;
use std::io::{BufRead, Write};

use crate::commands;
use crate::context::AppContext;
use crate::session::Session;
use crate::store::TaskStore;
use crate::task::{format_display_date, Priority, Task, TaskDraft};

/// Hint shown when a task verb is used while signed out.
const SIGNED_OUT_HINT: &str =
    "sign in first: `login <email> <password>` or `register <email> <password> <password>`";

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Verb {
    Help,
    List(String),
    Show(String),
    Add(String),
    Edit(String),
    Done(String),
    Remove(String),
    Export,
    Login(String),
    Register(String),
    Logout,
    Quit,
    Unknown(String),
}

/// What the loop should do after a dispatched verb.
enum Flow {
    /// Print the reply and keep going.
    Continue(String),
    /// Leave the loop.
    Quit,
}

/// State for the interactive loop.
pub struct Shell<R: BufRead, W: Write> {
    /// Port bundle: clock for the banner, id generator for new tasks.
    ctx: AppContext,
    /// The authoritative task collection.
    store: TaskStore,
    /// Mock sign-in state.
    session: Session,
    /// Reader for user input.
    reader: R,
    /// Writer for everything shown to the user.
    writer: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Creates a shell over the given state and I/O handles.
    pub fn new(
        ctx: AppContext,
        store: TaskStore,
        session: Session,
        reader: R,
        writer: W,
    ) -> Self {
        Self { ctx, store, session, reader, writer }
    }

    /// Runs the loop until `quit` or end of input.
    ///
    /// # Errors
    ///
    /// Returns an error only when reading or writing the terminal fails.
    pub fn run(mut self) -> Result<(), String> {
        self.banner()?;
        loop {
            write!(self.writer, "focusup> ").map_err(|e| format!("write error: {e}"))?;
            self.writer.flush().map_err(|e| format!("flush error: {e}"))?;

            let mut line = String::new();
            let read =
                self.reader.read_line(&mut line).map_err(|e| format!("read error: {e}"))?;
            if read == 0 {
                writeln!(self.writer).map_err(|e| format!("write error: {e}"))?;
                break;
            }
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            match self.dispatch(parse_line(trimmed)) {
                Ok(Flow::Continue(reply)) => {
                    writeln!(self.writer, "{reply}").map_err(|e| format!("write error: {e}"))?;
                }
                Ok(Flow::Quit) => {
                    writeln!(self.writer, "Bye.").map_err(|e| format!("write error: {e}"))?;
                    break;
                }
                Err(message) => {
                    writeln!(self.writer, "error: {message}")
                        .map_err(|e| format!("write error: {e}"))?;
                }
            }
        }
        Ok(())
    }

    fn banner(&mut self) -> Result<(), String> {
        let today = self.ctx.clock.now().format("%d/%m/%Y");
        writeln!(self.writer, "FocusUp: {} task(s). Today is {today}.", self.store.len())
            .map_err(|e| format!("write error: {e}"))?;
        let status = match self.session.email() {
            Some(email) => format!("Signed in as {email}. `help` lists commands."),
            None => {
                "Signed out. Use `login <email> <password>` or `register`; `help` lists commands."
                    .to_string()
            }
        };
        writeln!(self.writer, "{status}").map_err(|e| format!("write error: {e}"))
    }

    /// Applies one verb to the application state.
    fn dispatch(&mut self, verb: Verb) -> Result<Flow, String> {
        if requires_sign_in(&verb) && !self.session.signed_in() {
            return Err(SIGNED_OUT_HINT.to_string());
        }
        let reply = match verb {
            Verb::Help => render_help(),
            Verb::Quit => return Ok(Flow::Quit),
            Verb::List(filter) => commands::list::run(&self.store, &filter)?,
            Verb::Show(reference) => {
                require_reference(&reference, "show")?;
                commands::show::run(&self.store, &reference)?
            }
            Verb::Add(inline_title) => {
                let draft = self.collect_draft(&inline_title)?;
                commands::add::run(&mut self.store, self.ctx.id_gen.as_ref(), draft)?
            }
            Verb::Edit(reference) => {
                require_reference(&reference, "edit")?;
                let current = commands::resolve_reference(&self.store, &reference)?.clone();
                let revised = self.collect_revision(current)?;
                commands::edit::run(&mut self.store, revised)?
            }
            Verb::Done(reference) => {
                require_reference(&reference, "done")?;
                commands::done::run(&mut self.store, &reference)?
            }
            Verb::Remove(reference) => {
                require_reference(&reference, "rm")?;
                commands::remove::run(&mut self.store, &reference)?
            }
            Verb::Export => commands::export::run(&self.store)?,
            Verb::Login(rest) => {
                let mut parts = rest.split_whitespace();
                let email = parts.next().unwrap_or("");
                let password = parts.next().unwrap_or("");
                if parts.next().is_some() {
                    return Err("usage: login <email> <password>".to_string());
                }
                commands::auth::login(&mut self.session, email, password)?
            }
            Verb::Register(rest) => {
                let mut parts = rest.split_whitespace();
                let email = parts.next().unwrap_or("");
                let password = parts.next().unwrap_or("");
                let confirm = parts.next().unwrap_or("");
                if parts.next().is_some() {
                    return Err("usage: register <email> <password> <password>".to_string());
                }
                commands::auth::register(email, password, confirm)?
            }
            Verb::Logout => commands::auth::logout(&mut self.session),
            Verb::Unknown(word) => {
                return Err(format!("unknown command `{word}`. `help` lists commands"));
            }
        };
        Ok(Flow::Continue(reply))
    }

    /// Collects a new-task draft, one field per line.
    ///
    /// Values are taken as typed; validation happens in the store so
    /// every rule lives in one place.
    fn collect_draft(&mut self, inline_title: &str) -> Result<TaskDraft, String> {
        let title = if inline_title.is_empty() {
            self.form_field("Title: ")?
        } else {
            inline_title.to_string()
        };
        let subject = self.form_field("Subject (optional): ")?;
        let date = self.form_field("Due date (YYYY-MM-DD): ")?;
        let priority_raw = self.form_field("Priority [medium]: ")?;
        let priority = parse_priority_field(&priority_raw)?;
        Ok(TaskDraft {
            title,
            subject: (!subject.is_empty()).then_some(subject),
            date: (!date.is_empty()).then_some(date),
            priority,
        })
    }

    /// Collects a revision of `current`, one field per line. Empty input
    /// keeps the stored value; `-` clears the subject.
    fn collect_revision(&mut self, current: Task) -> Result<Task, String> {
        let title = self.form_field(&format!("Title [{}]: ", current.title))?;
        let subject_prompt = if current.subject.is_empty() {
            "Subject (optional): ".to_string()
        } else {
            format!("Subject [{}] (`-` clears): ", current.subject)
        };
        let subject = self.form_field(&subject_prompt)?;
        let date = self.form_field(&format!(
            "Due date [{}] (YYYY-MM-DD): ",
            format_display_date(&current.date)
        ))?;
        let priority_raw =
            self.form_field(&format!("Priority [{}]: ", current.priority.label()))?;
        let priority = parse_priority_field(&priority_raw)?;

        Ok(Task {
            id: current.id,
            title: if title.is_empty() { current.title } else { title },
            subject: match subject.as_str() {
                "" => current.subject,
                "-" => String::new(),
                _ => subject,
            },
            date: if date.is_empty() { current.date } else { date },
            priority: priority.unwrap_or(current.priority),
            completed: current.completed,
        })
    }

    /// Prompts for one form field; end of input aborts the form.
    fn form_field(&mut self, prompt: &str) -> Result<String, String> {
        write!(self.writer, "{prompt}").map_err(|e| format!("write error: {e}"))?;
        self.writer.flush().map_err(|e| format!("flush error: {e}"))?;
        let mut line = String::new();
        let read = self.reader.read_line(&mut line).map_err(|e| format!("read error: {e}"))?;
        if read == 0 {
            return Err("input ended before the form was complete".to_string());
        }
        Ok(line.trim().to_string())
    }
}

/// Splits a line into a verb and its raw argument text.
fn parse_line(line: &str) -> Verb {
    let mut parts = line.splitn(2, char::is_whitespace);
    let verb = parts.next().unwrap_or("").to_lowercase();
    let rest = parts.next().unwrap_or("").trim().to_string();
    match verb.as_str() {
        "help" | "?" => Verb::Help,
        "list" | "ls" => Verb::List(rest),
        "show" => Verb::Show(rest),
        "add" | "new" => Verb::Add(rest),
        "edit" => Verb::Edit(rest),
        "done" | "toggle" => Verb::Done(rest),
        "rm" | "remove" => Verb::Remove(rest),
        "export" => Verb::Export,
        "login" => Verb::Login(rest),
        "register" => Verb::Register(rest),
        "logout" => Verb::Logout,
        "quit" | "exit" | "q" => Verb::Quit,
        other => Verb::Unknown(other.to_string()),
    }
}

/// True for verbs that operate on the task collection.
fn requires_sign_in(verb: &Verb) -> bool {
    matches!(
        verb,
        Verb::List(_)
            | Verb::Show(_)
            | Verb::Add(_)
            | Verb::Edit(_)
            | Verb::Done(_)
            | Verb::Remove(_)
            | Verb::Export
    )
}

/// Rejects task verbs called without a reference.
fn require_reference(reference: &str, verb: &str) -> Result<(), String> {
    if reference.is_empty() {
        return Err(format!("usage: {verb} <task>"));
    }
    Ok(())
}

/// Parses the priority field of a form: empty means "use the default".
fn parse_priority_field(raw: &str) -> Result<Option<Priority>, String> {
    if raw.is_empty() {
        return Ok(None);
    }
    Priority::parse(raw).map(Some).ok_or_else(|| {
        format!("unknown priority `{raw}`. Use high, medium, or low (alta, média, baixa)")
    })
}

fn render_help() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Commands:");
    let _ = writeln!(out, "  list [all|open|done]         show the task table");
    let _ = writeln!(out, "  show <task>                  full record for one task");
    let _ = writeln!(out, "  add [title]                  create a task, prompting per field");
    let _ = writeln!(out, "  edit <task>                  revise a task; empty input keeps a field");
    let _ = writeln!(out, "  done <task>                  toggle done/open");
    let _ = writeln!(out, "  rm <task>                    remove a task");
    let _ = writeln!(out, "  export                       print every task as JSON");
    let _ = writeln!(out, "  login <email> <password>     mock sign-in, any non-blank pair");
    let _ = writeln!(out, "  register <email> <pw> <pw>   mock registration");
    let _ = writeln!(out, "  logout                       sign out");
    let _ = writeln!(out, "  help                         this text");
    let _ = writeln!(out, "  quit                         leave");
    let _ = write!(out, "<task> is an id, an id prefix, or a row number from `list`.");
    out
}
