//! Task record types and the pure display helpers derived from them.

mod date;
mod draft;
mod priority;
mod record;

pub use date::{format_display_date, parse_date, to_stored, INVALID_DATE};
pub use draft::TaskDraft;
pub use priority::{priority_color, Priority};
pub use record::Task;
