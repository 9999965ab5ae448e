//! Application context bundling the port trait objects.

use crate::adapters::live::clock::LiveClock;
use crate::adapters::live::id_gen::LiveIdGenerator;
use crate::ports::clock::Clock;
use crate::ports::id_gen::IdGenerator;

/// Bundles the port trait objects into a single context.
///
/// The shell owns one context for the lifetime of the process; tests build
/// their own with deterministic adapters.
pub struct AppContext {
    /// Clock for obtaining the current time.
    pub clock: Box<dyn Clock>,
    /// ID generator for new tasks.
    pub id_gen: Box<dyn IdGenerator>,
}

impl AppContext {
    /// Creates a context with the real system clock and a UUID generator.
    #[must_use]
    pub fn live() -> Self {
        Self { clock: Box::new(LiveClock), id_gen: Box::new(LiveIdGenerator) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn live_context_produces_ids() {
        let ctx = AppContext::live();
        let id = ctx.id_gen.generate_id();
        assert!(!id.is_empty());
    }
}
