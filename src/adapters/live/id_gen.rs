//! Random task-id adapter.

use uuid::Uuid;

use crate::ports::IdGenerator;

/// Id generator backed by random v4 UUIDs.
///
/// Collisions are vanishingly rare, and the store re-draws if one ever
/// shows up, so drawn ids can be treated as unique.
#[derive(Debug, Default, Clone, Copy)]
pub struct LiveIdGenerator;

impl IdGenerator for LiveIdGenerator {
    fn generate_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}
