//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the application core and an
//! external source of nondeterminism (time, unique IDs). Implementations
//! live in `src/adapters/`.

pub mod clock;
pub mod id_gen;

pub use clock::Clock;
pub use id_gen::IdGenerator;
