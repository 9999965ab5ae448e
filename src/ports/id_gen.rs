//! ID generator port for producing task identifiers.

/// Generates unique identifiers.
///
/// The store re-draws on collision, so an implementation only has to
/// eventually produce a value not already present in the collection.
/// Abstracting ID generation lets tests substitute a predictable sequence.
pub trait IdGenerator: Send + Sync {
    /// Generates a new identifier string.
    fn generate_id(&self) -> String;
}
