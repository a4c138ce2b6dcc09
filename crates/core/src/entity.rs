//! Identity of stored catalog items.

/// Something a repository can key by identifier.
///
/// `id` must return the same value for the whole lifetime of the value (and of
/// every clone of it): repositories index on it once, at insertion.
pub trait Entity {
    /// Strongly-typed identifier, printable for error messages.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug + core::fmt::Display;

    fn id(&self) -> &Self::Id;
}
