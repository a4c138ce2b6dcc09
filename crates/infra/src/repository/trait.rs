use shop_core::{DomainResult, Entity};

/// Ordered, identifier-unique collection of entities.
///
/// Implementations keep the value they are given. When `E` is a shared handle
/// such as `ProductHandle`, an edit made through the caller's clone is visible
/// on lookup.
pub trait Repository<E: Entity + Clone> {
    /// Returns the stored entity with this identifier, or `None`.
    ///
    /// A missing identifier is an ordinary outcome, not an error.
    fn find_by_id(&self, id: &E::Id) -> Option<E>;

    /// Appends `entity` after every stored entity.
    ///
    /// Fails with [`shop_core::DomainError::AlreadyExists`] when an entity with
    /// the same identifier is stored; the collection is left unchanged.
    fn add(&mut self, entity: E) -> DomainResult<()>;

    /// Removes the entity with this identifier, keeping the order of the rest.
    ///
    /// Fails with [`shop_core::DomainError::NotFound`] when nothing is stored
    /// under `id`; the collection is left unchanged.
    fn remove_by_id(&mut self, id: &E::Id) -> DomainResult<()>;

    /// Snapshot of every stored entity in insertion order.
    ///
    /// The returned `Vec` is detached from the repository: later adds and
    /// removals do not show up in it.
    fn find_all(&self) -> Vec<E>;
}
