//! Free-text matching capability for catalog items.

/// Something a free-text query can be matched against.
///
/// The default implementation matches nothing. Item kinds that expose
/// searchable facets override [`Searchable::matches`] with their own rules.
pub trait Searchable {
    fn matches(&self, _query: &str) -> bool {
        false
    }
}
