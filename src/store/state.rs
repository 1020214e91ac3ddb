//! Base trait for store state.

/// Marker trait for the state held by a client store.
///
/// State values should be:
/// - Immutable (Clone to produce a successor)
/// - Self-contained (everything the view needs to render)
/// - Comparable (PartialEq so change detection stays cheap)
pub trait StoreState: Clone + PartialEq + Default + Send + 'static {}
