//! Base trait for store actions.

/// Marker trait for actions dispatched into a store.
///
/// An action is one of:
/// - A command issued by the view (submit, dismiss, move selection)
/// - An outcome arriving from the backend (login result, fetch result)
/// - A scheduled event (notification expiry)
pub trait Action: Send + 'static {}
