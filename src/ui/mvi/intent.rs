//! Marker trait for events fed to a reducer.

/// An event that can drive a state transition.
///
/// Intents carry only what the reducer needs. A button activation, for
/// example, carries nothing at all.
pub trait Intent: Send + 'static {}
