//! Marker trait for component state.

use std::fmt::Debug;

/// State owned by a single component.
///
/// `Default` is the freshly constructed state; `PartialEq` lets callers
/// skip a redraw when a transition changed nothing.
pub trait UiState: Clone + PartialEq + Default + Debug + Send + 'static {}
