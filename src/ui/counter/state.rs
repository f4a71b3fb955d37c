//! State for the counter.

use crate::ui::mvi::UiState;

/// The counter's only datum. Starts at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CounterState {
    pub count: i64,
}

impl UiState for CounterState {}

impl CounterState {
    pub fn new(count: i64) -> Self {
        Self { count }
    }
}
