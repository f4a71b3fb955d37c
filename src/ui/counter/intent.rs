//! Intents for the counter.

use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterIntent {
    /// The increment button was activated. No payload is consulted.
    Increment,
}

impl Intent for CounterIntent {}
