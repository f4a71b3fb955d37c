//! Model-View-Intent primitives.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ ViewTree
//!    ↑                                 │
//!    └─────────── host events ─────────┘
//! ```
//!
//! State is plain data, intents are events, and the reducer is the only
//! place a state transition happens.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
