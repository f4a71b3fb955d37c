//! Counter feature module.
//!
//! - `state.rs` - `CounterState { count }`
//! - `intent.rs` - `CounterIntent::Increment`
//! - `reducer.rs` - `count = n` → `count = n + 1`
//! - `component.rs` - `CounterView`, owns the state and projects it to a `ViewTree`

mod component;
mod intent;
mod reducer;
mod state;

pub use component::{
    CounterView, BUTTON_LABEL, COMPONENT_APP, COUNTER_DISPLAY, DISPLAY_PREFIX, INCREMENT_BUTTON,
};
pub use intent::CounterIntent;
pub use reducer::CounterReducer;
pub use state::CounterState;
