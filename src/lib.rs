//! A counter component with an increment button, hosted in a terminal UI.
//!
//! The component (`ui::counter::CounterView`) is plain data plus a pure
//! reducer and a pure `state -> ViewTree` projection; the rest of `ui` is
//! the ratatui/crossterm host that draws the tree and feeds it clicks.

pub mod cli;
pub mod config;
pub mod logging;
pub mod ui;
