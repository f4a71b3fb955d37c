//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use counterview::ui::counter::{CounterState, CounterView};
use counterview::ui::view::{ViewNode, ViewTree};
use std::path::PathBuf;
use tempfile::TempDir;

/// Fresh component, optionally with an explicit state set before render.
pub fn setup(state: Option<CounterState>) -> CounterView {
    let mut view = CounterView::new();
    if let Some(state) = state {
        view.set_state(state);
    }
    view
}

/// All nodes of `tree` carrying the test id `val`.
pub fn find_by_test_attr<'a>(tree: &'a ViewTree, val: &str) -> Vec<&'a ViewNode> {
    tree.find_by_test_id(val)
}

/// Write `content` to a `config.toml` in a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
