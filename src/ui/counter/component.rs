//! The counter component.

use crate::ui::mvi::Reducer;
use crate::ui::view::{ViewNode, ViewTree};

use super::intent::CounterIntent;
use super::reducer::CounterReducer;
use super::state::CounterState;

pub const COMPONENT_APP: &str = "component-app";
pub const COUNTER_DISPLAY: &str = "counter-display";
pub const INCREMENT_BUTTON: &str = "increment-button";

pub const DISPLAY_PREFIX: &str = "The counter is currently ";
pub const BUTTON_LABEL: &str = "Increment counter";

/// Holds a `CounterState` and renders it with an increment button.
///
/// The component owns its state exclusively; every change goes through
/// `CounterReducer`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CounterView {
    state: CounterState,
}

impl CounterView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: CounterState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &CounterState {
        &self.state
    }

    pub fn count(&self) -> i64 {
        self.state.count
    }

    pub fn set_state(&mut self, state: CounterState) {
        self.state = state;
    }

    pub fn dispatch(&mut self, intent: CounterIntent) {
        self.state = CounterReducer::reduce(self.state, intent);
    }

    pub fn on_increment_clicked(&mut self) {
        self.dispatch(CounterIntent::Increment);
        tracing::debug!(count = self.state.count, "counter incremented");
    }

    /// Pure projection of the current state.
    pub fn render(&self) -> ViewTree {
        ViewTree::new(ViewNode::container(
            COMPONENT_APP,
            vec![
                ViewNode::heading(
                    COUNTER_DISPLAY,
                    format!("{DISPLAY_PREFIX}{}", self.state.count),
                ),
                ViewNode::button(INCREMENT_BUTTON, BUTTON_LABEL),
            ],
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::view::NodeKind;

    #[test]
    fn render_has_three_nodes() {
        let tree = CounterView::new().render();
        let root = tree.root();
        assert_eq!(root.test_id, Some(COMPONENT_APP));
        assert_eq!(root.kind, NodeKind::Container);
        assert_eq!(root.children.len(), 2);
        assert_eq!(root.children[0].kind, NodeKind::Heading);
        assert_eq!(root.children[1].kind, NodeKind::Button);
    }

    #[test]
    fn display_text_is_exact() {
        let view = CounterView::with_state(CounterState::new(12));
        let tree = view.render();
        let display = tree.find_one(COUNTER_DISPLAY).unwrap();
        assert_eq!(display.text(), "The counter is currently 12");
    }

    #[test]
    fn render_does_not_touch_state() {
        let view = CounterView::with_state(CounterState::new(3));
        let before = view.clone();
        let _ = view.render();
        assert_eq!(view, before);
    }

    #[test]
    fn click_increments_by_one() {
        let mut view = CounterView::new();
        view.on_increment_clicked();
        assert_eq!(view.count(), 1);
    }

    #[test]
    fn set_state_replaces_count() {
        let mut view = CounterView::new();
        view.set_state(CounterState::new(9));
        assert_eq!(view.state(), &CounterState::new(9));
    }
}
