use crate::ui::counter::{CounterView, BUTTON_LABEL, DISPLAY_PREFIX};
use crate::ui::layout::{body_rect, contains, counter_layout, CounterLayout};
use ratatui::layout::Rect;

/// Ticks the button stays highlighted after an activation.
const PRESS_FLASH_TICKS: u8 = 1;

/// Terminal host for a single `CounterView`.
///
/// Owns the component plus the bits of terminal state needed to route
/// events to it: quit flag, last known screen size, press highlight.
pub struct App {
    view: CounterView,
    title: String,
    should_quit: bool,
    size: Option<(u16, u16)>,
    pressed_ticks: u8,
}

impl App {
    pub fn new(view: CounterView, title: impl Into<String>) -> Self {
        Self {
            view,
            title: title.into(),
            should_quit: false,
            size: None,
            pressed_ticks: 0,
        }
    }

    pub fn view(&self) -> &CounterView {
        &self.view
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        tracing::info!(count = self.view.count(), "quit requested");
        self.should_quit = true;
    }

    pub fn button_pressed(&self) -> bool {
        self.pressed_ticks > 0
    }

    /// The button's single activation event.
    pub fn activate_button(&mut self) {
        self.view.on_increment_clicked();
        self.pressed_ticks = PRESS_FLASH_TICKS;
    }

    pub fn on_tick(&mut self) {
        self.pressed_ticks = self.pressed_ticks.saturating_sub(1);
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
    }

    /// Where the counter's nodes land on a screen of `area`.
    pub fn layout_for(&self, area: Rect) -> CounterLayout {
        let display = format!("{DISPLAY_PREFIX}{}", self.view.count());
        let display_width = display.chars().count() as u16;
        // Label plus one cell of padding and a border on each side
        let button_width = BUTTON_LABEL.chars().count() as u16 + 4;
        counter_layout(body_rect(area), display_width, button_width)
    }

    /// True when the screen cell at (`column`, `row`) is part of the button.
    pub fn button_hit(&self, column: u16, row: u16) -> bool {
        let Some((cols, rows)) = self.size else {
            return false;
        };
        let area = Rect {
            x: 0,
            y: 0,
            width: cols,
            height: rows,
        };
        contains(self.layout_for(area).button, column, row)
    }
}
