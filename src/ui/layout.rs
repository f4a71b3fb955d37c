use ratatui::layout::Rect;

/// Screen regions occupied by the three counter nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterLayout {
    pub root: Rect,
    pub display: Rect,
    pub button: Rect,
}

impl CounterLayout {
    /// Whether the button got room for its border as well as its label.
    pub fn button_bordered(&self) -> bool {
        self.button.height >= BUTTON_HEIGHT
    }
}

const BUTTON_HEIGHT: u16 = 3;
const DISPLAY_HEIGHT: u16 = 1;
const GAP: u16 = 1;

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

pub fn body_rect(area: Rect) -> Rect {
    layout_regions(area).1
}

/// Place the display line and the button, stacked and centered, inside
/// the bordered root block that fills `body`.
///
/// When rows are short the gap goes first, then the button border; the
/// button's label row is kept whenever the button rect is non-empty.
pub fn counter_layout(body: Rect, display_width: u16, button_width: u16) -> CounterLayout {
    let root = body;
    let inner = Rect {
        x: root.x.saturating_add(1),
        y: root.y.saturating_add(1),
        width: root.width.saturating_sub(2),
        height: root.height.saturating_sub(2),
    };
    let content = centered_rect_by_size(
        inner,
        display_width.max(button_width),
        DISPLAY_HEIGHT + GAP + BUTTON_HEIGHT,
    );
    let display = centered_rect_by_size(
        Rect {
            height: DISPLAY_HEIGHT.min(content.height),
            ..content
        },
        display_width,
        DISPLAY_HEIGHT,
    );
    let gap = if content.height >= DISPLAY_HEIGHT + GAP + BUTTON_HEIGHT {
        GAP
    } else {
        0
    };
    let button_top = content.y + (DISPLAY_HEIGHT + gap).min(content.height);
    let button = centered_rect_by_size(
        Rect {
            x: content.x,
            y: button_top,
            width: content.width,
            height: (content.y + content.height).saturating_sub(button_top),
        },
        button_width,
        BUTTON_HEIGHT,
    );
    CounterLayout {
        root,
        display,
        button,
    }
}

/// A `width` x `height` rect centered in `area`, clipped to it.
pub fn centered_rect_by_size(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

pub fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && row >= rect.y
        && column < rect.x.saturating_add(rect.width)
        && row < rect.y.saturating_add(rect.height)
}
