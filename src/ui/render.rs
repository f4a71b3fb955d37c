use crate::ui::app::App;
use crate::ui::counter::{COUNTER_DISPLAY, INCREMENT_BUTTON};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{layout_regions, CounterLayout};
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, BUTTON_BORDER, BUTTON_PRESSED, GLOBAL_BORDER, HEADER_TEXT,
};
use crate::ui::view::{NodeKind, ViewNode};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new(app.title()).widget(), header);
    frame.render_widget(Clear, body);

    let tree = app.view().render();
    let layout = app.layout_for(area);
    draw_node(frame, tree.root(), &layout, app.button_pressed());

    frame.render_widget(Footer::new().widget(footer), footer);
}

fn node_rect(node: &ViewNode, layout: &CounterLayout) -> Rect {
    match node.test_id {
        Some(COUNTER_DISPLAY) => layout.display,
        Some(INCREMENT_BUTTON) => layout.button,
        _ => layout.root,
    }
}

fn draw_node(frame: &mut Frame<'_>, node: &ViewNode, layout: &CounterLayout, pressed: bool) {
    let area = node_rect(node, layout);
    if area.width == 0 || area.height == 0 {
        return;
    }
    let text = node.text.clone().unwrap_or_default();

    match node.kind {
        NodeKind::Container => {
            frame.render_widget(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
                area,
            );
            for child in &node.children {
                draw_node(frame, child, layout, pressed);
            }
        }
        NodeKind::Heading => {
            let style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD);
            frame.render_widget(
                Paragraph::new(Span::styled(text, style)).alignment(Alignment::Center),
                area,
            );
        }
        NodeKind::Button => {
            let (border, background) = if pressed {
                (BUTTON_PRESSED, ACTIVE_HIGHLIGHT)
            } else {
                (BUTTON_BORDER, ratatui::style::Color::Reset)
            };
            // Too short for a border: the label row takes what is left
            let borders = if layout.button_bordered() {
                Borders::ALL
            } else {
                Borders::NONE
            };
            let widget = Paragraph::new(Span::styled(text, Style::default().fg(ACCENT)))
                .alignment(Alignment::Center)
                .style(Style::default().bg(background))
                .block(
                    Block::default()
                        .borders(borders)
                        .border_style(Style::default().fg(border)),
                );
            frame.render_widget(widget, area);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::counter::{CounterState, CounterView};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn screen_text(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..height {
            for x in 0..width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn draws_display_and_button() {
        let app = App::new(CounterView::with_state(CounterState::new(5)), "Counter");
        let text = screen_text(&app, 80, 24);
        assert!(text.contains("The counter is currently 5"));
        assert!(text.contains("Increment counter"));
        assert!(text.contains("Counter"));
    }

    #[test]
    fn button_label_lands_inside_button_rect() {
        let app = App::new(CounterView::new(), "Counter");
        let text = screen_text(&app, 80, 24);
        let button = app
            .layout_for(Rect {
                x: 0,
                y: 0,
                width: 80,
                height: 24,
            })
            .button;
        let label_row = text.lines().nth((button.y + 1) as usize).unwrap();
        assert!(label_row.contains("Increment counter"));
    }

    #[test]
    fn label_visible_on_short_terminal() {
        let app = App::new(CounterView::new(), "Counter");
        let text = screen_text(&app, 30, 12);
        assert!(text.contains("Increment counter"));
        assert!(text.contains("The counter is currently 0"));
    }

    #[test]
    fn clickable_button_always_shows_its_label() {
        for rows in [10, 11, 12, 13, 24] {
            let mut app = App::new(CounterView::new(), "Counter");
            app.on_resize(30, rows);
            let button = app
                .layout_for(Rect {
                    x: 0,
                    y: 0,
                    width: 30,
                    height: rows,
                })
                .button;
            assert!(button.height > 0, "rows = {rows}");
            assert!(app.button_hit(button.x, button.y));

            let text = screen_text(&app, 30, rows);
            let label_row = if button.height >= 3 { button.y + 1 } else { button.y };
            let line = text.lines().nth(label_row as usize).unwrap();
            assert!(line.contains("Increment counter"), "rows = {rows}: {line:?}");
        }
    }

    #[test]
    fn tiny_screen_does_not_panic() {
        let app = App::new(CounterView::new(), "Counter");
        let _ = screen_text(&app, 4, 3);
    }
}
