use crate::ui::app::App;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('+') => app.activate_button(),
        _ => {}
    }
}

pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }
    if app.button_hit(mouse.column, mouse.row) {
        app.activate_button();
    }
}

fn is_ctrl_char(key: KeyEvent, ch: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char(c) if c.eq_ignore_ascii_case(&ch))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::counter::CounterView;
    use crossterm::event::KeyEventState;
    use ratatui::layout::Rect;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn release(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        }
    }

    fn click(column: u16, row: u16, kind: MouseEventKind) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn sized_app() -> App {
        let mut app = App::new(CounterView::new(), "Counter");
        app.on_resize(80, 24);
        app
    }

    #[test]
    fn activation_keys_increment() {
        let mut app = sized_app();
        handle_key(&mut app, press(KeyCode::Enter));
        handle_key(&mut app, press(KeyCode::Char(' ')));
        handle_key(&mut app, press(KeyCode::Char('+')));
        assert_eq!(app.view().count(), 3);
    }

    #[test]
    fn key_release_is_ignored() {
        let mut app = sized_app();
        handle_key(&mut app, release(KeyCode::Enter));
        assert_eq!(app.view().count(), 0);
    }

    #[test]
    fn quit_keys() {
        for key in [
            press(KeyCode::Char('q')),
            press(KeyCode::Esc),
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        ] {
            let mut app = sized_app();
            handle_key(&mut app, key);
            assert!(app.should_quit());
            assert_eq!(app.view().count(), 0);
        }
    }

    #[test]
    fn other_keys_do_nothing() {
        let mut app = sized_app();
        handle_key(&mut app, press(KeyCode::Char('x')));
        handle_key(&mut app, press(KeyCode::Up));
        assert_eq!(app.view().count(), 0);
        assert!(!app.should_quit());
    }

    #[test]
    fn left_click_on_button_increments() {
        let mut app = sized_app();
        let button = app
            .layout_for(Rect {
                x: 0,
                y: 0,
                width: 80,
                height: 24,
            })
            .button;
        handle_mouse(
            &mut app,
            click(button.x + 1, button.y + 1, MouseEventKind::Down(MouseButton::Left)),
        );
        assert_eq!(app.view().count(), 1);
    }

    #[test]
    fn click_outside_button_is_ignored() {
        let mut app = sized_app();
        handle_mouse(&mut app, click(0, 0, MouseEventKind::Down(MouseButton::Left)));
        assert_eq!(app.view().count(), 0);
    }

    #[test]
    fn right_click_and_release_are_ignored() {
        let mut app = sized_app();
        let button = app
            .layout_for(Rect {
                x: 0,
                y: 0,
                width: 80,
                height: 24,
            })
            .button;
        handle_mouse(
            &mut app,
            click(button.x + 1, button.y + 1, MouseEventKind::Down(MouseButton::Right)),
        );
        handle_mouse(
            &mut app,
            click(button.x + 1, button.y + 1, MouseEventKind::Up(MouseButton::Left)),
        );
        assert_eq!(app.view().count(), 0);
    }
}
