//! Input handling: crossterm events to widget actions.
//!
//! The widget itself never reads the terminal; the embedding application
//! feeds events through these functions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::widget::ColumnView;

/// Result of handling an event.
#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    /// Event was consumed (or ignored), continue.
    None,
    /// The user asked to leave.
    Quit,
}

/// Handles a key event against the view.
pub fn handle_key(view: &mut ColumnView, key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,

        KeyCode::Up | KeyCode::Char('k') => {
            view.scroll_up(1);
            Action::None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            view.scroll_down(1);
            Action::None
        }
        KeyCode::PageUp => {
            view.scroll_up(view.page_size());
            Action::None
        }
        KeyCode::PageDown => {
            view.scroll_down(view.page_size());
            Action::None
        }
        KeyCode::Home => {
            view.scroll_up(usize::MAX);
            Action::None
        }
        _ => Action::None,
    }
}

/// Handles a mouse event against the view. Left clicks are routed through
/// the widget's hit-testing; the wheel scrolls one line.
pub fn handle_mouse(view: &mut ColumnView, mouse: MouseEvent) -> Action {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            view.click(mouse.column, mouse.row);
        }
        MouseEventKind::ScrollUp => view.scroll_up(1),
        MouseEventKind::ScrollDown => view.scroll_down(1),
        _ => {}
    }
    Action::None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn rendered_view() -> ColumnView {
        let mut view = ColumnView::new(["Name", "Qty"], &[6, 4], true);
        view.add_row(vec!["beta".to_string(), "2".to_string()]);
        view.add_row(vec!["alpha".to_string(), "1".to_string()]);
        let backend = TestBackend::new(30, 8);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| view.render(frame, frame.area()))
            .unwrap();
        view
    }

    #[test]
    fn q_and_esc_quit() {
        let mut view = rendered_view();
        assert_eq!(handle_key(&mut view, key(KeyCode::Char('q'))), Action::Quit);
        assert_eq!(handle_key(&mut view, key(KeyCode::Esc)), Action::Quit);
    }

    #[test]
    fn ctrl_c_quits() {
        let mut view = rendered_view();
        let event = KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        };
        assert_eq!(handle_key(&mut view, event), Action::Quit);
    }

    #[test]
    fn header_button_click_sorts() {
        let mut view = rendered_view();
        // Checkbox column occupies the first declared width (6), so the
        // first header button starts at x = 6.
        assert_eq!(handle_mouse(&mut view, click(6, 0)), Action::None);
        assert_eq!(view.list_all()[0].cells[0], "alpha");
    }

    #[test]
    fn select_all_click_toggles_everything() {
        let mut view = rendered_view();
        handle_mouse(&mut view, click(0, 0));
        assert_eq!(view.list_selected().len(), 2);
    }

    #[test]
    fn row_checkbox_click_toggles_that_row() {
        let mut view = rendered_view();
        handle_mouse(&mut view, click(2, 2));
        let selected = view.list_selected();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].cells[0], "alpha");
    }

    #[test]
    fn wheel_scrolls_one_line() {
        let mut view = ColumnView::new(["A"], &[4], false);
        for i in 0..20 {
            view.add_row(vec![i.to_string()]);
        }
        let backend = TestBackend::new(10, 5);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| view.render(frame, frame.area()))
            .unwrap();
        let wheel = MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: 3,
            row: 3,
            modifiers: KeyModifiers::NONE,
        };
        handle_mouse(&mut view, wheel);
        assert_eq!(view.scroll_offset(), 1);
        handle_key(&mut view, key(KeyCode::Up));
        assert_eq!(view.scroll_offset(), 0);
    }
}
