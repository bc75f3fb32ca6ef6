//! Input handling: maps key and wheel events to state mutations.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::config::Action;

use super::state::AppState;

/// Process a key event through the configured bindings.
pub fn handle_key(state: &mut AppState, key: KeyEvent) {
    // Ctrl+c always quits, whatever the bindings say.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.should_quit = true;
        return;
    }

    let Some(action) = state.config.match_key(key) else {
        return;
    };
    state.status_message = None;

    let step = f64::from(state.config.wheel_step);
    // Leave a couple of rows of overlap when paging.
    let page = (f64::from(state.layout.page_area.height) - 2.0).max(1.0);

    match action {
        Action::ScrollUp => state.scroll_by(-step),
        Action::ScrollDown => state.scroll_by(step),
        Action::PageUp => state.scroll_by(-page),
        Action::PageDown => state.scroll_by(page),
        Action::Top => state.scroll_to(0.0),
        Action::Bottom => state.scroll_to(state.layout.max_scroll()),
        Action::NextSection => state.next_section(),
        Action::PrevSection => state.prev_section(),
        Action::ToggleMotion => state.toggle_motion(),
        Action::Quit => state.should_quit = true,
    }
}

/// Mouse-wheel `notches`; positive scrolls down.
pub fn handle_scroll(state: &mut AppState, notches: i16) {
    state.scroll_by(f64::from(notches) * f64::from(state.config.wheel_step));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::core::sequencer::SectionId;
    use ratatui::layout::Rect;
    use std::time::Duration;

    fn state() -> AppState {
        AppState::new(
            AppConfig::default(),
            Rect::new(0, 0, 100, 31),
            SectionId::Hero,
            2026,
            Duration::ZERO,
        )
        .unwrap()
    }

    fn press(state: &mut AppState, code: KeyCode) {
        handle_key(state, KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn ctrl_c_quits() {
        let mut s = state();
        handle_key(&mut s, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(s.should_quit);
    }

    #[test]
    fn keys_move_the_scroll_target() {
        let mut s = state();
        press(&mut s, KeyCode::Char('j'));
        assert_eq!(s.scroll_target, 3.0);
        press(&mut s, KeyCode::PageDown);
        assert_eq!(s.scroll_target, 31.0);
        press(&mut s, KeyCode::End);
        assert_eq!(s.scroll_target, s.layout.max_scroll());
        press(&mut s, KeyCode::Home);
        assert_eq!(s.scroll_target, 0.0);
    }

    #[test]
    fn tab_jumps_between_sections() {
        let mut s = state();
        press(&mut s, KeyCode::Tab);
        assert_eq!(s.scroll_target, s.layout.about.start);
    }

    #[test]
    fn unbound_keys_keep_the_status_message() {
        let mut s = state();
        press(&mut s, KeyCode::Char('m'));
        assert!(s.status_message.is_some());
        press(&mut s, KeyCode::Char('x'));
        assert!(s.status_message.is_some());
        press(&mut s, KeyCode::Char('j'));
        assert!(s.status_message.is_none());
    }

    #[test]
    fn wheel_scrolls_by_step() {
        let mut s = state();
        handle_scroll(&mut s, 2);
        assert_eq!(s.scroll_target, 6.0);
        handle_scroll(&mut s, -5);
        assert_eq!(s.scroll_target, 0.0);
    }

    #[test]
    fn quit_binding() {
        let mut s = state();
        press(&mut s, KeyCode::Char('q'));
        assert!(s.should_quit);
    }
}
