//! Terminal event abstraction.
//!
//! Wraps crossterm events into a smaller enum and runs a background task
//! that forwards them over a channel so the main loop never blocks on input.

use std::time::Duration;

use crossterm::event::{self, Event as CtEvent, KeyEvent, KeyEventKind, MouseEventKind};
use tokio::sync::mpsc;

/// High-level events consumed by the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Key(KeyEvent),
    /// Mouse-wheel notches; positive scrolls down the page.
    Scroll(i16),
    Resize(u16, u16),
}

fn translate(ev: CtEvent) -> Option<AppEvent> {
    match ev {
        CtEvent::Key(k) if k.kind != KeyEventKind::Release => Some(AppEvent::Key(k)),
        CtEvent::Mouse(m) => match m.kind {
            MouseEventKind::ScrollDown => Some(AppEvent::Scroll(1)),
            MouseEventKind::ScrollUp => Some(AppEvent::Scroll(-1)),
            _ => None,
        },
        CtEvent::Resize(w, h) => Some(AppEvent::Resize(w, h)),
        _ => None,
    }
}

/// Spawn the reader.  It polls with `poll_timeout` so it notices a dropped
/// receiver promptly, and exits when that happens.
pub fn spawn_event_reader(poll_timeout: Duration) -> mpsc::UnboundedReceiver<AppEvent> {
    let (tx, rx) = mpsc::unbounded_channel();

    tokio::task::spawn_blocking(move || {
        while !tx.is_closed() {
            if !event::poll(poll_timeout).unwrap_or(false) {
                continue;
            }
            let Ok(ev) = event::read() else {
                continue;
            };
            if let Some(app_event) = translate(ev) {
                if tx.send(app_event).is_err() {
                    break;
                }
            }
        }
        tracing::debug!("event reader stopped");
    });

    rx
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers, MouseEvent};

    fn mouse(kind: MouseEventKind) -> CtEvent {
        CtEvent::Mouse(MouseEvent {
            kind,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn wheel_maps_to_scroll() {
        assert_eq!(translate(mouse(MouseEventKind::ScrollDown)), Some(AppEvent::Scroll(1)));
        assert_eq!(translate(mouse(MouseEventKind::ScrollUp)), Some(AppEvent::Scroll(-1)));
        assert_eq!(translate(mouse(MouseEventKind::Moved)), None);
    }

    #[test]
    fn key_releases_are_dropped() {
        let mut k = KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE);
        assert_eq!(translate(CtEvent::Key(k)), Some(AppEvent::Key(k)));
        k.kind = KeyEventKind::Release;
        assert_eq!(translate(CtEvent::Key(k)), None);
    }

    #[test]
    fn resize_passes_through() {
        assert_eq!(translate(CtEvent::Resize(80, 24)), Some(AppEvent::Resize(80, 24)));
    }
}
