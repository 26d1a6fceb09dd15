//! Keyboard and terminal input, translated into control events.

use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossterm::event::{
    self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
};
use tracing::debug;

use crate::event::{Event, EventSender};

/// How often the reader thread checks for terminal input.
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Key bindings.
pub fn key_to_event(key: KeyEvent) -> Event {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('C') => Event::Finished,
            _ => Event::Unknown,
        };
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Event::Finished,
        KeyCode::Tab | KeyCode::Right | KeyCode::Char('>') => Event::ViewNext,
        KeyCode::BackTab | KeyCode::Left | KeyCode::Char('<') => Event::ViewPrev,
        KeyCode::Char('-') => Event::DecreasePollTime,
        KeyCode::Char('+') | KeyCode::Char('=') => Event::IncreasePollTime,
        KeyCode::Char('h') | KeyCode::Char('?') => Event::Help,
        KeyCode::Char('t') => Event::ToggleWantRelative,
        KeyCode::Char('z') => Event::ResetStatistics,
        _ => Event::Unknown,
    }
}

/// Maps a raw terminal event. Key releases, mouse and focus events map to
/// [`Event::None`].
pub fn translate(ev: CrosstermEvent) -> Event {
    match ev {
        CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => key_to_event(key),
        CrosstermEvent::Resize(width, height) => Event::ResizeScreen { width, height },
        _ => Event::None,
    }
}

/// Starts the thread reading terminal input into `tx`.
///
/// The thread exits when the queue is gone or the terminal cannot be read;
/// a read failure is forwarded as [`Event::Error`] first.
pub fn spawn_input_reader(tx: EventSender) -> JoinHandle<()> {
    thread::spawn(move || {
        loop {
            let ev = match event::poll(POLL_INTERVAL) {
                Ok(false) => continue,
                Ok(true) => match event::read() {
                    Ok(ev) => translate(ev),
                    Err(e) => {
                        tx.send(Event::Error(format!("terminal read failed: {e}")));
                        break;
                    }
                },
                Err(e) => {
                    tx.send(Event::Error(format!("terminal poll failed: {e}")));
                    break;
                }
            };
            if !tx.send(ev) {
                break;
            }
        }
        debug!("input reader stopped");
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn quit_keys() {
        for code in [KeyCode::Char('q'), KeyCode::Char('Q'), KeyCode::Esc] {
            assert_eq!(key_to_event(key(code)), Event::Finished);
        }
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(key_to_event(ctrl_c), Event::Finished);
    }

    #[test]
    fn view_navigation_keys() {
        for code in [KeyCode::Tab, KeyCode::Right, KeyCode::Char('>')] {
            assert_eq!(key_to_event(key(code)), Event::ViewNext);
        }
        for code in [KeyCode::BackTab, KeyCode::Left, KeyCode::Char('<')] {
            assert_eq!(key_to_event(key(code)), Event::ViewPrev);
        }
    }

    #[test]
    fn interval_and_mode_keys() {
        assert_eq!(key_to_event(key(KeyCode::Char('-'))), Event::DecreasePollTime);
        assert_eq!(key_to_event(key(KeyCode::Char('+'))), Event::IncreasePollTime);
        assert_eq!(key_to_event(key(KeyCode::Char('='))), Event::IncreasePollTime);
        assert_eq!(key_to_event(key(KeyCode::Char('h'))), Event::Help);
        assert_eq!(key_to_event(key(KeyCode::Char('?'))), Event::Help);
        assert_eq!(key_to_event(key(KeyCode::Char('t'))), Event::ToggleWantRelative);
        assert_eq!(key_to_event(key(KeyCode::Char('z'))), Event::ResetStatistics);
    }

    #[test]
    fn unbound_keys_are_unknown() {
        assert_eq!(key_to_event(key(KeyCode::Char('x'))), Event::Unknown);
        assert_eq!(key_to_event(key(KeyCode::F(5))), Event::Unknown);
        let ctrl_t = KeyEvent::new(KeyCode::Char('t'), KeyModifiers::CONTROL);
        assert_eq!(key_to_event(ctrl_t), Event::Unknown);
    }

    #[test]
    fn resize_and_release_translation() {
        assert_eq!(
            translate(CrosstermEvent::Resize(100, 30)),
            Event::ResizeScreen {
                width: 100,
                height: 30
            }
        );
        let release = KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(translate(CrosstermEvent::Key(release)), Event::None);
        assert_eq!(translate(CrosstermEvent::FocusGained), Event::None);
        assert_eq!(
            translate(CrosstermEvent::Key(key(KeyCode::Tab))),
            Event::ViewNext
        );
    }
}
