use crossterm::event::{Event, KeyEvent, KeyEventKind, MouseEvent};

/// Terminal events delivered through
/// [`terminal_events`](crate::subscriptions::terminal_events).
///
/// Key releases and repeats are dropped before they reach the application, so
/// one physical key press yields exactly one [`TerminalEvent::Key`]. Code
/// cells must not be filled twice by a single keystroke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalEvent {
    /// A key press.
    Key(KeyEvent),
    /// A mouse event.
    Mouse(MouseEvent),
    /// Terminal resized to (columns, rows).
    Resize(u16, u16),
    /// Bracketed paste content.
    Paste(String),
}

impl TerminalEvent {
    /// Convert a crossterm event, dropping the ones the runtime does not forward.
    pub fn from_crossterm(event: Event) -> Option<Self> {
        match event {
            Event::Key(k) if k.kind == KeyEventKind::Press => Some(TerminalEvent::Key(k)),
            Event::Key(_) => None,
            Event::Mouse(m) => Some(TerminalEvent::Mouse(m)),
            Event::Resize(w, h) => Some(TerminalEvent::Resize(w, h)),
            Event::Paste(s) => Some(TerminalEvent::Paste(s)),
            Event::FocusGained | Event::FocusLost => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};

    fn key(kind: KeyEventKind) -> Event {
        Event::Key(KeyEvent {
            code: KeyCode::Char('7'),
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        })
    }

    #[test]
    fn press_is_forwarded() {
        assert!(matches!(
            TerminalEvent::from_crossterm(key(KeyEventKind::Press)),
            Some(TerminalEvent::Key(_))
        ));
    }

    #[test]
    fn release_and_repeat_are_dropped() {
        assert_eq!(TerminalEvent::from_crossterm(key(KeyEventKind::Release)), None);
        assert_eq!(TerminalEvent::from_crossterm(key(KeyEventKind::Repeat)), None);
    }

    #[test]
    fn paste_and_resize_are_forwarded() {
        assert_eq!(
            TerminalEvent::from_crossterm(Event::Paste("1234".into())),
            Some(TerminalEvent::Paste("1234".into()))
        );
        assert_eq!(
            TerminalEvent::from_crossterm(Event::Resize(80, 24)),
            Some(TerminalEvent::Resize(80, 24))
        );
        assert_eq!(TerminalEvent::from_crossterm(Event::FocusLost), None);
    }
}
