use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ygoquiz_engine::{InputKind, Phase, Session, Side};

use crate::view::KeyBinding;

/// What the screen currently shows, derived from the session phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum View {
    Menu,
    Loading,
    Answering(InputKind),
    Resolved,
}

impl View {
    pub(super) fn of(session: &Session) -> Self {
        match session.phase() {
            Phase::Idle => Self::Menu,
            Phase::Dealing { .. } => Self::Loading,
            Phase::AwaitingInput { round } => Self::Answering(round.input_kind()),
            Phase::Resolved { .. } => Self::Resolved,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Action {
    Quit,
    Menu,
    Up,
    Down,
    Confirm,
    /// Zero-based menu entry or answer option.
    Choose(usize),
    Pick(Side),
    NextRound,
    Type(char),
    Erase,
}

impl Action {
    pub(super) fn from_key_event(view: View, event: &KeyEvent) -> Option<Self> {
        if event.modifiers.contains(KeyModifiers::CONTROL) {
            return (event.code == KeyCode::Char('c')).then_some(Self::Quit);
        }
        // Free-text input swallows printable keys, including `q`.
        if view == View::Answering(InputKind::FreeText) {
            return match event.code {
                KeyCode::Enter => Some(Self::Confirm),
                KeyCode::Backspace => Some(Self::Erase),
                KeyCode::Esc => Some(Self::Menu),
                KeyCode::Char(c) => Some(Self::Type(c)),
                _ => None,
            };
        }

        match (view, event.code) {
            (View::Menu, KeyCode::Char('q') | KeyCode::Esc) | (_, KeyCode::Char('q')) => {
                Some(Self::Quit)
            }
            (_, KeyCode::Esc) => Some(Self::Menu),
            (View::Menu | View::Answering(InputKind::MultipleChoice), code) => match code {
                KeyCode::Up | KeyCode::Char('k') => Some(Self::Up),
                KeyCode::Down | KeyCode::Char('j') => Some(Self::Down),
                KeyCode::Enter => Some(Self::Confirm),
                KeyCode::Char(c) => digit_index(c).map(Self::Choose),
                _ => None,
            },
            (View::Answering(InputKind::PickCard), code) => match code {
                KeyCode::Left | KeyCode::Char('h' | '1') => Some(Self::Pick(Side::Left)),
                KeyCode::Right | KeyCode::Char('l' | '2') => Some(Self::Pick(Side::Right)),
                _ => None,
            },
            (View::Resolved, KeyCode::Enter | KeyCode::Char('n')) => Some(Self::NextRound),
            _ => None,
        }
    }

    pub(super) fn bindings(view: View) -> &'static [KeyBinding<'static>] {
        match view {
            View::Menu => &[
                (&["↑", "↓"], "Select"),
                (&["Enter"], "Play"),
                (&["1-6"], "Play mode"),
                (&["q", "Esc"], "Quit"),
            ],
            View::Loading => &[(&["Esc"], "Menu"), (&["q"], "Quit")],
            View::Answering(InputKind::FreeText) => &[
                (&["Enter"], "Submit"),
                (&["Esc"], "Menu"),
                (&["Ctrl-C"], "Quit"),
            ],
            View::Answering(InputKind::MultipleChoice) => &[
                (&["↑", "↓"], "Select"),
                (&["Enter"], "Answer"),
                (&["1-4"], "Answer option"),
                (&["Esc"], "Menu"),
                (&["q"], "Quit"),
            ],
            View::Answering(InputKind::PickCard) => &[
                (&["←", "1"], "Left is older"),
                (&["→", "2"], "Right is older"),
                (&["Esc"], "Menu"),
                (&["q"], "Quit"),
            ],
            View::Resolved => &[
                (&["n", "Enter"], "Next round"),
                (&["Esc"], "Menu"),
                (&["q"], "Quit"),
            ],
        }
    }
}

/// Maps `'1'..='9'` to `0..=8`.
fn digit_index(c: char) -> Option<usize> {
    let digit = c.to_digit(10)?;
    usize::try_from(digit).ok()?.checked_sub(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    const FREE_TEXT: View = View::Answering(InputKind::FreeText);
    const CHOICE: View = View::Answering(InputKind::MultipleChoice);
    const PICK: View = View::Answering(InputKind::PickCard);

    #[test]
    fn test_free_text_takes_letters() {
        assert_eq!(
            Action::from_key_event(FREE_TEXT, &key(KeyCode::Char('q'))),
            Some(Action::Type('q'))
        );
        assert_eq!(
            Action::from_key_event(FREE_TEXT, &key(KeyCode::Esc)),
            Some(Action::Menu)
        );
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(Action::from_key_event(FREE_TEXT, &ctrl_c), Some(Action::Quit));
    }

    #[test]
    fn test_digits_choose() {
        assert_eq!(
            Action::from_key_event(CHOICE, &key(KeyCode::Char('3'))),
            Some(Action::Choose(2))
        );
        assert_eq!(
            Action::from_key_event(View::Menu, &key(KeyCode::Char('6'))),
            Some(Action::Choose(5))
        );
        assert_eq!(Action::from_key_event(CHOICE, &key(KeyCode::Char('0'))), None);
    }

    #[test]
    fn test_esc_quits_only_from_menu() {
        assert_eq!(
            Action::from_key_event(View::Menu, &key(KeyCode::Esc)),
            Some(Action::Quit)
        );
        for view in [View::Loading, CHOICE, PICK, View::Resolved] {
            assert_eq!(Action::from_key_event(view, &key(KeyCode::Esc)), Some(Action::Menu));
        }
    }

    #[test]
    fn test_pick_sides() {
        assert_eq!(
            Action::from_key_event(PICK, &key(KeyCode::Left)),
            Some(Action::Pick(Side::Left))
        );
        assert_eq!(
            Action::from_key_event(PICK, &key(KeyCode::Char('2'))),
            Some(Action::Pick(Side::Right))
        );
        assert_eq!(Action::from_key_event(PICK, &key(KeyCode::Enter)), None);
    }

    #[test]
    fn test_next_round_only_when_resolved() {
        assert_eq!(
            Action::from_key_event(View::Resolved, &key(KeyCode::Char('n'))),
            Some(Action::NextRound)
        );
        assert_eq!(Action::from_key_event(View::Loading, &key(KeyCode::Char('n'))), None);
    }
}
