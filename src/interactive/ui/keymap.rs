use crate::interactive::domain::models::Focus;
use crate::interactive::ui::events::Key;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Short key help shown under the grid, as (keys, description) pairs.
pub const SHORT_HELP: &[(&str, &str)] = &[
    ("tab or /", "switch focus"),
    ("↑↓←→/hjkl", "move"),
    ("enter", "copy"),
    ("esc/ctrl+c", "quit"),
];

/// Map a raw key event to a state machine key.
///
/// Plain letters only act as shortcuts while the grid has focus; with the
/// query box focused they are text input. Returns `None` for keys that are
/// text input or unbound.
pub fn resolve(key: &KeyEvent, focus: Focus) -> Option<Key> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    match key.code {
        KeyCode::Esc => Some(Key::Quit),
        KeyCode::Char('c') if ctrl => Some(Key::Quit),
        KeyCode::Tab | KeyCode::BackTab => Some(Key::ToggleFocus),
        KeyCode::Enter => Some(Key::Select),
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        KeyCode::Left => Some(Key::Left),
        KeyCode::Right => Some(Key::Right),
        KeyCode::Char('p') if ctrl => Some(Key::Up),
        KeyCode::Char('n') if ctrl => Some(Key::Down),
        KeyCode::Char(c) if focus == Focus::Grid && !ctrl && !alt => match c {
            'q' => Some(Key::Quit),
            '/' => Some(Key::ToggleFocus),
            'k' => Some(Key::Up),
            'j' => Some(Key::Down),
            'h' => Some(Key::Left),
            'l' => Some(Key::Right),
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_key_event(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn create_key_event_with_modifiers(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_global_keys() {
        for focus in [Focus::Query, Focus::Grid] {
            assert_eq!(resolve(&create_key_event(KeyCode::Esc), focus), Some(Key::Quit));
            assert_eq!(
                resolve(
                    &create_key_event_with_modifiers(KeyCode::Char('c'), KeyModifiers::CONTROL),
                    focus
                ),
                Some(Key::Quit)
            );
            assert_eq!(resolve(&create_key_event(KeyCode::Tab), focus), Some(Key::ToggleFocus));
            assert_eq!(resolve(&create_key_event(KeyCode::BackTab), focus), Some(Key::ToggleFocus));
            assert_eq!(resolve(&create_key_event(KeyCode::Enter), focus), Some(Key::Select));
        }
    }

    #[test]
    fn test_arrow_keys() {
        for focus in [Focus::Query, Focus::Grid] {
            assert_eq!(resolve(&create_key_event(KeyCode::Up), focus), Some(Key::Up));
            assert_eq!(resolve(&create_key_event(KeyCode::Down), focus), Some(Key::Down));
            assert_eq!(resolve(&create_key_event(KeyCode::Left), focus), Some(Key::Left));
            assert_eq!(resolve(&create_key_event(KeyCode::Right), focus), Some(Key::Right));
            assert_eq!(
                resolve(
                    &create_key_event_with_modifiers(KeyCode::Char('p'), KeyModifiers::CONTROL),
                    focus
                ),
                Some(Key::Up)
            );
            assert_eq!(
                resolve(
                    &create_key_event_with_modifiers(KeyCode::Char('n'), KeyModifiers::CONTROL),
                    focus
                ),
                Some(Key::Down)
            );
        }
    }

    #[test]
    fn test_letter_shortcuts_only_on_grid() {
        let letters = [
            ('q', Key::Quit),
            ('/', Key::ToggleFocus),
            ('k', Key::Up),
            ('j', Key::Down),
            ('h', Key::Left),
            ('l', Key::Right),
        ];

        for (c, expected) in letters {
            assert_eq!(resolve(&create_key_event(KeyCode::Char(c)), Focus::Grid), Some(expected));
            assert_eq!(resolve(&create_key_event(KeyCode::Char(c)), Focus::Query), None);
        }
    }

    #[test]
    fn test_slash_returns_to_query_box() {
        assert_eq!(
            resolve(&create_key_event(KeyCode::Char('/')), Focus::Grid),
            Some(Key::ToggleFocus)
        );
        // Typed as text while the query box has focus
        assert_eq!(resolve(&create_key_event(KeyCode::Char('/')), Focus::Query), None);
    }

    #[test]
    fn test_unbound_keys() {
        assert_eq!(resolve(&create_key_event(KeyCode::Char('x')), Focus::Grid), None);
        assert_eq!(resolve(&create_key_event(KeyCode::Backspace), Focus::Query), None);
        assert_eq!(
            resolve(
                &create_key_event_with_modifiers(KeyCode::Char('k'), KeyModifiers::CONTROL),
                Focus::Grid
            ),
            None
        );
    }
}
