//! Key mapping from terminal events to quiz input.

use crate::types::Command;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use unicode_width::UnicodeWidthChar;

/// What a single key press means to the quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Command(Command),
    /// Printable, single-column character for the guess line.
    Char(char),
    Backspace,
    ClearLine,
}

/// Map keyboard input to quiz input.
///
/// While the help prompt is open only the prompt answers are accepted.
pub fn handle_key_event(key: KeyEvent, prompt_open: bool) -> Option<InputEvent> {
    if prompt_open {
        return match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                Some(InputEvent::Command(Command::ConfirmHelp))
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                Some(InputEvent::Command(Command::CancelHelp))
            }
            _ => None,
        };
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Enter => Some(InputEvent::Command(Command::Submit)),
        KeyCode::Tab | KeyCode::F(1) | KeyCode::Char('?') => Some(InputEvent::Command(Command::Help)),
        KeyCode::F(2) => Some(InputEvent::Command(Command::TogglePrivateKey)),
        KeyCode::F(3) => Some(InputEvent::Command(Command::Login)),
        KeyCode::F(5) => Some(InputEvent::Command(Command::Restart)),

        // Line editing
        KeyCode::Backspace => Some(InputEvent::Backspace),
        KeyCode::Char('u') if ctrl => Some(InputEvent::ClearLine),
        KeyCode::Char(c) if !ctrl && is_single_column(c) => Some(InputEvent::Char(c)),

        _ => None,
    }
}

/// The framebuffer holds one char per cell, so wide glyphs are not typed.
fn is_single_column(c: char) -> bool {
    !c.is_control() && c.width() == Some(1)
}

/// Check if key should quit the game.
///
/// Esc only quits when no prompt is open; Ctrl-C always quits.
pub fn should_quit(key: KeyEvent, prompt_open: bool) -> bool {
    (key.code == KeyCode::Esc && !prompt_open)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_command_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Enter), false),
            Some(InputEvent::Command(Command::Submit))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Tab), false),
            Some(InputEvent::Command(Command::Help))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('?')), false),
            Some(InputEvent::Command(Command::Help))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::F(2)), false),
            Some(InputEvent::Command(Command::TogglePrivateKey))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::F(5)), false),
            Some(InputEvent::Command(Command::Restart))
        );
    }

    #[test]
    fn test_typing_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('K')), false),
            Some(InputEvent::Char('K'))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char(' ')), false),
            Some(InputEvent::Char(' '))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Backspace), false),
            Some(InputEvent::Backspace)
        );
        assert_eq!(
            handle_key_event(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL), false),
            Some(InputEvent::ClearLine)
        );
    }

    #[test]
    fn test_wide_chars_are_not_typed() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('é')), false),
            Some(InputEvent::Char('é'))
        );
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('王')), false), None);
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('🚀')), false), None);
    }

    #[test]
    fn test_prompt_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('y')), true),
            Some(InputEvent::Command(Command::ConfirmHelp))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Esc), true),
            Some(InputEvent::Command(Command::CancelHelp))
        );
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('x')), true), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Esc), false));
        assert!(!should_quit(KeyEvent::from(KeyCode::Esc), true));
        assert!(should_quit(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            true
        ));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('q')), false));
    }
}
