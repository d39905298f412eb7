//! # Input Module
//!
//! Turns terminal key events into player intentions.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Player input types the terminal engine reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerInput {
    /// Move the menu highlight up
    Up,
    /// Move the menu highlight down
    Down,
    /// Pick a menu entry directly (0-based)
    Pick(usize),
    /// Confirm the highlighted entry or the typed text
    Confirm,
    /// Leave the game
    Quit,
    /// Type a character into a text field
    Type(char),
    /// Delete the last typed character
    Erase,
}

/// Input handler for processing key presses.
///
/// Menus and text fields read the same keys differently: `q` quits a menu
/// but is just a letter in a band name.
#[derive(Debug, Clone)]
pub struct InputHandler {
    /// Whether to enable Vi-style movement keys (j/k)
    pub vi_keys_enabled: bool,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl InputHandler {
    /// Creates a new input handler.
    ///
    /// # Examples
    ///
    /// ```
    /// use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    /// use pnp::{InputHandler, PlayerInput};
    ///
    /// let input = InputHandler::new();
    /// let key = KeyEvent::new(KeyCode::Char('2'), KeyModifiers::NONE);
    /// assert_eq!(input.menu_input(key), Some(PlayerInput::Pick(1)));
    /// ```
    pub fn new() -> Self {
        Self {
            vi_keys_enabled: true,
        }
    }

    /// Reads a key press while a menu or modal has focus.
    pub fn menu_input(&self, key: KeyEvent) -> Option<PlayerInput> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        if is_interrupt(key) {
            return Some(PlayerInput::Quit);
        }

        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => Some(PlayerInput::Quit),
            KeyCode::Up => Some(PlayerInput::Up),
            KeyCode::Down => Some(PlayerInput::Down),
            KeyCode::Char('k') if self.vi_keys_enabled => Some(PlayerInput::Up),
            KeyCode::Char('j') if self.vi_keys_enabled => Some(PlayerInput::Down),
            KeyCode::Enter | KeyCode::Char(' ') => Some(PlayerInput::Confirm),
            KeyCode::Char(c @ '1'..='9') => {
                c.to_digit(10).map(|d| PlayerInput::Pick(d as usize - 1))
            }
            _ => None,
        }
    }

    /// Reads a key press while a text field has focus.
    pub fn text_input(&self, key: KeyEvent) -> Option<PlayerInput> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        if is_interrupt(key) {
            return Some(PlayerInput::Quit);
        }

        match key.code {
            KeyCode::Esc => Some(PlayerInput::Quit),
            KeyCode::Enter => Some(PlayerInput::Confirm),
            KeyCode::Backspace => Some(PlayerInput::Erase),
            KeyCode::Char(c) if !c.is_control() => Some(PlayerInput::Type(c)),
            _ => None,
        }
    }
}

fn is_interrupt(key: KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_menu_navigation() {
        let input = InputHandler::new();
        assert_eq!(input.menu_input(press(KeyCode::Up)), Some(PlayerInput::Up));
        assert_eq!(input.menu_input(press(KeyCode::Char('j'))), Some(PlayerInput::Down));
        assert_eq!(input.menu_input(press(KeyCode::Enter)), Some(PlayerInput::Confirm));
        assert_eq!(input.menu_input(press(KeyCode::Char('1'))), Some(PlayerInput::Pick(0)));
        assert_eq!(input.menu_input(press(KeyCode::Char('q'))), Some(PlayerInput::Quit));
        assert_eq!(input.menu_input(press(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_vi_keys_can_be_disabled() {
        let input = InputHandler {
            vi_keys_enabled: false,
        };
        assert_eq!(input.menu_input(press(KeyCode::Char('k'))), None);
    }

    #[test]
    fn test_text_entry_keeps_letters() {
        let input = InputHandler::new();
        assert_eq!(input.text_input(press(KeyCode::Char('q'))), Some(PlayerInput::Type('q')));
        assert_eq!(input.text_input(press(KeyCode::Backspace)), Some(PlayerInput::Erase));
        assert_eq!(input.text_input(press(KeyCode::Esc)), Some(PlayerInput::Quit));
    }

    #[test]
    fn test_ctrl_c_quits_everywhere() {
        let input = InputHandler::new();
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(input.menu_input(key), Some(PlayerInput::Quit));
        assert_eq!(input.text_input(key), Some(PlayerInput::Quit));
    }

    #[test]
    fn test_key_release_is_ignored() {
        let input = InputHandler::new();
        let mut key = press(KeyCode::Enter);
        key.kind = KeyEventKind::Release;
        assert_eq!(input.menu_input(key), None);
    }
}
