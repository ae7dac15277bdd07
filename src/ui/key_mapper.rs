// Maps keyboard input to UI commands
// Table actions are wrapped so the event loop handles a single command type

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::collections::HashMap;

use crate::ui::actions::{Action, UiCommand};

/// Maps keyboard input to commands
pub struct KeyMapper {
    mappings: HashMap<(KeyCode, KeyModifiers), UiCommand>,
}

impl Default for KeyMapper {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyMapper {
    pub fn new() -> Self {
        let mut mapper = Self {
            mappings: HashMap::new(),
        };
        mapper.init_mappings();
        mapper
    }

    fn init_mappings(&mut self) {
        use KeyCode::*;
        use KeyModifiers as Mod;

        let m = &mut self.mappings;

        // Pagination
        m.insert((Left, Mod::NONE), UiCommand::Table(Action::PreviousPage));
        m.insert((Char('h'), Mod::NONE), UiCommand::Table(Action::PreviousPage));
        m.insert((Right, Mod::NONE), UiCommand::Table(Action::NextPage));
        m.insert((Char('l'), Mod::NONE), UiCommand::Table(Action::NextPage));
        m.insert((Home, Mod::NONE), UiCommand::Table(Action::GoToPage(1)));
        m.insert((End, Mod::NONE), UiCommand::Table(Action::GoToPage(usize::MAX)));

        // Header focus and sorting
        m.insert((Tab, Mod::NONE), UiCommand::FocusNextHeader);
        m.insert((BackTab, Mod::SHIFT), UiCommand::FocusPreviousHeader);
        m.insert((Enter, Mod::NONE), UiCommand::SortFocusedHeader);
        m.insert((Char('s'), Mod::NONE), UiCommand::SortFocusedHeader);

        // Rows
        m.insert((Down, Mod::NONE), UiCommand::FocusNextRow);
        m.insert((Char('j'), Mod::NONE), UiCommand::FocusNextRow);
        m.insert((Up, Mod::NONE), UiCommand::FocusPreviousRow);
        m.insert((Char('k'), Mod::NONE), UiCommand::FocusPreviousRow);
        m.insert((Char(' '), Mod::NONE), UiCommand::SelectFocusedRow);

        // Filter, logs, quit
        m.insert((Char('f'), Mod::NONE), UiCommand::CycleStatusFilter);
        m.insert((F(5), Mod::NONE), UiCommand::ToggleLogPanel);
        m.insert((Char('q'), Mod::NONE), UiCommand::Quit);
        m.insert((Esc, Mod::NONE), UiCommand::Quit);
        m.insert((Char('c'), Mod::CONTROL), UiCommand::Quit);
    }

    /// Map a key press to a command. Releases and repeats map to nothing.
    pub fn map_key(&self, key: &KeyEvent) -> Option<UiCommand> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        // Digits jump straight to a page
        if let KeyCode::Char(c @ '1'..='9') = key.code {
            if key.modifiers == KeyModifiers::NONE {
                let page = c.to_digit(10).map(|d| d as usize)?;
                return Some(UiCommand::Table(Action::GoToPage(page)));
            }
        }

        // Some terminals report BackTab without SHIFT
        let lookup = match key.code {
            KeyCode::BackTab => (KeyCode::BackTab, KeyModifiers::SHIFT),
            code => (code, key.modifiers),
        };
        self.mappings.get(&lookup).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_navigation_keys() {
        let mapper = KeyMapper::new();
        assert_eq!(
            mapper.map_key(&press(KeyCode::Right)),
            Some(UiCommand::Table(Action::NextPage))
        );
        assert_eq!(
            mapper.map_key(&press(KeyCode::Char('h'))),
            Some(UiCommand::Table(Action::PreviousPage))
        );
        assert_eq!(
            mapper.map_key(&press(KeyCode::Char('3'))),
            Some(UiCommand::Table(Action::GoToPage(3)))
        );
    }

    #[test]
    fn test_back_tab_without_shift() {
        let mapper = KeyMapper::new();
        assert_eq!(
            mapper.map_key(&press(KeyCode::BackTab)),
            Some(UiCommand::FocusPreviousHeader)
        );
    }

    #[test]
    fn test_quit_keys() {
        let mapper = KeyMapper::new();
        assert_eq!(mapper.map_key(&press(KeyCode::Esc)), Some(UiCommand::Quit));
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(mapper.map_key(&ctrl_c), Some(UiCommand::Quit));
    }

    #[test]
    fn test_release_is_ignored() {
        let mapper = KeyMapper::new();
        let mut key = press(KeyCode::Char('q'));
        key.kind = KeyEventKind::Release;
        assert_eq!(mapper.map_key(&key), None);
    }

    #[test]
    fn test_unmapped_key() {
        let mapper = KeyMapper::new();
        assert_eq!(mapper.map_key(&press(KeyCode::Char('z'))), None);
    }
}
