use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::command::Command;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeymapPreset {
    Default,
    Emacs,
}

impl KeymapPreset {
    pub fn parse(value: &str) -> Self {
        match value {
            "default" => Self::Default,
            "emacs" => Self::Emacs,
            _ => Self::Default,
        }
    }
}

pub fn map_key_to_command(key: KeyEvent, preset: KeymapPreset) -> Option<Command> {
    match preset {
        KeymapPreset::Default => map_key_default(key),
        KeymapPreset::Emacs => map_key_emacs(key),
    }
}

fn map_key_default(key: KeyEvent) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    match key.code {
        KeyCode::Char('j') | KeyCode::Char(' ') => Some(Command::NextPage),
        KeyCode::Char('k') => Some(Command::PrevPage),
        KeyCode::Char('g') => Some(Command::FirstPage),
        KeyCode::Char('G') => Some(Command::LastPage),
        KeyCode::Char('d') => Some(Command::DebugStatusToggle),
        KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
        KeyCode::Right | KeyCode::Down | KeyCode::PageDown => Some(Command::NextPage),
        KeyCode::Left | KeyCode::Up | KeyCode::PageUp => Some(Command::PrevPage),
        KeyCode::Home => Some(Command::FirstPage),
        KeyCode::End => Some(Command::LastPage),
        _ => None,
    }
}

fn map_key_emacs(key: KeyEvent) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::ALT) {
        return match key.code {
            KeyCode::Char('v') => Some(Command::PrevPage),
            KeyCode::Char('<') => Some(Command::FirstPage),
            KeyCode::Char('>') => Some(Command::LastPage),
            _ => None,
        };
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('n') | KeyCode::Char('v') => Some(Command::NextPage),
            KeyCode::Char('p') => Some(Command::PrevPage),
            KeyCode::Char('q') => Some(Command::Quit),
            _ => None,
        };
    }

    map_key_default(key)
}
