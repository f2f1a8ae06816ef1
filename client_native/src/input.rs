//! Keyboard handling: held movement keys become the per-tick
//! `PlayerInput`; discrete presses become `Command`s.

use game_core::{MatchTarget, PlayerInput};
use winit::event::{ElementState, VirtualKeyCode};

/// Discrete actions triggered on key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    ToggleSound,
    SelectTarget(MatchTarget),
}

pub fn map_key_command(key: VirtualKeyCode) -> Option<Command> {
    match key {
        VirtualKeyCode::Escape => Some(Command::Quit),
        VirtualKeyCode::M => Some(Command::ToggleSound),
        VirtualKeyCode::Key3 | VirtualKeyCode::Numpad3 => {
            Some(Command::SelectTarget(MatchTarget::Three))
        }
        VirtualKeyCode::Key5 | VirtualKeyCode::Numpad5 => {
            Some(Command::SelectTarget(MatchTarget::Five))
        }
        VirtualKeyCode::Key7 | VirtualKeyCode::Numpad7 => {
            Some(Command::SelectTarget(MatchTarget::Seven))
        }
        _ => None,
    }
}

/// Tracks which movement keys are currently held
#[derive(Debug, Clone, Copy, Default)]
pub struct InputState {
    up_held: bool,
    down_held: bool,
}

impl InputState {
    pub fn handle_key(&mut self, key: VirtualKeyCode, state: ElementState) {
        let pressed = state == ElementState::Pressed;
        match key {
            VirtualKeyCode::W | VirtualKeyCode::Up => self.up_held = pressed,
            VirtualKeyCode::S | VirtualKeyCode::Down => self.down_held = pressed,
            _ => {}
        }
    }

    pub fn player_input(&self) -> PlayerInput {
        PlayerInput {
            move_up: self.up_held,
            move_down: self.down_held,
        }
    }
}
