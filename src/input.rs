//! Keyboard to game actions.

use macroquad::input::{is_key_down, is_key_pressed, KeyCode};

const INITIAL_REPEAT_DELAY: f32 = 0.2;
const REPEAT_INTERVAL: f32 = 0.1;

/// Keys that fire again while held.
const REPEATING_KEYS: [KeyCode; 3] = [KeyCode::Left, KeyCode::Right, KeyCode::Down];
const ROTATE_KEYS: [KeyCode; 2] = [KeyCode::Up, KeyCode::X];
const RESTART_KEY: KeyCode = KeyCode::Enter;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    MoveLeft,
    MoveRight,
    SoftDrop,
    Rotate,
}

pub fn action_for_key(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Left => Some(Action::MoveLeft),
        KeyCode::Right => Some(Action::MoveRight),
        KeyCode::Down => Some(Action::SoftDrop),
        KeyCode::Up | KeyCode::X => Some(Action::Rotate),
        _ => None,
    }
}

/// Repeat timer for a single held key.
#[derive(Clone, Copy, Debug, Default)]
struct KeyRepeat {
    timer: f32,
}

impl KeyRepeat {
    /// `pressed` is true on the frame the key went down, `held` while it stays down.
    fn update(&mut self, pressed: bool, held: bool, dt: f32) -> bool {
        if pressed {
            self.timer = INITIAL_REPEAT_DELAY;
            return true;
        }
        if held {
            self.timer -= dt;
            if self.timer <= 0.0 {
                self.timer = REPEAT_INTERVAL;
                return true;
            }
            return false;
        }
        self.timer = 0.0;
        false
    }
}

#[derive(Debug, Default)]
pub struct InputState {
    repeats: [KeyRepeat; REPEATING_KEYS.len()],
}

impl InputState {
    /// Actions triggered during this frame, in key order.
    pub fn poll(&mut self, dt: f32) -> Vec<Action> {
        let mut actions = Vec::new();
        for (key, repeat) in REPEATING_KEYS.iter().zip(self.repeats.iter_mut()) {
            if repeat.update(is_key_pressed(*key), is_key_down(*key), dt) {
                actions.extend(action_for_key(*key));
            }
        }
        if ROTATE_KEYS.iter().any(|key| is_key_pressed(*key)) {
            actions.push(Action::Rotate);
        }
        actions
    }
}

/// Enter starts a new game once the old one has halted.
pub fn restart_pressed() -> bool {
    is_key_pressed(RESTART_KEY)
}
