use std::collections::HashSet;

use crate::config::KeyBindings;
use crate::input::queue::{custom, InputEvent};

/// What the player wants this step, already resolved from devices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Intent {
    /// -1 = left, 0 = none, 1 = right.
    pub horizontal: i8,
    /// Held this step.
    pub jump: bool,
    pub restart: bool,
    pub quit: bool,
    pub confirm_start: bool,
}

impl Intent {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn left() -> Self {
        Self { horizontal: -1, ..Self::default() }
    }

    pub fn right() -> Self {
        Self { horizontal: 1, ..Self::default() }
    }

    pub fn with_jump(mut self) -> Self {
        self.jump = true;
        self
    }

    pub fn start() -> Self {
        Self { confirm_start: true, ..Self::default() }
    }

    pub fn restart() -> Self {
        Self { restart: true, ..Self::default() }
    }

    pub fn quit() -> Self {
        Self { quit: true, ..Self::default() }
    }
}

/// Folds key events into held keys plus one-shot presses.
///
/// Movement and jump are level-sensitive (held keys). Start, restart and quit are
/// edge-triggered: a press is reported until [`KeyState::end_step`] consumes it, so a
/// press that arrives on a host frame with zero simulation steps is not lost.
///
/// Holding left and right together cancels out.
#[derive(Debug, Clone)]
pub struct KeyState {
    bindings: KeyBindings,
    held: HashSet<u32>,
    start_pressed: bool,
    restart_pressed: bool,
    quit_pressed: bool,
}

impl KeyState {
    pub fn new(bindings: KeyBindings) -> Self {
        Self {
            bindings,
            held: HashSet::new(),
            start_pressed: false,
            restart_pressed: false,
            quit_pressed: false,
        }
    }

    pub fn apply(&mut self, event: InputEvent) {
        match event {
            InputEvent::KeyDown { key_code } => {
                // Auto-repeat arrives as repeated KeyDown; only the first counts as a press
                if self.held.insert(key_code) {
                    if self.bindings.start.contains(&key_code) {
                        self.start_pressed = true;
                    }
                    if self.bindings.restart.contains(&key_code) {
                        self.restart_pressed = true;
                    }
                    if self.bindings.quit.contains(&key_code) {
                        self.quit_pressed = true;
                    }
                }
            }
            InputEvent::KeyUp { key_code } => {
                self.held.remove(&key_code);
            }
            InputEvent::Custom { kind } => match kind {
                custom::START => self.start_pressed = true,
                custom::RESTART => self.restart_pressed = true,
                custom::QUIT => self.quit_pressed = true,
                other => log::debug!("ignoring custom input kind {}", other),
            },
        }
    }

    pub fn apply_all(&mut self, events: impl IntoIterator<Item = InputEvent>) {
        for event in events {
            self.apply(event);
        }
    }

    fn any_held(&self, codes: &[u32]) -> bool {
        codes.iter().any(|c| self.held.contains(c))
    }

    pub fn intent(&self) -> Intent {
        let left = self.any_held(&self.bindings.left) as i8;
        let right = self.any_held(&self.bindings.right) as i8;
        Intent {
            horizontal: right - left,
            jump: self.any_held(&self.bindings.jump),
            restart: self.restart_pressed,
            quit: self.quit_pressed,
            confirm_start: self.start_pressed,
        }
    }

    /// Consume edge-triggered presses after a simulation step has seen them.
    pub fn end_step(&mut self) {
        self.start_pressed = false;
        self.restart_pressed = false;
        self.quit_pressed = false;
    }

    /// Forget everything, e.g. when the host window loses focus.
    pub fn clear(&mut self) {
        self.held.clear();
        self.end_step();
    }
}
