/// Raw input events delivered by the host between simulation steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// A key was pressed.
    KeyDown { key_code: u32 },
    /// A key was released.
    KeyUp { key_code: u32 },
    /// A button in the host UI (menu overlay, touch controls).
    /// See [`custom`] for the recognised kinds.
    Custom { kind: u32 },
}

/// Custom event kinds understood by [`crate::input::KeyState`].
pub mod custom {
    pub const START: u32 = 1;
    pub const RESTART: u32 = 2;
    pub const QUIT: u32 = 3;
}

/// Events queued by the host and drained once per host frame.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Take every pending event, oldest first.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drain_preserves_order_and_empties() {
        let mut q = InputQueue::new();
        q.push(InputEvent::KeyDown { key_code: 32 });
        q.push(InputEvent::KeyUp { key_code: 32 });
        q.push(InputEvent::Custom { kind: custom::RESTART });
        assert_eq!(q.len(), 3);

        let events = q.drain();
        assert_eq!(
            events,
            vec![
                InputEvent::KeyDown { key_code: 32 },
                InputEvent::KeyUp { key_code: 32 },
                InputEvent::Custom { kind: custom::RESTART },
            ]
        );
        assert!(q.is_empty());
    }
}
