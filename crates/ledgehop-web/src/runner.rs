use ledgehop::{
    Flow, FrameBuffer, FrameClock, GameEvent, InputEvent, InputQueue, KeyState, Session,
};

/// Drives a [`Session`] from host frames.
///
/// The exported free functions keep one `GameRunner` in a `thread_local!`, because
/// wasm-bindgen cannot export the session itself.
pub struct GameRunner {
    session: Session,
    keys: KeyState,
    input: InputQueue,
    clock: FrameClock,
    frame: FrameBuffer,
    /// Events from every step of the last tick, in order.
    tick_events: Vec<GameEvent>,
    terminated: bool,
    halted: bool,
}

impl GameRunner {
    pub fn new(session: Session) -> Self {
        let config = session.config();
        let keys = KeyState::new(config.bindings.clone());
        let clock = FrameClock::new(config.fixed_dt, config.max_steps_per_tick);
        let mut frame = FrameBuffer::from_config(config);
        frame.write(&session.snapshot(), &[]);

        Self {
            session,
            keys,
            input: InputQueue::new(),
            clock,
            frame,
            tick_events: Vec::new(),
            terminated: false,
            halted: false,
        }
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one host frame: fold queued input, run fixed steps, pack the frame buffer.
    /// Returns the number of simulation steps taken.
    pub fn tick(&mut self, dt: f32) -> u32 {
        let pending = self.input.drain();
        if self.terminated || self.halted {
            return 0;
        }
        self.keys.apply_all(pending);

        self.tick_events.clear();
        let steps = self.clock.advance(dt);
        let mut ran = 0;
        for _ in 0..steps {
            let intent = self.keys.intent();
            match self.session.step(&intent) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => self.terminated = true,
                Err(e) => {
                    log::error!("session halted: {}", e);
                    self.halted = true;
                }
            }
            self.tick_events.extend_from_slice(self.session.events());
            self.keys.end_step();
            ran += 1;
            if self.terminated || self.halted {
                break;
            }
        }

        self.frame.write(&self.session.snapshot(), &self.tick_events);
        ran
    }

    /// Release every held key, e.g. when the page loses focus.
    pub fn release_all(&mut self) {
        self.input.drain();
        self.keys.clear();
    }

    /// The player asked to quit. No further steps run.
    pub fn terminated(&self) -> bool {
        self.terminated
    }

    /// A restart failed to rebuild the level. No further steps run.
    pub fn halted(&self) -> bool {
        self.halted
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn tick_events(&self) -> &[GameEvent] {
        &self.tick_events
    }

    // ---- Accessors for shared-memory reads ----

    pub fn frame_ptr(&self) -> *const f32 {
        self.frame.as_ptr()
    }

    pub fn frame_len(&self) -> u32 {
        self.frame.len() as u32
    }

    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }

    pub fn state(&self) -> u8 {
        self.session.state().as_u8()
    }

    pub fn snapshot_json(&self) -> Result<String, serde_json::Error> {
        self.session.snapshot().to_json()
    }
}
