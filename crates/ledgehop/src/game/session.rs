use crate::api::types::GameEvent;
use crate::config::GameConfig;
use crate::game::error::SessionError;
use crate::game::state::GameState;
use crate::game::world::{Outcome, World};
use crate::input::Intent;
use crate::level::{LevelError, TileGrid};
use crate::renderer::snapshot::FrameSnapshot;

/// What the host loop should do after a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// A running game: the immutable level source, the current attempt, and the mode.
pub struct Session {
    grid: TileGrid,
    config: GameConfig,
    world: World,
    state: GameState,
    /// Events from the most recent step only.
    events: Vec<GameEvent>,
    attempts: u32,
}

impl Session {
    /// Build the first attempt. Fails if the config is out of range or the grid
    /// cannot produce a level.
    pub fn new(grid: TileGrid, config: GameConfig) -> Result<Self, SessionError> {
        config.validate()?;
        let world = World::new(&grid, &config)?;
        log::info!(
            "session ready: {}x{} grid, {} coins",
            grid.cols(),
            grid.rows(),
            world.level.coins_total()
        );
        Ok(Self {
            grid,
            config,
            world,
            state: GameState::StartMenu,
            events: Vec::with_capacity(16),
            attempts: 1,
        })
    }

    /// Parse level text and build a session from it.
    pub fn from_text(text: &str, config: GameConfig) -> Result<Self, SessionError> {
        Self::new(TileGrid::parse(text)?, config)
    }

    /// Run one frame of the state machine.
    ///
    /// Quit wins in every state. Only `Playing` simulates; the other states wait for
    /// their meta intent. The only fallible path is restart, which rebuilds the level.
    pub fn step(&mut self, intent: &Intent) -> Result<Flow, LevelError> {
        self.events.clear();

        if intent.quit {
            log::info!("quit requested in {:?}", self.state);
            return Ok(Flow::Quit);
        }

        match self.state {
            GameState::StartMenu => {
                if intent.confirm_start {
                    self.state = GameState::Playing;
                    self.events.push(GameEvent::Started);
                    log::info!("game started");
                }
            }
            GameState::Playing => {
                if let Some(outcome) = self.world.step(intent, &self.config, &mut self.events) {
                    self.finish(outcome);
                }
            }
            GameState::GameOver | GameState::LevelComplete => {
                if intent.restart {
                    self.restart()?;
                }
            }
        }

        Ok(Flow::Continue)
    }

    fn finish(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::GameOver(cause) => {
                log::info!("game over ({:?}) after {} frames", cause, self.world.frame);
                self.state = GameState::GameOver;
                self.events.push(GameEvent::GameOver { cause });
            }
            Outcome::LevelComplete => {
                let coins = self.world.coins_collected;
                log::info!("level complete with {}/{} coins", coins, self.world.level.coins_total());
                self.state = GameState::LevelComplete;
                self.events.push(GameEvent::LevelComplete { coins });
            }
        }
    }

    /// Replace the attempt with a freshly built one and resume play.
    pub fn restart(&mut self) -> Result<(), LevelError> {
        self.world = World::new(&self.grid, &self.config)?;
        self.state = GameState::Playing;
        self.attempts += 1;
        self.events.push(GameEvent::Restarted);
        log::info!("restarted, attempt {}", self.attempts);
        Ok(())
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    /// Attempts started so far, counting the first.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Read-only view of the current frame for renderers.
    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot::capture(self.state, &self.world)
    }
}
