use crate::api::types::{GameEvent, GameOverCause};
use crate::components::player::Player;
use crate::config::GameConfig;
use crate::input::Intent;
use crate::level::{Level, LevelError, TileGrid};
use crate::renderer::camera::ScrollCamera;
use crate::systems::kinematics::StepReport;

/// How a `Playing` frame ended the attempt, if it did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    GameOver(GameOverCause),
    LevelComplete,
}

/// One attempt at the level. Built fresh on start and on every restart.
#[derive(Debug, Clone, PartialEq)]
pub struct World {
    pub level: Level,
    pub player: Player,
    pub camera: ScrollCamera,
    pub coins_collected: u32,
    /// Simulated frames in this attempt.
    pub frame: u64,
}

impl World {
    pub fn new(grid: &TileGrid, config: &GameConfig) -> Result<Self, LevelError> {
        Ok(Self {
            level: Level::build(grid, config)?,
            player: Player::spawn(&config.player),
            camera: ScrollCamera::new(config.viewport_width, config.scroll_area),
            coins_collected: 0,
            frame: 0,
        })
    }

    /// Advance one gameplay frame and append what happened to `events`.
    pub fn step(&mut self, intent: &Intent, config: &GameConfig, events: &mut Vec<GameEvent>) -> Option<Outcome> {
        self.frame += 1;

        // -- Kinematics: player first, then each enemy independently --
        let report = self.player.update(
            intent,
            &mut self.level.platforms,
            self.level.level_width,
            &config.physics,
        );
        push_broken(&report, events);
        for enemy in self.level.enemies.iter_mut() {
            let report = enemy.update(&mut self.level.platforms, &config.physics);
            push_broken(&report, events);
        }

        // -- Interactions --
        let rect = *self.player.rect();

        let picked = self.level.collect_coins(&rect);
        for _ in 0..picked {
            self.coins_collected += 1;
            events.push(GameEvent::CoinCollected { total: self.coins_collected });
        }

        // The first hit starts invincibility, so extra contacts this frame are absorbed
        for _ in 0..self.level.enemy_contacts(&rect) {
            if self.player.take_hit() {
                log::debug!("player hit, health {}", self.player.health);
                events.push(GameEvent::PlayerHit { health: self.player.health });
            }
        }

        self.camera.follow(rect.center().x, self.level.level_width);

        // -- End-of-attempt checks, first match wins --
        if self.player.is_dead() {
            Some(Outcome::GameOver(GameOverCause::OutOfHealth))
        } else if rect.top() > config.viewport_height + config.fall_margin {
            Some(Outcome::GameOver(GameOverCause::FellOut))
        } else if self.level.touches_goal(&rect) {
            Some(Outcome::LevelComplete)
        } else {
            None
        }
    }
}

fn push_broken(report: &StepReport, events: &mut Vec<GameEvent>) {
    for block in &report.broken {
        log::debug!("block broken at ({}, {})", block.rect.x, block.rect.y);
        events.push(GameEvent::BlockBroken { x: block.rect.x, y: block.rect.y });
    }
}
