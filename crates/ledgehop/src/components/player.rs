use glam::Vec2;
use serde::Serialize;

use crate::components::platform::Platform;
use crate::components::Facing;
use crate::config::{PhysicsConfig, PlayerConfig};
use crate::core::geometry::Aabb;
use crate::input::Intent;
use crate::systems::kinematics::{KinematicBody, StepReport};

/// The player character. One per attempt; rebuilt on restart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Player {
    pub body: KinematicBody,
    pub health: u8,
    pub max_health: u8,
    /// Frames of damage immunity left.
    pub invincible: u32,
    pub facing: Facing,
    speed_x: f32,
    jump_speed: f32,
    invincible_frames: u32,
}

impl Player {
    /// A fresh player at the configured spawn point with full health.
    pub fn spawn(config: &PlayerConfig) -> Self {
        let rect = Aabb::new(config.spawn_x, config.spawn_y, config.width, config.height);
        Self {
            body: KinematicBody::new(rect),
            health: config.max_health,
            max_health: config.max_health,
            invincible: 0,
            facing: Facing::Right,
            speed_x: config.speed_x,
            jump_speed: config.jump_speed,
            invincible_frames: config.invincible_frames,
        }
    }

    pub fn rect(&self) -> &Aabb {
        &self.body.rect
    }

    pub fn on_ground(&self) -> bool {
        self.body.on_ground
    }

    pub fn is_invincible(&self) -> bool {
        self.invincible > 0
    }

    pub fn is_dead(&self) -> bool {
        self.health == 0
    }

    /// Map intent to velocity. Runs before physics.
    ///
    /// Jumping requires the ground flag from the previous physics pass and clears it
    /// immediately, so a second jump cannot fire before the body lands again.
    pub fn apply_intent(&mut self, intent: &Intent) {
        let dir = intent.horizontal.signum() as f32;
        self.body.vel.x = dir * self.speed_x;
        if let Some(facing) = Facing::from_sign(dir) {
            self.facing = facing;
        }

        if intent.jump && self.body.on_ground {
            self.body.vel.y = self.jump_speed;
            self.body.on_ground = false;
        }
    }

    pub fn tick_invincibility(&mut self) {
        self.invincible = self.invincible.saturating_sub(1);
    }

    /// Keep the player inside `[0, level_width]` horizontally. Falling off the bottom is
    /// left to the session.
    pub fn clamp_to_level(&mut self, level_width: f32) {
        if self.body.rect.left() < 0.0 {
            self.body.rect.set_left(0.0);
        }
        if self.body.rect.right() > level_width {
            self.body.rect.set_right(level_width);
        }
    }

    /// One frame: intent, invincibility countdown, kinematics, bounds clamp.
    pub fn update(
        &mut self,
        intent: &Intent,
        platforms: &mut Vec<Platform>,
        level_width: f32,
        physics: &PhysicsConfig,
    ) -> StepReport {
        self.apply_intent(intent);
        self.tick_invincibility();
        let report = self.body.step(platforms, physics);
        self.clamp_to_level(level_width);
        report
    }

    /// Lose one health point and start the invincibility window.
    /// No effect while already invincible. Returns whether the hit landed.
    pub fn take_hit(&mut self) -> bool {
        if self.is_invincible() {
            return false;
        }
        self.health = self.health.saturating_sub(1);
        self.invincible = self.invincible_frames;
        true
    }

    pub fn velocity(&self) -> Vec2 {
        self.body.vel
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player() -> Player {
        Player::spawn(&PlayerConfig::default())
    }

    fn ground() -> Vec<Platform> {
        vec![Platform::solid(Aabb::new(0.0, 500.0, 2000.0, 40.0))]
    }

    #[test]
    fn spawns_with_full_health_at_spawn_point() {
        let p = player();
        assert_eq!(p.health, 3);
        assert_eq!(p.invincible, 0);
        assert_eq!(p.rect(), &Aabb::new(100.0, 150.0, 50.0, 70.0));
        assert!(!p.on_ground());
    }

    #[test]
    fn horizontal_intent_sets_velocity_and_facing() {
        let mut p = player();
        p.apply_intent(&Intent::left());
        assert_eq!(p.velocity().x, -5.0);
        assert_eq!(p.facing, Facing::Left);

        p.apply_intent(&Intent::idle());
        assert_eq!(p.velocity().x, 0.0);
        assert_eq!(p.facing, Facing::Left, "facing survives standing still");
    }

    #[test]
    fn jump_requires_ground() {
        let mut p = player();
        p.apply_intent(&Intent::idle().with_jump());
        assert_eq!(p.velocity().y, 0.0, "no jump in mid-air");

        p.body.on_ground = true;
        p.apply_intent(&Intent::idle().with_jump());
        assert_eq!(p.velocity().y, -12.0);
        assert!(!p.on_ground());

        // A second request before physics runs again is ignored
        p.body.vel.y = -11.0;
        p.apply_intent(&Intent::idle().with_jump());
        assert_eq!(p.velocity().y, -11.0);
    }

    #[test]
    fn holding_jump_hops_again_only_after_landing() {
        let mut p = player();
        let mut platforms = ground();
        let jump = Intent::idle().with_jump();
        let mut takeoffs = 0;
        let mut was_grounded = false;
        for _ in 0..200 {
            let grounded_before = p.on_ground();
            p.update(&jump, &mut platforms, 2000.0, &PhysicsConfig::default());
            if grounded_before && !p.on_ground() {
                takeoffs += 1;
            }
            was_grounded |= grounded_before;
        }
        assert!(was_grounded);
        // Each hop lasts 48 frames (12 / 0.5 up, same down), so ~4 hops fit in 200 frames
        assert!((2..=5).contains(&takeoffs), "takeoffs = {takeoffs}");
    }

    #[test]
    fn take_hit_is_idempotent_while_invincible() {
        let mut p = player();
        assert!(p.take_hit());
        assert_eq!(p.health, 2);
        assert_eq!(p.invincible, 60);

        assert!(!p.take_hit());
        assert_eq!(p.health, 2);
        assert_eq!(p.invincible, 60);
    }

    #[test]
    fn invincibility_counts_down_to_zero() {
        let mut p = player();
        p.take_hit();
        for _ in 0..100 {
            p.tick_invincibility();
        }
        assert_eq!(p.invincible, 0);
        assert!(p.take_hit());
        assert_eq!(p.health, 1);
    }

    #[test]
    fn health_never_underflows() {
        let mut p = player();
        for _ in 0..10 {
            p.invincible = 0;
            p.take_hit();
        }
        assert_eq!(p.health, 0);
        assert!(p.is_dead());
    }

    #[test]
    fn clamps_to_level_edges() {
        let mut p = player();
        let mut platforms = ground();
        p.body.rect.set_left(2.0);
        p.update(&Intent::left(), &mut platforms, 300.0, &PhysicsConfig::default());
        assert_eq!(p.rect().left(), 0.0);

        p.body.rect.set_right(298.0);
        p.update(&Intent::right(), &mut platforms, 300.0, &PhysicsConfig::default());
        assert_eq!(p.rect().right(), 300.0);
    }
}
