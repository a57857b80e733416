use glam::Vec2;
use serde::Serialize;

use crate::components::platform::Platform;
use crate::components::Facing;
use crate::config::PhysicsConfig;
use crate::core::geometry::Aabb;
use crate::systems::kinematics::{probe_supported, KinematicBody, StepReport};

/// Size of the ledge probe on each axis.
const PROBE_SIZE: f32 = 1.0;

/// A patrolling enemy. Gravity is its only vertical force; it turns around at walls
/// and ledges. Enemies cannot be hurt.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Enemy {
    pub body: KinematicBody,
    pub facing: Facing,
    speed: f32,
}

impl Enemy {
    pub fn new(rect: Aabb, speed: f32, facing: Facing) -> Self {
        let body = KinematicBody::new(rect).with_velocity(Vec2::new(facing.sign() * speed, 0.0));
        Self { body, facing, speed }
    }

    pub fn rect(&self) -> &Aabb {
        &self.body.rect
    }

    /// One-pixel rectangle just past the leading edge and just under the feet.
    pub fn ledge_probe(&self) -> Aabb {
        let r = &self.body.rect;
        let x = match self.facing {
            Facing::Right => r.right(),
            Facing::Left => r.left() - PROBE_SIZE,
        };
        Aabb::new(x, r.bottom(), PROBE_SIZE, PROBE_SIZE)
    }

    /// One frame of patrol. Reverses at most once, on a wall hit or an unsupported
    /// leading edge while grounded.
    pub fn update(&mut self, platforms: &mut Vec<Platform>, physics: &PhysicsConfig) -> StepReport {
        self.body.vel.x = self.facing.sign() * self.speed;
        let report = self.body.step(platforms, physics);

        let at_ledge = self.body.on_ground && !probe_supported(&self.ledge_probe(), platforms);
        if report.wall_hit || at_ledge {
            self.turn_around();
        }
        report
    }

    pub fn turn_around(&mut self) {
        self.facing = match self.facing {
            Facing::Left => Facing::Right,
            Facing::Right => Facing::Left,
        };
        self.body.vel.x = -self.body.vel.x;
    }
}
