//! Gravity integration and axis-separated collision resolution.
//!
//! Shared by the player and every enemy. One call to [`KinematicBody::step`] is one
//! simulated frame:
//!
//! 1. `vy = min(vy + gravity, terminal_vy)`
//! 2. move vertically, resolve against every overlapping platform
//! 3. move horizontally, resolve against the platforms that survived step 2
//!
//! Platforms are resolved in collection order; a later snap on the same axis
//! overwrites an earlier one. Breakable platforms struck from below are marked during
//! the vertical pass and compacted out of the collection before the horizontal pass.

use glam::Vec2;
use serde::Serialize;

use crate::components::platform::Platform;
use crate::config::PhysicsConfig;
use crate::core::geometry::Aabb;

/// A movable rectangle with velocity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct KinematicBody {
    pub rect: Aabb,
    /// Pixels per frame. Positive y is downward.
    pub vel: Vec2,
    /// True only if this frame's vertical pass landed the body on a platform.
    pub on_ground: bool,
}

/// What happened to a body during one step.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepReport {
    pub landed: bool,
    /// The horizontal pass pushed the body out of at least one platform.
    pub wall_hit: bool,
    /// Breakable platforms destroyed this step, in their original collection order.
    pub broken: Vec<Platform>,
}

impl KinematicBody {
    pub fn new(rect: Aabb) -> Self {
        Self {
            rect,
            vel: Vec2::ZERO,
            on_ground: false,
        }
    }

    pub fn with_velocity(mut self, vel: Vec2) -> Self {
        self.vel = vel;
        self
    }

    /// Advance one frame against `platforms`, removing any breakable block hit from below.
    pub fn step(&mut self, platforms: &mut Vec<Platform>, physics: &PhysicsConfig) -> StepReport {
        let mut report = StepReport::default();
        self.on_ground = false;

        self.vel.y = (self.vel.y + physics.gravity).min(physics.terminal_vy);

        // -- Vertical --
        self.rect.y += self.vel.y;
        // Direction is fixed for the whole pass so a zeroed vy does not stop later snaps
        let falling = self.vel.y > 0.0;
        let rising = self.vel.y < 0.0;
        let mut struck: Vec<usize> = Vec::new();

        for (i, platform) in platforms.iter().enumerate() {
            if !self.rect.overlaps(&platform.rect) {
                continue;
            }
            if falling {
                self.rect.set_bottom(platform.rect.top());
                self.vel.y = 0.0;
                self.on_ground = true;
                report.landed = true;
            } else if rising {
                if platform.is_breakable() {
                    // Destroyed; the body keeps its position and passes through
                    struck.push(i);
                } else {
                    self.rect.set_top(platform.rect.bottom());
                }
                self.vel.y = 0.0;
            }
        }

        for &i in struck.iter().rev() {
            report.broken.push(platforms.remove(i));
        }
        report.broken.reverse();

        // -- Horizontal --
        self.rect.x += self.vel.x;
        let moving_right = self.vel.x > 0.0;
        let moving_left = self.vel.x < 0.0;

        for platform in platforms.iter() {
            if !self.rect.overlaps(&platform.rect) {
                continue;
            }
            if moving_right {
                self.rect.set_right(platform.rect.left());
                report.wall_hit = true;
            } else if moving_left {
                self.rect.set_left(platform.rect.right());
                report.wall_hit = true;
            }
        }

        report
    }
}

/// True if `probe` overlaps any platform.
pub fn probe_supported(probe: &Aabb, platforms: &[Platform]) -> bool {
    platforms.iter().any(|p| p.rect.overlaps(probe))
}
