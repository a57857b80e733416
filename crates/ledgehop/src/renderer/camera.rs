use serde::Serialize;

/// Horizontal side-scrolling camera.
///
/// `offset` is the world x-coordinate drawn at the left edge of the viewport. The
/// player is kept inside a band `[scroll_area, viewport_width - scroll_area]` in
/// screen space; the camera moves only as far as needed to keep them there.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScrollCamera {
    /// World x at the left edge of the viewport.
    pub offset: f32,
    pub viewport_width: f32,
    /// Dead-zone margin on each side of the viewport.
    pub scroll_area: f32,
}

impl ScrollCamera {
    pub fn new(viewport_width: f32, scroll_area: f32) -> Self {
        Self {
            offset: 0.0,
            viewport_width,
            scroll_area,
        }
    }

    /// Recompute the offset from the player's world-space center.
    /// Instantaneous: no smoothing or easing.
    pub fn follow(&mut self, player_center_x: f32, level_width: f32) {
        let screen_x = player_center_x - self.offset;
        let left_edge = self.scroll_area;
        let right_edge = self.viewport_width - self.scroll_area;

        if screen_x < left_edge {
            self.offset = player_center_x - left_edge;
        } else if screen_x > right_edge {
            self.offset = player_center_x - right_edge;
        }

        self.offset = self.offset.clamp(0.0, self.max_offset(level_width));
    }

    /// Largest offset that still keeps the viewport inside the level.
    pub fn max_offset(&self, level_width: f32) -> f32 {
        (level_width - self.viewport_width).max(0.0)
    }

    /// World-space x converted to screen space.
    pub fn to_screen_x(&self, world_x: f32) -> f32 {
        world_x - self.offset
    }
}
