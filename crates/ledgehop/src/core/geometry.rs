use glam::Vec2;
use serde::Serialize;

/// Axis-aligned rectangle in world pixels.
/// `(x, y)` is the top-left corner; y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Aabb {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Aabb {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        debug_assert!(width > 0.0 && height > 0.0, "Aabb must have positive extent");
        Self { x, y, width, height }
    }

    /// Rectangle of the given size whose center sits at `center`.
    pub fn centered_at(center: Vec2, width: f32, height: f32) -> Self {
        Self::new(center.x - width / 2.0, center.y - height / 2.0, width, height)
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    // -- Edge snapping: move the rectangle so that one edge lands on `v` --

    pub fn set_left(&mut self, v: f32) {
        self.x = v;
    }

    pub fn set_right(&mut self, v: f32) {
        self.x = v - self.width;
    }

    pub fn set_top(&mut self, v: f32) {
        self.y = v;
    }

    pub fn set_bottom(&mut self, v: f32) {
        self.y = v - self.height;
    }

    /// Strict overlap on both axes. Rectangles that only share an edge do not overlap.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    /// Half-open point test: left and top edges are inside, right and bottom are not.
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.left() && point.x < self.right() && point.y >= self.top() && point.y < self.bottom()
    }
}

/// Free-function form of [`Aabb::overlaps`].
pub fn overlaps(a: &Aabb, b: &Aabb) -> bool {
    a.overlaps(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_follow_top_left_origin() {
        let r = Aabb::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(r.left(), 10.0);
        assert_eq!(r.right(), 40.0);
        assert_eq!(r.top(), 20.0);
        assert_eq!(r.bottom(), 60.0);
        assert_eq!(r.center(), Vec2::new(25.0, 40.0));
    }

    #[test]
    fn touching_edges_do_not_overlap() {
        let a = Aabb::new(0.0, 0.0, 50.0, 50.0);
        let right_neighbour = Aabb::new(50.0, 0.0, 50.0, 50.0);
        let below = Aabb::new(0.0, 50.0, 50.0, 50.0);
        assert!(!overlaps(&a, &right_neighbour));
        assert!(!overlaps(&a, &below));
    }

    #[test]
    fn partial_and_contained_overlap() {
        let a = Aabb::new(0.0, 0.0, 50.0, 50.0);
        assert!(a.overlaps(&Aabb::new(49.5, 49.5, 10.0, 10.0)));
        assert!(a.overlaps(&Aabb::new(10.0, 10.0, 5.0, 5.0)));
        assert!(Aabb::new(10.0, 10.0, 5.0, 5.0).overlaps(&a));
    }

    #[test]
    fn overlap_requires_both_axes() {
        let a = Aabb::new(0.0, 0.0, 50.0, 50.0);
        // Same columns, far below
        assert!(!a.overlaps(&Aabb::new(0.0, 200.0, 50.0, 50.0)));
        // Same rows, far right
        assert!(!a.overlaps(&Aabb::new(200.0, 0.0, 50.0, 50.0)));
    }

    #[test]
    fn snapping_preserves_size() {
        let mut r = Aabb::new(0.0, 0.0, 20.0, 30.0);
        r.set_bottom(100.0);
        assert_eq!(r.top(), 70.0);
        r.set_right(55.0);
        assert_eq!(r.left(), 35.0);
        r.set_top(5.0);
        r.set_left(1.0);
        assert_eq!((r.x, r.y, r.width, r.height), (1.0, 5.0, 20.0, 30.0));
    }

    #[test]
    fn contains_is_half_open() {
        let r = Aabb::new(0.0, 0.0, 10.0, 10.0);
        assert!(r.contains(Vec2::new(0.0, 0.0)));
        assert!(r.contains(Vec2::new(9.9, 9.9)));
        assert!(!r.contains(Vec2::new(10.0, 5.0)));
        assert!(!r.contains(Vec2::new(5.0, 10.0)));
    }

    #[test]
    fn centered_at_places_center() {
        let r = Aabb::centered_at(Vec2::new(25.0, 25.0), 20.0, 20.0);
        assert_eq!((r.x, r.y), (15.0, 15.0));
        assert_eq!(r.center(), Vec2::new(25.0, 25.0));
    }
}
