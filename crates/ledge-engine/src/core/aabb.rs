use glam::Vec2;

/// Axis-aligned bounding box anchored at its top-left corner
/// (y grows downward, matching the tile grid).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Top-left corner in pixels.
    pub pos: Vec2,
    /// Width and height in pixels.
    pub size: Vec2,
}

impl Aabb {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    /// X coordinate of the right edge.
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    /// Y coordinate of the bottom edge.
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Separating-axis overlap test: true when the boxes overlap on both
    /// axes. Boxes that merely touch along an edge do not overlap.
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.pos.x < other.right()
            && self.right() > other.pos.x
            && self.pos.y < other.bottom()
            && self.bottom() > other.pos.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aabb(x: f32, y: f32, w: f32, h: f32) -> Aabb {
        Aabb::new(Vec2::new(x, y), Vec2::new(w, h))
    }

    #[test]
    fn overlapping_boxes_intersect() {
        let a = aabb(0.0, 0.0, 10.0, 10.0);
        let b = aabb(5.0, 5.0, 10.0, 10.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn separated_on_x_does_not_intersect() {
        let a = aabb(0.0, 0.0, 10.0, 10.0);
        let b = aabb(20.0, 0.0, 10.0, 10.0);
        assert!(!a.intersects(&b));
    }

    #[test]
    fn separated_on_y_does_not_intersect() {
        let a = aabb(0.0, 0.0, 10.0, 10.0);
        let b = aabb(0.0, 30.0, 10.0, 10.0);
        assert!(!a.intersects(&b));
    }

    #[test]
    fn touching_edges_do_not_intersect() {
        let a = aabb(0.0, 0.0, 10.0, 10.0);
        let b = aabb(10.0, 0.0, 10.0, 10.0);
        assert!(!a.intersects(&b));

        let c = aabb(0.0, 10.0, 10.0, 10.0);
        assert!(!a.intersects(&c));
    }

    #[test]
    fn contained_box_intersects() {
        let outer = aabb(0.0, 0.0, 100.0, 100.0);
        let inner = aabb(40.0, 40.0, 5.0, 5.0);
        assert!(outer.intersects(&inner));
        assert!(inner.intersects(&outer));
    }

    #[test]
    fn edges_are_computed_from_pos_and_size() {
        let a = aabb(3.0, 4.0, 10.0, 20.0);
        assert!((a.right() - 13.0).abs() < 0.001);
        assert!((a.bottom() - 24.0).abs() < 0.001);
    }
}
