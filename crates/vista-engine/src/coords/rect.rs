use super::Vec2;

/// Axis-aligned rectangle (top-left origin).
///
/// Used as a view's frame: `origin` is relative to the parent view.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub const fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        Vec2::new(self.origin.x + self.size.x, self.origin.y + self.size.y)
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    /// Normalizes the rectangle so width/height are non-negative.
    #[inline]
    pub fn normalized(self) -> Self {
        let mut r = self;
        if r.size.x < 0.0 {
            r.origin.x += r.size.x;
            r.size.x = -r.size.x;
        }
        if r.size.y < 0.0 {
            r.origin.y += r.size.y;
            r.size.y = -r.size.y;
        }
        r
    }

    /// Half-open containment: [min, max).
    ///
    /// Adjacent frames sharing an edge never both contain a point on it.
    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        let r = self.normalized();
        p.x >= r.origin.x
            && p.y >= r.origin.y
            && p.x < (r.origin.x + r.size.x)
            && p.y < (r.origin.y + r.size.y)
    }

    /// Same size, origin shifted by `by`.
    #[inline]
    pub fn translated(self, by: Vec2) -> Self {
        Self::from_origin_size(self.origin + by, self.size)
    }

    /// Expresses `p` (in the same space as this rect) relative to the rect's origin.
    #[inline]
    pub fn to_local(self, p: Vec2) -> Vec2 {
        p - self.origin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect { Rect::new(x, y, w, h) }

    // ── contains ──────────────────────────────────────────────────────────

    #[test]
    fn contains_interior_point() {
        assert!(r(0.0, 0.0, 50.0, 50.0).contains(Vec2::new(10.0, 10.0)));
    }

    #[test]
    fn contains_top_left_inclusive() {
        assert!(r(5.0, 5.0, 10.0, 10.0).contains(Vec2::new(5.0, 5.0)));
    }

    #[test]
    fn contains_bottom_right_exclusive() {
        assert!(!r(0.0, 0.0, 10.0, 10.0).contains(Vec2::new(10.0, 10.0)));
        assert!(!r(0.0, 0.0, 10.0, 10.0).contains(Vec2::new(9.0, 10.0)));
    }

    #[test]
    fn contains_negative_size_is_normalized() {
        assert!(r(10.0, 10.0, -10.0, -10.0).contains(Vec2::new(5.0, 5.0)));
    }

    #[test]
    fn empty_rect_contains_nothing() {
        let e = r(0.0, 0.0, 0.0, 10.0);
        assert!(e.is_empty());
        assert!(!e.contains(Vec2::new(0.0, 0.0)));
    }

    // ── transforms ────────────────────────────────────────────────────────

    #[test]
    fn translated_keeps_size() {
        let t = r(1.0, 2.0, 3.0, 4.0).translated(Vec2::new(10.0, 20.0));
        assert_eq!(t, r(11.0, 22.0, 3.0, 4.0));
    }

    #[test]
    fn to_local_subtracts_origin() {
        let frame = r(20.0, 30.0, 100.0, 100.0);
        assert_eq!(frame.to_local(Vec2::new(25.0, 31.0)), Vec2::new(5.0, 1.0));
    }

    #[test]
    fn max_is_far_corner() {
        assert_eq!(r(1.0, 2.0, 3.0, 4.0).max(), Vec2::new(4.0, 6.0));
    }
}
