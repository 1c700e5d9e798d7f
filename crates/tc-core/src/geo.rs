//! Planar integer coordinates and the segment predicates used to keep the
//! edge layout free of overlaps.
//!
//! Coordinates are small integers (the city board is 192 × 108), so the
//! orientation cross-product is computed exactly in `i64`.  Only the
//! point-on-segment test goes through floating point, with a fixed epsilon.

/// Tolerance for the "node lies exactly on a segment" test.
pub const ON_SEGMENT_EPSILON: f64 = 1e-7;

/// A node position on the city grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance.
    pub fn distance(self, other: Point) -> f64 {
        let dx = (other.x - self.x) as f64;
        let dy = (other.y - self.y) as f64;
        dx.hypot(dy)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Sign of the cross product `(b − a) × (c − a)`: `1`, `-1`, or `0` when
/// the three points are collinear.
#[inline]
pub fn orientation(a: Point, b: Point, c: Point) -> i32 {
    let prod = (c.y - a.y) as i64 * (b.x - a.x) as i64 - (b.y - a.y) as i64 * (c.x - a.x) as i64;
    prod.signum() as i32
}

/// `true` if `p` sits on the segment `a–b` (within [`ON_SEGMENT_EPSILON`]).
///
/// Endpoints themselves satisfy the test; callers exclude them.
pub fn lies_on_segment(p: Point, a: Point, b: Point) -> bool {
    let diff = a.distance(p) + p.distance(b) - a.distance(b);
    -ON_SEGMENT_EPSILON < diff && diff < ON_SEGMENT_EPSILON
}

/// Strict (transversal) crossing test for segments `a1–a2` and `b1–b2`.
///
/// Each segment's endpoints must lie strictly on opposite sides of the other
/// segment's line.  Touching, sharing an endpoint, or collinear overlap do
/// not count as a crossing.
pub fn segments_cross(a1: Point, a2: Point, b1: Point, b2: Point) -> bool {
    let crossing_a = orientation(a1, a2, b1) * orientation(a1, a2, b2) < 0;
    let crossing_b = orientation(b1, b2, a1) * orientation(b1, b2, a2) < 0;
    crossing_a && crossing_b
}
