pub mod distance_2d;

/// 2D coordinate type.
pub type Coordinate = nalgebra::Point2<f64>;

/// Returns `true` if both components of `c` are finite.
#[must_use]
pub fn is_finite(c: &Coordinate) -> bool {
    c.x.is_finite() && c.y.is_finite()
}
