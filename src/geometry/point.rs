use crate::math::Coordinate;

/// A single location, or the empty point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    coordinate: Option<Coordinate>,
}

impl Point {
    /// Creates a point at `(x, y)`.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            coordinate: Some(Coordinate::new(x, y)),
        }
    }

    /// Creates the empty point.
    #[must_use]
    pub fn empty() -> Self {
        Self { coordinate: None }
    }

    /// Returns the point's coordinate, or `None` for the empty point.
    #[must_use]
    pub fn coordinate(&self) -> Option<Coordinate> {
        self.coordinate
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coordinate.is_none()
    }
}

impl From<Coordinate> for Point {
    fn from(coordinate: Coordinate) -> Self {
        Self {
            coordinate: Some(coordinate),
        }
    }
}
