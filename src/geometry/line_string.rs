use crate::error::{GeometryError, Result};
use crate::math::Coordinate;

/// An ordered sequence of coordinates joined by straight segments.
///
/// May hold any number of coordinates. Fewer than two coordinates yield no
/// segments.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineString {
    coords: Vec<Coordinate>,
}

impl LineString {
    /// Creates a line string from its vertices.
    #[must_use]
    pub fn new(coords: Vec<Coordinate>) -> Self {
        Self { coords }
    }

    /// Creates a line string from `(x, y)` pairs.
    #[must_use]
    pub fn from_xy(xy: &[(f64, f64)]) -> Self {
        Self::new(xy.iter().map(|&(x, y)| Coordinate::new(x, y)).collect())
    }

    /// Returns the vertices in order.
    #[must_use]
    pub fn coordinates(&self) -> &[Coordinate] {
        &self.coords
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }
}

/// A closed line string used as a polygon boundary.
///
/// A non-empty ring has at least four coordinates and its first coordinate
/// equals its last.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinearRing {
    coords: Vec<Coordinate>,
}

impl LinearRing {
    /// Creates a ring, validating closure and minimum size.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::RingTooShort` if the ring has 1 to 3 coordinates,
    /// or `GeometryError::RingNotClosed` if the first and last coordinates differ.
    pub fn new(coords: Vec<Coordinate>) -> Result<Self> {
        if let (Some(first), Some(last)) = (coords.first(), coords.last()) {
            if coords.len() < 4 {
                return Err(GeometryError::RingTooShort { len: coords.len() }.into());
            }
            if first != last {
                return Err(GeometryError::RingNotClosed {
                    x0: first.x,
                    y0: first.y,
                    x1: last.x,
                    y1: last.y,
                }
                .into());
            }
        }
        Ok(Self { coords })
    }

    /// Creates a ring from `(x, y)` pairs.
    ///
    /// # Errors
    ///
    /// Same as [`LinearRing::new`].
    pub fn from_xy(xy: &[(f64, f64)]) -> Result<Self> {
        Self::new(xy.iter().map(|&(x, y)| Coordinate::new(x, y)).collect())
    }

    /// Returns the vertices in order, with the closing coordinate repeated.
    #[must_use]
    pub fn coordinates(&self) -> &[Coordinate] {
        &self.coords
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }
}
