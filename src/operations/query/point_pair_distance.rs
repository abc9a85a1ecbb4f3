use crate::math::Coordinate;

/// Running minimum over pairs of points and the distance between them.
///
/// Holds the pair `[on_geometry, query]` realizing the smallest distance
/// submitted so far. A freshly created accumulator is null and reports a
/// distance of `f64::INFINITY`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointPairDistance {
    pair: Option<[Coordinate; 2]>,
    distance: f64,
}

impl Default for PointPairDistance {
    fn default() -> Self {
        Self::new()
    }
}

impl PointPairDistance {
    /// Creates a null accumulator.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pair: None,
            distance: f64::INFINITY,
        }
    }

    /// Resets to the null state.
    pub fn initialize(&mut self) {
        *self = Self::new();
    }

    /// Unconditionally sets the held pair.
    pub fn initialize_with(&mut self, p0: Coordinate, p1: Coordinate) {
        self.pair = Some([p0, p1]);
        self.distance = nalgebra::distance(&p0, &p1);
    }

    /// Returns `true` if no candidate has been recorded.
    #[must_use]
    pub fn is_null(&self) -> bool {
        self.pair.is_none()
    }

    /// Returns the current minimum distance, or `f64::INFINITY` while null.
    #[must_use]
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Returns the pair `[on_geometry, query]`, if any.
    #[must_use]
    pub fn coordinates(&self) -> Option<[Coordinate; 2]> {
        self.pair
    }

    /// Returns one coordinate of the pair: `0` is on the geometry, `1` is the query point.
    #[must_use]
    pub fn coordinate(&self, index: usize) -> Option<Coordinate> {
        self.pair.and_then(|pair| pair.get(index).copied())
    }

    /// Records `(p0, p1)` if it is the first candidate or strictly closer
    /// than the current minimum. Ties keep the earlier pair. A held NaN
    /// distance is replaced by any later candidate.
    pub fn set_minimum(&mut self, p0: Coordinate, p1: Coordinate) {
        let dist = nalgebra::distance(&p0, &p1);
        if self.pair.is_none() || self.distance.is_nan() || dist < self.distance {
            tracing::trace!(distance = dist, x = p0.x, y = p0.y, "new minimum");
            self.pair = Some([p0, p1]);
            self.distance = dist;
        }
    }

    /// Merges another accumulator into this one. A null `other` is ignored.
    pub fn set_minimum_pair(&mut self, other: &PointPairDistance) {
        if let Some([p0, p1]) = other.pair {
            self.set_minimum(p0, p1);
        }
    }
}
