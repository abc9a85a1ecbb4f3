use crate::math::distance_2d::{closest_point_on_segment, point_to_segment_dist};
use crate::math::Coordinate;

/// A directed line segment from `p0` to `p1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub p0: Coordinate,
    pub p1: Coordinate,
}

impl LineSegment {
    /// Creates a new segment.
    #[must_use]
    pub fn new(p0: Coordinate, p1: Coordinate) -> Self {
        Self { p0, p1 }
    }

    /// Returns the point on this segment nearest to `p`.
    ///
    /// Points beyond either end map to the nearer endpoint.
    #[must_use]
    pub fn closest_point(&self, p: &Coordinate) -> Coordinate {
        closest_point_on_segment(p, &self.p0, &self.p1)
    }

    /// Returns the Euclidean distance from `p` to this segment.
    #[must_use]
    pub fn distance(&self, p: &Coordinate) -> f64 {
        point_to_segment_dist(p, &self.p0, &self.p1)
    }
}

/// Iterates over the segments joining consecutive coordinates.
///
/// Fewer than two coordinates yield no segments.
pub fn segments_of(coords: &[Coordinate]) -> impl Iterator<Item = LineSegment> + '_ {
    coords.windows(2).map(|w| LineSegment::new(w[0], w[1]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn c(x: f64, y: f64) -> Coordinate {
        Coordinate::new(x, y)
    }

    #[test]
    fn closest_point_and_distance_agree() {
        let seg = LineSegment::new(c(0.0, 0.0), c(10.0, 0.0));
        let q = c(15.0, 2.0);
        assert_eq!(seg.closest_point(&q), c(10.0, 0.0));
        assert_relative_eq!(seg.distance(&q), 29.0_f64.sqrt());
    }

    #[test]
    fn degenerate_segment() {
        let p = c(2.0, 2.0);
        let seg = LineSegment::new(p, p);
        assert_eq!(seg.closest_point(&c(2.0, 5.0)), p);
        assert_relative_eq!(seg.distance(&c(2.0, 5.0)), 3.0);
    }

    #[test]
    fn segments_of_consecutive_pairs() {
        let coords = [c(0.0, 0.0), c(1.0, 0.0), c(1.0, 1.0)];
        let segs: Vec<_> = segments_of(&coords).collect();
        assert_eq!(
            segs,
            vec![
                LineSegment::new(c(0.0, 0.0), c(1.0, 0.0)),
                LineSegment::new(c(1.0, 0.0), c(1.0, 1.0)),
            ]
        );
    }

    #[test]
    fn short_sequences_have_no_segments() {
        assert_eq!(segments_of(&[]).count(), 0);
        assert_eq!(segments_of(&[c(3.0, 4.0)]).count(), 0);
    }
}
