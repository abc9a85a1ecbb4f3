use crate::error::{GeometryError, OperationError, Result};
use crate::geometry::{segments_of, Geometry, LineSegment, Polygon};
use crate::math::{is_finite, Coordinate};

use super::PointPairDistance;

/// Default limit on geometry collection nesting.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Computes the Euclidean distance from a point to a geometry, together with
/// the pair of points realizing it.
pub struct DistanceToPoint {
    point: Coordinate,
    max_depth: usize,
}

impl DistanceToPoint {
    /// Creates a new `DistanceToPoint` query for `point`.
    #[must_use]
    pub fn new(point: Coordinate) -> Self {
        Self {
            point,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Sets the deepest collection nesting level that will be visited.
    /// The geometry passed to [`execute`](Self::execute) is level 0.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Executes the query against `geometry`.
    ///
    /// The returned accumulator is null (distance `f64::INFINITY`) if the
    /// geometry has no coordinates.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::NonFiniteCoordinate` if the query point is not
    /// finite, or `OperationError::DepthExceeded` if collections nest deeper
    /// than the configured maximum.
    pub fn execute(&self, geometry: &Geometry) -> Result<PointPairDistance> {
        if !is_finite(&self.point) {
            return Err(GeometryError::NonFiniteCoordinate {
                x: self.point.x,
                y: self.point.y,
            }
            .into());
        }
        tracing::debug!(
            kind = %geometry.kind(),
            x = self.point.x,
            y = self.point.y,
            "distance to point"
        );

        let mut pt_dist = PointPairDistance::new();
        visit(geometry, self.point, &mut pt_dist, 0, self.max_depth)?;

        tracing::debug!(distance = pt_dist.distance(), "distance to point done");
        Ok(pt_dist)
    }
}

/// Updates `pt_dist` with the closest point of `geometry` to `pt`.
///
/// Uses [`DEFAULT_MAX_DEPTH`] as the nesting limit.
///
/// # Errors
///
/// Returns `OperationError::DepthExceeded` if collections nest too deeply.
pub fn compute_distance(
    geometry: &Geometry,
    pt: Coordinate,
    pt_dist: &mut PointPairDistance,
) -> Result<()> {
    visit(geometry, pt, pt_dist, 0, DEFAULT_MAX_DEPTH)
}

/// Returns the minimum Euclidean distance from `pt` to `geometry`.
///
/// An empty geometry reports `f64::INFINITY`.
///
/// # Errors
///
/// See [`DistanceToPoint::execute`].
pub fn distance_to_point(geometry: &Geometry, pt: Coordinate) -> Result<f64> {
    Ok(DistanceToPoint::new(pt).execute(geometry)?.distance())
}

/// Updates `pt_dist` with the closest point on each segment of `coords`.
///
/// Sequences with fewer than two coordinates have no segments.
pub fn compute_line_distance(coords: &[Coordinate], pt: Coordinate, pt_dist: &mut PointPairDistance) {
    for segment in segments_of(coords) {
        compute_segment_distance(&segment, pt, pt_dist);
    }
}

/// Updates `pt_dist` with the closest point on `segment`.
pub fn compute_segment_distance(segment: &LineSegment, pt: Coordinate, pt_dist: &mut PointPairDistance) {
    pt_dist.set_minimum(segment.closest_point(&pt), pt);
}

/// Updates `pt_dist` with the closest point on any ring of `polygon`.
pub fn compute_polygon_distance(polygon: &Polygon, pt: Coordinate, pt_dist: &mut PointPairDistance) {
    for ring in polygon.rings() {
        compute_line_distance(ring.coordinates(), pt, pt_dist);
    }
}

fn visit(
    geometry: &Geometry,
    pt: Coordinate,
    pt_dist: &mut PointPairDistance,
    depth: usize,
    max_depth: usize,
) -> Result<()> {
    if depth > max_depth {
        return Err(OperationError::DepthExceeded { max_depth }.into());
    }
    match geometry {
        Geometry::Point(p) => {
            if let Some(c) = p.coordinate() {
                pt_dist.set_minimum(c, pt);
            }
        }
        Geometry::LineString(line) => compute_line_distance(line.coordinates(), pt, pt_dist),
        Geometry::LinearRing(ring) => compute_line_distance(ring.coordinates(), pt, pt_dist),
        Geometry::Polygon(poly) => compute_polygon_distance(poly, pt, pt_dist),
        Geometry::MultiPoint(points) => {
            for c in points.iter().filter_map(|p| p.coordinate()) {
                pt_dist.set_minimum(c, pt);
            }
        }
        Geometry::MultiLineString(lines) => {
            for line in lines {
                compute_line_distance(line.coordinates(), pt, pt_dist);
            }
        }
        Geometry::MultiPolygon(polys) => {
            for poly in polys {
                compute_polygon_distance(poly, pt, pt_dist);
            }
        }
        Geometry::GeometryCollection(members) => {
            for g in members {
                visit(g, pt, pt_dist, depth + 1, max_depth)?;
            }
        }
    }
    Ok(())
}
