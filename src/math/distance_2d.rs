use super::Coordinate;

/// Returns the point on the segment `a`→`b` (endpoints included) nearest to `p`.
#[must_use]
pub fn closest_point_on_segment(p: &Coordinate, a: &Coordinate, b: &Coordinate) -> Coordinate {
    let d = b - a;
    let len_sq = d.dot(&d);

    // Degenerate segment (zero length).
    if len_sq == 0.0 {
        return *a;
    }

    let t = (p - a).dot(&d) / len_sq;
    if t > 0.0 && t < 1.0 {
        return a + d * t;
    }

    // Clamped (or NaN from overflow): take the nearer endpoint.
    if nalgebra::distance_squared(p, a) <= nalgebra::distance_squared(p, b) {
        *a
    } else {
        *b
    }
}

/// Returns the minimum distance from point `p` to the line segment `a`→`b`.
#[must_use]
pub fn point_to_segment_dist(p: &Coordinate, a: &Coordinate, b: &Coordinate) -> f64 {
    nalgebra::distance(&closest_point_on_segment(p, a, b), p)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const TOL: f64 = 1e-12;

    fn c(x: f64, y: f64) -> Coordinate {
        Coordinate::new(x, y)
    }

    // ── closest_point_on_segment tests ──

    #[test]
    fn closest_point_perpendicular_projection() {
        // (5, 5) onto (0,0)→(10,0) lands at the midpoint.
        let cp = closest_point_on_segment(&c(5.0, 5.0), &c(0.0, 0.0), &c(10.0, 0.0));
        assert_relative_eq!(cp, c(5.0, 0.0), epsilon = TOL);
    }

    #[test]
    fn closest_point_clamps_to_start() {
        let cp = closest_point_on_segment(&c(-3.0, 1.0), &c(0.0, 0.0), &c(10.0, 0.0));
        assert_eq!(cp, c(0.0, 0.0));
    }

    #[test]
    fn closest_point_clamps_to_end() {
        let cp = closest_point_on_segment(&c(15.0, 2.0), &c(0.0, 0.0), &c(10.0, 0.0));
        assert_eq!(cp, c(10.0, 0.0));
    }

    #[test]
    fn closest_point_diagonal_segment() {
        // (0, 2) onto (0,0)→(2,2): t = 0.5, closest (1, 1).
        let cp = closest_point_on_segment(&c(0.0, 2.0), &c(0.0, 0.0), &c(2.0, 2.0));
        assert_relative_eq!(cp, c(1.0, 1.0), epsilon = TOL);
    }

    #[test]
    fn closest_point_degenerate_segment() {
        let cp = closest_point_on_segment(&c(2.0, 5.0), &c(2.0, 2.0), &c(2.0, 2.0));
        assert_eq!(cp, c(2.0, 2.0));
    }

    // ── point_to_segment_dist tests ──

    #[test]
    fn segment_dist_clamped_ends() {
        let a = c(0.0, 0.0);
        let b = c(10.0, 0.0);
        assert_relative_eq!(point_to_segment_dist(&c(5.0, 5.0), &a, &b), 5.0, epsilon = TOL);
        assert_relative_eq!(
            point_to_segment_dist(&c(-3.0, 1.0), &a, &b),
            10.0_f64.sqrt(),
            epsilon = TOL
        );
        assert_relative_eq!(
            point_to_segment_dist(&c(15.0, 2.0), &a, &b),
            29.0_f64.sqrt(),
            epsilon = TOL
        );
    }

    #[test]
    fn segment_dist_on_segment() {
        let d = point_to_segment_dist(&c(1.0, 0.0), &c(0.0, 0.0), &c(2.0, 0.0));
        assert!(d.abs() < TOL, "d={d}");
    }

    #[test]
    fn segment_dist_degenerate() {
        // Zero-length segment: distance is point-to-point.
        let d = point_to_segment_dist(&c(2.0, 5.0), &c(2.0, 2.0), &c(2.0, 2.0));
        assert_relative_eq!(d, 3.0, epsilon = TOL);
    }

    #[test]
    fn closest_point_overflowing_projection_picks_endpoint() {
        // dot products overflow to infinity, so t is NaN.
        let a = c(-1e200, 0.0);
        let b = c(1e200, 0.0);
        let cp = closest_point_on_segment(&c(0.0, 1.0), &a, &b);
        assert!(cp.x.is_finite() && cp.y.is_finite(), "cp={cp:?}");
        assert!(cp == a || cp == b);
        assert!(!point_to_segment_dist(&c(0.0, 1.0), &a, &b).is_nan());
    }

    #[test]
    fn closest_point_nearer_endpoint_when_beyond() {
        let a = c(1e200, 0.0);
        let b = c(-1e200, 0.0);
        let p = c(3e200, 1.0);
        assert_eq!(closest_point_on_segment(&p, &a, &b), a);
    }
}
