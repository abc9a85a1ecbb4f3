mod distance_to_point;
mod point_pair_distance;

pub use distance_to_point::{
    compute_distance, compute_line_distance, compute_polygon_distance, compute_segment_distance,
    distance_to_point, DistanceToPoint, DEFAULT_MAX_DEPTH,
};
pub use point_pair_distance::PointPairDistance;
