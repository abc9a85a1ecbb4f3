pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;

pub use error::{PointDistError, Result};
pub use geometry::{Geometry, GeometryKind};
pub use math::Coordinate;
pub use operations::query::{DistanceToPoint, PointPairDistance};
