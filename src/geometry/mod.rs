pub mod collection;
pub mod line_string;
pub mod point;
pub mod polygon;
pub mod segment;

pub use collection::{
    Collection, GeometryCollection, MultiLineString, MultiPoint, MultiPolygon,
};
pub use line_string::{LineString, LinearRing};
pub use point::Point;
pub use polygon::Polygon;
pub use segment::{segments_of, LineSegment};

use std::fmt;
use std::str::FromStr;

use crate::error::GeometryError;
use crate::math::Coordinate;

/// A planar geometry.
///
/// The variant set is closed: every `match` over it is exhaustive, so adding
/// a variant must be handled at each dispatch site.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Point(Point),
    LineString(LineString),
    LinearRing(LinearRing),
    Polygon(Polygon),
    MultiPoint(MultiPoint),
    MultiLineString(MultiLineString),
    MultiPolygon(MultiPolygon),
    GeometryCollection(GeometryCollection),
}

/// The structural kind of a [`Geometry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeometryKind {
    Point,
    LineString,
    LinearRing,
    Polygon,
    MultiPoint,
    MultiLineString,
    MultiPolygon,
    GeometryCollection,
}

impl GeometryKind {
    /// All kinds, in declaration order.
    pub const ALL: [GeometryKind; 8] = [
        GeometryKind::Point,
        GeometryKind::LineString,
        GeometryKind::LinearRing,
        GeometryKind::Polygon,
        GeometryKind::MultiPoint,
        GeometryKind::MultiLineString,
        GeometryKind::MultiPolygon,
        GeometryKind::GeometryCollection,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            GeometryKind::Point => "Point",
            GeometryKind::LineString => "LineString",
            GeometryKind::LinearRing => "LinearRing",
            GeometryKind::Polygon => "Polygon",
            GeometryKind::MultiPoint => "MultiPoint",
            GeometryKind::MultiLineString => "MultiLineString",
            GeometryKind::MultiPolygon => "MultiPolygon",
            GeometryKind::GeometryCollection => "GeometryCollection",
        }
    }
}

impl fmt::Display for GeometryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GeometryKind {
    type Err = GeometryError;

    /// Parses a kind name, ignoring ASCII case.
    ///
    /// Unknown names are rejected rather than mapped to `Point`.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        GeometryKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| GeometryError::UnsupportedGeometry(s.to_owned()))
    }
}

impl Geometry {
    #[must_use]
    pub fn kind(&self) -> GeometryKind {
        match self {
            Geometry::Point(_) => GeometryKind::Point,
            Geometry::LineString(_) => GeometryKind::LineString,
            Geometry::LinearRing(_) => GeometryKind::LinearRing,
            Geometry::Polygon(_) => GeometryKind::Polygon,
            Geometry::MultiPoint(_) => GeometryKind::MultiPoint,
            Geometry::MultiLineString(_) => GeometryKind::MultiLineString,
            Geometry::MultiPolygon(_) => GeometryKind::MultiPolygon,
            Geometry::GeometryCollection(_) => GeometryKind::GeometryCollection,
        }
    }

    /// Returns `true` if the geometry contains no coordinates at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Geometry::Point(p) => p.is_empty(),
            Geometry::LineString(l) => l.is_empty(),
            Geometry::LinearRing(r) => r.is_empty(),
            Geometry::Polygon(p) => p.rings().all(LinearRing::is_empty),
            Geometry::MultiPoint(c) => c.iter().all(Point::is_empty),
            Geometry::MultiLineString(c) => c.iter().all(LineString::is_empty),
            Geometry::MultiPolygon(c) => c.iter().all(Polygon::is_empty),
            Geometry::GeometryCollection(c) => c.iter().all(Geometry::is_empty),
        }
    }

    /// Returns every coordinate in the geometry, in traversal order.
    #[must_use]
    pub fn coordinates(&self) -> Vec<Coordinate> {
        let mut out = Vec::new();
        self.collect_coordinates(&mut out);
        out
    }

    fn collect_coordinates(&self, out: &mut Vec<Coordinate>) {
        match self {
            Geometry::Point(p) => out.extend(p.coordinate()),
            Geometry::LineString(l) => out.extend_from_slice(l.coordinates()),
            Geometry::LinearRing(r) => out.extend_from_slice(r.coordinates()),
            Geometry::Polygon(p) => collect_polygon(p, out),
            Geometry::MultiPoint(c) => out.extend(c.iter().filter_map(Point::coordinate)),
            Geometry::MultiLineString(c) => {
                for l in c {
                    out.extend_from_slice(l.coordinates());
                }
            }
            Geometry::MultiPolygon(c) => {
                for p in c {
                    collect_polygon(p, out);
                }
            }
            Geometry::GeometryCollection(c) => {
                for g in c {
                    g.collect_coordinates(out);
                }
            }
        }
    }
}

fn collect_polygon(p: &Polygon, out: &mut Vec<Coordinate>) {
    for ring in p.rings() {
        out.extend_from_slice(ring.coordinates());
    }
}

impl From<Point> for Geometry {
    fn from(g: Point) -> Self {
        Geometry::Point(g)
    }
}

impl From<LineString> for Geometry {
    fn from(g: LineString) -> Self {
        Geometry::LineString(g)
    }
}

impl From<LinearRing> for Geometry {
    fn from(g: LinearRing) -> Self {
        Geometry::LinearRing(g)
    }
}

impl From<Polygon> for Geometry {
    fn from(g: Polygon) -> Self {
        Geometry::Polygon(g)
    }
}

impl From<MultiPoint> for Geometry {
    fn from(g: MultiPoint) -> Self {
        Geometry::MultiPoint(g)
    }
}

impl From<MultiLineString> for Geometry {
    fn from(g: MultiLineString) -> Self {
        Geometry::MultiLineString(g)
    }
}

impl From<MultiPolygon> for Geometry {
    fn from(g: MultiPolygon) -> Self {
        Geometry::MultiPolygon(g)
    }
}

impl From<GeometryCollection> for Geometry {
    fn from(g: GeometryCollection) -> Self {
        Geometry::GeometryCollection(g)
    }
}
