use super::{Geometry, LineString, Point, Polygon};

/// An ordered sequence of member geometries of type `T`.
///
/// The homogeneous aliases ([`MultiPoint`], [`MultiLineString`],
/// [`MultiPolygon`]) and the heterogeneous [`GeometryCollection`] share this
/// representation.
#[derive(Debug, Clone, PartialEq)]
pub struct Collection<T> {
    members: Vec<T>,
}

/// A collection of points.
pub type MultiPoint = Collection<Point>;

/// A collection of line strings.
pub type MultiLineString = Collection<LineString>;

/// A collection of polygons.
pub type MultiPolygon = Collection<Polygon>;

/// A collection of arbitrary geometries, possibly nested.
pub type GeometryCollection = Collection<Geometry>;

impl<T> Collection<T> {
    /// Creates a collection from its members, kept in the given order.
    #[must_use]
    pub fn new(members: Vec<T>) -> Self {
        Self { members }
    }

    #[must_use]
    pub fn num_geometries(&self) -> usize {
        self.members.len()
    }

    /// Returns the `index`-th member, if any.
    #[must_use]
    pub fn geometry(&self, index: usize) -> Option<&T> {
        self.members.get(index)
    }

    /// Iterates over the members in index order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.members.iter()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            members: Vec::new(),
        }
    }
}

impl<T> FromIterator<T> for Collection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a, T> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}
