use super::LinearRing;

/// A planar area bounded by one exterior ring and zero or more holes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polygon {
    exterior: LinearRing,
    interiors: Vec<LinearRing>,
}

impl Polygon {
    /// Creates a polygon from its shell and holes.
    #[must_use]
    pub fn new(exterior: LinearRing, interiors: Vec<LinearRing>) -> Self {
        Self {
            exterior,
            interiors,
        }
    }

    #[must_use]
    pub fn exterior(&self) -> &LinearRing {
        &self.exterior
    }

    #[must_use]
    pub fn num_interior_rings(&self) -> usize {
        self.interiors.len()
    }

    /// Returns the `index`-th hole, if any.
    #[must_use]
    pub fn interior_ring(&self, index: usize) -> Option<&LinearRing> {
        self.interiors.get(index)
    }

    #[must_use]
    pub fn interiors(&self) -> &[LinearRing] {
        &self.interiors
    }

    /// Iterates over the exterior ring followed by each hole.
    pub fn rings(&self) -> impl Iterator<Item = &LinearRing> {
        std::iter::once(&self.exterior).chain(&self.interiors)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exterior.is_empty()
    }
}
