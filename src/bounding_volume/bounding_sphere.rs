//! Bounding sphere.

use crate::math::{Point, Real};

/// A Bounding Sphere.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct BoundingSphere {
    /// The bounding sphere center.
    pub center: Point<Real>,
    /// The bounding sphere radius.
    pub radius: Real,
}

impl BoundingSphere {
    /// Creates a new bounding sphere.
    pub fn new(center: Point<Real>, radius: Real) -> BoundingSphere {
        BoundingSphere { center, radius }
    }

    /// Computes a bounding sphere of the given points, centered on their centroid.
    ///
    /// Returns `None` if `pts` is empty.
    pub fn from_points(pts: &[Point<Real>]) -> Option<BoundingSphere> {
        if pts.is_empty() {
            return None;
        }

        let (center, radius) = super::point_cloud_bounding_sphere(pts);
        Some(BoundingSphere::new(center, radius))
    }

    /// The bounding sphere center.
    #[inline]
    pub fn center(&self) -> &Point<Real> {
        &self.center
    }

    /// The bounding sphere radius.
    #[inline]
    pub fn radius(&self) -> Real {
        self.radius
    }

    /// Does this bounding sphere contain the given point?
    #[inline]
    pub fn contains_point(&self, pt: &Point<Real>) -> bool {
        na::distance_squared(&self.center, pt) <= self.radius * self.radius
    }

    /// Enlarges this bounding sphere by `amount`.
    #[inline]
    pub fn loosened(&self, amount: Real) -> BoundingSphere {
        assert!(amount >= 0.0, "The loosening margin must be positive.");
        BoundingSphere::new(self.center, self.radius + amount)
    }
}
