use crate::geodesy::{Cartographic, Geodesy};
use crate::math::{Point, Real, UnitVector, Vector, DEFAULT_EPSILON};

/// Convergence threshold of the Newton iteration used to project points onto the surface.
const SURFACE_PROJECTION_EPSILON: Real = 1.0e-12;
/// Upper bound on the Newton iterations, reached only on non-finite input.
const MAX_SURFACE_PROJECTION_ITERATIONS: usize = 64;
/// Below this squared scaled norm, points are projected radially instead of along the normal.
const CENTER_TOLERANCE_SQUARED: Real = 0.1;

/// A triaxial ellipsoid centered at the origin: `(x/a)² + (y/b)² + (z/c)² = 1`.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Ellipsoid {
    radii: Vector<Real>,
    radii_squared: Vector<Real>,
    one_over_radii_squared: Vector<Real>,
    center_tolerance_squared: Real,
}

impl Default for Ellipsoid {
    fn default() -> Self {
        Self::WGS84
    }
}

impl Ellipsoid {
    /// The WGS84 ellipsoid, in metres.
    pub const WGS84: Ellipsoid = Ellipsoid {
        radii: Vector::new(6378137.0, 6378137.0, 6356752.314245179),
        radii_squared: Vector::new(
            6378137.0 * 6378137.0,
            6378137.0 * 6378137.0,
            6356752.314245179 * 6356752.314245179,
        ),
        one_over_radii_squared: Vector::new(
            1.0 / (6378137.0 * 6378137.0),
            1.0 / (6378137.0 * 6378137.0),
            1.0 / (6356752.314245179 * 6356752.314245179),
        ),
        center_tolerance_squared: CENTER_TOLERANCE_SQUARED,
    };

    /// A sphere of radius 1.
    pub const UNIT_SPHERE: Ellipsoid = Ellipsoid {
        radii: Vector::new(1.0, 1.0, 1.0),
        radii_squared: Vector::new(1.0, 1.0, 1.0),
        one_over_radii_squared: Vector::new(1.0, 1.0, 1.0),
        center_tolerance_squared: CENTER_TOLERANCE_SQUARED,
    };

    /// Creates an ellipsoid with the given radii along the `x`, `y` and `z` axes.
    ///
    /// # Panics
    ///
    /// Panics if one of the radii is not strictly positive.
    pub fn new(x: Real, y: Real, z: Real) -> Self {
        assert!(
            x > 0.0 && y > 0.0 && z > 0.0,
            "The radii of an ellipsoid must be strictly positive."
        );

        let radii = Vector::new(x, y, z);
        let radii_squared = radii.component_mul(&radii);

        Self {
            radii,
            radii_squared,
            one_over_radii_squared: radii_squared.map(|r| 1.0 / r),
            center_tolerance_squared: CENTER_TOLERANCE_SQUARED,
        }
    }

    /// The radii of this ellipsoid along the `x`, `y` and `z` axes.
    #[inline]
    pub fn radii(&self) -> &Vector<Real> {
        &self.radii
    }

    /// The smallest radius of this ellipsoid.
    #[inline]
    pub fn minimum_radius(&self) -> Real {
        self.radii.min()
    }

    /// The largest radius of this ellipsoid.
    #[inline]
    pub fn maximum_radius(&self) -> Real {
        self.radii.max()
    }
}

impl Geodesy for Ellipsoid {
    fn geodetic_surface_normal(&self, point: &Point<Real>) -> Option<UnitVector<Real>> {
        UnitVector::try_new(
            point.coords.component_mul(&self.one_over_radii_squared),
            DEFAULT_EPSILON,
        )
    }

    fn scale_to_geodetic_surface(&self, point: &Point<Real>) -> Option<Point<Real>> {
        let p = point.coords;
        let w = self.one_over_radii_squared;
        let p2 = p.component_mul(&p).component_mul(&w);
        let squared_norm = p2.sum();
        let ratio = (1.0 / squared_norm).sqrt();

        // Intersection of the ray from the center toward `point` with the surface.
        let intersection = p * ratio;

        // Close to the center the gradient below is unreliable.
        if squared_norm < self.center_tolerance_squared {
            return ratio.is_finite().then(|| Point::from(intersection));
        }

        let gradient = intersection.component_mul(&w) * 2.0;
        let mut lambda = (1.0 - ratio) * p.norm() / (0.5 * gradient.norm());
        let mut correction = 0.0;
        let mut converged = false;

        for _ in 0..MAX_SURFACE_PROJECTION_ITERATIONS {
            lambda -= correction;

            let multiplier = w.map(|w| 1.0 / (1.0 + lambda * w));

            if converged {
                return Some(Point::from(p.component_mul(&multiplier)));
            }

            let multiplier2 = multiplier.component_mul(&multiplier);
            let multiplier3 = multiplier2.component_mul(&multiplier);

            let func = p2.dot(&multiplier2) - 1.0;
            // Take one more step after crossing the threshold so the residual ends at rounding level.
            converged = func.abs() <= SURFACE_PROJECTION_EPSILON;

            let denominator = p2.component_mul(&multiplier3).dot(&w);
            let derivative = -2.0 * denominator;
            correction = func / derivative;
        }

        log::debug!(
            "Surface projection of {:?} did not converge after {} iterations.",
            point,
            MAX_SURFACE_PROJECTION_ITERATIONS
        );
        None
    }

    fn cartographic_to_cartesian(&self, cartographic: &Cartographic) -> Point<Real> {
        let (sin_lon, cos_lon) = cartographic.longitude.sin_cos();
        let (sin_lat, cos_lat) = cartographic.latitude.sin_cos();
        let normal = Vector::new(cos_lat * cos_lon, cos_lat * sin_lon, sin_lat).normalize();
        let k = self.radii_squared.component_mul(&normal);
        let gamma = normal.dot(&k).sqrt();

        Point::from(k / gamma + normal * cartographic.height)
    }
}
