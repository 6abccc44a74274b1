//! Conversions between geographic and Cartesian coordinates on a reference ellipsoid.
//!
//! Wall construction never computes ellipsoid math itself: it goes through the [`Geodesy`]
//! trait. [`Ellipsoid`] is the implementation shipped with this crate, but any type
//! implementing the trait can be plugged into [`WallOptions`](crate::wall::WallOptions).
//!
//! # Example
//!
//! ```
//! use geowall::geodesy::{Cartographic, Ellipsoid, Geodesy};
//!
//! let ellipsoid = Ellipsoid::WGS84;
//! let position = ellipsoid.cartographic_to_cartesian(&Cartographic::from_degrees(49.0, 18.0, 250.0));
//! let back = ellipsoid.cartesian_to_cartographic(&position).unwrap();
//!
//! assert!((back.height - 250.0).abs() < 1.0e-6);
//! ```

pub use self::cartographic::Cartographic;
pub use self::ellipsoid::Ellipsoid;

mod cartographic;
mod ellipsoid;

use crate::math::{Point, Real, UnitVector};

/// A geodesy service: the surface queries needed to lay a wall on a curved reference surface.
///
/// Only [`geodetic_surface_normal`](Geodesy::geodetic_surface_normal),
/// [`scale_to_geodetic_surface`](Geodesy::scale_to_geodetic_surface) and
/// [`cartographic_to_cartesian`](Geodesy::cartographic_to_cartesian) are required; the
/// remaining operations are derived from them.
///
/// Methods returning `Option` yield `None` for points where the surface projection is undefined
/// (typically the center of the ellipsoid).
pub trait Geodesy {
    /// The unit normal of the surface at `point`, which is assumed to lie on the surface.
    fn geodetic_surface_normal(&self, point: &Point<Real>) -> Option<UnitVector<Real>>;

    /// Projects `point` onto the surface along the geodetic normal.
    fn scale_to_geodetic_surface(&self, point: &Point<Real>) -> Option<Point<Real>>;

    /// Converts geographic coordinates to a Cartesian position.
    fn cartographic_to_cartesian(&self, cartographic: &Cartographic) -> Point<Real>;

    /// Converts a Cartesian position to geographic coordinates.
    ///
    /// The height is signed: points below the surface have a negative height.
    fn cartesian_to_cartographic(&self, point: &Point<Real>) -> Option<Cartographic> {
        let surface = self.scale_to_geodetic_surface(point)?;
        let normal = self.geodetic_surface_normal(&surface)?;
        let delta = *point - surface;
        let height = normal.dot(&delta).signum() * delta.norm();

        Some(Cartographic::new(
            normal.y.atan2(normal.x),
            normal.z.asin(),
            height,
        ))
    }

    /// The geodetic height of `point` above the surface.
    fn geodetic_height(&self, point: &Point<Real>) -> Option<Real> {
        self.cartesian_to_cartographic(point).map(|c| c.height)
    }

    /// Moves `point` onto the surface, then `height` units along the surface normal.
    ///
    /// The result has a geodetic height of `height` whatever the height of `point` was.
    fn offset_along_normal(&self, point: &Point<Real>, height: Real) -> Option<Point<Real>> {
        let surface = self.scale_to_geodetic_surface(point)?;
        let normal = self.geodetic_surface_normal(&surface)?;
        Some(surface + *normal * height)
    }
}
