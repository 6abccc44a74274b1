use crate::math::Real;
use approx::{AbsDiffEq, RelativeEq};

/// A geographic position: longitude and latitude in radians, height in metres above the
/// reference surface.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone, Default)]
pub struct Cartographic {
    /// The longitude, in radians, positive toward the east.
    pub longitude: Real,
    /// The latitude, in radians, positive toward the north.
    pub latitude: Real,
    /// The height above the reference surface.
    pub height: Real,
}

impl Cartographic {
    /// Creates a new position from a longitude and latitude in radians.
    #[inline]
    pub fn new(longitude: Real, latitude: Real, height: Real) -> Self {
        Self {
            longitude,
            latitude,
            height,
        }
    }

    /// Creates a new position from a longitude and latitude in degrees.
    #[inline]
    pub fn from_degrees(longitude: Real, latitude: Real, height: Real) -> Self {
        Self::new(longitude.to_radians(), latitude.to_radians(), height)
    }

    /// The longitude of this position, in degrees.
    #[inline]
    pub fn longitude_degrees(&self) -> Real {
        self.longitude.to_degrees()
    }

    /// The latitude of this position, in degrees.
    #[inline]
    pub fn latitude_degrees(&self) -> Real {
        self.latitude.to_degrees()
    }
}

impl AbsDiffEq for Cartographic {
    type Epsilon = Real;

    fn default_epsilon() -> Real {
        Real::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Real) -> bool {
        self.longitude.abs_diff_eq(&other.longitude, epsilon)
            && self.latitude.abs_diff_eq(&other.latitude, epsilon)
            && self.height.abs_diff_eq(&other.height, epsilon)
    }
}

impl RelativeEq for Cartographic {
    fn default_max_relative() -> Real {
        Real::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: Real, max_relative: Real) -> bool {
        self.longitude
            .relative_eq(&other.longitude, epsilon, max_relative)
            && self
                .latitude
                .relative_eq(&other.latitude, epsilon, max_relative)
            && self.height.relative_eq(&other.height, epsilon, max_relative)
    }
}
