//! Resolution of the bottom and top heights of a wall.

use crate::geodesy::Geodesy;
use crate::math::{Point, Real};
use crate::wall::{WallConfig, WallGeometryError};

/// The heights of the bottom and the top of a wall at one position.
///
/// `maximum >= minimum` is not required: an inverted pair yields a wall facing the other way.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct HeightPair {
    /// The height of the bottom of the wall.
    pub minimum: Real,
    /// The height of the top of the wall.
    pub maximum: Real,
}

impl HeightPair {
    /// Creates a new height pair.
    #[inline]
    pub fn new(minimum: Real, maximum: Real) -> Self {
        Self { minimum, maximum }
    }

    /// Widens `self` so that it covers `other` too: keeps the lowest minimum and the highest
    /// maximum.
    #[inline]
    pub fn merge(&mut self, other: &HeightPair) {
        self.minimum = self.minimum.min(other.minimum);
        self.maximum = self.maximum.max(other.maximum);
    }

    /// The height pair covering both `self` and `other`.
    #[inline]
    pub fn merged(&self, other: &HeightPair) -> HeightPair {
        let mut result = *self;
        result.merge(other);
        result
    }
}

/// Checks that explicit height arrays have exactly one entry per position.
pub fn check_heights_len(
    num_positions: usize,
    minimum_heights: Option<&[Real]>,
    maximum_heights: Option<&[Real]>,
) -> Result<(), WallGeometryError> {
    if let Some(heights) = minimum_heights {
        if heights.len() != num_positions {
            return Err(WallGeometryError::MinimumHeightsLengthMismatch {
                positions: num_positions,
                heights: heights.len(),
            });
        }
    }

    if let Some(heights) = maximum_heights {
        if heights.len() != num_positions {
            return Err(WallGeometryError::MaximumHeightsLengthMismatch {
                positions: num_positions,
                heights: heights.len(),
            });
        }
    }

    Ok(())
}

/// Checks that there is exactly one resolved height pair per position.
pub fn check_height_pairs_len(
    positions: &[Point<Real>],
    heights: &[HeightPair],
) -> Result<(), WallGeometryError> {
    if positions.len() != heights.len() {
        return Err(WallGeometryError::HeightPairsLengthMismatch {
            positions: positions.len(),
            heights: heights.len(),
        });
    }

    Ok(())
}

/// Computes the height pair of every input position.
///
/// - Explicit heights are used as-is. Constant heights are broadcast beforehand, see
///   [`ConstantHeightOptions::broadcast`](crate::wall::ConstantHeightOptions::broadcast).
/// - Without minimum heights the bottom of the wall lies on the reference surface.
/// - Without maximum heights the top of the wall is at the geodetic height of the position,
///   raised to `minimum + config.minimum_wall_height` if it is lower than that.
///
/// The result is parallel to `positions`: duplicates are merged afterwards by
/// [`remove_duplicates`](crate::wall::sanitize::remove_duplicates).
pub fn resolve_heights<G: Geodesy>(
    positions: &[Point<Real>],
    minimum_heights: Option<&[Real]>,
    maximum_heights: Option<&[Real]>,
    geodesy: &G,
    config: &WallConfig,
) -> Result<Vec<HeightPair>, WallGeometryError> {
    check_heights_len(positions.len(), minimum_heights, maximum_heights)?;

    positions
        .iter()
        .enumerate()
        .map(|(i, pt)| -> Result<HeightPair, WallGeometryError> {
            let minimum = minimum_heights.map_or(0.0, |h| h[i]);
            let maximum = match maximum_heights {
                Some(h) => h[i],
                None => {
                    let height = geodesy
                        .geodetic_height(pt)
                        .ok_or(WallGeometryError::DegeneratePosition(i))?;
                    height.max(minimum + config.minimum_wall_height)
                }
            };

            Ok(HeightPair::new(minimum, maximum))
        })
        .collect()
}
