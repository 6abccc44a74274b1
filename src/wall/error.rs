/// Errors raised while validating the input of a wall.
///
/// Every variant describes a problem with the caller's input: wall construction performs no I/O
/// and is all-or-nothing, so no partial mesh is ever returned alongside an error.
///
/// # Example
///
/// ```
/// use geowall::wall::{create_wall, WallGeometryError, WallOptions};
///
/// let result = create_wall(&[], &WallOptions::default());
/// assert_eq!(result.unwrap_err(), WallGeometryError::MissingPositions);
/// ```
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum WallGeometryError {
    /// No position was given.
    #[error("a wall requires a sequence of positions, but none was given.")]
    MissingPositions,
    /// The explicit minimum heights do not match the positions one-to-one.
    #[error("{heights} minimum heights were given for {positions} positions.")]
    MinimumHeightsLengthMismatch {
        /// The number of positions.
        positions: usize,
        /// The number of minimum heights.
        heights: usize,
    },
    /// The explicit maximum heights do not match the positions one-to-one.
    #[error("{heights} maximum heights were given for {positions} positions.")]
    MaximumHeightsLengthMismatch {
        /// The number of positions.
        positions: usize,
        /// The number of maximum heights.
        heights: usize,
    },
    /// The resolved height pairs do not match the positions one-to-one.
    #[error("{heights} height pairs were given for {positions} positions.")]
    HeightPairsLengthMismatch {
        /// The number of positions.
        positions: usize,
        /// The number of height pairs.
        heights: usize,
    },
    /// Less than two positions were given.
    #[error("a wall requires at least 2 positions, but {0} was given.")]
    NotEnoughPositions(usize),
    /// Less than two positions remain once consecutive duplicates are removed.
    #[error("a wall requires at least 2 unique positions, but only {0} remain after removing duplicates.")]
    NotEnoughUniquePositions(usize),
    /// The position with the given index has no projection on the reference surface.
    ///
    /// This happens for positions located at the center of the ellipsoid, or containing NaN.
    #[error("the position {0} cannot be projected on the reference surface.")]
    DegeneratePosition(usize),
}
