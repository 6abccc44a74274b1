//! Removal of consecutive duplicate positions.

use crate::geodesy::Geodesy;
use crate::math::{Point, Real};
use crate::wall::heights::check_height_pairs_len;
use crate::wall::{HeightPair, WallGeometryError};

/// The positions of a wall once consecutive duplicates are merged.
#[derive(PartialEq, Debug, Clone, Default)]
pub struct SanitizedPositions {
    /// The first position of each run of duplicates.
    pub positions: Vec<Point<Real>>,
    /// The heights of each run of duplicates, merged with [`HeightPair::merge`].
    pub heights: Vec<HeightPair>,
}

impl SanitizedPositions {
    /// The number of positions left.
    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Is this set of positions empty?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// A maximal run of consecutive duplicates being folded.
struct Run {
    first: usize,
    heights: HeightPair,
    len: usize,
}

/// Merges every maximal run of consecutive duplicate positions into its first position.
///
/// Two consecutive positions are duplicates if their projections on the reference surface are
/// within `tolerance` of each other, so positions differing only by their height are duplicates.
/// The heights of a run are folded together: the merged minimum is the lowest minimum of the
/// run and the merged maximum is its highest maximum.
///
/// Each position is compared to the first position of the current run, so a slow drift of
/// positions closer than `tolerance` to each other does not collapse into a single run.
///
/// Fails if `heights` and `positions` have different lengths, if less than two positions are
/// given, or if less than two remain.
pub fn remove_duplicates<G: Geodesy>(
    positions: &[Point<Real>],
    heights: &[HeightPair],
    geodesy: &G,
    tolerance: Real,
) -> Result<SanitizedPositions, WallGeometryError> {
    check_height_pairs_len(positions, heights)?;

    match positions.len() {
        0 => return Err(WallGeometryError::MissingPositions),
        1 => return Err(WallGeometryError::NotEnoughPositions(1)),
        _ => {}
    }

    let surface = |i: usize| {
        geodesy
            .scale_to_geodetic_surface(&positions[i])
            .ok_or(WallGeometryError::DegeneratePosition(i))
    };

    let mut result = SanitizedPositions {
        positions: Vec::with_capacity(positions.len()),
        heights: Vec::with_capacity(positions.len()),
    };
    let mut push_run = |run: Run| {
        if run.len > 1 {
            log::trace!(
                "Merged {} duplicate positions starting at index {} into heights {:?}.",
                run.len,
                run.first,
                run.heights
            );
        }
        result.positions.push(positions[run.first]);
        result.heights.push(run.heights);
    };

    let mut run = Run {
        first: 0,
        heights: heights[0],
        len: 1,
    };
    let mut kept = surface(0)?;

    for i in 1..positions.len() {
        let current = surface(i)?;

        if na::distance(&kept, &current) <= tolerance {
            run.heights.merge(&heights[i]);
            run.len += 1;
        } else {
            push_run(run);
            run = Run {
                first: i,
                heights: heights[i],
                len: 1,
            };
            kept = current;
        }
    }

    push_run(run);

    let num_removed = positions.len() - result.len();
    if num_removed > 0 {
        log::debug!(
            "Removed {} duplicate positions out of {}.",
            num_removed,
            positions.len()
        );
    }

    if result.len() < 2 {
        return Err(WallGeometryError::NotEnoughUniquePositions(result.len()));
    }

    Ok(result)
}
