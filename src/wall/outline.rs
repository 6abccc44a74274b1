//! Line-segment outlines of walls.

use crate::math::{Point, Real};

/// The line segments outlining a wall with `num_positions` positions.
///
/// One vertical edge joins the top and bottom of each position, and each segment of the wall
/// adds its top and bottom edges.
pub fn wall_outline_indices(num_positions: usize) -> Vec<[u32; 2]> {
    let num_segments = num_positions.saturating_sub(1);
    let mut indices = Vec::with_capacity(num_positions + num_segments * 2);

    for i in 0..num_positions as u32 {
        let top = i * 2;
        indices.push([top, top + 1]);

        if (i as usize) < num_segments {
            indices.push([top, top + 2]);
            indices.push([top + 1, top + 3]);
        }
    }

    indices
}

/// Outlines a wall given its vertices, laid out as `[top0, bottom0, top1, bottom1, …]`.
pub fn wall_outline(vertices: Vec<Point<Real>>) -> (Vec<Point<Real>>, Vec<[u32; 2]>) {
    let indices = wall_outline_indices(vertices.len() / 2);
    (vertices, indices)
}
