//! Generation of the vertices and triangles of a wall.
//!
//! Each sanitized position `i` contributes two vertices: the top of the wall at index `2i` and
//! its bottom at index `2i + 1`. Every pair of consecutive positions forms a [`WallSegment`],
//! covered by two triangles.
//!
//! The vertex attributes are computed by independent stages, each selected by a
//! [`VertexFormat`] flag:
//!
//! | Stage                   | Output                               | Flags                            |
//! |-------------------------|--------------------------------------|----------------------------------|
//! | [`wall_vertices`]       | top and bottom positions             | always                           |
//! | [`wall_tangent_frames`] | normal, tangent, binormal            | `NORMAL`, `TANGENT`, `BINORMAL`  |
//! | [`wall_texture_coords`] | `s` along the wall, `t` bottom → top | `ST`                             |
//! | [`wall_indices`]        | triangle indices                     | always                           |
//!
//! # Orientation
//!
//! The normal of position `i` is `d × u`, where `u` is the local vertical (the normal of the
//! reference surface) and `d` the horizontal direction of the wall. The binormal is `u` and the
//! tangent is `d` made orthogonal to `u`, so `tangent × binormal = normal`. Triangles are
//! counter-clockwise when seen from the side the normals point to, as long as the top of the
//! wall is above its bottom.

use crate::bounding_volume::BoundingSphere;
use crate::geodesy::Geodesy;
use crate::math::{Point, Real, UnitVector, Vector, DEFAULT_EPSILON};
use crate::mesh::{Mesh, TangentFrame, VertexAttributes, VertexFormat};
use crate::wall::heights::check_height_pairs_len;
use crate::wall::{HeightPair, WallGeometryError};
use na::{Point2, Unit};

/// Two consecutive sanitized positions, projected on the reference surface.
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct WallSegment {
    /// The index of the first position of this segment.
    pub index: usize,
    /// The projection of the first position on the reference surface.
    pub start: Point<Real>,
    /// The projection of the second position on the reference surface.
    pub end: Point<Real>,
}

impl WallSegment {
    /// The length of this segment.
    #[inline]
    pub fn length(&self) -> Real {
        na::distance(&self.start, &self.end)
    }

    /// The unit direction from `self.start` toward `self.end`.
    ///
    /// Returns `None` if both points are equal.
    #[inline]
    pub fn direction(&self) -> Option<UnitVector<Real>> {
        Unit::try_new(self.end - self.start, DEFAULT_EPSILON)
    }

    /// The two triangles covering this segment.
    #[inline]
    pub fn triangles(&self) -> [[u32; 3]; 2] {
        segment_triangles(self.index)
    }
}

/// The two triangles covering the segment starting at the `index`-th position.
#[inline]
pub fn segment_triangles(index: usize) -> [[u32; 3]; 2] {
    let top = index as u32 * 2;
    let bottom = top + 1;
    let next_top = top + 2;
    let next_bottom = top + 3;

    [[top, bottom, next_top], [bottom, next_bottom, next_top]]
}

/// The projection of one sanitized position on the reference surface, with the local vertical.
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct SurfacePoint {
    /// The projection on the reference surface.
    pub point: Point<Real>,
    /// The normal of the reference surface at `self.point`.
    pub up: UnitVector<Real>,
}

/// Projects every position on the reference surface.
pub fn surface_points<G: Geodesy>(
    positions: &[Point<Real>],
    geodesy: &G,
) -> Result<Vec<SurfacePoint>, WallGeometryError> {
    positions
        .iter()
        .enumerate()
        .map(|(i, pt)| {
            geodesy
                .scale_to_geodetic_surface(pt)
                .and_then(|point| {
                    let up = geodesy.geodetic_surface_normal(&point)?;
                    Some(SurfacePoint { point, up })
                })
                .ok_or(WallGeometryError::DegeneratePosition(i))
        })
        .collect()
}

/// Iterates through the segments joining consecutive surface points.
pub fn wall_segments(surface: &[SurfacePoint]) -> impl Iterator<Item = WallSegment> + '_ {
    surface
        .windows(2)
        .enumerate()
        .map(|(index, pts)| WallSegment {
            index,
            start: pts[0].point,
            end: pts[1].point,
        })
}

/// Computes the top and bottom vertices of every position: `[top0, bottom0, top1, bottom1, …]`.
pub fn wall_vertices<G: Geodesy>(
    positions: &[Point<Real>],
    heights: &[HeightPair],
    geodesy: &G,
) -> Result<Vec<Point<Real>>, WallGeometryError> {
    let mut vertices = Vec::with_capacity(positions.len() * 2);

    for (i, (pt, h)) in positions.iter().zip(heights.iter()).enumerate() {
        let top = geodesy.offset_along_normal(pt, h.maximum);
        let bottom = geodesy.offset_along_normal(pt, h.minimum);

        match (top, bottom) {
            (Some(top), Some(bottom)) => {
                vertices.push(top);
                vertices.push(bottom);
            }
            _ => return Err(WallGeometryError::DegeneratePosition(i)),
        }
    }

    Ok(vertices)
}

/// Computes the tangent frame shared by the top and bottom vertices of every position.
///
/// The horizontal direction of the wall is taken from the first segment at the first position,
/// from the last segment at the last position, and from the average of both adjacent segments
/// elsewhere. The result has two identical entries per position, one for each vertex.
pub fn wall_tangent_frames(surface: &[SurfacePoint]) -> Vec<TangentFrame> {
    let directions: Vec<_> = wall_segments(surface)
        .map(|seg| seg.direction())
        .collect();
    let mut frames = Vec::with_capacity(surface.len() * 2);

    for (i, pt) in surface.iter().enumerate() {
        let incoming = i.checked_sub(1).and_then(|j| directions[j]);
        let outgoing = directions.get(i).copied().flatten();

        let direction = match (incoming, outgoing) {
            (Some(a), Some(b)) => Unit::try_new(a.into_inner() + b.into_inner(), DEFAULT_EPSILON)
                .unwrap_or(b)
                .into_inner(),
            (Some(d), None) | (None, Some(d)) => d.into_inner(),
            (None, None) => Vector::zeros(),
        };

        let frame = tangent_frame(&direction, &pt.up);
        frames.push(frame);
        frames.push(frame);
    }

    frames
}

/// Builds the frame with the binormal along `up` and the tangent along the part of `direction`
/// orthogonal to `up`.
fn tangent_frame(direction: &Vector<Real>, up: &UnitVector<Real>) -> TangentFrame {
    let up = up.into_inner();
    let horizontal = direction - up * direction.dot(&up);
    let tangent = Unit::try_new(horizontal, DEFAULT_EPSILON)
        .map(Unit::into_inner)
        .unwrap_or_else(|| any_orthogonal(&up));
    let normal = tangent.cross(&up).normalize();

    TangentFrame {
        normal,
        tangent,
        binormal: up,
    }
}

/// A unit vector orthogonal to `up`.
fn any_orthogonal(up: &Vector<Real>) -> Vector<Real> {
    let axis = if up.x.abs() < 0.9 {
        Vector::x()
    } else {
        Vector::y()
    };
    up.cross(&axis).normalize()
}

/// Computes the texture coordinates of every vertex.
///
/// `s` grows with the distance traveled along the surface points, from 0 at the first position
/// to 1 at the last. `t` is 1 on top vertices and 0 on bottom vertices.
pub fn wall_texture_coords(surface: &[SurfacePoint]) -> Vec<Point2<Real>> {
    let mut distances = Vec::with_capacity(surface.len());
    distances.push(0.0);

    for seg in wall_segments(surface) {
        distances.push(distances[seg.index] + seg.length());
    }

    let total = distances.last().copied().unwrap_or(0.0);
    let last = surface.len().saturating_sub(1).max(1) as Real;
    let mut st = Vec::with_capacity(surface.len() * 2);

    for (i, distance) in distances.iter().enumerate() {
        let s = if total > DEFAULT_EPSILON {
            distance / total
        } else {
            i as Real / last
        };

        st.push(Point2::new(s, 1.0));
        st.push(Point2::new(s, 0.0));
    }

    st
}

/// Computes the flat triangle index buffer: two triangles per segment.
pub fn wall_indices(num_positions: usize) -> Vec<u32> {
    let num_segments = num_positions.saturating_sub(1);
    let mut indices = Vec::with_capacity(num_segments * 6);

    for index in 0..num_segments {
        for tri in segment_triangles(index) {
            indices.extend_from_slice(&tri);
        }
    }

    indices
}

/// Builds the mesh of a wall from sanitized positions and their resolved heights.
///
/// `positions` must not contain consecutive duplicates, see
/// [`remove_duplicates`](crate::wall::sanitize::remove_duplicates).
///
/// Fails if `heights` and `positions` have different lengths.
pub fn build_wall_mesh<G: Geodesy>(
    positions: &[Point<Real>],
    heights: &[HeightPair],
    vertex_format: VertexFormat,
    geodesy: &G,
) -> Result<Mesh, WallGeometryError> {
    check_height_pairs_len(positions, heights)?;

    match positions.len() {
        0 => return Err(WallGeometryError::MissingPositions),
        1 => return Err(WallGeometryError::NotEnoughUniquePositions(1)),
        _ => {}
    }

    let vertex_format = vertex_format | VertexFormat::POSITION;
    let vertices = wall_vertices(positions, heights, geodesy)?;

    let needs_surface =
        vertex_format.needs_tangent_frame() || vertex_format.contains(VertexFormat::ST);
    let surface = if needs_surface {
        surface_points(positions, geodesy)?
    } else {
        Vec::new()
    };

    let frames = if vertex_format.needs_tangent_frame() {
        wall_tangent_frames(&surface)
    } else {
        Vec::new()
    };
    let st = if vertex_format.contains(VertexFormat::ST) {
        wall_texture_coords(&surface)
    } else {
        Vec::new()
    };

    let attributes = VertexAttributes::assemble(vertex_format, &vertices, &frames, &st);
    let indices = wall_indices(positions.len());
    let bounding_sphere =
        BoundingSphere::from_points(&vertices).ok_or(WallGeometryError::MissingPositions)?;

    log::debug!(
        "Generated a wall with {} vertices and {} triangles ({:?}).",
        vertices.len(),
        indices.len() / 3,
        vertex_format
    );

    Ok(Mesh {
        attributes,
        indices,
        bounding_sphere,
    })
}
