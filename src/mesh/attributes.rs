use crate::mesh::VertexFormat;
use crate::math::{Point, Real, Vector};
use na::Point2;

/// The normal, tangent and binormal of a vertex.
///
/// The frame is right-handed: `tangent × binormal = normal`.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct TangentFrame {
    /// The unit normal.
    pub normal: Vector<Real>,
    /// The unit tangent.
    pub tangent: Vector<Real>,
    /// The unit binormal.
    pub binormal: Vector<Real>,
}

/// Flat, non-interleaved vertex buffers.
///
/// Every buffer holds one tuple per vertex: 3 components for positions, normals, tangents and
/// binormals, 2 for texture coordinates. Attributes missing from the [`VertexFormat`] used to
/// assemble the buffers are `None`.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Clone, Default)]
pub struct VertexAttributes {
    /// The vertex positions.
    pub positions: Vec<Real>,
    /// The vertex normals.
    pub normals: Option<Vec<Real>>,
    /// The vertex tangents.
    pub tangents: Option<Vec<Real>>,
    /// The vertex binormals.
    pub binormals: Option<Vec<Real>>,
    /// The vertex texture coordinates.
    pub st: Option<Vec<Real>>,
}

impl VertexAttributes {
    /// Packs per-vertex data into flat buffers, in the order
    /// `position, normal, tangent, binormal, st`.
    ///
    /// `frames` and `st` are only read when `format` requests the corresponding attributes; they
    /// may be left empty otherwise. When read, they must have one entry per position.
    pub fn assemble(
        format: VertexFormat,
        positions: &[Point<Real>],
        frames: &[TangentFrame],
        st: &[Point2<Real>],
    ) -> Self {
        let num_vertices = positions.len();

        if format.needs_tangent_frame() {
            debug_assert_eq!(frames.len(), num_vertices);
        }
        if format.contains(VertexFormat::ST) {
            debug_assert_eq!(st.len(), num_vertices);
        }

        let pack_frames = |flag: VertexFormat, component: fn(&TangentFrame) -> &Vector<Real>| {
            format
                .contains(flag)
                .then(|| flatten(frames.iter().map(|f| component(f).as_slice()), 3))
        };

        Self {
            positions: flatten(positions.iter().map(|p| p.coords.as_slice()), 3),
            normals: pack_frames(VertexFormat::NORMAL, |f| &f.normal),
            tangents: pack_frames(VertexFormat::TANGENT, |f| &f.tangent),
            binormals: pack_frames(VertexFormat::BINORMAL, |f| &f.binormal),
            st: format
                .contains(VertexFormat::ST)
                .then(|| flatten(st.iter().map(|uv| uv.coords.as_slice()), 2)),
        }
    }

    /// The number of vertices stored in these buffers.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.positions.len() / 3
    }

    /// The vertex format these buffers were assembled with.
    pub fn vertex_format(&self) -> VertexFormat {
        let mut format = VertexFormat::POSITION;
        format.set(VertexFormat::NORMAL, self.normals.is_some());
        format.set(VertexFormat::TANGENT, self.tangents.is_some());
        format.set(VertexFormat::BINORMAL, self.binormals.is_some());
        format.set(VertexFormat::ST, self.st.is_some());
        format
    }

    /// The position of the `i`-th vertex.
    #[inline]
    pub fn position(&self, i: usize) -> Point<Real> {
        Point::from_slice(&self.positions[i * 3..i * 3 + 3])
    }

    /// The normal of the `i`-th vertex, if normals were assembled.
    #[inline]
    pub fn normal(&self, i: usize) -> Option<Vector<Real>> {
        self.normals
            .as_ref()
            .map(|n| Vector::from_column_slice(&n[i * 3..i * 3 + 3]))
    }

    /// The tangent of the `i`-th vertex, if tangents were assembled.
    #[inline]
    pub fn tangent(&self, i: usize) -> Option<Vector<Real>> {
        self.tangents
            .as_ref()
            .map(|t| Vector::from_column_slice(&t[i * 3..i * 3 + 3]))
    }

    /// The binormal of the `i`-th vertex, if binormals were assembled.
    #[inline]
    pub fn binormal(&self, i: usize) -> Option<Vector<Real>> {
        self.binormals
            .as_ref()
            .map(|b| Vector::from_column_slice(&b[i * 3..i * 3 + 3]))
    }

    /// The texture coordinates of the `i`-th vertex, if they were assembled.
    #[inline]
    pub fn texture_coordinates(&self, i: usize) -> Option<Point2<Real>> {
        self.st
            .as_ref()
            .map(|st| Point2::new(st[i * 2], st[i * 2 + 1]))
    }
}

fn flatten<'a>(tuples: impl ExactSizeIterator<Item = &'a [Real]>, dim: usize) -> Vec<Real> {
    let mut result = Vec::with_capacity(tuples.len() * dim);

    for tuple in tuples {
        result.extend_from_slice(tuple);
    }

    result
}
