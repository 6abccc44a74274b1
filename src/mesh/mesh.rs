use crate::bounding_volume::BoundingSphere;
use crate::math::{Point, Real};
use crate::mesh::{VertexAttributes, VertexFormat};

/// A triangle mesh made of flat vertex buffers and a flat index buffer.
///
/// Triangles are listed as consecutive index triples and are counter-clockwise when seen from
/// the side their vertex normals point to.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Clone)]
pub struct Mesh {
    /// The vertex buffers.
    pub attributes: VertexAttributes,
    /// The index buffer, three indices per triangle.
    pub indices: Vec<u32>,
    /// A sphere enclosing every vertex.
    pub bounding_sphere: BoundingSphere,
}

impl Mesh {
    /// The number of vertices of this mesh.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.attributes.num_vertices()
    }

    /// The number of triangles of this mesh.
    #[inline]
    pub fn num_triangles(&self) -> usize {
        self.indices.len() / 3
    }

    /// The set of attribute buffers present on this mesh.
    #[inline]
    pub fn vertex_format(&self) -> VertexFormat {
        self.attributes.vertex_format()
    }

    /// The vertex positions of this mesh, as points.
    pub fn vertices(&self) -> Vec<Point<Real>> {
        self.attributes
            .positions
            .chunks_exact(3)
            .map(Point::from_slice)
            .collect()
    }

    /// Iterates through the index triples of this mesh.
    pub fn triangles(&self) -> impl ExactSizeIterator<Item = [u32; 3]> + '_ {
        self.indices
            .chunks_exact(3)
            .map(|tri| [tri[0], tri[1], tri[2]])
    }

    /// Converts this mesh into a vertex buffer and an index buffer made of triangles.
    ///
    /// Every attribute other than positions is dropped.
    pub fn to_trimesh(&self) -> (Vec<Point<Real>>, Vec<[u32; 3]>) {
        (self.vertices(), self.triangles().collect())
    }
}
