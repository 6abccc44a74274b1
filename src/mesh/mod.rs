//! Renderable triangle meshes with configurable vertex attributes.
//!
//! A [`Mesh`] is what the wall builders hand back to the caller: one flat buffer per requested
//! attribute (see [`VertexAttributes`]), a flat index buffer, and a bounding sphere. The set of
//! attribute buffers is controlled by a [`VertexFormat`]; attributes that were not requested are
//! never allocated.

pub use self::attributes::{TangentFrame, VertexAttributes};
pub use self::mesh::Mesh;
pub use self::vertex_format::VertexFormat;

mod attributes;
mod mesh;
mod vertex_format;
#[cfg(feature = "wavefront")]
mod wavefront;
