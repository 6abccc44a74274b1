//! Construction of wall meshes.
//!
//! A wall is a vertical ribbon following a path of positions on a reference surface. At every
//! position it spans from a bottom (minimum) height to a top (maximum) height, both measured
//! along the local normal of the surface.
//!
//! Walls are built in three steps:
//! 1. [`heights::resolve_heights`] fills the bottom and top of each position, using the
//!    defaults described on [`WallOptions`] where heights are omitted.
//! 2. [`sanitize::remove_duplicates`] merges consecutive positions that coincide on the surface.
//! 3. [`builder::build_wall_mesh`] generates the requested vertex attributes and the triangles.
//!
//! [`create_wall`] runs all of them at once. [`WallGeometry`] keeps a validated description of
//! the wall around, from which a mesh or an outline can be generated.

pub use self::error::WallGeometryError;
pub use self::heights::HeightPair;
pub use self::options::{ConstantHeightOptions, WallConfig, WallOptions};
pub use self::wall_geometry::{create_wall, create_wall_from_constant_heights, WallGeometry};

pub mod builder;
pub mod heights;
pub mod outline;
pub mod sanitize;

mod error;
mod options;
mod wall_geometry;
