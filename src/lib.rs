/*!
geowall
========

**geowall** builds triangulated wall meshes: vertical ribbons of quads following a
path of positions on a reference ellipsoid, extruded between a minimum and a
maximum height.

```
use geowall::geodesy::{Cartographic, Ellipsoid, Geodesy};
use geowall::mesh::VertexFormat;
use geowall::wall::{create_wall, WallOptions};

let ellipsoid = Ellipsoid::WGS84;
let positions: Vec<_> = [
    Cartographic::from_degrees(49.0, 18.0, 1000.0),
    Cartographic::from_degrees(50.0, 18.0, 1000.0),
]
.iter()
.map(|c| ellipsoid.cartographic_to_cartesian(c))
.collect();

let options = WallOptions {
    vertex_format: VertexFormat::POSITION_ONLY,
    ..WallOptions::default()
};
let mesh = create_wall(&positions, &options).unwrap();

assert_eq!(mesh.attributes.positions.len(), 2 * 2 * 3);
assert_eq!(mesh.indices.len(), 2 * 3);
```
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::too_many_arguments)] // Maybe revisit this one later.
#![allow(clippy::module_inception)]
#![doc(html_root_url = "http://docs.rs/geowall/0.1.0")]

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
#[cfg_attr(test, macro_use)]
extern crate approx;

pub extern crate nalgebra as na;

pub mod bounding_volume;
pub mod geodesy;
pub mod mesh;
pub mod utils;
pub mod wall;

/// Aliases for the mathematical types used throughout this crate.
pub mod math {
    pub use na::{Point3, UnitVector3, Vector3};

    /// The scalar type used throughout this crate.
    pub use f64 as Real;

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The dimension of the space.
    pub const DIM: usize = 3;

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;

    /// The unit vector type.
    pub use UnitVector3 as UnitVector;
}
