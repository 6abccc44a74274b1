use geowall::bounding_volume::BoundingSphere;
use geowall::geodesy::{Cartographic, Ellipsoid};
use geowall::mesh::{Mesh, TangentFrame, VertexAttributes, VertexFormat};
use geowall::wall::{HeightPair, WallConfig};
use serde::de::DeserializeOwned;
use serde::Serialize;

fn assert_serializable<T: Serialize + DeserializeOwned>() {}

#[test]
fn public_data_is_serializable() {
    assert_serializable::<Cartographic>();
    assert_serializable::<Ellipsoid>();
    assert_serializable::<VertexFormat>();
    assert_serializable::<TangentFrame>();
    assert_serializable::<VertexAttributes>();
    assert_serializable::<Mesh>();
    assert_serializable::<BoundingSphere>();
    assert_serializable::<HeightPair>();
    assert_serializable::<WallConfig>();
}
