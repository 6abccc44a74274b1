use crate::common::wgs84_positions;
use geowall::mesh::VertexFormat;
use geowall::wall::{
    create_wall, ConstantHeightOptions, WallGeometry, WallGeometryError, WallOptions,
};

fn position_only() -> WallOptions {
    WallOptions {
        vertex_format: VertexFormat::POSITION_ONLY,
        ..WallOptions::default()
    }
}

#[test]
fn wall_without_positions() {
    assert_eq!(
        WallGeometry::new(&[], WallOptions::default()).unwrap_err(),
        WallGeometryError::MissingPositions
    );
    assert_eq!(
        create_wall(&[], &WallOptions::default()).unwrap_err(),
        WallGeometryError::MissingPositions
    );
}

#[test]
fn constant_heights_without_positions() {
    assert_eq!(
        WallGeometry::from_constant_heights(&[], ConstantHeightOptions::default()).unwrap_err(),
        WallGeometryError::MissingPositions
    );
}

#[test]
fn minimum_heights_length_mismatch() {
    let positions = wgs84_positions(&[(49.0, 18.0, 1000.0), (50.0, 18.0, 1000.0)]);
    let options = WallOptions {
        minimum_heights: Some(vec![0.0; 3]),
        ..WallOptions::default()
    };

    assert_eq!(
        WallGeometry::new(&positions, options).unwrap_err(),
        WallGeometryError::MinimumHeightsLengthMismatch {
            positions: 2,
            heights: 3
        }
    );
}

#[test]
fn maximum_heights_length_mismatch() {
    let positions = wgs84_positions(&[(49.0, 18.0, 1000.0), (50.0, 18.0, 1000.0)]);
    let options = WallOptions {
        maximum_heights: Some(vec![0.0; 3]),
        ..WallOptions::default()
    };

    assert_eq!(
        create_wall(&positions, &options).unwrap_err(),
        WallGeometryError::MaximumHeightsLengthMismatch {
            positions: 2,
            heights: 3
        }
    );
}

#[test]
fn wall_with_a_single_position() {
    let positions = wgs84_positions(&[(49.0, 18.0, 1000.0)]);

    assert_eq!(
        create_wall(&positions, &position_only()).unwrap_err(),
        WallGeometryError::NotEnoughPositions(1)
    );
}

#[test]
fn wall_with_a_single_unique_position() {
    let positions = wgs84_positions(&[
        (49.0, 18.0, 1000.0),
        (49.0, 18.0, 5000.0),
        (49.0, 18.0, 1000.0),
    ]);

    let geometry = WallGeometry::new(&positions, position_only()).unwrap();
    assert_eq!(
        geometry.to_mesh().unwrap_err(),
        WallGeometryError::NotEnoughUniquePositions(1)
    );
    assert_eq!(
        geometry.to_outline().unwrap_err(),
        WallGeometryError::NotEnoughUniquePositions(1)
    );
}

#[test]
fn unique_but_close_positions() {
    let positions = wgs84_positions(&[
        (-47.93121266896352, -15.771192496304398, 0.0),
        (-47.93119792786269, -15.771148001875085, 0.0),
    ]);

    let mesh = create_wall(&positions, &position_only()).unwrap();
    assert_eq!(mesh.num_vertices(), 4);
    assert_eq!(mesh.num_triangles(), 2);
}

#[test]
fn position_at_the_center_of_the_ellipsoid() {
    let mut positions = wgs84_positions(&[(49.0, 18.0, 1000.0), (50.0, 18.0, 1000.0)]);
    positions.push(na::Point3::origin());

    assert_eq!(
        create_wall(&positions, &position_only()).unwrap_err(),
        WallGeometryError::DegeneratePosition(2)
    );
}
