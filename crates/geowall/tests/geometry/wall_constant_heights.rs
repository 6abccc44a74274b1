use crate::common::{vertex_height, wgs84_positions};
use geowall::mesh::VertexFormat;
use geowall::wall::{
    create_wall, create_wall_from_constant_heights, ConstantHeightOptions, WallGeometry,
    WallOptions,
};

#[test]
fn constant_minimum_and_maximum_heights() {
    let positions = wgs84_positions(&[(49.0, 18.0, 1000.0), (50.0, 18.0, 1000.0)]);
    let (min, max) = (1000.0, 2000.0);
    let options = ConstantHeightOptions {
        vertex_format: VertexFormat::POSITION_ONLY,
        minimum_height: Some(min),
        maximum_height: Some(max),
        ..ConstantHeightOptions::default()
    };
    let mesh = WallGeometry::from_constant_heights(&positions, options)
        .unwrap()
        .to_mesh()
        .unwrap();
    let buffer = &mesh.attributes.positions;

    assert_eq!(buffer.len(), 2 * 2 * 3);
    assert_eq!(mesh.indices.len(), 2 * 3);
    assert!(relative_eq!(vertex_height(buffer, 0), max, epsilon = 1.0e-7));
    assert!(relative_eq!(vertex_height(buffer, 1), min, epsilon = 1.0e-7));
    assert!(relative_eq!(vertex_height(buffer, 2), max, epsilon = 1.0e-7));
    assert!(relative_eq!(vertex_height(buffer, 3), min, epsilon = 1.0e-7));
}

#[test]
fn constant_heights_match_broadcast_heights() {
    let positions = wgs84_positions(&[
        (49.0, 18.0, 1000.0),
        (50.0, 18.5, 1000.0),
        (50.0, 18.5, 3000.0),
        (51.0, 19.0, 1000.0),
    ]);

    for (min, max) in [(Some(10.0), Some(20.0)), (None, Some(20.0)), (Some(10.0), None)] {
        let constant = ConstantHeightOptions {
            vertex_format: VertexFormat::ALL,
            minimum_height: min,
            maximum_height: max,
            ..ConstantHeightOptions::default()
        };
        let broadcast = WallOptions {
            vertex_format: VertexFormat::ALL,
            minimum_heights: min.map(|h| vec![h; positions.len()]),
            maximum_heights: max.map(|h| vec![h; positions.len()]),
            ..WallOptions::default()
        };

        assert_eq!(
            create_wall_from_constant_heights(&positions, &constant).unwrap(),
            create_wall(&positions, &broadcast).unwrap()
        );
    }
}
