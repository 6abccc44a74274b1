use crate::common::wgs84_positions;
use geowall::math::{Point, Real};
use geowall::mesh::{Mesh, VertexFormat};
use geowall::wall::{create_wall, WallGeometry, WallOptions};

struct RandomWall {
    positions: Vec<Point<Real>>,
    minimum_heights: Vec<Real>,
    maximum_heights: Vec<Real>,
}

/// A random walk on the ellipsoid, turning by less than 60° at each step.
fn random_wall(rng: &mut oorandom::Rand64) -> RandomWall {
    let n = rng.rand_range(2..24) as usize;
    let mut lon = rng.rand_float() * 340.0 - 170.0;
    let mut lat = rng.rand_float() * 100.0 - 50.0;
    let mut heading = rng.rand_float() * core::f64::consts::TAU;
    let mut coords = Vec::with_capacity(n);
    let mut minimum_heights = Vec::with_capacity(n);
    let mut maximum_heights = Vec::with_capacity(n);

    for _ in 0..n {
        coords.push((lon, lat, 0.0));

        let minimum = rng.rand_float() * 500.0;
        minimum_heights.push(minimum);
        maximum_heights.push(minimum + 10.0 + rng.rand_float() * 2000.0);

        let step = 0.001 + rng.rand_float() * 0.5;
        heading += (rng.rand_float() - 0.5) * core::f64::consts::FRAC_PI_3 * 2.0;
        lon += step * heading.cos();
        lat += step * heading.sin();
    }

    RandomWall {
        positions: wgs84_positions(&coords),
        minimum_heights,
        maximum_heights,
    }
}

fn options(wall: &RandomWall, vertex_format: VertexFormat) -> WallOptions {
    WallOptions {
        vertex_format,
        minimum_heights: Some(wall.minimum_heights.clone()),
        maximum_heights: Some(wall.maximum_heights.clone()),
        ..WallOptions::default()
    }
}

fn assert_ccw_from_the_front(mesh: &Mesh) {
    for [a, b, c] in mesh.triangles() {
        let (a, b, c) = (a as usize, b as usize, c as usize);
        let pa = mesh.attributes.position(a);
        let pb = mesh.attributes.position(b);
        let pc = mesh.attributes.position(c);
        let face_normal = (pb - pa).cross(&(pc - pa));
        let vertex_normal = mesh.attributes.normal(a).unwrap()
            + mesh.attributes.normal(b).unwrap()
            + mesh.attributes.normal(c).unwrap();

        assert!(
            face_normal.dot(&vertex_normal) > 0.0,
            "Triangle {:?} is clockwise when seen from its normals.",
            [a, b, c]
        );
    }
}

#[test]
fn random_walls_have_two_vertices_per_position() {
    let mut rng = oorandom::Rand64::new(42);

    for _ in 0..200 {
        let wall = random_wall(&mut rng);
        let n = wall.positions.len();
        let mesh = create_wall(&wall.positions, &options(&wall, VertexFormat::ALL)).unwrap();

        assert_eq!(mesh.attributes.positions.len(), 6 * n);
        assert_eq!(mesh.attributes.normals.as_ref().map(Vec::len), Some(6 * n));
        assert_eq!(mesh.attributes.st.as_ref().map(Vec::len), Some(4 * n));
        assert_eq!(mesh.indices.len(), 6 * (n - 1));
        assert!(mesh.indices.iter().all(|i| (*i as usize) < 2 * n));
    }
}

#[test]
fn random_walls_face_their_normals() {
    let mut rng = oorandom::Rand64::new(1234);

    for _ in 0..200 {
        let wall = random_wall(&mut rng);
        let mesh =
            create_wall(&wall.positions, &options(&wall, VertexFormat::POSITION_AND_NORMAL))
                .unwrap();

        assert_ccw_from_the_front(&mesh);
    }
}

#[test]
fn random_walls_texture_coordinates() {
    let mut rng = oorandom::Rand64::new(7);

    for _ in 0..200 {
        let wall = random_wall(&mut rng);
        let mesh =
            create_wall(&wall.positions, &options(&wall, VertexFormat::POSITION_AND_ST)).unwrap();
        let num_vertices = mesh.num_vertices();
        let mut previous_s = 0.0;

        for i in 0..num_vertices {
            let st = mesh.attributes.texture_coordinates(i).unwrap();
            assert!(st.x >= previous_s && st.x <= 1.0);
            assert_eq!(st.y, if i % 2 == 0 { 1.0 } else { 0.0 });
            previous_s = st.x;
        }

        assert_eq!(mesh.attributes.texture_coordinates(0).unwrap().x, 0.0);
        assert!(relative_eq!(
            mesh.attributes.texture_coordinates(num_vertices - 1).unwrap().x,
            1.0
        ));
    }
}

#[test]
fn random_walls_with_duplicates() {
    let mut rng = oorandom::Rand64::new(99);

    for _ in 0..100 {
        let wall = random_wall(&mut rng);
        let n = wall.positions.len();
        let mut noisy = RandomWall {
            positions: Vec::new(),
            minimum_heights: Vec::new(),
            maximum_heights: Vec::new(),
        };

        for i in 0..n {
            let copies = 1 + rng.rand_range(0..3) as usize;
            for _ in 0..copies {
                noisy.positions.push(wall.positions[i]);
                noisy.minimum_heights.push(wall.minimum_heights[i]);
                noisy.maximum_heights.push(wall.maximum_heights[i]);
            }
        }

        let clean = create_wall(&wall.positions, &options(&wall, VertexFormat::ALL)).unwrap();
        let deduplicated =
            create_wall(&noisy.positions, &options(&noisy, VertexFormat::ALL)).unwrap();

        assert_eq!(clean, deduplicated);
    }
}

#[test]
fn sanitizing_twice_changes_nothing() {
    let mut rng = oorandom::Rand64::new(2024);

    for _ in 0..100 {
        let wall = random_wall(&mut rng);
        let mut positions = wall.positions.clone();
        let mut min = wall.minimum_heights.clone();
        let mut max = wall.maximum_heights.clone();

        // Duplicate every other position, with different heights.
        for i in (0..wall.positions.len()).rev().step_by(2) {
            positions.insert(i, wall.positions[i]);
            min.insert(i, min[i] - 5.0);
            max.insert(i, max[i] + 5.0);
        }

        let once = WallGeometry::new(
            &positions,
            WallOptions {
                minimum_heights: Some(min),
                maximum_heights: Some(max),
                ..WallOptions::default()
            },
        )
        .unwrap()
        .sanitized_positions()
        .unwrap();

        let twice = WallGeometry::new(
            &once.positions,
            WallOptions {
                minimum_heights: Some(once.heights.iter().map(|h| h.minimum).collect()),
                maximum_heights: Some(once.heights.iter().map(|h| h.maximum).collect()),
                ..WallOptions::default()
            },
        )
        .unwrap()
        .sanitized_positions()
        .unwrap();

        assert_eq!(once, twice);
        assert_eq!(once.positions, wall.positions);
    }
}
