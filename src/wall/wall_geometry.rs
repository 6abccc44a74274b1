use crate::geodesy::{Ellipsoid, Geodesy};
use crate::math::{Point, Real};
use crate::mesh::{Mesh, VertexFormat};
use crate::wall::builder::{self, wall_vertices};
use crate::wall::heights::{check_heights_len, resolve_heights};
use crate::wall::outline::wall_outline;
use crate::wall::sanitize::{remove_duplicates, SanitizedPositions};
use crate::wall::{ConstantHeightOptions, WallConfig, WallGeometryError, WallOptions};

/// A validated description of a wall, ready to be turned into a [`Mesh`] or an outline.
///
/// Construction only checks the shape of the input (positions present, height arrays of the
/// right length). Duplicate removal and the geometric computations happen in
/// [`WallGeometry::to_mesh`] and [`WallGeometry::to_outline`].
#[derive(Debug, Clone)]
pub struct WallGeometry<G = Ellipsoid> {
    positions: Vec<Point<Real>>,
    minimum_heights: Option<Vec<Real>>,
    maximum_heights: Option<Vec<Real>>,
    vertex_format: VertexFormat,
    geodesy: G,
    config: WallConfig,
}

impl<G: Geodesy> WallGeometry<G> {
    /// Describes a wall following `positions`, with optional per-position heights.
    ///
    /// Fails if `positions` is empty or has a single element, or if the explicit heights do not
    /// have one entry per position.
    pub fn new(
        positions: &[Point<Real>],
        options: WallOptions<G>,
    ) -> Result<Self, WallGeometryError> {
        validate(
            positions,
            options.minimum_heights.as_deref(),
            options.maximum_heights.as_deref(),
        )?;

        Ok(Self {
            positions: positions.to_vec(),
            minimum_heights: options.minimum_heights,
            maximum_heights: options.maximum_heights,
            vertex_format: options.vertex_format | VertexFormat::POSITION,
            geodesy: options.geodesy,
            config: options.config,
        })
    }

    /// Describes a wall following `positions`, with the same bottom and top heights everywhere.
    ///
    /// This is equivalent to [`WallGeometry::new`] with the constant heights repeated for every
    /// position.
    pub fn from_constant_heights(
        positions: &[Point<Real>],
        options: ConstantHeightOptions<G>,
    ) -> Result<Self, WallGeometryError> {
        if positions.is_empty() {
            return Err(WallGeometryError::MissingPositions);
        }

        Self::new(positions, options.broadcast(positions.len()))
    }

    /// The positions of this wall, as given to the constructor.
    #[inline]
    pub fn positions(&self) -> &[Point<Real>] {
        &self.positions
    }

    /// The explicit bottom heights of this wall, if any.
    #[inline]
    pub fn minimum_heights(&self) -> Option<&[Real]> {
        self.minimum_heights.as_deref()
    }

    /// The explicit top heights of this wall, if any.
    #[inline]
    pub fn maximum_heights(&self) -> Option<&[Real]> {
        self.maximum_heights.as_deref()
    }

    /// The vertex attributes generated by [`WallGeometry::to_mesh`].
    #[inline]
    pub fn vertex_format(&self) -> VertexFormat {
        self.vertex_format
    }

    /// The reference surface this wall stands on.
    #[inline]
    pub fn geodesy(&self) -> &G {
        &self.geodesy
    }

    /// The tunable constants used by this wall.
    #[inline]
    pub fn config(&self) -> &WallConfig {
        &self.config
    }

    /// Resolves the heights of every position, then merges consecutive duplicates.
    pub fn sanitized_positions(&self) -> Result<SanitizedPositions, WallGeometryError> {
        sanitize(
            &self.positions,
            self.minimum_heights.as_deref(),
            self.maximum_heights.as_deref(),
            &self.geodesy,
            &self.config,
        )
    }

    /// Generates the triangle mesh of this wall.
    pub fn to_mesh(&self) -> Result<Mesh, WallGeometryError> {
        let sanitized = self.sanitized_positions()?;
        builder::build_wall_mesh(
            &sanitized.positions,
            &sanitized.heights,
            self.vertex_format,
            &self.geodesy,
        )
    }

    /// Outlines this wall using line segments.
    ///
    /// The vertices are the same as the positions of [`WallGeometry::to_mesh`].
    pub fn to_outline(&self) -> Result<(Vec<Point<Real>>, Vec<[u32; 2]>), WallGeometryError> {
        let sanitized = self.sanitized_positions()?;
        let vertices = wall_vertices(&sanitized.positions, &sanitized.heights, &self.geodesy)?;
        Ok(wall_outline(vertices))
    }
}

fn validate(
    positions: &[Point<Real>],
    minimum_heights: Option<&[Real]>,
    maximum_heights: Option<&[Real]>,
) -> Result<(), WallGeometryError> {
    if positions.is_empty() {
        return Err(WallGeometryError::MissingPositions);
    }

    check_heights_len(positions.len(), minimum_heights, maximum_heights)?;

    if positions.len() < 2 {
        return Err(WallGeometryError::NotEnoughPositions(positions.len()));
    }

    Ok(())
}

fn sanitize<G: Geodesy>(
    positions: &[Point<Real>],
    minimum_heights: Option<&[Real]>,
    maximum_heights: Option<&[Real]>,
    geodesy: &G,
    config: &WallConfig,
) -> Result<SanitizedPositions, WallGeometryError> {
    let heights = resolve_heights(positions, minimum_heights, maximum_heights, geodesy, config)?;
    remove_duplicates(positions, &heights, geodesy, config.duplicate_tolerance)
}

/// Generates the triangle mesh of a wall following `positions`.
///
/// This validates the input like [`WallGeometry::new`] then generates the mesh like
/// [`WallGeometry::to_mesh`], without copying the input.
pub fn create_wall<G: Geodesy>(
    positions: &[Point<Real>],
    options: &WallOptions<G>,
) -> Result<Mesh, WallGeometryError> {
    let minimum_heights = options.minimum_heights.as_deref();
    let maximum_heights = options.maximum_heights.as_deref();

    validate(positions, minimum_heights, maximum_heights)?;
    let sanitized = sanitize(
        positions,
        minimum_heights,
        maximum_heights,
        &options.geodesy,
        &options.config,
    )?;

    builder::build_wall_mesh(
        &sanitized.positions,
        &sanitized.heights,
        options.vertex_format,
        &options.geodesy,
    )
}

/// Generates the triangle mesh of a wall with the same bottom and top heights everywhere.
pub fn create_wall_from_constant_heights<G: Geodesy + Clone>(
    positions: &[Point<Real>],
    options: &ConstantHeightOptions<G>,
) -> Result<Mesh, WallGeometryError> {
    if positions.is_empty() {
        return Err(WallGeometryError::MissingPositions);
    }

    create_wall(positions, &options.clone().broadcast(positions.len()))
}
