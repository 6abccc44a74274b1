use crate::geodesy::Ellipsoid;
use crate::math::Real;
use crate::mesh::VertexFormat;

/// Tunable constants of the wall construction.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct WallConfig {
    /// Two consecutive positions whose projections on the reference surface are within this
    /// distance are considered duplicates and merged.
    pub duplicate_tolerance: Real,
    /// When the maximum heights are omitted, the top of the wall is raised to at least this
    /// distance above its bottom.
    pub minimum_wall_height: Real,
}

impl WallConfig {
    /// The default value of [`WallConfig::duplicate_tolerance`], in metres.
    pub const DEFAULT_DUPLICATE_TOLERANCE: Real = 1.0e-4;
    /// The default value of [`WallConfig::minimum_wall_height`], in metres.
    pub const DEFAULT_MINIMUM_WALL_HEIGHT: Real = 1.0;
}

impl Default for WallConfig {
    fn default() -> Self {
        Self {
            duplicate_tolerance: Self::DEFAULT_DUPLICATE_TOLERANCE,
            minimum_wall_height: Self::DEFAULT_MINIMUM_WALL_HEIGHT,
        }
    }
}

/// Options of a wall built from per-position heights.
#[derive(Debug, Clone)]
pub struct WallOptions<G = Ellipsoid> {
    /// The vertex attributes to compute.
    pub vertex_format: VertexFormat,
    /// The height of the bottom of the wall at each position.
    ///
    /// If `None`, the bottom lies on the reference surface.
    pub minimum_heights: Option<Vec<Real>>,
    /// The height of the top of the wall at each position.
    ///
    /// If `None`, the top is at the geodetic height of each position.
    pub maximum_heights: Option<Vec<Real>>,
    /// The reference surface.
    pub geodesy: G,
    /// Tunable constants.
    pub config: WallConfig,
}

impl Default for WallOptions<Ellipsoid> {
    fn default() -> Self {
        Self {
            vertex_format: VertexFormat::default(),
            minimum_heights: None,
            maximum_heights: None,
            geodesy: Ellipsoid::WGS84,
            config: WallConfig::default(),
        }
    }
}

/// Options of a wall with the same bottom and top heights at every position.
#[derive(Debug, Clone)]
pub struct ConstantHeightOptions<G = Ellipsoid> {
    /// The vertex attributes to compute.
    pub vertex_format: VertexFormat,
    /// The height of the bottom of the wall. If `None`, the bottom lies on the reference surface.
    pub minimum_height: Option<Real>,
    /// The height of the top of the wall. If `None`, the top is at the geodetic height of each
    /// position.
    pub maximum_height: Option<Real>,
    /// The reference surface.
    pub geodesy: G,
    /// Tunable constants.
    pub config: WallConfig,
}

impl Default for ConstantHeightOptions<Ellipsoid> {
    fn default() -> Self {
        Self {
            vertex_format: VertexFormat::default(),
            minimum_height: None,
            maximum_height: None,
            geodesy: Ellipsoid::WGS84,
            config: WallConfig::default(),
        }
    }
}

impl<G> ConstantHeightOptions<G> {
    /// Broadcasts the constant heights to `num_positions` positions.
    pub fn broadcast(self, num_positions: usize) -> WallOptions<G> {
        WallOptions {
            vertex_format: self.vertex_format,
            minimum_heights: self.minimum_height.map(|h| vec![h; num_positions]),
            maximum_heights: self.maximum_height.map(|h| vec![h; num_positions]),
            geodesy: self.geodesy,
            config: self.config,
        }
    }
}
