/// Selects the vertex attributes computed for a generated mesh.
///
/// Positions are always computed: [`VertexFormat::POSITION`] is part of every preset and is
/// forced on by the mesh builders.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[repr(C)]
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct VertexFormat(u8);

bitflags::bitflags! {
    impl VertexFormat: u8 {
        /// 3D positions.
        const POSITION = 1;
        /// Unit normals, pointing out of the front face of the wall.
        const NORMAL = 1 << 1;
        /// Unit tangents, following the horizontal direction of the wall.
        const TANGENT = 1 << 2;
        /// Unit binormals, following the local vertical from bottom to top.
        const BINORMAL = 1 << 3;
        /// 2D texture coordinates.
        const ST = 1 << 4;

        /// Positions only.
        const POSITION_ONLY = Self::POSITION.bits();
        /// Positions and normals.
        const POSITION_AND_NORMAL = Self::POSITION.bits() | Self::NORMAL.bits();
        /// Positions and texture coordinates.
        const POSITION_AND_ST = Self::POSITION.bits() | Self::ST.bits();
        /// Positions, normals and texture coordinates.
        const POSITION_NORMAL_AND_ST = Self::POSITION_AND_NORMAL.bits() | Self::ST.bits();
        /// Every supported attribute.
        const ALL = Self::POSITION_NORMAL_AND_ST.bits() | Self::TANGENT.bits() | Self::BINORMAL.bits();
    }
}

impl Default for VertexFormat {
    fn default() -> Self {
        Self::POSITION_NORMAL_AND_ST
    }
}

impl VertexFormat {
    /// Does this format require the tangent frame (normal, tangent or binormal) of each vertex?
    #[inline]
    pub fn needs_tangent_frame(self) -> bool {
        self.intersects(Self::NORMAL | Self::TANGENT | Self::BINORMAL)
    }
}
