use crate::mesh::Mesh;
use obj::{Group, IndexTuple, ObjData, ObjError, Object, SimplePolygon};
use std::path::Path;

impl Mesh {
    /// Outputs a Wavefront (`.obj`) file at the given path.
    ///
    /// Normals and texture coordinates are written alongside positions when the mesh has them.
    ///
    /// This function is enabled by the `wavefront` feature flag.
    pub fn to_obj_file(&self, path: &Path) -> Result<(), ObjError> {
        let mut file = std::fs::File::create(path)?;
        self.to_obj_data().write_to_buf(&mut file)
    }

    fn to_obj_data(&self) -> ObjData {
        let has_normals = self.attributes.normals.is_some();
        let has_st = self.attributes.st.is_some();

        let vertex = |i: u32| {
            let i = i as usize;
            IndexTuple(i, has_st.then_some(i), has_normals.then_some(i))
        };

        ObjData {
            position: self
                .attributes
                .positions
                .chunks_exact(3)
                .map(|v| [v[0] as f32, v[1] as f32, v[2] as f32])
                .collect(),
            normal: self
                .attributes
                .normals
                .iter()
                .flat_map(|n| n.chunks_exact(3))
                .map(|n| [n[0] as f32, n[1] as f32, n[2] as f32])
                .collect(),
            texture: self
                .attributes
                .st
                .iter()
                .flat_map(|st| st.chunks_exact(2))
                .map(|st| [st[0] as f32, st[1] as f32])
                .collect(),
            objects: vec![Object {
                groups: vec![Group {
                    polys: self
                        .triangles()
                        .map(|tri| SimplePolygon(tri.iter().map(|i| vertex(*i)).collect()))
                        .collect(),
                    name: "wall".to_string(),
                    index: 0,
                    material: None,
                }],
                name: "wall".to_string(),
            }],
            ..Default::default()
        }
    }
}
