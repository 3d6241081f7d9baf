mod strip_mesh;
mod tessellate_stroke;

pub use strip_mesh::StripMesh;
pub use tessellate_stroke::TessellateStroke;

use crate::math::Point3;

/// Primitive topology of a [`Mesh`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PrimitiveMode {
    /// Every vertex after the first two forms a triangle with the previous two.
    #[default]
    TriangleStrip,
    /// Each consecutive vertex triple is an independent triangle.
    Triangles,
}

/// An unindexed mesh: ordered vertex positions plus a primitive mode.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    /// Vertex positions.
    pub vertices: Vec<Point3>,
    /// How consecutive vertices are assembled into triangles.
    pub mode: PrimitiveMode,
}

impl Mesh {
    /// Appends a vertex.
    pub fn add_vertex(&mut self, vertex: Point3) {
        self.vertices.push(vertex);
    }

    /// Sets the primitive mode.
    pub fn set_mode(&mut self, mode: PrimitiveMode) {
        self.mode = mode;
    }

    /// Removes all vertices.
    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    /// Number of triangles described by the vertices under the current mode.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        let n = self.vertices.len();
        match self.mode {
            PrimitiveMode::TriangleStrip => n.saturating_sub(2),
            PrimitiveMode::Triangles => n / 3,
        }
    }

    /// Expands the mesh into explicit triangles.
    ///
    /// Strip triangles alternate winding so that every triangle keeps the
    /// orientation of the first.
    #[must_use]
    pub fn triangles(&self) -> Vec<[Point3; 3]> {
        let v = &self.vertices;
        match self.mode {
            PrimitiveMode::TriangleStrip => (0..self.triangle_count())
                .map(|i| {
                    if i % 2 == 0 {
                        [v[i], v[i + 1], v[i + 2]]
                    } else {
                        [v[i + 1], v[i], v[i + 2]]
                    }
                })
                .collect(),
            PrimitiveMode::Triangles => v.chunks_exact(3).map(|t| [t[0], t[1], t[2]]).collect(),
        }
    }
}
