use tracing::debug;

use crate::error::{Result, TessellationError};
use crate::geometry::CurveSource;
use crate::operations::offset::{LengthPolicy, OffsetParams};

use super::{Mesh, PrimitiveMode};

/// Stitches two index-aligned rails into a ruled triangle strip.
///
/// Vertices are emitted in pairs, `rail0[j]` then `rail1[j]`. When `rail0`
/// is closed the first pair is emitted again at the end so the strip closes
/// on itself. Closedness of `rail1` is ignored.
///
/// Rails of different length are truncated to the shorter one.
#[derive(Debug)]
pub struct StripMesh<'a, A: CurveSource + ?Sized, B: CurveSource + ?Sized> {
    rail0: &'a A,
    rail1: &'a B,
    params: OffsetParams,
}

impl<'a, A: CurveSource + ?Sized, B: CurveSource + ?Sized> StripMesh<'a, A, B> {
    /// Creates a new strip meshing operation.
    #[must_use]
    pub fn new(rail0: &'a A, rail1: &'a B) -> Self {
        Self {
            rail0,
            rail1,
            params: OffsetParams::default(),
        }
    }

    /// Replaces the meshing parameters.
    #[must_use]
    pub fn with_params(mut self, params: OffsetParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the stitching, producing a new strip mesh.
    #[must_use]
    pub fn execute(&self) -> Mesh {
        let mut mesh = Mesh::default();
        self.execute_into(&mut mesh);
        mesh
    }

    /// Executes the stitching into `mesh`, discarding its previous contents.
    pub fn execute_into(&self, mesh: &mut Mesh) {
        mesh.clear();
        mesh.set_mode(PrimitiveMode::TriangleStrip);

        let len0 = self.rail0.point_count();
        let len1 = self.rail1.point_count();
        let n = len0.min(len1);
        if len0 != len1 {
            debug!(rail0 = len0, rail1 = len1, "strip mesh: truncating to shorter rail");
        }
        if n == 0 {
            return;
        }

        let cycles = if self.rail0.is_closed() { n + 1 } else { n };
        mesh.vertices.reserve(cycles * 2);
        for i in 0..cycles {
            let j = i % n;
            mesh.add_vertex(self.rail0.point(j));
            mesh.add_vertex(self.rail1.point(j));
        }
    }

    /// Executes the stitching, honouring [`LengthPolicy::Strict`].
    ///
    /// # Errors
    ///
    /// Returns `TessellationError::RailLengthMismatch` under the strict policy
    /// if the rails have different point counts.
    pub fn execute_checked(&self) -> Result<Mesh> {
        let rail0 = self.rail0.point_count();
        let rail1 = self.rail1.point_count();
        if self.params.length_policy == LengthPolicy::Strict && rail0 != rail1 {
            return Err(TessellationError::RailLengthMismatch { rail0, rail1 }.into());
        }
        Ok(self.execute())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::cast_precision_loss)]
mod tests {
    use super::*;
    use crate::geometry::Polyline;
    use crate::math::Point3;

    fn rail(y: f64, len: usize, closed: bool) -> Polyline {
        (0..len)
            .map(|i| Point3::new(i as f64, y, 0.0))
            .collect::<Polyline>()
            .with_closed(closed)
    }

    #[test]
    fn open_rails_interleave() {
        let r0 = rail(0.0, 4, false);
        let r1 = rail(1.0, 4, false);
        let mesh = StripMesh::new(&r0, &r1).execute();
        assert_eq!(mesh.mode, PrimitiveMode::TriangleStrip);
        assert_eq!(mesh.vertices.len(), 8);
        for j in 0..4 {
            assert_eq!(mesh.vertices[2 * j], r0.points[j]);
            assert_eq!(mesh.vertices[2 * j + 1], r1.points[j]);
        }
    }

    #[test]
    fn closed_rail0_seams_the_loop() {
        let r0 = rail(0.0, 4, true);
        let r1 = rail(1.0, 4, false);
        let mesh = StripMesh::new(&r0, &r1).execute();
        assert_eq!(mesh.vertices.len(), 10);
        assert_eq!(mesh.vertices[8], r0.points[0]);
        assert_eq!(mesh.vertices[9], r1.points[0]);
    }

    #[test]
    fn closed_rail1_alone_does_not_seam() {
        let r0 = rail(0.0, 4, false);
        let r1 = rail(1.0, 4, true);
        let mesh = StripMesh::new(&r0, &r1).execute();
        assert_eq!(mesh.vertices.len(), 8);
    }

    #[test]
    fn mismatched_rails_truncate() {
        let long = rail(0.0, 5, false);
        let short = rail(1.0, 3, false);
        let truncated = rail(0.0, 3, false);
        let mesh = StripMesh::new(&long, &short).execute();
        let expected = StripMesh::new(&truncated, &short).execute();
        assert_eq!(mesh, expected);
        assert_eq!(mesh.vertices.len(), 6);
    }

    #[test]
    fn empty_rail_gives_empty_strip() {
        let r0 = rail(0.0, 0, true);
        let r1 = rail(1.0, 3, true);
        let mesh = StripMesh::new(&r0, &r1).execute();
        assert!(mesh.vertices.is_empty());
        assert_eq!(mesh.mode, PrimitiveMode::TriangleStrip);
    }

    #[test]
    fn execute_into_discards_previous_contents() {
        let r0 = rail(0.0, 2, false);
        let r1 = rail(1.0, 2, false);
        let mut mesh = Mesh {
            vertices: vec![Point3::new(9.0, 9.0, 9.0); 7],
            mode: PrimitiveMode::Triangles,
        };
        StripMesh::new(&r0, &r1).execute_into(&mut mesh);
        assert_eq!(mesh.vertices.len(), 4);
        assert_eq!(mesh.mode, PrimitiveMode::TriangleStrip);
    }

    #[test]
    fn strict_policy_rejects_mismatch() {
        let r0 = rail(0.0, 5, false);
        let r1 = rail(1.0, 3, false);
        let params = OffsetParams {
            length_policy: LengthPolicy::Strict,
        };
        let result = StripMesh::new(&r0, &r1).with_params(params).execute_checked();
        assert!(result.is_err());
        let lenient = StripMesh::new(&r0, &r1).execute_checked().unwrap();
        assert_eq!(lenient.vertices.len(), 6);
    }
}
