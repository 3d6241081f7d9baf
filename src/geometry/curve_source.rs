use crate::math::{Point3, Vector3};

/// Read-only view of a polyline that the offset and meshing operations
/// depend on.
///
/// Any point container that can report its vertices, closedness and a
/// per-vertex normal can be offset or stroked.
pub trait CurveSource {
    /// Number of vertices.
    fn point_count(&self) -> usize;

    /// Vertex at `index`. Panics if out of range.
    fn point(&self, index: usize) -> Point3;

    /// Whether the last vertex connects back to the first.
    fn is_closed(&self) -> bool;

    /// Local normal at `index`, in the XY plane.
    fn normal_at(&self, index: usize) -> Vector3;

    /// Whether index arithmetic wraps: closed with at least 3 vertices.
    fn wraps(&self) -> bool {
        self.is_closed() && self.point_count() >= 3
    }

    /// Index of the vertex before `index`.
    ///
    /// Wraps for closed curves; clamps to `index` at the start of an open curve.
    fn prev_index(&self, index: usize) -> usize {
        if index > 0 {
            index - 1
        } else if self.wraps() {
            self.point_count() - 1
        } else {
            index
        }
    }

    /// Index of the vertex after `index`.
    ///
    /// Wraps for closed curves; clamps to `index` at the end of an open curve.
    fn next_index(&self, index: usize) -> usize {
        let n = self.point_count();
        if index + 1 < n {
            index + 1
        } else if self.wraps() {
            0
        } else {
            index
        }
    }
}
