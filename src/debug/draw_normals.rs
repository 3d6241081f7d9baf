use crate::geometry::CurveSource;
use crate::math::Point3;

/// Host-owned line drawing primitive.
pub trait LineSink {
    /// Draws a line segment from `from` to `to`.
    fn draw_line(&mut self, from: Point3, to: Point3);
}

impl LineSink for Vec<(Point3, Point3)> {
    fn draw_line(&mut self, from: Point3, to: Point3) {
        self.push((from, to));
    }
}

/// Visualizes per-vertex normals as line segments of a fixed length.
#[derive(Debug)]
pub struct DrawNormals<'a, C: CurveSource + ?Sized> {
    curve: &'a C,
    length: f64,
}

impl<'a, C: CurveSource + ?Sized> DrawNormals<'a, C> {
    /// Creates a new normal visualization.
    #[must_use]
    pub fn new(curve: &'a C, length: f64) -> Self {
        Self { curve, length }
    }

    /// Emits one segment per vertex, from the vertex along its normal.
    pub fn execute<S: LineSink + ?Sized>(&self, sink: &mut S) {
        for i in 0..self.curve.point_count() {
            let p = self.curve.point(i);
            sink.draw_line(p, p + self.curve.normal_at(i) * self.length);
        }
    }

    /// Returns the segments that [`execute`](Self::execute) would emit.
    #[must_use]
    pub fn normal_segments(&self) -> Vec<(Point3, Point3)> {
        let mut segments = Vec::with_capacity(self.curve.point_count());
        self.execute(&mut segments);
        segments
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Polyline;
    use approx::assert_relative_eq;

    #[test]
    fn one_segment_per_vertex() {
        let pl = Polyline::from_xy(&[(0.0, 0.0), (4.0, 0.0), (8.0, 0.0)], false);
        let segments = DrawNormals::new(&pl, 2.0).normal_segments();
        assert_eq!(segments.len(), 3);
        for ((from, to), src) in segments.iter().zip(&pl.points) {
            assert_eq!(from, src);
            assert_relative_eq!(*to, src + crate::math::Vector3::new(0.0, -2.0, 0.0), epsilon = 1e-12);
        }
    }

    #[test]
    fn custom_sink_receives_lines() {
        struct Counter(usize);
        impl LineSink for Counter {
            fn draw_line(&mut self, _from: Point3, _to: Point3) {
                self.0 += 1;
            }
        }

        let pl = Polyline::from_xy(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)], true);
        let mut sink = Counter(0);
        DrawNormals::new(&pl, 1.0).execute(&mut sink);
        assert_eq!(sink.0, 3);
    }

    #[test]
    fn empty_curve_draws_nothing() {
        let pl = Polyline::default();
        assert!(DrawNormals::new(&pl, 1.0).normal_segments().is_empty());
    }
}
