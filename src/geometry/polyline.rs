use crate::math::vector_2d::normalize_or_zero;
use crate::math::{Point3, Vector3};

use super::CurveSource;

/// An ordered sequence of 3D points, open or closed.
///
/// Normals lie in the XY plane and are computed from the averaged
/// directions of the two adjacent segments. At the endpoints of an open
/// polyline only the single adjacent segment contributes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polyline {
    pub points: Vec<Point3>,
    pub closed: bool,
}

impl Polyline {
    /// Creates a polyline from points.
    #[must_use]
    pub fn new(points: Vec<Point3>, closed: bool) -> Self {
        Self { points, closed }
    }

    /// Creates a planar polyline (z = 0) from XY pairs.
    #[must_use]
    pub fn from_xy(coords: &[(f64, f64)], closed: bool) -> Self {
        let points = coords.iter().map(|&(x, y)| Point3::new(x, y, 0.0)).collect();
        Self { points, closed }
    }

    /// Copies the vertices and closedness of any [`CurveSource`].
    #[must_use]
    pub fn from_source<C: CurveSource + ?Sized>(source: &C) -> Self {
        Self {
            points: (0..source.point_count()).map(|i| source.point(i)).collect(),
            closed: source.is_closed(),
        }
    }

    /// Sets closedness, builder style.
    #[must_use]
    pub fn with_closed(mut self, closed: bool) -> Self {
        self.closed = closed;
        self
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the polyline has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Appends a vertex.
    pub fn add_vertex(&mut self, point: Point3) {
        self.points.push(point);
    }

    /// Removes all vertices. Closedness is kept.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Unit tangent at `index`, or zero where it is undefined
    /// (coincident neighbours or an exact reversal).
    #[must_use]
    pub fn tangent_at(&self, index: usize) -> Vector3 {
        if self.points.len() < 2 {
            return Vector3::zeros();
        }
        let prev = self.points[self.prev_index(index)];
        let curr = self.points[index];
        let next = self.points[self.next_index(index)];
        let incoming = normalize_or_zero(&(curr - prev));
        let outgoing = normalize_or_zero(&(next - curr));
        normalize_or_zero(&(incoming + outgoing))
    }

    /// Returns a copy with every vertex moved by `f(index, point)`.
    #[must_use]
    pub fn map_points<F>(&self, mut f: F) -> Self
    where
        F: FnMut(usize, &Point3) -> Point3,
    {
        Self {
            points: self.points.iter().enumerate().map(|(i, p)| f(i, p)).collect(),
            closed: self.closed,
        }
    }
}

impl CurveSource for Polyline {
    fn point_count(&self) -> usize {
        self.points.len()
    }

    fn point(&self, index: usize) -> Point3 {
        self.points[index]
    }

    fn is_closed(&self) -> bool {
        self.closed
    }

    fn normal_at(&self, index: usize) -> Vector3 {
        // Clockwise perpendicular: a +X tangent gives a -Y normal.
        let t = self.tangent_at(index);
        normalize_or_zero(&Vector3::new(t.y, -t.x, 0.0))
    }
}

impl FromIterator<Point3> for Polyline {
    fn from_iter<I: IntoIterator<Item = Point3>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
            closed: false,
        }
    }
}
