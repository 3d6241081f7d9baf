use tracing::debug;

use crate::geometry::{CurveSource, Polyline};
use crate::math::vector_2d::{angle_between, perpendicular};

/// Offsets a polyline along its normals with miter correction.
///
/// Interior vertices (and every vertex of a closed polyline with at least
/// 3 points) are pushed along their normal by `amount / cos(θ)`, where `θ`
/// is the angle between the normal and the perpendicular of the incoming
/// segment. This keeps the offset edges parallel to the source edges.
/// Endpoints of an open polyline are pushed by `amount` only.
///
/// The secant factor is not clamped; it grows without bound as a corner
/// approaches a full reversal.
///
/// # Sign Convention
///
/// Positive `amount` moves along the normal, which is the clockwise
/// perpendicular of the tangent: outward for counter-clockwise polylines.
#[derive(Debug)]
pub struct Grow<'a, C: CurveSource + ?Sized> {
    source: &'a C,
    amount: f64,
}

impl<'a, C: CurveSource + ?Sized> Grow<'a, C> {
    /// Creates a new grow operation.
    #[must_use]
    pub fn new(source: &'a C, amount: f64) -> Self {
        Self { source, amount }
    }

    /// Executes the offset. The source is not modified.
    ///
    /// Polylines with fewer than 2 points are returned unchanged.
    #[must_use]
    pub fn execute(&self) -> Polyline {
        let n = self.source.point_count();
        if n < 2 {
            debug!(points = n, "grow: too few points, returning copy");
            return Polyline::from_source(self.source);
        }

        let closable = self.source.wraps();
        let points = (0..n)
            .map(|i| {
                let p1 = self.source.point(i);
                let n1 = self.source.normal_at(i);

                if !closable && (i == 0 || i == n - 1) {
                    return p1 + n1 * self.amount;
                }

                let p0 = self.source.point(self.source.prev_index(i));
                let n0 = perpendicular(&(p0 - p1));
                let length = match angle_between(&n0, &n1.xy()) {
                    Some(angle) => self.amount / angle.cos(),
                    None => self.amount,
                };
                p1 + n1 * length
            })
            .collect();

        Polyline::new(points, self.source.is_closed())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point3;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_1_SQRT_2, SQRT_2};

    fn square(closed: bool) -> Polyline {
        Polyline::from_xy(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)], closed)
    }

    #[test]
    fn degenerate_sizes_are_copied() {
        for pl in [
            Polyline::new(vec![], true),
            Polyline::from_xy(&[(3.0, 4.0)], false),
        ] {
            let out = Grow::new(&pl, 5.0).execute();
            assert_eq!(out, pl);
        }
    }

    #[test]
    fn open_endpoints_have_no_secant_correction() {
        let pl = square(false);
        let out = Grow::new(&pl, 2.0).execute();
        for i in [0, 3] {
            let expected = pl.points[i] + pl.normal_at(i) * 2.0;
            assert_relative_eq!(out.points[i], expected, epsilon = 1e-12);
        }
    }

    #[test]
    fn closed_square_corners_use_sqrt2() {
        let pl = square(true);
        let out = Grow::new(&pl, 1.0).execute();
        assert!(out.closed);
        for (src, dst) in pl.points.iter().zip(&out.points) {
            assert_relative_eq!((dst - src).norm(), SQRT_2, epsilon = 1e-12);
        }
        // Counter-clockwise square grows outward, edges stay parallel.
        assert_relative_eq!(out.points[0], Point3::new(-1.0, -1.0, 0.0), epsilon = 1e-12);
        assert_relative_eq!(out.points[2], Point3::new(11.0, 11.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn open_interior_corner_uses_sqrt2() {
        let pl = square(false);
        let out = Grow::new(&pl, 1.0).execute();
        assert_relative_eq!(out.points[1], Point3::new(11.0, -1.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn straight_interior_vertex_is_plain_offset() {
        let pl = Polyline::from_xy(&[(0.0, 0.0), (5.0, 0.0), (10.0, 0.0)], false);
        let out = Grow::new(&pl, -3.0).execute();
        assert_relative_eq!(out.points[1], Point3::new(5.0, 3.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn closed_two_points_treated_as_open() {
        let pl = Polyline::from_xy(&[(0.0, 0.0), (4.0, 0.0)], true);
        let out = Grow::new(&pl, 1.0).execute();
        assert!(out.closed);
        assert_relative_eq!(out.points[0], Point3::new(0.0, -1.0, 0.0), epsilon = 1e-12);
        assert_relative_eq!(out.points[1], Point3::new(4.0, -1.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn source_is_untouched() {
        let pl = square(true);
        let before = pl.clone();
        let _ = Grow::new(&pl, 3.0).execute();
        assert_eq!(pl, before);
    }

    #[test]
    fn z_is_preserved() {
        let pl = Polyline::new(
            vec![
                Point3::new(0.0, 0.0, 2.0),
                Point3::new(1.0, 0.0, 2.0),
                Point3::new(1.0, 1.0, 2.0),
            ],
            true,
        );
        let out = Grow::new(&pl, 0.5).execute();
        for p in &out.points {
            assert_relative_eq!(p.z, 2.0);
        }
    }

    #[test]
    fn sharp_corner_secant_is_not_clamped() {
        // Turning 170° puts the bisector normal 85° off the incoming perpendicular.
        let pl = Polyline::from_xy(&[(0.0, 0.0), (10.0, 0.0), (0.0, 1.763_269_8)], false);
        let out = Grow::new(&pl, 1.0).execute();
        let moved = (out.points[1] - pl.points[1]).norm();
        assert_relative_eq!(moved, 1.0 / 85f64.to_radians().cos(), epsilon = 1e-4);
        assert!(moved > 11.0);
    }

    #[test]
    fn repeated_vertex_uses_unit_secant() {
        let pl = Polyline::from_xy(&[(0.0, 0.0), (0.0, 0.0), (5.0, 0.0), (5.0, 5.0)], true);
        let out = Grow::new(&pl, 1.0).execute();
        for p in &out.points {
            assert!(p.x.is_finite() && p.y.is_finite() && p.z.is_finite());
        }
        // Vertex 1 has no incoming segment, so its offset is the plain normal.
        assert_relative_eq!(out.points[1], Point3::new(0.0, -1.0, 0.0), epsilon = 1e-12);
        // Vertex 0 has no outgoing segment; its normal matches the incoming perpendicular.
        assert_relative_eq!(
            out.points[0],
            Point3::new(-FRAC_1_SQRT_2, FRAC_1_SQRT_2, 0.0),
            epsilon = 1e-12
        );
    }
}
