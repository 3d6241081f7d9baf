use super::{Vector2, Vector3, TOLERANCE};

/// Returns the normalized counter-clockwise perpendicular `(-y, x)` of the
/// XY components of `v`.
///
/// Returns the zero vector when `v` has no XY extent.
#[must_use]
pub fn perpendicular(v: &Vector3) -> Vector2 {
    let len = v.xy().norm();
    if len < TOLERANCE {
        return Vector2::zeros();
    }
    Vector2::new(-v.y / len, v.x / len)
}

/// Unsigned angle in radians between two 2D vectors, in `[0, π]`.
///
/// Returns `None` if either vector is zero-length.
#[must_use]
pub fn angle_between(a: &Vector2, b: &Vector2) -> Option<f64> {
    let la = a.norm();
    let lb = b.norm();
    if la < TOLERANCE || lb < TOLERANCE {
        return None;
    }
    let cos = (a.dot(b) / (la * lb)).clamp(-1.0, 1.0);
    Some(cos.acos())
}

/// Normalizes `v`, returning zero for zero-length input.
#[must_use]
pub fn normalize_or_zero(v: &Vector3) -> Vector3 {
    let len = v.norm();
    if len < TOLERANCE {
        Vector3::zeros()
    } else {
        v / len
    }
}
