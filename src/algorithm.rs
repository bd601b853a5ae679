use crate::types::Pt3;

/// Barycentric coordinates of a point inside a triangle.
///
/// Describes the position of `point` in triangle `abc` as one weight per
/// corner, computed from the areas of the three sub-triangles. For a
/// point inside the triangle the weights sum to 1:
///
/// P = wa*A + wb*B + wc*C
///
/// Returns `None` when the triangle is degenerate (zero area).
pub fn barycentric_coordinates(a: &Pt3, b: &Pt3, c: &Pt3, point: &Pt3) -> Option<(f64, f64, f64)> {
    let global_area = (b - a).cross(&(c - a)).norm();
    if global_area < 1e-12 {
        return None;
    }

    let wa = (b - point).cross(&(c - point)).norm() / global_area;
    let wb = (c - point).cross(&(a - point)).norm() / global_area;
    let wc = (a - point).cross(&(b - point)).norm() / global_area;
    Some((wa, wb, wc))
}
