//! Catmull-Rom to cubic Bezier conversion
//!
//! DXF splines are nominally NURBS; this converter follows the
//! control-point polyline as a Catmull-Rom spline instead, which passes
//! through every control point with C1 continuity. The callers accept
//! that fidelity trade-off.

use crate::types::Vector2;

/// Convert one Catmull-Rom span into a cubic Bezier edge.
///
/// The span runs from `p1` to `p2`; `p0` and `p3` are the neighbouring
/// control points that shape the tangents. Returns the two Bezier control
/// points and the end point, ready for a `curve_to` starting at `p1`.
pub fn catmull_to_bezier(
    p0: Vector2,
    p1: Vector2,
    p2: Vector2,
    p3: Vector2,
) -> (Vector2, Vector2, Vector2) {
    let c1 = Vector2::new(
        (-p0.x + 6.0 * p1.x + p2.x) / 6.0,
        (-p0.y + 6.0 * p1.y + p2.y) / 6.0,
    );
    let c2 = Vector2::new(
        (p1.x + 6.0 * p2.x - p3.x) / 6.0,
        (p1.y + 6.0 * p2.y - p3.y) / 6.0,
    );
    (c1, c2, p2)
}
