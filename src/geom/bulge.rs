//! Bulge-factor arc construction
//!
//! Polyline vertices carry a signed bulge factor encoding a circular arc
//! between consecutive points: `bulge = tan(angle / 4)` where `angle` is
//! the included angle of the arc. The construction below recovers the
//! circle through both endpoints whose chord-to-arc deflection matches the
//! bulge, then expresses the connecting sweep as an [`ArcSeg`].

use super::path::ArcSeg;
use crate::types::Vector2;

/// Build the circular arc that joins `p1` to `p2` with the given bulge
/// factor. A positive bulge is emitted as a clockwise sweep (negative
/// extent in the path's angle convention).
///
/// The caller is expected to filter out zero bulges (a straight edge) and
/// coincident endpoints; both degenerate to a zero-radius arc here.
pub fn bulge_arc(p1: Vector2, p2: Vector2, bulge: f64) -> ArcSeg {
    let u = p1.distance(&p2);
    if u <= f64::EPSILON || bulge == 0.0 {
        return ArcSeg::new(p1, 0.0, 0.0, 0.0);
    }

    let mp = p1.midpoint(&p2);
    let bp = mp + (p1 - mp).perp() * bulge;
    let b = 2.0 * mp.distance(&bp) / u;
    let radius = u * (1.0 + b * b) / (4.0 * b);
    let center = bp + (mp - bp).normalize() * radius;

    let start = 180.0 - (center.y - p1.y).atan2(center.x - p1.x).to_degrees();
    let half_chord = (u / 2.0) / radius;
    let mut extent = 2.0 * half_chord.clamp(-1.0, 1.0).asin().to_degrees();
    if bulge >= 0.0 {
        extent = -extent;
    }

    ArcSeg::new(center, radius, start, extent)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vector2, b: Vector2) -> bool {
        (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
    }

    #[test]
    fn test_half_circle() {
        // bulge 1 = tan(45) = a 180-degree arc
        let seg = bulge_arc(Vector2::new(0.0, 0.0), Vector2::new(1.0, 0.0), 1.0);
        assert!(close(seg.center, Vector2::new(0.5, 0.0)));
        assert!((seg.radius - 0.5).abs() < 1e-9);
        assert!((seg.extent.abs() - 180.0).abs() < 1e-6);
        assert!(close(seg.start_point(), Vector2::new(0.0, 0.0)));
        assert!(close(seg.end_point(), Vector2::new(1.0, 0.0)));
    }

    #[test]
    fn test_positive_bulge_is_clockwise() {
        let seg = bulge_arc(Vector2::new(0.0, 0.0), Vector2::new(1.0, 0.0), 0.5);
        assert!(seg.extent < 0.0);
    }

    #[test]
    fn test_negative_bulge_mirrors_positive() {
        let pos = bulge_arc(Vector2::new(0.0, 0.0), Vector2::new(2.0, 0.0), 0.4);
        let neg = bulge_arc(Vector2::new(0.0, 0.0), Vector2::new(2.0, 0.0), -0.4);
        assert!((pos.radius - neg.radius).abs() < 1e-9);
        assert!((pos.extent + neg.extent).abs() < 1e-9);
        // centers are mirrored across the chord
        assert!((pos.center.y + neg.center.y).abs() < 1e-9);
    }

    #[test]
    fn test_quarter_circle_radius() {
        // bulge = tan(90 / 4 degrees) gives a 90-degree arc; the circle
        // through (0,0) and (1,0) subtending 90 degrees has radius
        // chord / sqrt(2).
        let bulge = (90.0_f64 / 4.0).to_radians().tan();
        let seg = bulge_arc(Vector2::new(0.0, 0.0), Vector2::new(1.0, 0.0), bulge);
        assert!((seg.extent.abs() - 90.0).abs() < 1e-6);
        assert!((seg.radius - 1.0 / 2.0_f64.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn test_endpoints_always_on_arc() {
        let p1 = Vector2::new(-1.5, 2.0);
        let p2 = Vector2::new(3.0, -0.5);
        for bulge in [-1.0, -0.3, 0.2, 0.7, 1.0] {
            let seg = bulge_arc(p1, p2, bulge);
            assert!(close(seg.start_point(), p1), "bulge {bulge}");
            assert!(close(seg.end_point(), p2), "bulge {bulge}");
        }
    }
}
