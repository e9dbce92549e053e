//! Ellipse entity interpreter

use super::{parse_f64, ParseCtx};
use crate::error::Result;
use crate::geom::Shape;
use crate::types::Vector2;

/// An ellipse, defined by its center, the offset of the major-axis
/// endpoint from the center, and the minor/major ratio.
///
/// The start and end parameters (groups 41/42) are captured but the shape
/// is always emitted as a full ellipse.
#[derive(Debug, Clone, Default)]
pub struct Ellipse {
    /// Center point (groups 10/20)
    pub center: Vector2,
    /// Major-axis endpoint offset from the center (groups 11/21)
    pub major: Vector2,
    /// Minor-to-major axis ratio (group 40)
    pub ratio: f64,
    /// Start parameter in radians (group 41)
    pub start_param: f64,
    /// End parameter in radians (group 42)
    pub end_param: f64,
    shape: Option<Shape>,
    discarded: bool,
}

impl Ellipse {
    /// Create a new ellipse interpreter
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn add_parm(&mut self, code: i32, value: &str, ctx: &ParseCtx) -> Result<bool> {
        match code {
            10 => self.center.x = parse_f64(code, value)? * ctx.uscale,
            20 => self.center.y = parse_f64(code, value)? * ctx.uscale,
            11 => self.major.x = parse_f64(code, value)? * ctx.uscale,
            21 => self.major.y = parse_f64(code, value)? * ctx.uscale,
            40 => self.ratio = parse_f64(code, value)?,
            41 => self.start_param = parse_f64(code, value)?,
            42 => self.end_param = parse_f64(code, value)?,
            _ => {}
        }
        Ok(false)
    }

    pub(crate) fn close(&mut self) {
        let m = self.major.length();
        self.shape = Some(Shape::Ellipse {
            center: self.center,
            rx: m,
            ry: m * self.ratio,
            rotation: self.major.y.atan2(self.major.x),
        });
    }

    pub(crate) fn shape(&self) -> Option<Shape> {
        self.shape.clone()
    }

    pub(crate) fn discard(&mut self) {
        self.discarded = true;
    }

    pub(crate) fn is_discarded(&self) -> bool {
        self.discarded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_axis_aligned_ellipse() {
        let ctx = ParseCtx { uscale: 1.0 };
        let mut ellipse = Ellipse::new();
        ellipse.add_parm(10, "1.0", &ctx).unwrap();
        ellipse.add_parm(20, "2.0", &ctx).unwrap();
        ellipse.add_parm(11, "4.0", &ctx).unwrap();
        ellipse.add_parm(21, "0.0", &ctx).unwrap();
        ellipse.add_parm(40, "0.5", &ctx).unwrap();
        ellipse.close();

        match ellipse.shape() {
            Some(Shape::Ellipse {
                center,
                rx,
                ry,
                rotation,
            }) => {
                assert_eq!(center, Vector2::new(1.0, 2.0));
                assert_eq!(rx, 4.0);
                assert_eq!(ry, 2.0);
                assert_eq!(rotation, 0.0);
            }
            other => panic!("expected ellipse, got {other:?}"),
        }
    }

    #[test]
    fn test_rotated_major_axis() {
        let ctx = ParseCtx { uscale: 1.0 };
        let mut ellipse = Ellipse::new();
        ellipse.add_parm(11, "0.0", &ctx).unwrap();
        ellipse.add_parm(21, "3.0", &ctx).unwrap();
        ellipse.add_parm(40, "0.25", &ctx).unwrap();
        ellipse.close();

        match ellipse.shape() {
            Some(Shape::Ellipse { rx, ry, rotation, .. }) => {
                assert_eq!(rx, 3.0);
                assert_eq!(ry, 0.75);
                assert!((rotation - FRAC_PI_2).abs() < 1e-12);
            }
            other => panic!("expected ellipse, got {other:?}"),
        }
    }
}
