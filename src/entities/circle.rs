//! Circle entity interpreter

use super::{parse_f64, ParseCtx};
use crate::error::Result;
use crate::geom::Shape;
use crate::types::Vector2;

/// A full circle
#[derive(Debug, Clone, Default)]
pub struct Circle {
    /// Center point (groups 10/20)
    pub center: Vector2,
    /// Radius (group 40)
    pub radius: f64,
    shape: Option<Shape>,
    discarded: bool,
}

impl Circle {
    /// Create a new circle interpreter
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn add_parm(&mut self, code: i32, value: &str, ctx: &ParseCtx) -> Result<bool> {
        match code {
            10 => self.center.x = parse_f64(code, value)? * ctx.uscale,
            20 => self.center.y = parse_f64(code, value)? * ctx.uscale,
            40 => self.radius = parse_f64(code, value)? * ctx.uscale,
            _ => {}
        }
        Ok(false)
    }

    pub(crate) fn close(&mut self) {
        self.shape = Some(Shape::Circle {
            center: self.center,
            radius: self.radius,
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

    #[test]
    fn test_circle_primitive() {
        let ctx = ParseCtx { uscale: 1.0 };
        let mut circle = Circle::new();
        circle.add_parm(10, "1.5", &ctx).unwrap();
        circle.add_parm(20, "-2.0", &ctx).unwrap();
        circle.add_parm(40, "3.0", &ctx).unwrap();
        circle.close();

        match circle.shape() {
            Some(Shape::Circle { center, radius }) => {
                assert_eq!(center, Vector2::new(1.5, -2.0));
                assert_eq!(radius, 3.0);
            }
            other => panic!("expected circle, got {other:?}"),
        }
    }
}
