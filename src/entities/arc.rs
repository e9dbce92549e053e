//! Arc entity interpreter

use super::{parse_f64, ParseCtx};
use crate::error::Result;
use crate::geom::{ArcSeg, Shape};
use crate::types::Vector2;

/// A circular arc.
///
/// DXF specifies the sweep counterclockwise from start angle (50) to end
/// angle (51), both in degrees. The emitted segment encodes the same sweep
/// in the path model's screen convention: the start angle is negated and
/// the extent runs `start - end` (with the end angle normalized up by a
/// full turn when it precedes the start).
#[derive(Debug, Clone, Default)]
pub struct Arc {
    /// Center point (groups 10/20)
    pub center: Vector2,
    /// Radius (group 40)
    pub radius: f64,
    /// Start angle in degrees (group 50)
    pub start_angle: f64,
    /// End angle in degrees (group 51)
    pub end_angle: f64,
    shape: Option<Shape>,
    discarded: bool,
}

impl Arc {
    /// Create a new arc interpreter
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn add_parm(&mut self, code: i32, value: &str, ctx: &ParseCtx) -> Result<bool> {
        match code {
            10 => self.center.x = parse_f64(code, value)? * ctx.uscale,
            20 => self.center.y = parse_f64(code, value)? * ctx.uscale,
            40 => self.radius = parse_f64(code, value)? * ctx.uscale,
            50 => self.start_angle = parse_f64(code, value)?,
            51 => self.end_angle = parse_f64(code, value)?,
            _ => {}
        }
        Ok(false)
    }

    pub(crate) fn close(&mut self) {
        let end = if self.end_angle < self.start_angle {
            self.end_angle + 360.0
        } else {
            self.end_angle
        };
        self.shape = Some(Shape::Arc(ArcSeg::new(
            self.center,
            self.radius,
            -self.start_angle,
            self.start_angle - end,
        )));
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
