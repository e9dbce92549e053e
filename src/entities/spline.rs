//! Spline entity interpreter
//!
//! DXF splines are nominally NURBS; this interpreter follows the control
//! polygon as a Catmull-Rom spline converted to cubic Beziers, which
//! passes through every control point with C1 continuity. Closed splines
//! wrap their neighbour indices around the control polygon; open splines
//! clamp them at the ends.

use super::{parse_f64, parse_i64, ParseCtx};
use crate::error::Result;
use crate::geom::{catmull_to_bezier, Path, Shape};
use crate::types::Vector2;
use bitflags::bitflags;

bitflags! {
    /// SPLINE group 70 flags
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct SplineFlags: i32 {
        /// The spline is closed
        const CLOSED = 1;
    }
}

/// A control-point spline
#[derive(Debug, Clone, Default)]
pub struct Spline {
    /// Group 70 flags
    pub flags: SplineFlags,
    /// Declared control-point count (group 73)
    pub num_control_points: usize,
    /// Collected control points
    pub control_points: Vec<Vector2>,
    pending_x: Option<f64>,
    path: Option<Path>,
    discarded: bool,
}

impl Spline {
    /// Create a new spline interpreter
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the closed flag is set
    pub fn is_closed(&self) -> bool {
        self.flags.contains(SplineFlags::CLOSED)
    }

    pub(crate) fn add_parm(&mut self, code: i32, value: &str, ctx: &ParseCtx) -> Result<bool> {
        match code {
            70 => self.flags = SplineFlags::from_bits_retain(parse_i64(code, value)? as i32),
            73 => self.num_control_points = parse_i64(code, value)?.max(0) as usize,
            10 => self.pending_x = Some(parse_f64(code, value)? * ctx.uscale),
            20 => {
                if let Some(x) = self.pending_x.take() {
                    self.control_points
                        .push(Vector2::new(x, parse_f64(code, value)? * ctx.uscale));
                    if self.num_control_points > 0
                        && self.control_points.len() == self.num_control_points
                    {
                        self.build_path();
                    }
                }
            }
            _ => {}
        }
        Ok(false)
    }

    fn build_path(&mut self) {
        let pts = &self.control_points;
        let n = pts.len();
        let mut path = Path::new();
        path.move_to(pts[0]);
        if self.is_closed() {
            for i in 0..n {
                let (c1, c2, end) = catmull_to_bezier(
                    pts[(i + n - 1) % n],
                    pts[i],
                    pts[(i + 1) % n],
                    pts[(i + 2) % n],
                );
                path.curve_to(c1, c2, end);
            }
            path.close();
        } else {
            for i in 0..n.saturating_sub(1) {
                let (c1, c2, end) = catmull_to_bezier(
                    pts[i.saturating_sub(1)],
                    pts[i],
                    pts[(i + 1).min(n - 1)],
                    pts[(i + 2).min(n - 1)],
                );
                path.curve_to(c1, c2, end);
            }
        }
        self.path = Some(path);
    }

    pub(crate) fn shape(&self) -> Option<Shape> {
        self.path.clone().map(Shape::Path)
    }

    pub(crate) fn discard(&mut self) {
        self.discarded = true;
    }

    pub(crate) fn is_discarded(&self) -> bool {
        self.discarded
    }
}
