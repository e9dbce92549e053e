//! Line entity interpreter

use super::{parse_f64, ParseCtx};
use crate::error::Result;
use crate::geom::{Path, Shape};
use crate::types::Vector2;

/// A straight segment between two points
#[derive(Debug, Clone, Default)]
pub struct Line {
    /// First endpoint (groups 10/20)
    pub p1: Vector2,
    /// Second endpoint (groups 11/21)
    pub p2: Vector2,
    shape: Option<Shape>,
    discarded: bool,
}

impl Line {
    /// Create a new line interpreter
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn add_parm(&mut self, code: i32, value: &str, ctx: &ParseCtx) -> Result<bool> {
        match code {
            10 => self.p1.x = parse_f64(code, value)? * ctx.uscale,
            20 => self.p1.y = parse_f64(code, value)? * ctx.uscale,
            11 => self.p2.x = parse_f64(code, value)? * ctx.uscale,
            21 => self.p2.y = parse_f64(code, value)? * ctx.uscale,
            _ => {}
        }
        Ok(false)
    }

    pub(crate) fn close(&mut self) {
        let mut path = Path::new();
        path.move_to(self.p1);
        path.line_to(self.p2);
        self.shape = Some(Shape::Path(path));
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
