//! Lightweight polyline interpreter
//!
//! Unlike the heavy POLYLINE, an LWPOLYLINE carries its whole vertex list
//! in its own group stream: each (10, 20) pair opens a new segment, and a
//! following 42 fills that segment's bulge before the next 10 arrives.

use super::{parse_f64, parse_i64, ParseCtx};
use crate::error::Result;
use crate::geom::{bulge_arc, Path, Shape};
use crate::types::Vector2;
use bitflags::bitflags;

bitflags! {
    /// LWPOLYLINE group 70 flags
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct LwPolylineFlags: i32 {
        /// The polyline is closed
        const CLOSED = 1;
    }
}

/// One lightweight-polyline segment start
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LwVertex {
    /// Segment start point
    pub location: Vector2,
    /// Bulge of the edge leaving this point
    pub bulge: f64,
}

/// A lightweight polyline
#[derive(Debug, Clone, Default)]
pub struct LwPolyline {
    /// Group 70 flags
    pub flags: LwPolylineFlags,
    /// Declared vertex count (group 90, informational)
    pub vertex_count: i64,
    /// Collected segments
    pub vertices: Vec<LwVertex>,
    shape: Option<Shape>,
    discarded: bool,
}

impl LwPolyline {
    /// Create a new lightweight polyline interpreter
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn add_parm(&mut self, code: i32, value: &str, ctx: &ParseCtx) -> Result<bool> {
        match code {
            10 => self.vertices.push(LwVertex {
                location: Vector2::new(parse_f64(code, value)? * ctx.uscale, 0.0),
                bulge: 0.0,
            }),
            20 => {
                if let Some(last) = self.vertices.last_mut() {
                    last.location.y = parse_f64(code, value)? * ctx.uscale;
                }
            }
            42 => {
                if let Some(last) = self.vertices.last_mut() {
                    last.bulge = parse_f64(code, value)?;
                }
            }
            70 => self.flags = LwPolylineFlags::from_bits_retain(parse_i64(code, value)? as i32),
            90 => self.vertex_count = parse_i64(code, value)?,
            _ => {}
        }
        Ok(false)
    }

    /// Whether the closed flag is set
    pub fn is_closed(&self) -> bool {
        self.flags.contains(LwPolylineFlags::CLOSED)
    }

    pub(crate) fn close(&mut self) {
        let Some(first) = self.vertices.first().copied() else {
            return;
        };
        let mut path = Path::new();
        path.move_to(first.location);
        for i in 1..self.vertices.len() {
            let prev = self.vertices[i - 1];
            let cur = self.vertices[i];
            if prev.bulge != 0.0 {
                path.arc(bulge_arc(prev.location, cur.location, prev.bulge));
            } else {
                path.line_to(cur.location);
            }
        }
        if self.is_closed() && self.vertices.len() > 1 {
            let last = self.vertices.last().unwrap();
            if last.bulge != 0.0 {
                path.arc(bulge_arc(last.location, first.location, last.bulge));
            } else {
                // an explicit edge back home, not a subpath close
                path.line_to(first.location);
            }
        }
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
