//! Heavy polyline interpreter (POLYLINE / VERTEX / SEQEND form)
//!
//! The old-style polyline is a container: each vertex arrives as its own
//! VERTEX entity and the whole construct is terminated by SEQEND, not by
//! the next code-0 keyword. A vertex's bulge applies to the edge leaving
//! it toward the next vertex.

use super::{parse_f64, parse_i64, ParseCtx};
use crate::error::Result;
use crate::geom::{bulge_arc, Path, Shape};
use crate::types::Vector2;
use bitflags::bitflags;

bitflags! {
    /// POLYLINE group 70 flags
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct PolylineFlags: i32 {
        /// The polyline is closed
        const CLOSED = 1;
    }
}

/// A single polyline vertex (its own DXF entity)
#[derive(Debug, Clone, Default)]
pub struct Vertex {
    /// Location (groups 10/20)
    pub location: Vector2,
    /// Bulge of the edge leaving this vertex (group 42)
    pub bulge: f64,
    discarded: bool,
}

impl Vertex {
    /// Create a new vertex interpreter
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn add_parm(&mut self, code: i32, value: &str, ctx: &ParseCtx) -> Result<bool> {
        match code {
            10 => self.location.x = parse_f64(code, value)? * ctx.uscale,
            20 => self.location.y = parse_f64(code, value)? * ctx.uscale,
            42 => self.bulge = parse_f64(code, value)?,
            _ => {}
        }
        Ok(false)
    }

    pub(crate) fn discard(&mut self) {
        self.discarded = true;
    }

    pub(crate) fn is_discarded(&self) -> bool {
        self.discarded
    }
}

/// A heavy (vertex-entity) polyline
#[derive(Debug, Clone, Default)]
pub struct Polyline {
    /// Group 70 flags
    pub flags: PolylineFlags,
    /// Collected vertices, in arrival order
    pub vertices: Vec<Vertex>,
    shape: Option<Shape>,
    discarded: bool,
}

impl Polyline {
    /// Create a new polyline interpreter
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn add_parm(&mut self, code: i32, value: &str, _ctx: &ParseCtx) -> Result<bool> {
        if code == 70 {
            self.flags = PolylineFlags::from_bits_retain(parse_i64(code, value)? as i32);
        }
        Ok(false)
    }

    /// Adopt a completed vertex
    pub fn add_vertex(&mut self, vertex: Vertex) {
        if !vertex.is_discarded() {
            self.vertices.push(vertex);
        }
    }

    /// Whether the closed flag is set
    pub fn is_closed(&self) -> bool {
        self.flags.contains(PolylineFlags::CLOSED)
    }

    pub(crate) fn close(&mut self) {
        let Some(first) = self.vertices.first() else {
            return;
        };
        let mut path = Path::new();
        path.move_to(first.location);
        for i in 1..self.vertices.len() {
            let prev = &self.vertices[i - 1];
            let cur = &self.vertices[i];
            if prev.bulge != 0.0 {
                path.arc(bulge_arc(prev.location, cur.location, prev.bulge));
            } else {
                path.line_to(cur.location);
            }
        }
        if self.is_closed() && self.vertices.len() > 1 {
            let last = self.vertices.last().unwrap();
            if last.bulge != 0.0 {
                path.arc(bulge_arc(last.location, self.vertices[0].location, last.bulge));
            } else {
                path.close();
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
