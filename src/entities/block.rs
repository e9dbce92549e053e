//! Block definition interpreter
//!
//! A BLOCK opens a named group of entities terminated by ENDBLK. The
//! driver keeps the definition on the parse stack while its children
//! assemble, then moves it into the block dictionary; INSERTs resolve the
//! name only at finalize time, so a block may legally be defined after it
//! is referenced.

use super::{parse_f64, parse_i64, Entity, ParseCtx};
use crate::error::Result;
use crate::types::Vector2;
use bitflags::bitflags;

bitflags! {
    /// BLOCK group 70 flags
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct BlockFlags: i32 {
        /// Anonymous block
        const ANONYMOUS = 1;
        /// Anonymous block generated for a DIMENSION
        const DIMENSION = 2;
        /// External reference
        const XREF = 4;
    }
}

/// A named block definition
#[derive(Debug, Default)]
pub struct BlockDef {
    /// Block name (group 2)
    pub name: String,
    /// Base point (groups 10/20)
    pub base: Vector2,
    /// Group 70 flags
    pub flags: BlockFlags,
    /// Completed child entities, in arrival order
    pub children: Vec<Entity>,
    discarded: bool,
}

impl BlockDef {
    /// Create a new block interpreter
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn add_parm(&mut self, code: i32, value: &str, ctx: &ParseCtx) -> Result<bool> {
        match code {
            2 => self.name = value.to_string(),
            10 => self.base.x = parse_f64(code, value)? * ctx.uscale,
            20 => self.base.y = parse_f64(code, value)? * ctx.uscale,
            70 => self.flags = BlockFlags::from_bits_retain(parse_i64(code, value)? as i32),
            _ => {}
        }
        Ok(false)
    }

    /// Adopt a completed child entity
    pub fn add_child(&mut self, child: Entity) {
        self.children.push(child);
    }

    /// Whether this is an anonymous block generated for a DIMENSION
    pub fn is_dimension_block(&self) -> bool {
        self.flags.contains(BlockFlags::DIMENSION)
    }

    pub(crate) fn discard(&mut self) {
        self.discarded = true;
    }

    pub(crate) fn is_discarded(&self) -> bool {
        self.discarded
    }
}
