//! Dimension entity interpreter
//!
//! A DIMENSION's rendered geometry lives in an anonymous block the
//! authoring tool generated for it; the entity itself just references
//! that block by name and appends its children unmodified.

use super::{RenderCtx, ParseCtx};
use crate::error::Result;
use crate::geom::{Path, Shape};
use crate::notification::NotificationType;

/// A dimension annotation
#[derive(Debug, Clone, Default)]
pub struct Dimension {
    /// Name of the anonymous geometry block (group 2)
    pub block_name: String,
}

impl Dimension {
    /// Create a new dimension interpreter
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn add_parm(&mut self, code: i32, value: &str, _ctx: &ParseCtx) -> Result<bool> {
        if code == 2 {
            self.block_name = value.to_string();
        }
        Ok(false)
    }

    pub(crate) fn shape(&self, ctx: &mut RenderCtx<'_>) -> Option<Shape> {
        let blocks = ctx.blocks;
        let Some(block) = blocks.get(&self.block_name) else {
            ctx.notifications.notify(
                NotificationType::UnresolvedBlock,
                format!("DIMENSION references undefined block {:?}", self.block_name),
            );
            return None;
        };

        let mut path = Path::new();
        for child in &block.children {
            if let Some(shape) = child.shape(ctx) {
                path.append(shape.to_path());
            }
        }
        if path.is_empty() {
            None
        } else {
            Some(Shape::Path(path))
        }
    }
}
