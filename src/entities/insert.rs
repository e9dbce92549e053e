//! Insert entity interpreter (block reference)
//!
//! An INSERT places a named block under an affine transform built from
//! the insertion point, per-axis scale factors, and a rotation. A
//! negative Z scale mirrors the placement across the Y axis; a negative
//! X scale negates the rotation. The block's base-point offset is applied
//! ahead of the outer transform when it is non-zero.

use super::{parse_f64, RenderCtx, ParseCtx};
use crate::error::Result;
use crate::geom::{Path, Shape};
use crate::notification::NotificationType;
use crate::types::{Transform2, Vector2};

/// Deepest block-in-block expansion allowed before a reference cycle is
/// assumed.
const MAX_INSERT_DEPTH: u32 = 32;

/// A reference to a block definition
#[derive(Debug, Clone)]
pub struct Insert {
    /// Referenced block name (group 2)
    pub block_name: String,
    /// Entity handle (group 5)
    pub handle: String,
    /// Insertion point (groups 10/20)
    pub insertion: Vector2,
    /// X scale factor (group 41)
    pub x_scale: f64,
    /// Y scale factor (group 42)
    pub y_scale: f64,
    /// Z scale factor (group 43)
    pub z_scale: f64,
    /// Rotation (group 50), consumed as radians
    pub rotation: f64,
    discarded: bool,
}

impl Insert {
    /// Create a new insert interpreter
    pub fn new() -> Self {
        Insert {
            block_name: String::new(),
            handle: String::new(),
            insertion: Vector2::ZERO,
            x_scale: 1.0,
            y_scale: 1.0,
            z_scale: 1.0,
            rotation: 0.0,
            discarded: false,
        }
    }

    pub(crate) fn add_parm(&mut self, code: i32, value: &str, ctx: &ParseCtx) -> Result<bool> {
        match code {
            2 => self.block_name = value.to_string(),
            5 => self.handle = value.to_string(),
            10 => self.insertion.x = parse_f64(code, value)? * ctx.uscale,
            20 => self.insertion.y = parse_f64(code, value)? * ctx.uscale,
            41 => self.x_scale = parse_f64(code, value)?,
            42 => self.y_scale = parse_f64(code, value)?,
            43 => self.z_scale = parse_f64(code, value)?,
            50 => self.rotation = parse_f64(code, value)?,
            _ => {}
        }
        Ok(false)
    }

    /// The placement transform for the referenced block
    pub fn placement(&self, base: Vector2) -> Transform2 {
        let mut xform = if self.z_scale < 0.0 {
            Transform2::translation(-self.insertion.x, self.insertion.y)
                * Transform2::scaling(-self.x_scale, self.y_scale)
        } else {
            Transform2::translation(self.insertion.x, self.insertion.y)
                * Transform2::scaling(self.x_scale, self.y_scale)
        };
        let rotation = if self.x_scale < 0.0 {
            -self.rotation
        } else {
            self.rotation
        };
        if rotation != 0.0 {
            xform = xform * Transform2::rotation(rotation);
        }
        if base != Vector2::ZERO {
            xform = xform * Transform2::translation(base.x, base.y);
        }
        xform
    }

    pub(crate) fn shape(&self, ctx: &mut RenderCtx<'_>) -> Option<Shape> {
        let blocks = ctx.blocks;
        let Some(block) = blocks.get(&self.block_name) else {
            ctx.notifications.notify(
                NotificationType::UnresolvedBlock,
                format!("INSERT references undefined block {:?}", self.block_name),
            );
            return None;
        };
        if ctx.depth >= MAX_INSERT_DEPTH {
            ctx.notifications.notify(
                NotificationType::Warning,
                format!("block {:?} nested too deeply", self.block_name),
            );
            return None;
        }

        let xform = self.placement(block.base);
        let mut path = Path::new();
        ctx.depth += 1;
        for child in &block.children {
            if let Some(shape) = child.shape(ctx) {
                path.append(shape.to_path().transformed(&xform));
            }
        }
        ctx.depth -= 1;

        if path.is_empty() {
            None
        } else {
            Some(Shape::Path(path))
        }
    }

    pub(crate) fn discard(&mut self) {
        self.discarded = true;
    }

    pub(crate) fn is_discarded(&self) -> bool {
        self.discarded
    }
}

impl Default for Insert {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vector2, b: Vector2) -> bool {
        (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
    }

    #[test]
    fn test_identity_placement_translates() {
        let mut insert = Insert::new();
        insert.insertion = Vector2::new(5.0, 7.0);
        let t = insert.placement(Vector2::ZERO);
        assert!(close(t.apply(Vector2::new(1.0, 0.0)), Vector2::new(6.0, 7.0)));
    }

    #[test]
    fn test_negative_z_scale_mirrors() {
        let mut insert = Insert::new();
        insert.insertion = Vector2::new(5.0, 5.0);
        insert.z_scale = -1.0;
        let t = insert.placement(Vector2::ZERO);
        assert!(close(t.apply(Vector2::ZERO), Vector2::new(-5.0, 5.0)));
        assert!(close(t.apply(Vector2::new(1.0, 0.0)), Vector2::new(-6.0, 5.0)));
    }

    #[test]
    fn test_negative_x_scale_negates_rotation() {
        let mut insert = Insert::new();
        insert.x_scale = -1.0;
        insert.rotation = std::f64::consts::FRAC_PI_2;
        let t = insert.placement(Vector2::ZERO);
        // rotate by -90 degrees, then mirror x: (0, 1) -> (1, 0) -> (-1, 0)
        assert!(close(t.apply(Vector2::new(0.0, 1.0)), Vector2::new(-1.0, 0.0)));
    }

    #[test]
    fn test_base_point_applied_first() {
        let mut insert = Insert::new();
        insert.insertion = Vector2::new(10.0, 0.0);
        insert.x_scale = 2.0;
        insert.y_scale = 2.0;
        let t = insert.placement(Vector2::new(1.0, 1.0));
        // base offset, then scale, then translate
        assert!(close(t.apply(Vector2::ZERO), Vector2::new(12.0, 2.0)));
    }
}
