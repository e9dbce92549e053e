//! Conversion finalizer
//!
//! Resolves every enabled top-level draw item to a shape, unions their
//! bounds, then applies one uniform scale so the drawing's longest axis
//! fits the caller's size window, together with the Y flip that moves the
//! drawing's +Y-up coordinates into a screen-style origin-aligned frame.

use crate::entities::{Entity, RenderCtx};
use crate::geom::Shape;
use crate::types::{Bounds, Transform2};

/// Draw-item filters (all default off)
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct DrawFilters {
    pub text: bool,
    pub mtext: bool,
    pub dimensions: bool,
}

impl DrawFilters {
    fn enabled(&self, entity: &Entity) -> bool {
        match entity {
            Entity::Text(_) => self.text,
            Entity::MText(_) => self.mtext,
            Entity::Dimension(_) => self.dimensions,
            _ => true,
        }
    }
}

/// Output of the finalizer
pub(crate) struct Finalized {
    pub shapes: Vec<Shape>,
    /// Union bounds before fitting, in inches
    pub bounds: Option<Bounds>,
    /// Whether a fit scale other than 1 was applied
    pub scaled: bool,
}

/// Resolve, fit, and flip.
///
/// `max_size <= 0` disables downscaling, `min_size <= 0` disables
/// upscaling; both refer to the longest axis of the union bounds, in
/// inches.
pub(crate) fn finalize(
    items: &[Entity],
    ctx: &mut RenderCtx<'_>,
    filters: DrawFilters,
    max_size: f64,
    min_size: f64,
) -> Finalized {
    let shapes: Vec<Shape> = items
        .iter()
        .filter(|entity| filters.enabled(entity))
        .filter_map(|entity| entity.shape(ctx))
        .collect();

    let bounds = shapes
        .iter()
        .filter_map(Shape::bounds)
        .reduce(|acc, b| acc.merge(&b));
    let Some(bounds) = bounds else {
        return Finalized {
            shapes: Vec::new(),
            bounds: None,
            scaled: false,
        };
    };

    let max_axis = bounds.max_axis();
    let mut scale = 1.0;
    let mut scaled = false;
    if max_size > 0.0 && max_axis > max_size {
        scale = max_size / max_axis;
        scaled = true;
    } else if min_size > 0.0 && max_axis < min_size {
        scale = min_size / max_axis;
        scaled = true;
    }

    let xform = Transform2::scaling(scale, -scale)
        * Transform2::translation(-bounds.min.x, -bounds.min.y - bounds.height());
    let shapes = shapes
        .iter()
        .map(|shape| shape.transformed(&xform))
        .collect();

    Finalized {
        shapes,
        bounds: Some(bounds),
        scaled,
    }
}
