//! Glyph outline bridge
//!
//! TEXT and MTEXT entities do not rasterize fonts themselves; they emit a
//! [`GlyphRequest`] through the injected [`GlyphOutliner`] capability and
//! place whatever outline comes back. A platform font stack can implement
//! the trait; the default [`PlaceholderOutliner`] stands in with an
//! X-shaped marker so drawings with text still produce sane geometry.
//!
//! Outline space is the usual font convention: origin on the baseline at
//! the left edge, Y growing downward. The text interpreters request
//! outlines at ten times the entity height and scale the result back down,
//! which keeps integer-point outliners usable.

use crate::geom::{Path, Shape};
use crate::types::Vector2;

/// Font family requested when the drawing does not resolve its own styles
pub const DEFAULT_FONT_FAMILY: &str = "Helvetica";

/// A single text-outline request
#[derive(Debug, Clone)]
pub struct GlyphRequest {
    /// The text to outline (already unescaped)
    pub text: String,
    /// Requested font family
    pub font_family: String,
    /// Point size of the requested outline
    pub point_size: f64,
    /// Enable pair kerning
    pub kerning: bool,
    /// Enable ligature substitution
    pub ligatures: bool,
    /// Additional tracking (letter spacing), in em fractions
    pub tracking: f64,
}

impl GlyphRequest {
    /// Create a request with the default typography settings
    pub fn new(text: impl Into<String>, point_size: f64) -> Self {
        GlyphRequest {
            text: text.into(),
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            point_size,
            kerning: true,
            ligatures: true,
            tracking: 0.0,
        }
    }
}

/// Capability for turning text into outline geometry
pub trait GlyphOutliner {
    /// Produce the outline for a request, in outline space
    fn outline(&self, request: &GlyphRequest) -> Shape;
}

/// Fallback outliner used when no platform font stack is injected.
///
/// Draws an X spanning one em above the baseline; enough to show where
/// text sits and how large it is.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderOutliner;

impl GlyphOutliner for PlaceholderOutliner {
    fn outline(&self, request: &GlyphRequest) -> Shape {
        let s = request.point_size;
        let mut path = Path::new();
        path.move_to(Vector2::new(0.0, 0.0));
        path.line_to(Vector2::new(s, -s));
        path.move_to(Vector2::new(0.0, -s));
        path.line_to(Vector2::new(s, 0.0));
        Shape::Path(path)
    }
}
