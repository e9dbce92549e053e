//! Conversion entry points
//!
//! [`DxfConverter`] owns the pre-parse toggles and the injected glyph
//! outliner; one `convert` call runs the whole pipeline — tag stream →
//! stack driver → finalizer — over private state, so concurrent
//! conversions just use separate converter values.

mod driver;
mod finalize;
mod tag;

pub use tag::{TagPair, TagReader};

use crate::entities::RenderCtx;
use crate::error::Result;
use crate::geom::Shape;
use crate::glyph::{GlyphOutliner, PlaceholderOutliner};
use crate::notification::{NotificationCollection, NotificationType};
use crate::types::Bounds;
use crate::units::Units;
use ahash::AHashMap;
use driver::Driver;
use finalize::DrawFilters;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Configurable DXF → vector path converter
pub struct DxfConverter {
    draw_text: bool,
    draw_mtext: bool,
    draw_dimensions: bool,
    millimeter_fallback: bool,
    outliner: Box<dyn GlyphOutliner>,
}

impl DxfConverter {
    /// Create a converter with the default settings: text, mtext and
    /// dimension rendering off, unitless drawings read as millimeters,
    /// placeholder glyph outlines.
    pub fn new() -> Self {
        DxfConverter {
            draw_text: false,
            draw_mtext: false,
            draw_dimensions: false,
            millimeter_fallback: true,
            outliner: Box::new(PlaceholderOutliner),
        }
    }

    /// Include TEXT entities in the output
    pub fn draw_text(mut self, enabled: bool) -> Self {
        self.draw_text = enabled;
        self
    }

    /// Include MTEXT entities in the output
    pub fn draw_mtext(mut self, enabled: bool) -> Self {
        self.draw_mtext = enabled;
        self
    }

    /// Include DIMENSION entities in the output
    pub fn draw_dimensions(mut self, enabled: bool) -> Self {
        self.draw_dimensions = enabled;
        self
    }

    /// Choose the unitless fallback: millimeters when `true` (the
    /// default), inches when `false`
    pub fn millimeter_fallback(mut self, enabled: bool) -> Self {
        self.millimeter_fallback = enabled;
        self
    }

    /// Inject a platform glyph outliner for TEXT/MTEXT
    pub fn with_outliner(mut self, outliner: Box<dyn GlyphOutliner>) -> Self {
        self.outliner = outliner;
        self
    }

    /// Convert a DXF byte stream.
    ///
    /// `max_size` / `min_size` bound the longest axis of the output in
    /// inches; a non-positive value disables that side of the fit.
    pub fn convert<R: Read>(&self, source: R, max_size: f64, min_size: f64) -> Result<Drawing> {
        let mut driver = Driver::new(self.millimeter_fallback);
        driver.run(TagReader::new(source))?;

        let items = driver.items;
        let blocks = driver.blocks;
        let header = driver.header;
        let units = driver.units;
        let mut notifications = driver.notifications;

        let mut ctx = RenderCtx {
            blocks: &blocks,
            outliner: self.outliner.as_ref(),
            notifications: &mut notifications,
            depth: 0,
        };
        let filters = DrawFilters {
            text: self.draw_text,
            mtext: self.draw_mtext,
            dimensions: self.draw_dimensions,
        };
        let finalized = finalize::finalize(&items, &mut ctx, filters, max_size, min_size);

        if finalized.shapes.is_empty() {
            notifications.notify(NotificationType::Warning, "no drawable entities");
        }

        Ok(Drawing {
            shapes: finalized.shapes,
            bounds: finalized.bounds,
            units,
            scaled: finalized.scaled,
            header,
            notifications,
        })
    }

    /// Convert a DXF file from disk
    pub fn convert_file<P: AsRef<Path>>(
        &self,
        path: P,
        max_size: f64,
        min_size: f64,
    ) -> Result<Drawing> {
        self.convert(File::open(path)?, max_size, min_size)
    }
}

impl Default for DxfConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for DxfConverter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DxfConverter")
            .field("draw_text", &self.draw_text)
            .field("draw_mtext", &self.draw_mtext)
            .field("draw_dimensions", &self.draw_dimensions)
            .field("millimeter_fallback", &self.millimeter_fallback)
            .finish_non_exhaustive()
    }
}

/// The result of a conversion
#[derive(Debug)]
pub struct Drawing {
    /// Resolved shapes, in inches, fitted and Y-flipped
    pub shapes: Vec<Shape>,
    /// Union bounds before fitting, in inches
    pub bounds: Option<Bounds>,
    /// The drawing unit the coordinates were read in
    pub units: Units,
    /// Whether a fit scale was applied
    pub scaled: bool,
    header: AHashMap<String, String>,
    /// Non-fatal diagnostics collected during the conversion
    pub notifications: NotificationCollection,
}

impl Drawing {
    /// Look up a header variable captured during the parse
    pub fn header_variable(&self, name: &str) -> Option<&str> {
        self.header.get(name).map(String::as_str)
    }

    /// Whether the conversion produced no geometry
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn convert(source: &str) -> Drawing {
        DxfConverter::new()
            .convert(Cursor::new(source.as_bytes().to_vec()), 0.0, 0.0)
            .unwrap()
    }

    #[test]
    fn test_minimal_line_drawing() {
        let drawing = convert(
            "0\nSECTION\n2\nENTITIES\n0\nLINE\n10\n0\n20\n0\n11\n25.4\n21\n0\n0\nENDSEC\n0\nEOF\n",
        );
        assert_eq!(drawing.shapes.len(), 1);
        assert_eq!(drawing.units, Units::Millimeters);
        // 25.4 mm = 1 inch
        assert!((drawing.bounds.unwrap().width() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_drawing_flagged() {
        let drawing = convert("0\nSECTION\n2\nENTITIES\n0\nENDSEC\n0\nEOF\n");
        assert!(drawing.is_empty());
        assert!(drawing.bounds.is_none());
        assert!(drawing
            .notifications
            .has_type(NotificationType::Warning));
    }

    #[test]
    fn test_header_variable_accessor() {
        let drawing = convert(
            "0\nSECTION\n2\nHEADER\n9\n$INSUNITS\n70\n1\n9\n$ACADVER\n1\nAC1027\n0\nENDSEC\n0\nEOF\n",
        );
        assert_eq!(drawing.header_variable("$ACADVER"), Some("AC1027"));
        assert_eq!(drawing.header_variable("$INSUNITS"), Some("1"));
        assert_eq!(drawing.header_variable("$NOPE"), None);
        assert_eq!(drawing.units, Units::Inches);
    }
}
