//! # dxfpath
//!
//! A pure Rust library for converting ASCII DXF drawings into flat lists
//! of 2D vector paths, in inches, fitted to a caller-supplied size window
//! and Y-flipped into a screen-style frame. The output is suitable for
//! display or for driving a cutting, plotting, or embroidery machine.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use dxfpath::DxfConverter;
//!
//! let drawing = DxfConverter::new()
//!     .draw_text(true)
//!     .convert_file("part.dxf", 8.0, 0.0)?;
//!
//! println!("units: {}, scaled: {}", drawing.units, drawing.scaled);
//! for shape in &drawing.shapes {
//!     println!("{:?}", shape.bounds());
//! }
//! # Ok::<(), dxfpath::DxfError>(())
//! ```
//!
//! ## Architecture
//!
//! - `io::TagReader` — lazy (group code, value) record producer
//! - `io` driver — the stack interpreter that tracks the assembling
//!   entity and its SECTION/BLOCK/POLYLINE ancestors
//! - `entities` — one interpreter per supported DXF type
//! - `geom` — the path/shape output model, bulge arcs, spline conversion
//! - `glyph` — the injected text-outline seam (TEXT/MTEXT never touch a
//!   font stack directly)
//!
//! The parser is forgiving by design: unknown entity types are skipped,
//! and a malformed number discards only the entity that carried it. Both
//! are reported as notifications on the returned [`Drawing`].

#![allow(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod entities;
pub mod error;
pub mod geom;
pub mod glyph;
pub mod io;
pub mod notification;
pub mod types;
pub mod units;

// Re-export commonly used types
pub use error::{DxfError, Result};
pub use geom::{ArcSeg, EllipticalArcSeg, Path, PathCmd, Shape};
pub use glyph::{GlyphOutliner, GlyphRequest, PlaceholderOutliner};
pub use io::{Drawing, DxfConverter};
pub use notification::{Notification, NotificationCollection, NotificationType};
pub use types::{Bounds, Transform2, Vector2};
pub use units::Units;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_converter_defaults() {
        let drawing = DxfConverter::new()
            .convert(std::io::Cursor::new(b"0\nEOF\n".to_vec()), 0.0, 0.0)
            .unwrap();
        assert!(drawing.is_empty());
        assert_eq!(drawing.units, Units::Millimeters);
    }
}
