//! Shared test utilities for dxfpath integration tests.

#![allow(dead_code)]

use dxfpath::{Drawing, DxfConverter};
use std::fmt::Display;
use std::fmt::Write as _;
use std::io::Cursor;

/// Incremental DXF source builder.
///
/// ```ignore
/// let source = DxfBuilder::new()
///     .header_units(4)
///     .section("ENTITIES")
///     .record(0, "LINE")
///     .record(10, 0.0)
///     ...
///     .endsec()
///     .build();
/// ```
#[derive(Debug, Default, Clone)]
pub struct DxfBuilder {
    out: String,
}

impl DxfBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one (group code, value) record
    pub fn record(mut self, code: i32, value: impl Display) -> Self {
        writeln!(self.out, "{code}").unwrap();
        writeln!(self.out, "{value}").unwrap();
        self
    }

    /// Open a named section
    pub fn section(self, name: &str) -> Self {
        self.record(0, "SECTION").record(2, name)
    }

    /// Close the current section
    pub fn endsec(self) -> Self {
        self.record(0, "ENDSEC")
    }

    /// A HEADER section declaring `$INSUNITS`
    pub fn header_units(self, insunits: i64) -> Self {
        self.section("HEADER")
            .record(9, "$INSUNITS")
            .record(70, insunits)
            .endsec()
    }

    /// Append raw source text verbatim
    pub fn raw(mut self, text: &str) -> Self {
        self.out.push_str(text);
        self
    }

    /// Finish with the EOF keyword
    pub fn build(self) -> String {
        self.record(0, "EOF").out
    }
}

/// Append an open or closed polyline with `(x, y, bulge)` vertices
pub fn polyline(builder: DxfBuilder, closed: bool, vertices: &[(f64, f64, f64)]) -> DxfBuilder {
    let mut b = builder
        .record(0, "POLYLINE")
        .record(70, i32::from(closed));
    for (x, y, bulge) in vertices {
        b = b.record(0, "VERTEX").record(10, x).record(20, y);
        if *bulge != 0.0 {
            b = b.record(42, bulge);
        }
    }
    b.record(0, "SEQEND")
}

/// Convert a built source with the default converter
pub fn convert(source: &str, max_size: f64, min_size: f64) -> Drawing {
    convert_with(DxfConverter::new(), source, max_size, min_size)
}

/// Convert a built source with a configured converter
pub fn convert_with(
    converter: DxfConverter,
    source: &str,
    max_size: f64,
    min_size: f64,
) -> Drawing {
    converter
        .convert(Cursor::new(source.as_bytes().to_vec()), max_size, min_size)
        .expect("conversion failed")
}

/// Assert two floats agree to within `tol`
pub fn assert_close(actual: f64, expected: f64, tol: f64) {
    assert!(
        (actual - expected).abs() <= tol,
        "expected {expected}, got {actual}"
    );
}
