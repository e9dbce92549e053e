//! Text entity interpreter
//!
//! TEXT carries a single line with `%%` control sequences. Glyph
//! outlining happens behind the injected [`crate::GlyphOutliner`]; the
//! interpreter asks for the outline at ten times the entity height (so
//! integer-point outliners keep usable precision) and scales the result
//! back down while flipping it out of the font's Y-down space.

use super::{parse_f64, parse_i64, RenderCtx, ParseCtx};
use crate::error::Result;
use crate::geom::Shape;
use crate::glyph::GlyphRequest;
use crate::types::{Bounds, Transform2, Vector2};

/// A single-line text entity
#[derive(Debug, Clone, Default)]
pub struct Text {
    /// Text value with control codes resolved (group 1)
    pub value: String,
    /// Insertion point (groups 10/20)
    pub insertion: Vector2,
    /// Second alignment point (groups 11/21)
    pub alignment: Vector2,
    /// Text height (group 40)
    pub height: f64,
    /// Rotation in degrees (group 50)
    pub rotation: f64,
    /// Horizontal justification (group 72)
    pub h_justify: i64,
    /// Vertical justification (group 73)
    pub v_justify: i64,
    discarded: bool,
}

impl Text {
    /// Create a new text interpreter
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn add_parm(&mut self, code: i32, value: &str, ctx: &ParseCtx) -> Result<bool> {
        match code {
            1 => self.value = decode_control_codes(value),
            10 => self.insertion.x = parse_f64(code, value)? * ctx.uscale,
            20 => self.insertion.y = parse_f64(code, value)? * ctx.uscale,
            11 => self.alignment.x = parse_f64(code, value)? * ctx.uscale,
            21 => self.alignment.y = parse_f64(code, value)? * ctx.uscale,
            40 => self.height = parse_f64(code, value)? * ctx.uscale,
            50 => self.rotation = parse_f64(code, value)?,
            72 => self.h_justify = parse_i64(code, value)?,
            73 => self.v_justify = parse_i64(code, value)?,
            _ => {}
        }
        Ok(false)
    }

    pub(crate) fn shape(&self, ctx: &mut RenderCtx<'_>) -> Option<Shape> {
        if self.value.is_empty() {
            return None;
        }
        let request = GlyphRequest::new(self.value.clone(), self.height * 10.0);
        let outline = ctx.outliner.outline(&request);
        let bounds = outline.bounds()?;

        let justified = self.h_justify != 0 || self.v_justify != 0;
        let (jx, jy) = justify_offsets(&bounds, self.h_justify, self.v_justify);
        let anchor = if justified {
            self.alignment
        } else {
            self.insertion
        };

        let xform = Transform2::translation(anchor.x, anchor.y)
            * Transform2::rotation(self.rotation.to_radians())
            * Transform2::scaling(0.1, -0.1)
            * Transform2::translation(jx, jy);
        Some(Shape::Path(outline.to_path().transformed(&xform)))
    }

    pub(crate) fn discard(&mut self) {
        self.discarded = true;
    }

    pub(crate) fn is_discarded(&self) -> bool {
        self.discarded
    }
}

/// Justification offsets in outline space (Y-down, baseline at zero).
///
/// Horizontal: 0 left, 1 center, 2 right, 4 middle. Vertical: 0 baseline,
/// 1 bottom, 2 middle, 3 top.
pub(crate) fn justify_offsets(bounds: &Bounds, h: i64, v: i64) -> (f64, f64) {
    let jx = match h {
        1 | 4 => -(bounds.min.x + bounds.width() / 2.0),
        2 => -bounds.max.x,
        _ => 0.0,
    };
    let jy = match v {
        1 => -bounds.max.y,
        2 => -(bounds.min.y + bounds.height() / 2.0),
        3 => -bounds.min.y,
        _ => 0.0,
    };
    (jx, jy)
}

/// Resolve `%%` control sequences: `%%d` degree sign, `%%p` plus/minus,
/// `%%c` diameter, `%%u`/`%%o` (underline/overline toggles) dropped,
/// `%%<digits>` replaced with U+FFFD.
pub(crate) fn decode_control_codes(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '%' || chars.peek() != Some(&'%') {
            out.push(c);
            continue;
        }
        chars.next();
        match chars.peek() {
            Some('d') | Some('D') => {
                chars.next();
                out.push('°');
            }
            Some('p') | Some('P') => {
                chars.next();
                out.push('±');
            }
            Some('c') | Some('C') => {
                chars.next();
                out.push('Ø');
            }
            Some('u') | Some('U') | Some('o') | Some('O') => {
                chars.next();
            }
            Some(d) if d.is_ascii_digit() => {
                while chars.peek().is_some_and(|c| c.is_ascii_digit()) {
                    chars.next();
                }
                out.push('\u{FFFD}');
            }
            Some(_) | None => {}
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glyph::PlaceholderOutliner;
    use crate::notification::NotificationCollection;
    use indexmap::IndexMap;

    #[test]
    fn test_control_codes() {
        assert_eq!(decode_control_codes("45%%d"), "45°");
        assert_eq!(decode_control_codes("%%p0.05"), "±0.05");
        assert_eq!(decode_control_codes("%%c12"), "Ø12");
        assert_eq!(decode_control_codes("%%uTITLE%%o"), "TITLE");
        assert_eq!(decode_control_codes("%%65B"), "\u{FFFD}B");
        assert_eq!(decode_control_codes("plain"), "plain");
    }

    #[test]
    fn test_justify_offsets() {
        let bounds = Bounds::new(Vector2::new(0.0, -10.0), Vector2::new(20.0, 2.0));
        assert_eq!(justify_offsets(&bounds, 0, 0), (0.0, 0.0));
        assert_eq!(justify_offsets(&bounds, 1, 0), (-10.0, 0.0));
        assert_eq!(justify_offsets(&bounds, 2, 0), (-20.0, 0.0));
        assert_eq!(justify_offsets(&bounds, 0, 3), (0.0, 10.0));
        assert_eq!(justify_offsets(&bounds, 0, 1), (0.0, -2.0));
    }

    #[test]
    fn test_shape_lands_at_insertion() {
        let ctx_parse = ParseCtx { uscale: 1.0 };
        let mut text = Text::new();
        text.add_parm(1, "X", &ctx_parse).unwrap();
        text.add_parm(10, "5.0", &ctx_parse).unwrap();
        text.add_parm(20, "3.0", &ctx_parse).unwrap();
        text.add_parm(40, "1.0", &ctx_parse).unwrap();

        let blocks = IndexMap::new();
        let outliner = PlaceholderOutliner;
        let mut notifications = NotificationCollection::new();
        let mut ctx = RenderCtx {
            blocks: &blocks,
            outliner: &outliner,
            notifications: &mut notifications,
            depth: 0,
        };
        let shape = text.shape(&mut ctx).expect("text produces a shape");
        let bounds = shape.bounds().unwrap();
        // placeholder X: one em tall, baseline at the insertion point
        assert!((bounds.min.x - 5.0).abs() < 1e-9);
        assert!((bounds.min.y - 3.0).abs() < 1e-9);
        assert!((bounds.height() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_text_has_no_shape() {
        let text = Text::new();
        let blocks = IndexMap::new();
        let outliner = PlaceholderOutliner;
        let mut notifications = NotificationCollection::new();
        let mut ctx = RenderCtx {
            blocks: &blocks,
            outliner: &outliner,
            notifications: &mut notifications,
            depth: 0,
        };
        assert!(text.shape(&mut ctx).is_none());
    }
}
