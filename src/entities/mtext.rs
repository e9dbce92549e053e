//! MText entity interpreter
//!
//! MTEXT values carry inline backslash formatting codes. Only the first
//! paragraph is rendered; long first lines are shortened with an ellipsis
//! when the entity declares a reference width. Rotation comes from the
//! X-axis direction vector rather than an angle group.

use super::text::justify_offsets;
use super::{parse_f64, parse_i64, RenderCtx, ParseCtx};
use crate::error::Result;
use crate::geom::Shape;
use crate::glyph::GlyphRequest;
use crate::types::{Transform2, Vector2};

/// Longest first line rendered verbatim when a reference width is set
const TRUNCATE_LEN: usize = 30;

/// A multi-line text entity
#[derive(Debug, Clone, Default)]
pub struct MText {
    /// Raw value with inline codes (groups 3 then 1, concatenated)
    pub value: String,
    /// Insertion point (groups 10/20)
    pub insertion: Vector2,
    /// Text height (group 40)
    pub height: f64,
    /// Reference column width (group 41)
    pub ref_width: f64,
    /// X-axis direction vector (groups 11/21)
    pub direction: Vector2,
    /// Attachment point 1..=9 (group 71)
    pub attachment: i64,
    discarded: bool,
}

impl MText {
    /// Create a new mtext interpreter
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn add_parm(&mut self, code: i32, value: &str, ctx: &ParseCtx) -> Result<bool> {
        match code {
            // long values arrive as 3-group chunks followed by a final 1
            1 | 3 => self.value.push_str(value),
            10 => self.insertion.x = parse_f64(code, value)? * ctx.uscale,
            20 => self.insertion.y = parse_f64(code, value)? * ctx.uscale,
            40 => self.height = parse_f64(code, value)? * ctx.uscale,
            41 => self.ref_width = parse_f64(code, value)? * ctx.uscale,
            11 => self.direction.x = parse_f64(code, value)?,
            21 => self.direction.y = parse_f64(code, value)?,
            71 => self.attachment = parse_i64(code, value)?,
            _ => {}
        }
        Ok(false)
    }

    pub(crate) fn shape(&self, ctx: &mut RenderCtx<'_>) -> Option<Shape> {
        let lines = parse_inline_codes(&self.value);
        let mut line = lines.into_iter().next().unwrap_or_default();
        if line.is_empty() {
            return None;
        }
        if self.ref_width > 0.0 && line.chars().count() > TRUNCATE_LEN {
            line = line.chars().take(TRUNCATE_LEN).collect();
            line.push('…');
        }

        let request = GlyphRequest::new(line, self.height * 10.0);
        let outline = ctx.outliner.outline(&request);
        let bounds = outline.bounds()?;

        let rotation = self.direction.y.atan2(self.direction.x);
        let (h, v) = attachment_justification(self.attachment);
        let (jx, jy) = justify_offsets(&bounds, h, v);

        let xform = Transform2::translation(self.insertion.x, self.insertion.y)
            * Transform2::rotation(rotation)
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

/// Map an MTEXT attachment point (1..=9, top-left to bottom-right) onto
/// the TEXT justification codes.
fn attachment_justification(attachment: i64) -> (i64, i64) {
    if !(1..=9).contains(&attachment) {
        return (0, 3);
    }
    let h = match (attachment - 1) % 3 {
        1 => 1,
        2 => 2,
        _ => 0,
    };
    let v = match (attachment - 1) / 3 {
        0 => 3,
        1 => 2,
        _ => 1,
    };
    (h, v)
}

/// Split an MTEXT value into paragraph lines, resolving the inline codes.
///
/// Parameterized codes (`\A`, `\C`, `\F`, `\H`, `\Q`, `\T`, `\W`) are
/// consumed up to their terminating semicolon and dropped. `\S` builds a
/// stacked fraction. `\P` breaks the paragraph. Braces group without
/// effect and `\\`, `\{`, `\}` escape the literals.
pub(crate) fn parse_inline_codes(value: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut buf = String::new();
    let mut chars = value.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some('A' | 'C' | 'F' | 'H' | 'Q' | 'T' | 'W') => {
                    for p in chars.by_ref() {
                        if p == ';' {
                            break;
                        }
                    }
                }
                Some('S') => {
                    let mut body = String::new();
                    for p in chars.by_ref() {
                        if p == ';' {
                            break;
                        }
                        body.push(p);
                    }
                    buf.push_str(&stacked_fraction(&body));
                }
                Some('P') => lines.push(std::mem::take(&mut buf)),
                Some('\\') => buf.push('\\'),
                Some('{') => buf.push('{'),
                Some('}') => buf.push('}'),
                Some(other) => buf.push(other),
                None => {}
            },
            '{' | '}' => {}
            _ => buf.push(c),
        }
    }
    lines.push(buf);
    lines
}

/// Render a `\S` stacked-fraction body. The common vulgar fractions get
/// their dedicated code points; everything else keeps its numerator and
/// denominator around a fraction slash.
fn stacked_fraction(body: &str) -> String {
    match body.split_once('/') {
        Some(("1", "2")) => "½".to_string(),
        Some(("1", "3")) => "⅓".to_string(),
        Some(("1", "4")) => "¼".to_string(),
        Some(("2", "3")) => "⅔".to_string(),
        Some(("3", "4")) => "¾".to_string(),
        Some((num, den)) => format!("{num}⁄{den}"),
        None => body.to_string(),
    }
}
