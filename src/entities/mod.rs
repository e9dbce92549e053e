//! DXF entity interpreters
//!
//! One interpreter per supported DXF object type. Each consumes the
//! tagged groups the driver forwards to it, adopts completed children
//! where the format nests entities, and resolves its geometry when the
//! driver pops it off the parse stack. The [`Entity`] enum keeps the
//! driver's dispatch explicit; there is no inheritance hierarchy.

use crate::error::{DxfError, Result};
use crate::geom::Shape;
use crate::glyph::GlyphOutliner;
use crate::notification::NotificationCollection;
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use std::collections::HashMap;

pub mod arc;
pub mod block;
pub mod circle;
pub mod dimension;
pub mod ellipse;
pub mod hatch;
pub mod header;
pub mod insert;
pub mod line;
pub mod lwpolyline;
pub mod mtext;
pub mod polyline;
pub mod section;
pub mod spline;
pub mod text;

pub use arc::Arc;
pub use block::{BlockDef, BlockFlags};
pub use circle::Circle;
pub use dimension::Dimension;
pub use ellipse::Ellipse;
pub use hatch::Hatch;
pub use header::Header;
pub use insert::Insert;
pub use line::Line;
pub use lwpolyline::{LwPolyline, LwPolylineFlags, LwVertex};
pub use mtext::MText;
pub use polyline::{Polyline, PolylineFlags, Vertex};
pub use section::{Section, Table};
pub use spline::{Spline, SplineFlags};
pub use text::Text;

/// Values interpreters need while consuming groups
#[derive(Debug, Clone, Copy)]
pub struct ParseCtx {
    /// Inches per drawing unit; multiplies every coordinate as it is read
    pub uscale: f64,
}

/// Values draw items need to resolve their shapes after parsing
pub struct RenderCtx<'a> {
    /// Block dictionary accumulated during the parse
    pub blocks: &'a IndexMap<String, BlockDef>,
    /// Injected glyph outliner for TEXT/MTEXT
    pub outliner: &'a dyn GlyphOutliner,
    /// Diagnostics sink
    pub notifications: &'a mut NotificationCollection,
    /// Current block expansion depth
    pub depth: u32,
}

pub(crate) fn parse_f64(code: i32, value: &str) -> Result<f64> {
    value
        .trim()
        .parse()
        .map_err(|_| DxfError::MalformedNumeric {
            code,
            value: value.to_string(),
        })
}

pub(crate) fn parse_i64(code: i32, value: &str) -> Result<i64> {
    value
        .trim()
        .parse()
        .map_err(|_| DxfError::MalformedNumeric {
            code,
            value: value.to_string(),
        })
}

/// All interpreter variants the driver can hold
#[derive(Debug)]
pub enum Entity {
    /// SECTION container
    Section(Section),
    /// HEADER variable collector
    Header(Header),
    /// Opaque TABLE container
    Table(Table),
    /// BLOCK definition
    Block(BlockDef),
    /// INSERT block reference
    Insert(Insert),
    /// Heavy POLYLINE
    Polyline(Polyline),
    /// POLYLINE vertex
    Vertex(Vertex),
    /// Lightweight polyline
    LwPolyline(LwPolyline),
    /// Control-point spline
    Spline(Spline),
    /// Straight line
    Line(Line),
    /// Full circle
    Circle(Circle),
    /// Circular arc
    Arc(Arc),
    /// Ellipse
    Ellipse(Ellipse),
    /// Single-line text
    Text(Text),
    /// Multi-line text
    MText(MText),
    /// Dimension annotation
    Dimension(Dimension),
    /// Hatch fill (consumed, never drawn)
    Hatch(Hatch),
}

type EntityCtor = fn() -> Entity;

/// Keyword → constructor registry the driver consults for freestanding
/// entities. Structural keywords (SECTION, BLOCK, POLYLINE, VERTEX,
/// SEQEND, ...) are driver decision-table arms, not registry entries.
static REGISTRY: Lazy<HashMap<&'static str, EntityCtor>> = Lazy::new(|| {
    let mut m: HashMap<&'static str, EntityCtor> = HashMap::new();
    m.insert("LINE", || Entity::Line(Line::new()));
    m.insert("CIRCLE", || Entity::Circle(Circle::new()));
    m.insert("ARC", || Entity::Arc(Arc::new()));
    m.insert("ELLIPSE", || Entity::Ellipse(Ellipse::new()));
    m.insert("LWPOLYLINE", || Entity::LwPolyline(LwPolyline::new()));
    m.insert("SPLINE", || Entity::Spline(Spline::new()));
    m.insert("TEXT", || Entity::Text(Text::new()));
    m.insert("MTEXT", || Entity::MText(MText::new()));
    m.insert("INSERT", || Entity::Insert(Insert::new()));
    m.insert("DIMENSION", || Entity::Dimension(Dimension::new()));
    m.insert("HATCH", || Entity::Hatch(Hatch::new()));
    m
});

impl Entity {
    /// Construct the interpreter registered for a keyword
    pub fn from_keyword(keyword: &str) -> Option<Entity> {
        REGISTRY.get(keyword).map(|ctor| ctor())
    }

    /// Whether the interpreter closes implicitly on the next code-0
    /// keyword. POLYLINE does not; it waits for SEQEND.
    pub fn auto_pop(&self) -> bool {
        matches!(
            self,
            Entity::Line(_)
                | Entity::Circle(_)
                | Entity::Arc(_)
                | Entity::Ellipse(_)
                | Entity::LwPolyline(_)
                | Entity::Spline(_)
                | Entity::Text(_)
                | Entity::MText(_)
                | Entity::Insert(_)
                | Entity::Dimension(_)
                | Entity::Hatch(_)
        )
    }

    /// Whether the variant participates in the draw list
    pub fn is_draw_item(&self) -> bool {
        !matches!(
            self,
            Entity::Section(_)
                | Entity::Header(_)
                | Entity::Table(_)
                | Entity::Block(_)
                | Entity::Vertex(_)
        )
    }

    /// Consume one non-structural group. Returns true when the entity is
    /// complete immediately after this group.
    pub fn add_parm(&mut self, code: i32, value: &str, ctx: &ParseCtx) -> Result<bool> {
        match self {
            Entity::Section(e) => e.add_parm(code, value),
            Entity::Header(e) => e.add_parm(code, value),
            Entity::Table(_) => Ok(false),
            Entity::Block(e) => e.add_parm(code, value, ctx),
            Entity::Insert(e) => e.add_parm(code, value, ctx),
            Entity::Polyline(e) => e.add_parm(code, value, ctx),
            Entity::Vertex(e) => e.add_parm(code, value, ctx),
            Entity::LwPolyline(e) => e.add_parm(code, value, ctx),
            Entity::Spline(e) => e.add_parm(code, value, ctx),
            Entity::Line(e) => e.add_parm(code, value, ctx),
            Entity::Circle(e) => e.add_parm(code, value, ctx),
            Entity::Arc(e) => e.add_parm(code, value, ctx),
            Entity::Ellipse(e) => e.add_parm(code, value, ctx),
            Entity::Text(e) => e.add_parm(code, value, ctx),
            Entity::MText(e) => e.add_parm(code, value, ctx),
            Entity::Dimension(e) => e.add_parm(code, value, ctx),
            Entity::Hatch(e) => e.add_parm(code, value, ctx),
        }
    }

    /// Adopt a completed sub-entity
    pub fn add_child(&mut self, child: Entity) {
        match self {
            Entity::Polyline(p) => {
                if let Entity::Vertex(v) = child {
                    p.add_vertex(v);
                }
            }
            Entity::Block(b) => b.add_child(child),
            _ => {}
        }
    }

    /// Finalize internal geometry. Called exactly once when the driver
    /// pops the entity, including during the terminal sweep.
    pub fn close(&mut self) -> Result<()> {
        match self {
            Entity::Polyline(e) => e.close(),
            Entity::LwPolyline(e) => e.close(),
            Entity::Line(e) => e.close(),
            Entity::Circle(e) => e.close(),
            Entity::Arc(e) => e.close(),
            Entity::Ellipse(e) => e.close(),
            _ => {}
        }
        Ok(())
    }

    /// Resolve the entity's planar shape, if it produces one
    pub fn shape(&self, ctx: &mut RenderCtx<'_>) -> Option<Shape> {
        if self.is_discarded() {
            return None;
        }
        match self {
            Entity::Insert(e) => e.shape(ctx),
            Entity::Polyline(e) => e.shape(),
            Entity::LwPolyline(e) => e.shape(),
            Entity::Spline(e) => e.shape(),
            Entity::Line(e) => e.shape(),
            Entity::Circle(e) => e.shape(),
            Entity::Arc(e) => e.shape(),
            Entity::Ellipse(e) => e.shape(),
            Entity::Text(e) => e.shape(ctx),
            Entity::MText(e) => e.shape(ctx),
            Entity::Dimension(e) => e.shape(ctx),
            _ => None,
        }
    }

    /// Poison the entity after a malformed numeric group; it will be kept
    /// on the stack for structural integrity but never produce a shape.
    pub fn discard(&mut self) {
        match self {
            Entity::Block(e) => e.discard(),
            Entity::Insert(e) => e.discard(),
            Entity::Polyline(e) => e.discard(),
            Entity::Vertex(e) => e.discard(),
            Entity::LwPolyline(e) => e.discard(),
            Entity::Spline(e) => e.discard(),
            Entity::Line(e) => e.discard(),
            Entity::Circle(e) => e.discard(),
            Entity::Arc(e) => e.discard(),
            Entity::Ellipse(e) => e.discard(),
            Entity::Text(e) => e.discard(),
            Entity::MText(e) => e.discard(),
            _ => {}
        }
    }

    /// Whether the entity was poisoned by a malformed numeric group
    pub fn is_discarded(&self) -> bool {
        match self {
            Entity::Block(e) => e.is_discarded(),
            Entity::Insert(e) => e.is_discarded(),
            Entity::Polyline(e) => e.is_discarded(),
            Entity::Vertex(e) => e.is_discarded(),
            Entity::LwPolyline(e) => e.is_discarded(),
            Entity::Spline(e) => e.is_discarded(),
            Entity::Line(e) => e.is_discarded(),
            Entity::Circle(e) => e.is_discarded(),
            Entity::Arc(e) => e.is_discarded(),
            Entity::Ellipse(e) => e.is_discarded(),
            Entity::Text(e) => e.is_discarded(),
            Entity::MText(e) => e.is_discarded(),
            _ => false,
        }
    }

    /// DXF keyword for diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            Entity::Section(_) => "SECTION",
            Entity::Header(_) => "HEADER",
            Entity::Table(_) => "TABLE",
            Entity::Block(_) => "BLOCK",
            Entity::Insert(_) => "INSERT",
            Entity::Polyline(_) => "POLYLINE",
            Entity::Vertex(_) => "VERTEX",
            Entity::LwPolyline(_) => "LWPOLYLINE",
            Entity::Spline(_) => "SPLINE",
            Entity::Line(_) => "LINE",
            Entity::Circle(_) => "CIRCLE",
            Entity::Arc(_) => "ARC",
            Entity::Ellipse(_) => "ELLIPSE",
            Entity::Text(_) => "TEXT",
            Entity::MText(_) => "MTEXT",
            Entity::Dimension(_) => "DIMENSION",
            Entity::Hatch(_) => "HATCH",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_keywords() {
        for keyword in [
            "LINE",
            "CIRCLE",
            "ARC",
            "ELLIPSE",
            "LWPOLYLINE",
            "SPLINE",
            "TEXT",
            "MTEXT",
            "INSERT",
            "DIMENSION",
            "HATCH",
        ] {
            let entity = Entity::from_keyword(keyword)
                .unwrap_or_else(|| panic!("{keyword} not registered"));
            assert_eq!(entity.type_name(), keyword);
        }
        assert!(Entity::from_keyword("WIPEOUT").is_none());
        assert!(Entity::from_keyword("POLYLINE").is_none());
    }

    #[test]
    fn test_auto_pop_markers() {
        assert!(Entity::from_keyword("LINE").unwrap().auto_pop());
        assert!(Entity::from_keyword("HATCH").unwrap().auto_pop());
        assert!(!Entity::Polyline(Polyline::new()).auto_pop());
        assert!(!Entity::Block(BlockDef::new()).auto_pop());
        assert!(!Entity::Vertex(Vertex::new()).auto_pop());
    }

    #[test]
    fn test_draw_item_classification() {
        assert!(Entity::from_keyword("SPLINE").unwrap().is_draw_item());
        assert!(Entity::from_keyword("HATCH").unwrap().is_draw_item());
        assert!(!Entity::Section(Section::new()).is_draw_item());
        assert!(!Entity::Header(Header::new()).is_draw_item());
        assert!(!Entity::Block(BlockDef::new()).is_draw_item());
        assert!(!Entity::Vertex(Vertex::new()).is_draw_item());
    }

    #[test]
    fn test_discard_suppresses_shape() {
        let ctx = ParseCtx { uscale: 1.0 };
        let mut line = Entity::from_keyword("LINE").unwrap();
        line.add_parm(10, "0", &ctx).unwrap();
        line.add_parm(20, "0", &ctx).unwrap();
        line.add_parm(11, "1", &ctx).unwrap();
        line.add_parm(21, "1", &ctx).unwrap();
        line.close().unwrap();
        line.discard();

        let blocks = IndexMap::new();
        let outliner = crate::glyph::PlaceholderOutliner;
        let mut notifications = NotificationCollection::new();
        let mut render = RenderCtx {
            blocks: &blocks,
            outliner: &outliner,
            notifications: &mut notifications,
            depth: 0,
        };
        assert!(line.shape(&mut render).is_none());
    }
}
