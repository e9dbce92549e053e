//! Interpreter stack driver
//!
//! DXF's grammar is implicit: an entity ends when the next entity's
//! keyword arrives. The driver tracks the currently-assembling entity and
//! its ancestors (SECTION, BLOCK, POLYLINE containers) on a stack, routes
//! every non-structural group to the current interpreter, and moves each
//! entity to its destination — the top-level draw list, the enclosing
//! block's children, or the block dictionary — when it is popped.

use super::tag::{TagPair, TagReader};
use crate::entities::{BlockDef, Entity, Header, ParseCtx, Polyline, Section, Table, Vertex};
use crate::error::{DxfError, Result};
use crate::notification::{NotificationCollection, NotificationType};
use crate::units::Units;
use ahash::AHashMap;
use indexmap::IndexMap;
use std::io::Read;

/// Owns all mutable parse state for one conversion
pub(crate) struct Driver {
    stack: Vec<Entity>,
    current: Option<Entity>,
    /// Completed top-level draw items
    pub items: Vec<Entity>,
    /// Block dictionary, keyed by block name
    pub blocks: IndexMap<String, BlockDef>,
    /// Header variables published when the HEADER section closed
    pub header: AHashMap<String, String>,
    /// Resolved drawing units
    pub units: Units,
    /// Diagnostics collected along the way
    pub notifications: NotificationCollection,
    uscale: f64,
    millimeter_fallback: bool,
}

impl Driver {
    pub fn new(millimeter_fallback: bool) -> Self {
        let units = Units::from_insunits(None, millimeter_fallback);
        Driver {
            stack: Vec::new(),
            current: None,
            items: Vec::new(),
            blocks: IndexMap::new(),
            header: AHashMap::new(),
            units,
            notifications: NotificationCollection::new(),
            uscale: units.inches_per_unit(),
            millimeter_fallback,
        }
    }

    /// Consume the whole tag stream, then run the terminal sweep so every
    /// still-open entity is closed exactly once.
    pub fn run<R: Read>(&mut self, mut reader: TagReader<R>) -> Result<()> {
        while let Some(pair) = reader.read_pair()? {
            self.dispatch(&pair)?;
        }
        while self.current.is_some() || !self.stack.is_empty() {
            self.pop();
        }
        Ok(())
    }

    /// Route a non-structural group to the current interpreter. A
    /// malformed numeric value poisons the entity and parsing continues;
    /// everything else propagates.
    fn parm(&mut self, pair: &TagPair) -> Result<()> {
        let ctx = ParseCtx {
            uscale: self.uscale,
        };
        let Some(current) = self.current.as_mut() else {
            return Ok(());
        };
        if current.is_discarded() {
            return Ok(());
        }
        match current.add_parm(pair.code, &pair.value, &ctx) {
            Ok(true) => self.pop(),
            Ok(false) => {}
            Err(DxfError::MalformedNumeric { code, value }) => {
                let name = current.type_name();
                current.discard();
                self.notifications.notify(
                    NotificationType::DiscardedEntity,
                    format!("{name} discarded: group {code} value {value:?} is not numeric"),
                );
            }
            Err(e) => return Err(e),
        }
        Ok(())
    }

    /// Code-0 decision table
    fn keyword(&mut self, name: &str) {
        if self.current.as_ref().is_some_and(Entity::auto_pop) {
            self.pop();
        }

        match name {
            "SECTION" => self.push_current(Entity::Section(Section::new())),
            "ENDSEC" => self.end_section(),
            "TABLE" => self.push_current(Entity::Table(Table::new())),
            "ENDTAB" => self.pop(),
            "BLOCK" => self.push_current(Entity::Block(BlockDef::new())),
            "ENDBLK" => {
                self.pop();
                while matches!(self.current, Some(Entity::Block(_))) {
                    self.pop();
                }
            }
            "POLYLINE" => self.push_current(Entity::Polyline(Polyline::new())),
            "VERTEX" => {
                if matches!(self.current, Some(Entity::Vertex(_))) {
                    self.pop();
                }
                self.push_current(Entity::Vertex(Vertex::new()));
            }
            "SEQEND" => {
                while let Some(current) = self.current.as_ref() {
                    if matches!(current, Entity::Block(_)) {
                        break;
                    }
                    self.pop();
                }
            }
            "EOF" => {}
            _ => match Entity::from_keyword(name) {
                Some(entity) => self.push_current(entity),
                None => {
                    // unknown entity type: park the enclosing container and
                    // swallow the stranger's groups until the next keyword
                    if let Some(current) = self.current.take() {
                        self.stack.push(current);
                    }
                    self.notifications.notify(
                        NotificationType::SkippedEntity,
                        format!("unsupported entity type {name:?} skipped"),
                    );
                }
            },
        }
    }

    /// Make `entity` the current interpreter, keeping the previous one on
    /// the stack for when this one pops.
    fn push_current(&mut self, entity: Entity) {
        if let Some(previous) = self.current.replace(entity) {
            self.stack.push(previous);
        }
    }

    /// Close the current entity (or the stack top if there is none) and
    /// move it to its destination. The next outer entity becomes current.
    fn pop(&mut self) {
        let Some(mut entity) = self.current.take().or_else(|| self.stack.pop()) else {
            return;
        };

        if let Err(e) = entity.close() {
            self.notifications.notify(
                NotificationType::Warning,
                format!("{} failed to close: {e}", entity.type_name()),
            );
        }

        self.current = self.stack.pop();

        if entity.is_discarded() {
            return;
        }

        match entity {
            Entity::Block(block) => {
                if !block.name.is_empty() {
                    self.blocks.insert(block.name.clone(), block);
                }
            }
            Entity::Vertex(vertex) => {
                // a vertex is only legal while a polyline is assembling
                if let Some(Entity::Polyline(polyline)) = self.current.as_mut() {
                    polyline.add_vertex(vertex);
                }
            }
            entity if entity.is_draw_item() => match self.current.as_mut() {
                Some(Entity::Block(block)) => {
                    // anonymous dimension blocks promote their INSERTs to
                    // the top level instead of nesting them
                    if matches!(entity, Entity::Insert(_)) && block.is_dimension_block() {
                        self.items.push(entity);
                    } else {
                        block.add_child(entity);
                    }
                }
                _ => self.items.push(entity),
            },
            _ => {}
        }
    }

    /// ENDSEC: publish header variables and resolve units when the HEADER
    /// section closes, then abandon whatever is still assembling.
    fn end_section(&mut self) {
        let header = match self.current.take() {
            Some(Entity::Header(header)) => Some(header),
            other => {
                self.current = other;
                self.take_header_from_stack()
            }
        };
        if let Some(header) = header {
            let code = header
                .variable("$INSUNITS")
                .or_else(|| header.variable("$LUNITS"))
                .and_then(|v| v.trim().parse::<i64>().ok());
            self.units = Units::from_insunits(code, self.millimeter_fallback);
            self.uscale = self.units.inches_per_unit();
            self.header = header.into_variables();
        }
        self.stack.clear();
        self.current = None;
    }

    fn take_header_from_stack(&mut self) -> Option<Header> {
        let index = self
            .stack
            .iter()
            .position(|e| matches!(e, Entity::Header(_)))?;
        match self.stack.remove(index) {
            Entity::Header(header) => Some(header),
            _ => unreachable!(),
        }
    }

    /// The HEADER section is modeled by its own interpreter; swap it in
    /// as soon as the SECTION learns its type.
    pub(crate) fn note_section_type(&mut self) {
        if matches!(self.current.as_ref(), Some(Entity::Section(s)) if s.is_header()) {
            self.current = Some(Entity::Header(Header::new()));
        }
    }

    /// Feed one record through the decision table.
    pub fn dispatch(&mut self, pair: &TagPair) -> Result<()> {
        if pair.code == 0 {
            self.keyword(&pair.value);
            Ok(())
        } else {
            let result = self.parm(pair);
            if pair.code == 2 {
                self.note_section_type();
            }
            result
        }
    }

    /// Remaining open-entity count, exposed for the depth invariant
    #[cfg(test)]
    pub fn open_entities(&self) -> usize {
        self.stack.len() + usize::from(self.current.is_some())
    }
}
