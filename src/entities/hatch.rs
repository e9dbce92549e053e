//! Hatch entity interpreter
//!
//! HATCH boundaries are not converted to geometry; the interpreter exists
//! only so the entity's (large) group stream is consumed without
//! disturbing the parse stack.

use super::ParseCtx;
use crate::error::Result;

/// A hatch fill; accepted, never drawn
#[derive(Debug, Clone, Copy, Default)]
pub struct Hatch;

impl Hatch {
    /// Create a new hatch interpreter
    pub fn new() -> Self {
        Hatch
    }

    pub(crate) fn add_parm(&mut self, _code: i32, _value: &str, _ctx: &ParseCtx) -> Result<bool> {
        Ok(false)
    }
}
