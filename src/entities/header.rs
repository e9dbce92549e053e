//! HEADER section interpreter
//!
//! Group 9 names a header variable; the first value-bearing group that
//! follows stores into that slot. Only `$INSUNITS` and `$LUNITS` are read
//! downstream, but the whole map is kept and exposed on the result.

use ahash::AHashMap;
use crate::error::Result;

/// Collects header variables
#[derive(Debug, Clone, Default)]
pub struct Header {
    vars: AHashMap<String, String>,
    pending: Option<String>,
}

impl Header {
    /// Create a new header interpreter
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn add_parm(&mut self, code: i32, value: &str) -> Result<bool> {
        if code == 9 {
            self.pending = Some(value.to_string());
        } else if let Some(name) = self.pending.take() {
            self.vars.insert(name, value.to_string());
        }
        Ok(false)
    }

    /// Look up a variable by name (e.g. `"$INSUNITS"`)
    pub fn variable(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    /// Consume the interpreter into its variable map
    pub fn into_variables(self) -> AHashMap<String, String> {
        self.vars
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variable_slots() {
        let mut header = Header::new();
        header.add_parm(9, "$INSUNITS").unwrap();
        header.add_parm(70, "4").unwrap();
        header.add_parm(9, "$EXTMIN").unwrap();
        header.add_parm(10, "0.0").unwrap();
        header.add_parm(20, "1.0").unwrap();

        assert_eq!(header.variable("$INSUNITS"), Some("4"));
        // only the first value-bearing group fills a slot
        assert_eq!(header.variable("$EXTMIN"), Some("0.0"));
        assert_eq!(header.variable("$MISSING"), None);
    }
}
