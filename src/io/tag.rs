//! Tagged-group stream reader
//!
//! A DXF record is a pair of lines: a signed integer group code and an
//! opaque value. The reader is a lazy producer over any byte source;
//! it trims surrounding whitespace (CR/LF and LF line endings both work)
//! and decodes non-UTF-8 bytes through a Windows-1252 fallback.

use crate::error::{DxfError, Result};
use std::io::{BufReader, Read};

/// A single group code / value record
#[derive(Debug, Clone, PartialEq)]
pub struct TagPair {
    /// The group code
    pub code: i32,
    /// The value line, trimmed
    pub value: String,
}

impl TagPair {
    /// Create a new record
    pub fn new(code: i32, value: impl Into<String>) -> Self {
        TagPair {
            code,
            value: value.into(),
        }
    }
}

/// Lazy reader of tag records
pub struct TagReader<R: Read> {
    reader: BufReader<R>,
    line_number: usize,
}

impl<R: Read> TagReader<R> {
    /// Create a new tag reader over a byte source
    pub fn new(source: R) -> Self {
        TagReader {
            reader: BufReader::new(source),
            line_number: 0,
        }
    }

    /// Read a single trimmed line. Returns `None` at a clean EOF.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut bytes = Vec::new();
        loop {
            let mut byte = [0u8; 1];
            match self.reader.read(&mut byte) {
                Ok(0) => {
                    if bytes.is_empty() {
                        return Ok(None);
                    }
                    break;
                }
                Ok(_) => {
                    if byte[0] == b'\n' {
                        break;
                    }
                    bytes.push(byte[0]);
                }
                Err(e) => return Err(e.into()),
            }
        }

        self.line_number += 1;

        let line = match String::from_utf8(bytes) {
            Ok(s) => s,
            Err(e) => {
                let raw_bytes = e.into_bytes();
                let (decoded, _, _) = encoding_rs::WINDOWS_1252.decode(&raw_bytes);
                decoded.into_owned()
            }
        };
        Ok(Some(line.trim().to_string()))
    }

    /// Read the next record. Returns `None` at a clean EOF; fails with
    /// [`DxfError::MalformedStream`] on a non-numeric code line or a
    /// truncated final pair.
    pub fn read_pair(&mut self) -> Result<Option<TagPair>> {
        // tolerate stray blank lines between records
        let code_line = loop {
            match self.read_line()? {
                Some(line) if line.is_empty() => continue,
                Some(line) => break line,
                None => return Ok(None),
            }
        };

        let code = code_line
            .parse::<i32>()
            .map_err(|_| DxfError::MalformedStream {
                line: self.line_number,
                message: format!("invalid group code {code_line:?}"),
            })?;

        let value = self
            .read_line()?
            .ok_or_else(|| DxfError::MalformedStream {
                line: self.line_number,
                message: format!("unexpected EOF after group code {code}"),
            })?;

        Ok(Some(TagPair::new(code, value)))
    }
}
