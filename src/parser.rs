//! The LTSV parsing engine.
//!
//! This module provides the cursor-driven parser that turns raw text into a
//! [`Document`]. Parsing is a single forward pass with no backtracking:
//!
//! - **Character classes**: label and field-value bytes are recognized by
//!   the two predicates at the top of this module, taken from the LTSV
//!   grammar (see [`crate::format`])
//! - **Scanning**: the cursor consumes the longest run of bytes in a class
//!   and borrows it straight out of the input; owned copies are made only
//!   when a field is stored
//! - **Error reporting**: failures carry the offending byte and a 1-based
//!   line/column position
//!
//! Most users should use the high-level functions in the crate root:
//!
//! ```rust
//! let document = ltsv::parse_str("host:127.0.0.1\tstatus:200").unwrap();
//! assert_eq!(document.get(0).unwrap().get("status"), Some("200"));
//! ```

use crate::options::{LineRecovery, ParseOptions};
use crate::{Document, Error, Record, Result};

/// %x30-39 / %x41-5A / %x61-7A / "_" / "." / "-" ;; [0-9A-Za-z_.-]
#[inline]
fn is_label_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_' || byte == b'.' || byte == b'-'
}

/// %x01-08 / %x0B / %x0C / %x0E-FF
///
/// Excludes NUL, TAB, LF, and CR, so a value scan stops at field and line
/// structure (and at embedded NUL) without lookahead.
#[inline]
fn is_field_byte(byte: u8) -> bool {
    matches!(byte, 0x01..=0x08 | 0x0b | 0x0c | 0x0e..=0xff)
}

/// The LTSV parser.
///
/// Holds the input, a byte cursor, and enough line bookkeeping to report
/// positions lazily. Created by the crate-root entry points.
pub(crate) struct Parser<'de> {
    input: &'de str,
    position: usize,
    line: usize,
    line_start: usize,
    options: ParseOptions,
}

impl<'de> Parser<'de> {
    pub(crate) fn new(input: &'de str, options: ParseOptions) -> Self {
        Parser {
            input,
            position: 0,
            line: 1,
            line_start: 0,
            options,
        }
    }

    fn peek_byte(&self) -> Option<u8> {
        self.input.as_bytes().get(self.position).copied()
    }

    /// Advances past one byte. Only ever called on ASCII structure bytes
    /// (`:`, TAB, CR, LF), so the cursor stays on a UTF-8 boundary.
    fn bump(&mut self) {
        let byte = self.input.as_bytes()[self.position];
        self.position += 1;
        if byte == b'\n' {
            self.line += 1;
            self.line_start = self.position;
        }
    }

    fn at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    /// 1-based byte column of the cursor within the current line.
    fn column(&self) -> usize {
        self.position - self.line_start + 1
    }

    /// Consumes the longest run of bytes satisfying `test`, starting at the
    /// cursor, and returns it as a slice of the input (possibly empty).
    ///
    /// Both character classes stop at ASCII bytes and admit every byte of a
    /// multi-byte UTF-8 sequence, so the slice boundaries are always valid.
    fn scan_while(&mut self, test: fn(u8) -> bool) -> &'de str {
        let start = self.position;
        let bytes = self.input.as_bytes();
        while self.position < bytes.len() && test(bytes[self.position]) {
            self.position += 1;
        }
        &self.input[start..self.position]
    }

    /// Parses one line into a [`Record`], leaving the cursor on the line
    /// terminator (or at end of input).
    ///
    /// State machine: label, then `:`, then value, then either a TAB
    /// looping back to the next label or the end of the record. An empty
    /// label at a line terminator completes the record; an empty label
    /// anywhere else is an error. The partially built record is dropped on
    /// any failure.
    fn parse_record(&mut self) -> Result<Record> {
        let mut record = Record::new();
        loop {
            let label_column = self.column();
            let label = self.scan_while(is_label_byte);
            if label.is_empty() {
                return match self.peek_byte() {
                    None | Some(b'\r') | Some(b'\n') => Ok(record),
                    Some(byte) => {
                        Err(Error::invalid_label_char(self.line, self.column(), byte))
                    }
                };
            }

            match self.peek_byte() {
                Some(b':') => self.bump(),
                found => return Err(Error::missing_colon(self.line, self.column(), found)),
            }

            let value = self.scan_while(is_field_byte);
            if record.contains_label(label) {
                return Err(Error::duplicate_label(self.line, label_column, label));
            }
            record.insert(label.to_owned(), value.to_owned());

            match self.peek_byte() {
                Some(b'\t') => self.bump(),
                // Line terminator, end of input, or NUL: the record is
                // done; the next parse_record call reports NUL as an error.
                _ => return Ok(record),
            }
        }
    }

    /// Driver loop: one record per line, lines terminated by CR, LF, or
    /// CRLF, with a terminator-less final line accepted.
    pub(crate) fn parse_document(&mut self) -> Result<Document> {
        let mut document = Document::new();
        while !self.at_end() {
            match self.parse_record() {
                Ok(record) => {
                    // A blank line completes an empty record; it separates
                    // records without contributing one.
                    if !record.is_empty() {
                        document.push(record);
                    }
                    if self.peek_byte() == Some(b'\r') {
                        self.bump();
                    }
                    if self.peek_byte() == Some(b'\n') {
                        self.bump();
                    }
                }
                Err(error) => {
                    // The cursor has not moved past the byte that failed.
                    if self.options.recovery == LineRecovery::Permissive
                        && matches!(self.peek_byte(), Some(b'\r' | b'\n'))
                    {
                        return Ok(document);
                    }
                    return Err(error);
                }
            }
        }
        Ok(document)
    }
}
