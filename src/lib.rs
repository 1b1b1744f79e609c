//! # ltsv
//!
//! A parser and in-memory data model for the LTSV (Labeled Tab-Separated
//! Values) log format.
//!
//! ## What is LTSV?
//!
//! LTSV is a line-oriented text format for log records: each line is one
//! record, fields within a line are separated by tabs, and each field is a
//! `label:value` pair. Labels make the format self-describing: columns can
//! be added or reordered without breaking consumers:
//!
//! ```text
//! host:127.0.0.1	ident:-	time:[10/Oct/2000:13:55:36 -0700]	status:200
//! ```
//!
//! ## Key Features
//!
//! - **Single-pass parsing**: O(n) cursor scan with no backtracking
//! - **Ordered records**: fields keep line order and are addressable by
//!   label or by index, with unique labels enforced during parsing
//! - **Structured errors**: every failure reports its kind, the offending
//!   byte, and a line/column position
//! - **Serde-friendly**: parsed documents serialize as JSON-style
//!   sequences of maps for downstream tooling
//! - **No Unsafe Code**: written entirely in safe Rust
//!
//! ## Quick Start
//!
//! ```rust
//! use ltsv::parse_str;
//!
//! let document = parse_str("label:text\thoge:fuga\nmm:value:1").unwrap();
//!
//! assert_eq!(document.len(), 2);
//! assert_eq!(document.get(0).unwrap().get("hoge"), Some("fuga"));
//! // Only the first colon separates label from value.
//! assert_eq!(document.get(1).unwrap().get("mm"), Some("value:1"));
//! ```
//!
//! ### Reading a Log File
//!
//! ```rust,no_run
//! let document = ltsv::parse_file("access_log.ltsv").unwrap();
//! for record in document.iter() {
//!     if record.get("status") == Some("500") {
//!         println!("{:?}", record.get("req"));
//!     }
//! }
//! ```
//!
//! ### Converting to JSON
//!
//! [`Document`] and [`Record`] implement `serde::Serialize`, so a parsed
//! log converts to JSON (or any other serde format) directly:
//!
//! ```rust
//! let document = ltsv::parse_str("host:127.0.0.1\tstatus:200").unwrap();
//! let json = serde_json::to_string(&document).unwrap();
//! assert_eq!(json, r#"[{"host":"127.0.0.1","status":"200"}]"#);
//! ```
//!
//! ## Strictness
//!
//! By default a malformed record anywhere in the input fails the whole
//! parse. Log files that end in a truncated or garbled line are common in
//! practice, so [`ParseOptions::permissive`] offers a lenient mode that
//! stops at the first record failing on a line boundary and keeps
//! everything parsed before it. See [`LineRecovery`] for details.
//!
//! ## Format Specification
//!
//! The grammar and conformance notes live in the [`format`] module.
//!
//! ## Examples
//!
//! See the `demos/` directory for focused, runnable examples:
//!
//! - **`simple.rs`** - Parse a string and walk the document
//! - **`access_log.rs`** - Filter an Apache-style access log
//! - **`to_json.rs`** - Convert LTSV input to JSON
//!
//! Run any example with: `cargo run --example <name>`

pub mod document;
pub mod error;
pub mod format;
pub mod macros;
pub mod options;
pub mod record;

mod parser;

pub use document::Document;
pub use error::{Error, Result};
pub use options::{LineRecovery, ParseOptions};
pub use record::Record;

use parser::Parser;
use std::io;
use std::path::Path;

/// Parses a string of LTSV text into a [`Document`].
///
/// Zero-length input is a valid empty document, not an error.
///
/// # Examples
///
/// ```rust
/// use ltsv::parse_str;
///
/// let document = parse_str("host:127.0.0.1\tstatus:200").unwrap();
/// assert_eq!(document.len(), 1);
/// assert_eq!(document.get(0).unwrap().get("status"), Some("200"));
///
/// assert!(parse_str("").unwrap().is_empty());
/// ```
///
/// # Errors
///
/// Returns an error if any record violates the LTSV grammar; see
/// [`Error`] for the kinds reported.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_str(input: &str) -> Result<Document> {
    parse_str_with_options(input, ParseOptions::default())
}

/// Parses a string of LTSV text with custom options.
///
/// # Examples
///
/// ```rust
/// use ltsv::{parse_str_with_options, ParseOptions};
///
/// let input = "host:a\nbroken\nstatus:200";
/// assert!(parse_str_with_options(input, ParseOptions::new()).is_err());
///
/// let document = parse_str_with_options(input, ParseOptions::permissive()).unwrap();
/// assert_eq!(document.len(), 1);
/// ```
///
/// # Errors
///
/// Returns an error if any record violates the LTSV grammar and the
/// options do not recover from it.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_str_with_options(input: &str, options: ParseOptions) -> Result<Document> {
    Parser::new(input, options).parse_document()
}

/// Parses optional LTSV text, for callers that may have no buffer at all.
///
/// `None` yields [`Error::EmptyInput`]; note that `Some("")` is a valid
/// empty document.
///
/// # Examples
///
/// ```rust
/// use ltsv::{parse_opt, Error};
///
/// assert_eq!(parse_opt(None), Err(Error::EmptyInput));
/// assert_eq!(parse_opt(Some("a:1")).unwrap().len(), 1);
/// ```
///
/// # Errors
///
/// Returns [`Error::EmptyInput`] for `None`, otherwise any error
/// [`parse_str`] can return.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_opt(input: Option<&str>) -> Result<Document> {
    match input {
        Some(text) => parse_str(text),
        None => Err(Error::EmptyInput),
    }
}

/// Parses LTSV text from bytes.
///
/// # Examples
///
/// ```rust
/// use ltsv::parse_slice;
///
/// let document = parse_slice(b"host:127.0.0.1").unwrap();
/// assert_eq!(document.len(), 1);
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidUtf8`] if the bytes are not valid UTF-8,
/// otherwise any error [`parse_str`] can return.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_slice(input: &[u8]) -> Result<Document> {
    parse_slice_with_options(input, ParseOptions::default())
}

/// Parses LTSV text from bytes with custom options.
///
/// # Errors
///
/// Returns [`Error::InvalidUtf8`] if the bytes are not valid UTF-8,
/// otherwise any error [`parse_str_with_options`] can return.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_slice_with_options(input: &[u8], options: ParseOptions) -> Result<Document> {
    let text = std::str::from_utf8(input)
        .map_err(|error| Error::invalid_utf8(error.valid_up_to()))?;
    parse_str_with_options(text, options)
}

/// Reads a file fully into memory and parses it as LTSV.
///
/// # Examples
///
/// ```rust,no_run
/// let document = ltsv::parse_file("access_log.ltsv").unwrap();
/// println!("{} records", document.len());
/// ```
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be opened or read, otherwise
/// any error [`parse_slice`] can return.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    parse_file_with_options(path, ParseOptions::default())
}

/// Reads a file fully into memory and parses it as LTSV with custom
/// options.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be opened or read, otherwise
/// any error [`parse_slice_with_options`] can return.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_file_with_options<P: AsRef<Path>>(
    path: P,
    options: ParseOptions,
) -> Result<Document> {
    let path = path.as_ref();
    let contents = std::fs::read(path)
        .map_err(|error| Error::io(format!("{}: {}", path.display(), error)))?;
    parse_slice_with_options(&contents, options)
}

/// Parses LTSV text from an I/O stream.
///
/// # Examples
///
/// ```rust
/// use std::io::Cursor;
///
/// let cursor = Cursor::new(b"host:127.0.0.1\nhost:10.0.0.1");
/// let document = ltsv::from_reader(cursor).unwrap();
/// assert_eq!(document.len(), 2);
/// ```
///
/// # Errors
///
/// Returns [`Error::Io`] if reading fails, otherwise any error
/// [`parse_str`] can return.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R: io::Read>(mut reader: R) -> Result<Document> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|error| Error::io(error.to_string()))?;
    parse_str(&text)
}
