//! Error types for LTSV parsing.
//!
//! Every parse failure is reported as a structured [`Error`] value carrying
//! enough context to diagnose the input: the error kind, the offending byte
//! where one exists, and a 1-based line and byte-column position.
//!
//! ## Error Categories
//!
//! - **Grammar errors**: a byte outside the label character class, a label
//!   without its `:` separator, or a label repeated within one record
//! - **Input errors**: absent input, non-UTF-8 input
//! - **I/O errors**: file reading failures from [`parse_file`](crate::parse_file)
//!
//! ## Examples
//!
//! ```rust
//! use ltsv::{parse_str, Error};
//!
//! let result = parse_str("status:200\tstatus:304");
//! match result {
//!     Err(Error::DuplicateLabel { label, line, .. }) => {
//!         assert_eq!(label, "status");
//!         assert_eq!(line, 1);
//!     }
//!     other => panic!("expected a duplicate-label error, got {:?}", other),
//! }
//! ```

use thiserror::Error;

/// Represents all possible errors that can occur while parsing LTSV input.
///
/// Positions are 1-based; `column` counts bytes from the start of the line,
/// which keeps positions exact on tab-separated log lines regardless of any
/// multi-byte UTF-8 content earlier in the line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// IO error while reading input for [`parse_file`](crate::parse_file)
    /// or [`from_reader`](crate::from_reader)
    #[error("IO error: {0}")]
    Io(String),

    /// A byte outside `[0-9A-Za-z_.-]` appeared where a label was expected
    #[error("invalid character {} in label at line {line}, column {column}", printable(.byte))]
    InvalidLabelChar {
        line: usize,
        column: usize,
        byte: u8,
    },

    /// A label was not followed by the `:` separator
    #[error("expected ':' after label but found {} at line {line}, column {column}", printable_or_eof(.found))]
    MissingColon {
        line: usize,
        column: usize,
        /// The byte found instead of `:`, or `None` at end of input.
        found: Option<u8>,
    },

    /// The same label appeared twice within one record
    #[error("duplicate label \"{label}\" at line {line}, column {column}")]
    DuplicateLabel {
        line: usize,
        column: usize,
        label: String,
    },

    /// No input text was provided
    #[error("no input text provided")]
    EmptyInput,

    /// Input bytes were not valid UTF-8
    #[error("input is not valid UTF-8 at byte offset {offset}")]
    InvalidUtf8 { offset: usize },
}

impl Error {
    /// Creates an invalid-label-character error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ltsv::Error;
    ///
    /// let err = Error::invalid_label_char(1, 5, b'~');
    /// assert!(err.to_string().contains("'~'"));
    /// assert!(err.to_string().contains("line 1"));
    /// ```
    pub fn invalid_label_char(line: usize, column: usize, byte: u8) -> Self {
        Error::InvalidLabelChar { line, column, byte }
    }

    /// Creates a missing-colon error; pass `None` when the label ran into
    /// end of input.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ltsv::Error;
    ///
    /// let err = Error::missing_colon(2, 4, None);
    /// assert!(err.to_string().contains("end of input"));
    /// ```
    pub fn missing_colon(line: usize, column: usize, found: Option<u8>) -> Self {
        Error::MissingColon {
            line,
            column,
            found,
        }
    }

    /// Creates a duplicate-label error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ltsv::Error;
    ///
    /// let err = Error::duplicate_label(1, 9, "host");
    /// assert!(err.to_string().contains("\"host\""));
    /// ```
    pub fn duplicate_label(line: usize, column: usize, label: &str) -> Self {
        Error::DuplicateLabel {
            line,
            column,
            label: label.to_string(),
        }
    }

    /// Creates an I/O error for file or reader failures.
    pub fn io(message: impl Into<String>) -> Self {
        Error::Io(message.into())
    }

    /// Creates an invalid-UTF-8 error at the given byte offset.
    pub fn invalid_utf8(offset: usize) -> Self {
        Error::InvalidUtf8 { offset }
    }

    /// Returns the 1-based line of the failure for grammar errors, `None`
    /// for input and I/O errors.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ltsv::Error;
    ///
    /// assert_eq!(Error::missing_colon(3, 1, None).line(), Some(3));
    /// assert_eq!(Error::EmptyInput.line(), None);
    /// ```
    #[must_use]
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::InvalidLabelChar { line, .. }
            | Error::MissingColon { line, .. }
            | Error::DuplicateLabel { line, .. } => Some(*line),
            _ => None,
        }
    }
}

fn printable(byte: &u8) -> String {
    if byte.is_ascii_graphic() || *byte == b' ' {
        format!("'{}'", *byte as char)
    } else {
        format!("0x{byte:02x}")
    }
}

fn printable_or_eof(byte: &Option<u8>) -> String {
    match byte {
        Some(byte) => printable(byte),
        None => "end of input".to_string(),
    }
}

pub type Result<T> = std::result::Result<T, Error>;
