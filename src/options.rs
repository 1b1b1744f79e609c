//! Configuration options for LTSV parsing.
//!
//! This module provides types to customize parser behavior:
//!
//! - [`ParseOptions`]: Main configuration struct
//! - [`LineRecovery`]: How the document parser treats a malformed record
//!   that fails at a line boundary
//!
//! ## Examples
//!
//! ```rust
//! use ltsv::{parse_str_with_options, LineRecovery, ParseOptions};
//!
//! // "req" on line 2 has no colon. Strict parsing rejects the whole input.
//! let input = "host:a\nreq\nstatus:200";
//! assert!(parse_str_with_options(input, ParseOptions::new()).is_err());
//!
//! // Permissive parsing keeps everything up to the malformed line.
//! let options = ParseOptions::new().with_recovery(LineRecovery::Permissive);
//! let document = parse_str_with_options(input, options).unwrap();
//! assert_eq!(document.len(), 1);
//! ```

/// How the document parser treats a record that fails to parse when the
/// byte at the failure point is a line terminator.
///
/// The default is [`LineRecovery::Strict`]: every malformed record is a
/// hard error and no partial document escapes.
/// [`LineRecovery::Permissive`] instead stops at such a failure and
/// returns everything parsed so far, which tolerates log files ending in
/// a truncated or garbled line. Failures anywhere other than a line
/// boundary are hard errors in both modes.
///
/// # Examples
///
/// ```rust
/// use ltsv::LineRecovery;
///
/// assert_eq!(LineRecovery::default(), LineRecovery::Strict);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LineRecovery {
    /// Any malformed record aborts the parse; no partial document is
    /// returned.
    #[default]
    Strict,
    /// A record failing at a line terminator truncates the parse: the
    /// document built so far is returned as success and the rest of the
    /// input is discarded.
    Permissive,
}

/// Configuration options for LTSV parsing.
///
/// # Examples
///
/// ```rust
/// use ltsv::{LineRecovery, ParseOptions};
///
/// // Default strict options
/// let options = ParseOptions::new();
///
/// // Lenient mode for logs with truncated tails
/// let options = ParseOptions::permissive();
/// assert_eq!(options.recovery, LineRecovery::Permissive);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct ParseOptions {
    pub recovery: LineRecovery,
}

impl ParseOptions {
    /// Creates default options (strict recovery).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ltsv::{LineRecovery, ParseOptions};
    ///
    /// let options = ParseOptions::new();
    /// assert_eq!(options.recovery, LineRecovery::Strict);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options with permissive line recovery.
    #[must_use]
    pub fn permissive() -> Self {
        ParseOptions {
            recovery: LineRecovery::Permissive,
        }
    }

    /// Sets the line-recovery mode.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ltsv::{LineRecovery, ParseOptions};
    ///
    /// let options = ParseOptions::new().with_recovery(LineRecovery::Permissive);
    /// assert_eq!(options, ParseOptions::permissive());
    /// ```
    #[must_use]
    pub fn with_recovery(mut self, recovery: LineRecovery) -> Self {
        self.recovery = recovery;
        self
    }
}
