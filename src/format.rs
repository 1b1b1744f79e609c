//! LTSV Format Specification
//!
//! This module documents the LTSV (Labeled Tab-Separated Values) format as
//! implemented by this library.
//!
//! # Overview
//!
//! LTSV is a line-oriented text format for log records. Each line is one
//! record; a record is a sequence of fields separated by TAB; a field is a
//! label and a value separated by a single colon:
//!
//! ```text
//! host:127.0.0.1<TAB>ident:-<TAB>req:GET /apache_pb.gif HTTP/1.0<TAB>status:200
//! ```
//!
//! The format originated as a labeled variant of TSV for web-server access
//! logs: adding a field never breaks downstream consumers, because fields
//! are addressed by label rather than by column position.
//!
//! # Grammar
//!
//! ```text
//! ltsv        = *(record NL) [record]
//! record      = [field *(TAB field)]
//! field       = label ":" field-value
//! label       = 1*lbyte
//! lbyte       = %x30-39 / %x41-5A / %x61-7A / "_" / "." / "-"   ; [0-9A-Za-z_.-]
//! field-value = *fbyte
//! fbyte       = %x01-08 / %x0B / %x0C / %x0E-FF
//! TAB         = %x09
//! NL          = [%x0D] %x0A
//! ```
//!
//! **Rules**:
//! - Labels are non-empty, case-sensitive, and unique within one record
//! - Values may be empty, and may contain any byte except NUL, TAB, CR,
//!   and LF; in particular, colons are ordinary value bytes:
//!   `time:10/Oct/2000:13:55:36` is a single field
//! - Only the *first* colon of a field separates label from value
//!
//! # Line Terminators
//!
//! A record ends at `\n`, `\r\n`, plain `\r`, or end of input. The final
//! line does not need a terminator. Blank lines are permitted anywhere and
//! contribute no record, so a document's record count equals its number of
//! non-empty lines.
//!
//! # Errors
//!
//! | Input defect | Error |
//! |--------------|-------|
//! | Byte outside `[0-9A-Za-z_.-]` where a label starts | [`Error::InvalidLabelChar`](crate::Error::InvalidLabelChar) |
//! | Label not followed by `:` | [`Error::MissingColon`](crate::Error::MissingColon) |
//! | Label repeated within one record | [`Error::DuplicateLabel`](crate::Error::DuplicateLabel) |
//! | Non-UTF-8 bytes | [`Error::InvalidUtf8`](crate::Error::InvalidUtf8) |
//!
//! By default any malformed record fails the whole parse and no partial
//! document is returned. With
//! [`LineRecovery::Permissive`](crate::LineRecovery::Permissive) the
//! parser instead stops at a record that fails right on a line boundary
//! and returns everything parsed up to that point, which tolerates log
//! files ending in a truncated or garbled line.
//!
//! # Implementation Notes
//!
//! - Input is UTF-8 text (`&str`). The byte-level grammar admits any byte
//!   ≥ `0x0E`, which covers every byte of a multi-byte UTF-8 sequence, so
//!   non-ASCII values parse unchanged
//! - Embedded NUL is rejected explicitly (it is outside both character
//!   classes) rather than truncating the input
//! - Records report fields in line order; documents report records in
//!   input order
//!
//! # Conformance
//!
//! The grammar above matches the LTSV format definition at
//! <http://ltsv.org/> (no schema layer, no recommended-label
//! vocabulary; labels are opaque strings to this library).

// This module contains only documentation; no implementation code
