//! Miette diagnostic for malformed number arguments.
//!
//! Note: This module has an exception for `unused_assignments` because miette
//! derive macros read struct fields in generated code that rustc cannot track.
#![allow(unused_assignments)]

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// A miette-compatible diagnostic pointing into the NUMBER argument.
///
/// Note: Fields are read by miette derive macros, not directly by code.
#[derive(Debug, Error, Diagnostic)]
#[error("invalid number: {message}")]
#[diagnostic(
    code(propis::number),
    help("use digits with at most one '.' or ',' separator, e.g. 1234.56")
)]
pub struct NumberDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("here")]
    span: SourceSpan,

    message: String,
}

impl NumberDiagnostic {
    /// Create a diagnostic for `input` with the error at byte `offset`.
    pub fn new(input: &str, offset: usize, message: &str) -> Self {
        // Clamp offset to content length to avoid miette panic on out-of-bounds
        let offset = offset.min(input.len());
        let width = input[offset..].chars().next().map_or(0, char::len_utf8);

        NumberDiagnostic {
            src: NamedSource::new("NUMBER", input.to_string()),
            span: (offset, width).into(),
            message: message.to_string(),
        }
    }

    /// Byte offset of the offending character.
    #[cfg(test)]
    pub fn offset(&self) -> usize {
        self.span.offset()
    }
}
