//! Byte-range safe source buffer.
//!
//! # Usage
//!
//! ```
//! use jsexcise::rewrite::ByteRangeRewriter;
//! use jsexcise::span::Span;
//!
//! let mut rewriter = ByteRangeRewriter::new("hello cruel world");
//! let removed = rewriter.excise(Span::new(5, 11).expect("ordered")).expect("in bounds");
//! assert_eq!(removed, " cruel");
//! assert_eq!(rewriter.into_source(), "hello world");
//! ```

use crate::span::Span;

/// Error during rewriting
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RewriteError {
    /// Span reaches past the end of the buffer
    #[error("span {span} out of bounds: source length is {source_len}")]
    OutOfBounds {
        /// The rejected span
        span: Span,
        /// Length of the source
        source_len: usize,
    },
    /// Span would split a UTF-8 code point
    #[error("span {span} does not fall on character boundaries")]
    NotCharBoundary {
        /// The rejected span
        span: Span,
    },
}

/// Owned source text that shrinks as spans are excised.
#[derive(Debug, Clone, Default)]
pub struct ByteRangeRewriter {
    source: String,
}

impl ByteRangeRewriter {
    /// Create a new rewriter for the given source
    #[must_use]
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// Current contents of the buffer.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Check that `span` can be removed from the current buffer.
    ///
    /// # Errors
    /// Returns error if the span is out of bounds or splits a character
    pub fn validate(&self, span: Span) -> Result<(), RewriteError> {
        if span.end > self.source.len() {
            return Err(RewriteError::OutOfBounds {
                span,
                source_len: self.source.len(),
            });
        }
        if !self.source.is_char_boundary(span.start) || !self.source.is_char_boundary(span.end) {
            return Err(RewriteError::NotCharBoundary { span });
        }
        Ok(())
    }

    /// Remove `span` from the buffer and return the removed text.
    ///
    /// # Errors
    /// Returns error if the span is invalid for the current buffer; the
    /// buffer is left untouched in that case.
    pub fn excise(&mut self, span: Span) -> Result<String, RewriteError> {
        self.validate(span)?;
        Ok(self.source.drain(span.range()).collect())
    }

    /// Consume the rewriter and return the edited source.
    #[must_use]
    pub fn into_source(self) -> String {
        self.source
    }
}
