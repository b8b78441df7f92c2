//! Pattern-and-brace method locator.
//!
//! # Usage
//!
//! ```
//! use jsexcise::locator::{BlockLocator, MethodBlockLocator, MethodName};
//!
//! let text = "class App {\n  foo(a) {\n    if (a) { go(); }\n  }\n}\n";
//! let name = MethodName::new("foo").expect("valid name");
//! let span = MethodBlockLocator::new().locate(text, &name).expect("found");
//! assert_eq!(span.slice(text), Some("\n  foo(a) {\n    if (a) { go(); }\n  }"));
//! ```
//!
//! Known limits: the parameter list may not contain `)` (so default values
//! such as `cb = () => {}` defeat the signature match), and every `{`/`}` in
//! the body counts towards depth, including those inside strings, regex
//! literals and comments.

use super::{BlockLocator, MethodName};
use crate::span::Span;
use regex::Regex;

/// Where a method signature was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signature {
    /// Start of the match, including the leading newline and indentation
    pub start: usize,
    /// Offset of the opening `{` of the body
    pub brace: usize,
}

/// Locates `[async] name(params) { ... }` blocks by regex and brace depth.
#[derive(Debug, Default, Clone, Copy)]
pub struct MethodBlockLocator;

impl MethodBlockLocator {
    /// Create a new locator
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Signature pattern for `name`.
    ///
    /// The match starts at the beginning of the text or at a newline, then
    /// swallows any whitespace, an optional `async`, the name, a flat
    /// parameter list and the opening brace.
    fn signature_regex(name: &MethodName) -> Option<Regex> {
        let pattern = format!(
            r"(?:\n|^)\s*(?:async\s+)?{}\s*\([^)]*\)\s*\{{",
            regex::escape(name.as_str())
        );
        Regex::new(&pattern).ok()
    }

    /// First stage: find the first signature of `name` in `text`.
    #[must_use]
    pub fn find_signature(&self, text: &str, name: &MethodName) -> Option<Signature> {
        let m = Self::signature_regex(name)?.find(text)?;
        Some(Signature {
            start: m.start(),
            // the match always ends with the opening brace
            brace: m.end() - 1,
        })
    }
}

impl BlockLocator for MethodBlockLocator {
    fn locate(&self, text: &str, name: &MethodName) -> Option<Span> {
        let signature = self.find_signature(text, name)?;
        let end = find_matching_brace(text, signature.brace)?;
        Span::new(signature.start, end)
    }
}

/// Second stage: scan from the `{` at `open_brace` and return the offset just
/// past the `}` that balances it.
///
/// Returns `None` if `open_brace` is not a `{` or the braces never rebalance.
#[must_use]
pub fn find_matching_brace(text: &str, open_brace: usize) -> Option<usize> {
    let bytes = text.as_bytes();
    if bytes.get(open_brace) != Some(&b'{') {
        return None;
    }

    let mut depth = 0usize;
    for (offset, byte) in bytes[open_brace..].iter().enumerate() {
        match byte {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(open_brace + offset + 1);
                }
            }
            _ => {}
        }
    }
    None
}
