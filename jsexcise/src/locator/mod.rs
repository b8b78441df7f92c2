//! Locating method blocks inside JavaScript source text.
//!
//! Locating is split in two stages:
//! - find the candidate region (a method signature matched by pattern),
//! - delimit the exact region (a depth-counted scan for the balancing brace).
//!
//! The removal driver only depends on the [`BlockLocator`] trait, so the
//! pattern-based [`MethodBlockLocator`] can be swapped for a real lexer later.

mod method;

pub use method::{find_matching_brace, MethodBlockLocator, Signature};

use crate::constants::get_method_name_re;
use crate::span::Span;
use std::fmt;
use std::str::FromStr;

/// Finds the span of a named method definition in a text.
pub trait BlockLocator {
    /// Returns the span of the first complete definition of `name`,
    /// or `None` when there is none.
    fn locate(&self, text: &str, name: &MethodName) -> Option<Span>;
}

impl<L: BlockLocator + ?Sized> BlockLocator for &L {
    fn locate(&self, text: &str, name: &MethodName) -> Option<Span> {
        (**self).locate(text, name)
    }
}

/// Error for a method name that is not a JavaScript identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid method name '{0}': expected a JavaScript identifier")]
pub struct InvalidMethodName(pub String);

/// A validated method identifier.
///
/// Accepts word characters and `$`, optionally prefixed with `#` for private
/// class members. The first identifier character may not be a digit.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MethodName(String);

impl MethodName {
    /// Validate and wrap a method name.
    ///
    /// # Errors
    /// Returns [`InvalidMethodName`] if `name` is not an identifier.
    pub fn new(name: impl Into<String>) -> Result<Self, InvalidMethodName> {
        let name = name.into();
        let body = name.strip_prefix('#').unwrap_or(&name);
        let starts_with_digit = body.chars().next().is_some_and(|c| c.is_ascii_digit());
        if get_method_name_re().is_match(&name) && !starts_with_digit {
            Ok(Self(name))
        } else {
            Err(InvalidMethodName(name))
        }
    }

    /// The raw identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MethodName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for MethodName {
    type Err = InvalidMethodName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
