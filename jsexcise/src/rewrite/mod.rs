//! In-place source surgery.
//!
//! The core component is `ByteRangeRewriter`, which owns the source buffer
//! and splices byte ranges out of it one at a time, so every later lookup
//! sees the already-shrunk text.

mod rewriter;

pub use rewriter::{ByteRangeRewriter, RewriteError};
