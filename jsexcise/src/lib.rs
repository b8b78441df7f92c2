//! Core library for the jsexcise method removal tool.
//!
//! This library locates named method blocks in JavaScript source text by
//! signature pattern and brace depth, and splices them out of the file.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

/// Module defining byte spans into source text.
pub mod span;

/// Module containing the method block locator and its trait seam.
pub mod locator;

/// Module containing the byte-range rewriter that owns the source buffer.
pub mod rewrite;

/// Module for loading configuration.
pub mod config;

/// Module containing shared constants and regex patterns.
pub mod constants;

/// Module containing path helpers.
pub mod utils;

/// Module for colored CLI output.
pub mod output;

/// Module defining the command-line interface arguments.
pub mod cli;

/// Module containing the removal driver and its file I/O.
pub mod commands;

/// Module defining the shared entry point used by every binary.
pub mod entry_point;
