//! Method removal command.

use crate::locator::{BlockLocator, InvalidMethodName, MethodBlockLocator, MethodName};
use crate::output;
use crate::rewrite::{ByteRangeRewriter, RewriteError};
use crate::span::Span;
use crate::utils::{backup_path, normalize_display_path};

use serde::Serialize;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Errors raised by the removal command.
#[derive(Debug, thiserror::Error)]
pub enum ExciseError {
    /// The input file is missing or unreadable
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// Input path
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },
    /// The edited file could not be written back
    #[error("failed to write {}: {source}", path.display())]
    Write {
        /// Output path
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },
    /// The backup copy could not be written
    #[error("failed to write backup {}: {source}", path.display())]
    Backup {
        /// Backup path
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },
    /// A requested method name is not an identifier
    #[error(transparent)]
    InvalidMethodName(#[from] InvalidMethodName),
    /// The locator produced a span the buffer rejected
    #[error(transparent)]
    Rewrite(#[from] RewriteError),
    /// Writing console output failed
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
    /// Serializing the JSON report failed
    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

/// Options for the removal command
#[derive(Debug, Default, Clone)]
pub struct ExciseOptions {
    /// Methods to remove, in order
    pub methods: Vec<MethodName>,
    /// Dry-run mode (show what would change)
    pub dry_run: bool,
    /// Save `<file>.backup` before overwriting
    pub backup: bool,
    /// Emit a JSON report instead of text lines
    pub json: bool,
    /// Verbose output
    pub verbose: bool,
}

impl ExciseOptions {
    /// Build options from raw names, validating each one.
    ///
    /// # Errors
    ///
    /// Returns [`ExciseError::InvalidMethodName`] for the first name that is
    /// not an identifier.
    pub fn with_names<I, S>(names: I) -> Result<Self, ExciseError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let methods = names
            .into_iter()
            .map(MethodName::new)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            methods,
            ..Self::default()
        })
    }
}

/// One excised method block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Removal {
    /// Method name
    pub method: String,
    /// Removed range, relative to the buffer at the time of removal
    #[serde(flatten)]
    pub span: Span,
}

/// Outcome of running the removal driver over a buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Excision {
    /// Edited source text
    pub source: String,
    /// Removals in the order they were applied
    pub removals: Vec<Removal>,
    /// Names that produced no removal (absent, or braces never rebalanced)
    pub unmatched: Vec<String>,
}

/// Result of the removal command
#[derive(Debug, Clone, Serialize)]
pub struct ExciseReport {
    /// File that was processed
    pub file: String,
    /// Whether this was a preview
    pub dry_run: bool,
    /// Number of method blocks removed
    pub removed_count: usize,
    /// Removed blocks, in removal order
    pub removals: Vec<Removal>,
    /// Requested names with nothing removed
    pub unmatched: Vec<String>,
    /// Backup copy, if one was written
    pub backup: Option<String>,
    /// Whether the file on disk was rewritten
    pub written: bool,
}

/// Remove every definition of each method in `methods` from `source`.
///
/// Names are processed in order. For each one the locator is called
/// repeatedly on the shrinking buffer, always scanning from its start,
/// until it reports nothing more.
///
/// # Errors
///
/// Returns an error if the locator yields a span the buffer cannot excise.
pub fn excise_methods<L: BlockLocator>(
    locator: &L,
    source: impl Into<String>,
    methods: &[MethodName],
) -> Result<Excision, RewriteError> {
    let mut rewriter = ByteRangeRewriter::new(source);
    let mut removals = Vec::new();
    let mut unmatched = Vec::new();

    for method in methods {
        let before = removals.len();
        while let Some(span) = locator.locate(rewriter.source(), method) {
            // an empty span would never shrink the buffer
            if span.is_empty() {
                break;
            }
            rewriter.excise(span)?;
            removals.push(Removal {
                method: method.to_string(),
                span,
            });
        }
        if removals.len() == before {
            unmatched.push(method.to_string());
        }
    }

    Ok(Excision {
        source: rewriter.into_source(),
        removals,
        unmatched,
    })
}

/// Remove the configured methods from the file at `path`.
///
/// The file is read once and, unless in dry-run mode, written once at the
/// end, and only if something was removed. An unchanged file is never
/// rewritten (nor backed up), so a read-only file with no matches succeeds.
///
/// In text mode the removal lines are printed before the backup and the
/// write; the completion line follows only once the file is saved.
///
/// # Errors
///
/// Returns an error if the file cannot be read or written, or output fails.
pub fn run_excise<W: Write>(
    path: &Path,
    options: &ExciseOptions,
    writer: &mut W,
) -> Result<ExciseReport, ExciseError> {
    let content = fs::read_to_string(path).map_err(|source| ExciseError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let excision = excise_methods(&MethodBlockLocator::new(), content.as_str(), &options.methods)?;
    if !options.json {
        output::print_removals(writer, &excision.removals, options.dry_run)?;
    }

    let mut backup = None;
    let mut written = false;
    if !options.dry_run && !excision.removals.is_empty() {
        if options.backup {
            let target = backup_path(path);
            fs::write(&target, &content).map_err(|source| ExciseError::Backup {
                path: target.clone(),
                source,
            })?;
            backup = Some(target);
        }
        fs::write(path, &excision.source).map_err(|source| ExciseError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        written = true;
    }

    let report = ExciseReport {
        file: normalize_display_path(path),
        dry_run: options.dry_run,
        removed_count: excision.removals.len(),
        removals: excision.removals,
        unmatched: excision.unmatched,
        backup: backup.as_deref().map(normalize_display_path),
        written,
    };

    if options.json {
        serde_json::to_writer_pretty(&mut *writer, &report)?;
        writeln!(writer)?;
    } else {
        output::print_summary(writer, &report, options.verbose)?;
    }

    Ok(report)
}
