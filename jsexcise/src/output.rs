use crate::commands::{ExciseReport, Removal};
use colored::Colorize;
use std::io::Write;

/// Print one removed (or would-be removed) method block.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_removal(
    writer: &mut impl Write,
    removal: &Removal,
    dry_run: bool,
) -> std::io::Result<()> {
    let label = if dry_run {
        "Would remove method:".yellow()
    } else {
        "Removed method:".green()
    };
    writeln!(
        writer,
        "  {} {} (span: {})",
        label,
        removal.method.bold(),
        removal.span
    )
}

/// Print the names that matched nothing.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_unmatched(writer: &mut impl Write, names: &[String]) -> std::io::Result<()> {
    for name in names {
        writeln!(writer, "  {} {}", "Not found:".yellow(), name.dimmed())?;
    }
    Ok(())
}

/// Print the dry-run banner and one line per removal.
///
/// Called before the file is touched, so the lines are on the console even
/// if writing fails afterwards.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_removals(
    writer: &mut impl Write,
    removals: &[Removal],
    dry_run: bool,
) -> std::io::Result<()> {
    if dry_run {
        writeln!(writer, "{}", "[DRY-RUN] Method blocks that would be removed:".yellow())?;
    }
    for removal in removals {
        print_removal(writer, removal, dry_run)?;
    }
    Ok(())
}

/// Print the optional details and the completion line.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_summary(
    writer: &mut impl Write,
    report: &ExciseReport,
    verbose: bool,
) -> std::io::Result<()> {
    if verbose {
        print_unmatched(writer, &report.unmatched)?;
        if let Some(backup) = &report.backup {
            writeln!(writer, "  {} {}", "Backup:".cyan(), backup)?;
        }
    }

    let count = report.removed_count;
    if report.dry_run {
        writeln!(
            writer,
            "\n{} {} method block(s) would be removed from {}",
            "[DRY-RUN]".yellow(),
            count,
            report.file
        )
    } else if report.written {
        writeln!(
            writer,
            "\n{} Removed {} method block(s) from {}",
            "Done!".green().bold(),
            count,
            report.file
        )
    } else {
        writeln!(
            writer,
            "\n{} Nothing to remove in {}",
            "Done!".green().bold(),
            report.file
        )
    }
}
