use crate::cli::Cli;
use crate::commands::{run_excise, ExciseOptions};
use crate::config::Config;
use crate::constants::{DEFAULT_METHODS, DEFAULT_TARGET_FILE};
use crate::utils::normalize_display_path;
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

/// Runs jsexcise with the given arguments, writing output to stdout.
///
/// # Errors
///
/// Returns an error if the target file cannot be read or written.
pub fn run_with_args(args: Vec<String>) -> Result<i32> {
    run_with_args_to(args, &mut std::io::stdout())
}

/// Run jsexcise with the given arguments, writing output to the specified writer.
///
/// This is the testable version of `run_with_args` that allows output capture.
/// Usage errors, invalid method names and a missing input file are reported
/// on stderr and yield exit code 1; I/O failures while editing propagate.
///
/// # Errors
///
/// Returns an error if the target file cannot be read or written.
pub fn run_with_args_to<W: std::io::Write>(args: Vec<String>, writer: &mut W) -> Result<i32> {
    let mut program_args = vec!["jsexcise".to_owned()];
    program_args.extend(args);
    let cli = match Cli::try_parse_from(program_args) {
        Ok(c) => c,
        Err(e) => match e.kind() {
            clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                write!(writer, "{e}")?;
                writer.flush()?;
                return Ok(0);
            }
            _ => {
                eprint!("{e}");
                return Ok(1);
            }
        },
    };

    let config = match (&cli.config, &cli.file) {
        (Some(path), _) => match Config::load_from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {e}");
                return Ok(1);
            }
        },
        (None, Some(file)) => Config::load_from_path(file),
        (None, None) => Config::load(),
    };
    // CLI paths stay relative to the working directory
    let file = cli
        .file
        .or_else(|| config.target_file())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_TARGET_FILE));
    let config_file_path = config.config_file_path;
    let settings = config.jsexcise;
    let names = if cli.methods.is_empty() {
        settings
            .methods
            .unwrap_or_else(|| DEFAULT_METHODS.iter().map(|m| (*m).to_owned()).collect())
    } else {
        cli.methods
    };

    let verbose = cli.output.verbose && !cli.output.json;
    if verbose {
        eprintln!("[VERBOSE] jsexcise v{}", env!("CARGO_PKG_VERSION"));
        match &config_file_path {
            Some(path) => eprintln!("[VERBOSE] Config: {}", normalize_display_path(path)),
            None => eprintln!("[VERBOSE] Config: built-in defaults"),
        }
        eprintln!("[VERBOSE] Target: {}", normalize_display_path(&file));
        eprintln!("[VERBOSE] Methods: {names:?}");
        eprintln!();
    }

    let options = match ExciseOptions::with_names(names) {
        Ok(options) => ExciseOptions {
            dry_run: cli.dry_run,
            backup: cli.backup || settings.backup.unwrap_or(false),
            json: cli.output.json,
            verbose,
            ..options
        },
        Err(e) => {
            eprintln!("Error: {e}");
            return Ok(1);
        }
    };

    if !file.exists() {
        eprintln!("Error: The file '{}' does not exist.", file.display());
        return Ok(1);
    }

    run_excise(&file, &options, writer)?;
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn run(args: &[&str]) -> (i32, String) {
        let mut buffer = Vec::new();
        let code =
            run_with_args_to(args.iter().map(|a| (*a).to_owned()).collect(), &mut buffer).unwrap();
        (code, String::from_utf8(buffer).unwrap())
    }

    #[test]
    fn test_help_goes_to_writer() {
        let (code, out) = run(&["--help"]);
        assert_eq!(code, 0);
        assert!(out.contains("CONFIGURATION FILE"));
    }

    #[test]
    fn test_unknown_flag_is_usage_error() {
        let (code, _) = run(&["--frobnicate"]);
        assert_eq!(code, 1);
    }

    #[test]
    fn test_invalid_method_name() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("app.js");
        std::fs::write(&file, "foo() {}\n").unwrap();
        let (code, _) = run(&[file.to_str().unwrap(), "-m", "foo bar"]);
        assert_eq!(code, 1);
        assert_eq!(std::fs::read_to_string(&file).unwrap(), "foo() {}\n");
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("missing.js");
        let (code, _) = run(&[file.to_str().unwrap(), "-m", "foo"]);
        assert_eq!(code, 1);
    }

    #[test]
    fn test_config_methods_apply_when_cli_has_none() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join(".jsexcise.toml"),
            "[jsexcise]\nmethods = [\"drop\"]\n",
        )
        .unwrap();
        let file = dir.path().join("app.js");
        std::fs::write(&file, "keep() {}\ndrop() { x(); }\n").unwrap();

        let (code, out) = run(&[file.to_str().unwrap()]);
        assert_eq!(code, 0);
        assert!(out.contains("drop"));
        assert_eq!(std::fs::read_to_string(&file).unwrap(), "keep() {}\n");
    }

    #[test]
    fn test_cli_methods_override_config() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join(".jsexcise.toml"),
            "[jsexcise]\nmethods = [\"drop\"]\n",
        )
        .unwrap();
        let file = dir.path().join("app.js");
        std::fs::write(&file, "keep() {}\ndrop() { x(); }\n").unwrap();

        let (code, _) = run(&[file.to_str().unwrap(), "--method", "keep"]);
        assert_eq!(code, 0);
        assert_eq!(
            std::fs::read_to_string(&file).unwrap(),
            "\ndrop() { x(); }\n"
        );
    }

    #[test]
    fn test_explicit_config_errors_are_reported() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.toml");
        let (code, _) = run(&["--config", missing.to_str().unwrap()]);
        assert_eq!(code, 1);
    }
}
