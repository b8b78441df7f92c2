//! Path helpers shared by the commands and the entry point.

use crate::constants::BACKUP_SUFFIX;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Normalizes a path for CLI display.
///
/// Backslashes become forward slashes and a leading `./` is dropped.
///
/// # Examples
/// ```
/// use std::path::Path;
/// use jsexcise::utils::normalize_display_path;
///
/// assert_eq!(normalize_display_path(Path::new(".\\web\\app.js")), "web/app.js");
/// assert_eq!(normalize_display_path(Path::new("./web/app.js")), "web/app.js");
/// ```
#[must_use]
pub fn normalize_display_path(path: &Path) -> String {
    let s = path.to_string_lossy();
    // Windows extended path prefix
    let normalized = s.trim_start_matches(r"\\?\").replace('\\', "/");
    normalized
        .strip_prefix("./")
        .unwrap_or(&normalized)
        .to_owned()
}

/// Path of the backup copy written next to `path` (`app.js` -> `app.js.backup`).
#[must_use]
pub fn backup_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(BACKUP_SUFFIX);
    PathBuf::from(name)
}
