use regex::Regex;
use std::sync::OnceLock;

/// Name of the project-level configuration file.
pub const CONFIG_FILENAME: &str = ".jsexcise.toml";

/// Name of the npm manifest that may carry a `"jsexcise"` section.
pub const PACKAGE_JSON_FILENAME: &str = "package.json";

/// Suffix appended to the target path when `--backup` is set.
pub const BACKUP_SUFFIX: &str = ".backup";

/// File edited when neither the command line nor a config file names one.
pub const DEFAULT_TARGET_FILE: &str = "web/app.js";

/// Methods removed when neither the command line nor a config file lists any.
///
/// These are the settings handlers that moved out of `app.js` into a
/// dedicated settings manager.
pub const DEFAULT_METHODS: &[&str] = &[
    "showSettings",
    "hideSettings",
    "bindSettingsTabEvents",
    "renderCommandsList",
    "addCommand",
    "deleteCommand",
    "renderShortcutsSettings",
    "addShortcut",
    "deleteShortcut",
    "buildShortcutKeyString",
    "checkShortcutConflict",
    "saveSettingsFromModal",
];

/// Regex for acceptable method names (optionally `#`-prefixed identifiers).
///
/// # Panics
///
/// Panics if the regex pattern is invalid.
pub fn get_method_name_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    #[allow(clippy::expect_used)]
    RE.get_or_init(|| Regex::new(r"^#?[\w$]+$").expect("Invalid method name regex pattern"))
}
