use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{CONFIG_FILENAME, PACKAGE_JSON_FILENAME};

#[derive(Debug, Deserialize, Default, Clone)]
/// Top-level configuration struct.
pub struct Config {
    #[serde(default)]
    /// The `[jsexcise]` section.
    pub jsexcise: JsExciseConfig,
    /// The path to the configuration file this was loaded from.
    /// Set during loading, `None` if using defaults.
    #[serde(skip)]
    pub config_file_path: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
/// Configuration options for method removal.
pub struct JsExciseConfig {
    /// JavaScript file to edit.
    pub file: Option<PathBuf>,
    /// Ordered list of method names to remove.
    pub methods: Option<Vec<String>>,
    /// Whether to keep a `.backup` copy of the original file.
    pub backup: Option<bool>,
}

/// Error loading an explicitly requested configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        /// Config path
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
    /// The file is not valid TOML for this schema
    #[error("invalid config {}: {source}", path.display())]
    Parse {
        /// Config path
        path: PathBuf,
        /// Underlying TOML error
        source: toml::de::Error,
    },
}

#[derive(Debug, Deserialize)]
struct PackageJson {
    jsexcise: Option<JsExciseConfig>,
}

impl Config {
    /// Loads configuration from default locations (.jsexcise.toml or package.json in current dir).
    #[must_use]
    pub fn load() -> Self {
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self::load_from_path(&cwd)
    }

    /// Loads configuration starting from a specific path and traversing up.
    ///
    /// Unreadable or malformed candidates are skipped. A relative `path` is
    /// taken from the working directory so the walk can reach its parents.
    #[must_use]
    pub fn load_from_path(path: &Path) -> Self {
        let mut current = if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
        };
        if current.is_file() {
            current.pop();
        }

        loop {
            let toml_path = current.join(CONFIG_FILENAME);
            if toml_path.exists() {
                if let Ok(mut config) = Self::load_from_file(&toml_path) {
                    config.config_file_path = Some(toml_path);
                    return config;
                }
            }

            let package_path = current.join(PACKAGE_JSON_FILENAME);
            if package_path.exists() {
                if let Ok(content) = fs::read_to_string(&package_path) {
                    if let Ok(PackageJson {
                        jsexcise: Some(section),
                    }) = serde_json::from_str::<PackageJson>(&content)
                    {
                        return Config {
                            jsexcise: section,
                            config_file_path: Some(package_path),
                        };
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        Config::default()
    }

    /// Loads a single TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = toml::from_str::<Config>(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.config_file_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// The configured target file, with a relative path resolved against
    /// the directory holding the configuration file.
    #[must_use]
    pub fn target_file(&self) -> Option<PathBuf> {
        let file = self.jsexcise.file.as_ref()?;
        match self.config_file_path.as_deref().and_then(Path::parent) {
            Some(dir) if file.is_relative() => Some(dir.join(file)),
            _ => Some(file.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_load_from_path_no_config() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from_path(dir.path());
        assert!(config.jsexcise.file.is_none());
        assert!(config.jsexcise.methods.is_none());
    }

    #[test]
    fn test_load_from_path_jsexcise_toml() {
        let dir = TempDir::new().unwrap();
        let mut file = std::fs::File::create(dir.path().join(".jsexcise.toml")).unwrap();
        writeln!(
            file,
            r#"[jsexcise]
file = "src/app.js"
methods = ["showSettings", "hideSettings"]
backup = true
"#
        )
        .unwrap();

        let config = Config::load_from_path(dir.path());
        assert_eq!(config.jsexcise.file, Some(PathBuf::from("src/app.js")));
        assert_eq!(
            config.jsexcise.methods,
            Some(vec!["showSettings".to_owned(), "hideSettings".to_owned()])
        );
        assert_eq!(config.jsexcise.backup, Some(true));
        assert_eq!(
            config.config_file_path,
            Some(dir.path().join(".jsexcise.toml"))
        );
    }

    #[test]
    fn test_load_from_path_package_json() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("package.json"),
            r#"{
  "name": "web",
  "version": "1.0.0",
  "jsexcise": { "methods": ["addCommand"] }
}"#,
        )
        .unwrap();

        let config = Config::load_from_path(dir.path());
        assert_eq!(config.jsexcise.methods, Some(vec!["addCommand".to_owned()]));
        assert!(config.jsexcise.file.is_none());
    }

    #[test]
    fn test_package_json_without_section_is_skipped() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("web");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(nested.join("package.json"), r#"{"name": "web"}"#).unwrap();
        std::fs::write(
            dir.path().join(".jsexcise.toml"),
            "[jsexcise]\nbackup = false\n",
        )
        .unwrap();

        let config = Config::load_from_path(&nested);
        assert_eq!(config.jsexcise.backup, Some(false));
    }

    #[test]
    fn test_toml_takes_precedence_over_package_json() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join(".jsexcise.toml"),
            "[jsexcise]\nmethods = [\"fromToml\"]\n",
        )
        .unwrap();
        std::fs::write(
            dir.path().join("package.json"),
            r#"{"jsexcise": {"methods": ["fromPackage"]}}"#,
        )
        .unwrap();

        let config = Config::load_from_path(dir.path());
        assert_eq!(config.jsexcise.methods, Some(vec!["fromToml".to_owned()]));
    }

    #[test]
    fn test_load_from_path_traverses_up() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("web").join("js");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(
            dir.path().join(".jsexcise.toml"),
            "[jsexcise]\nfile = \"web/app.js\"\n",
        )
        .unwrap();

        let config = Config::load_from_path(&nested);
        assert_eq!(config.jsexcise.file, Some(PathBuf::from("web/app.js")));
        assert_eq!(
            config.target_file(),
            Some(dir.path().join("web").join("app.js"))
        );
    }

    #[test]
    fn test_target_file_resolution() {
        let dir = TempDir::new().unwrap();
        let absolute = dir.path().join("elsewhere.js");
        let config = Config {
            jsexcise: JsExciseConfig {
                file: Some(absolute.clone()),
                ..JsExciseConfig::default()
            },
            config_file_path: Some(dir.path().join("cfg").join(".jsexcise.toml")),
        };
        assert_eq!(config.target_file(), Some(absolute));

        let defaults = Config {
            jsexcise: JsExciseConfig {
                file: Some(PathBuf::from("web/app.js")),
                ..JsExciseConfig::default()
            },
            config_file_path: None,
        };
        assert_eq!(defaults.target_file(), Some(PathBuf::from("web/app.js")));
        assert_eq!(Config::default().target_file(), None);
    }

    #[test]
    fn test_load_from_file_path() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join(".jsexcise.toml"),
            "[jsexcise]\nmethods = [\"a\"]\n",
        )
        .unwrap();
        let js_file = dir.path().join("app.js");
        std::fs::write(&js_file, "a() {}\n").unwrap();

        let config = Config::load_from_path(&js_file);
        assert_eq!(config.jsexcise.methods, Some(vec!["a".to_owned()]));
    }

    #[test]
    fn test_load_from_file_errors() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.toml");
        assert!(matches!(
            Config::load_from_file(&missing),
            Err(ConfigError::Read { .. })
        ));

        let broken = dir.path().join("broken.toml");
        std::fs::write(&broken, "[jsexcise]\nmethods = \"not a list\"\n").unwrap();
        let err = Config::load_from_file(&broken).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().starts_with("invalid config"));
    }
}
