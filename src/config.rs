use std::path::{Path, PathBuf};

use crate::error::Error;

/// Opener configuration loaded from `$HOME/config/.iterm_open.toml`.
///
/// Every key is individually defaulted, so a partial file overrides only
/// what it names:
///
/// ```toml
/// logger_file = "/tmp/iterm_open.log"
///
/// [open]
/// default = "/usr/bin/open"
/// editor = "/usr/local/bin/code-insiders"
/// ```
pub struct Config {
    /// Program invoked for URIs and the no-line-number fallback.
    pub default_opener: PathBuf,
    /// Program invoked when a line number is present.
    pub editor: PathBuf,
    /// Append-mode diagnostic log path.
    pub logger_file: PathBuf,
}

/// Raw TOML structure for `.iterm_open.toml`.
#[derive(serde::Deserialize)]
struct ItermOpenTomlConfig {
    #[serde(default = "default_logger_file")]
    logger_file: PathBuf,
    #[serde(default)]
    open: OpenTable,
}

/// The `[open]` table mapping target classes to opener programs.
#[derive(serde::Deserialize)]
struct OpenTable {
    #[serde(default = "default_opener")]
    default: PathBuf,
    #[serde(default = "default_editor")]
    editor: PathBuf,
}

impl Default for OpenTable {
    fn default() -> Self {
        Self {
            default: default_opener(),
            editor: default_editor(),
        }
    }
}

fn default_opener() -> PathBuf {
    PathBuf::from("/usr/bin/open")
}

fn default_editor() -> PathBuf {
    PathBuf::from("/usr/local/bin/code-insiders")
}

fn default_logger_file() -> PathBuf {
    PathBuf::from("/tmp/iterm_open.log")
}

impl Config {
    /// Load config from the discovered path: `ITERM_OPEN_CONFIG` if set,
    /// else `$HOME/config/.iterm_open.toml`.
    ///
    /// Returns built-in defaults if no file exists. Returns an error if a
    /// file exists but is malformed — never silently falls back to
    /// defaults when the user wrote a config file.
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` if reading fails (other than not-found),
    /// or `Error::TomlDe` if the TOML is malformed.
    pub fn load() -> Result<Self, Error> {
        let Some(path) = discover_config_path() else {
            return Ok(Self::built_in_defaults());
        };
        Self::load_from(&path)
    }

    /// Load config from an explicit path, defaulting when absent.
    fn load_from(path: &Path) -> Result<Self, Error> {
        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Self::built_in_defaults());
            },
            Err(e) => return Err(Error::Io(e)),
        };

        let raw: ItermOpenTomlConfig = toml::from_str(&content)?;
        Ok(Self {
            default_opener: raw.open.default,
            editor: raw.open.editor,
            logger_file: raw.logger_file,
        })
    }

    /// The three built-in program/path defaults, used when no config file
    /// exists anywhere.
    fn built_in_defaults() -> Self {
        Self {
            default_opener: default_opener(),
            editor: default_editor(),
            logger_file: default_logger_file(),
        }
    }
}

/// Discovery order: `ITERM_OPEN_CONFIG` env override, then
/// `$HOME/config/.iterm_open.toml`, else nothing (built-in defaults).
fn discover_config_path() -> Option<PathBuf> {
    if let Ok(explicit) = std::env::var("ITERM_OPEN_CONFIG") {
        return Some(PathBuf::from(explicit));
    }
    return dirs::home_dir().map(|home| home.join("config").join(".iterm_open.toml"));
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let config = Config::load_from(Path::new("/nonexistent/.iterm_open.toml")).unwrap();
        assert_eq!(config.default_opener, PathBuf::from("/usr/bin/open"));
        assert_eq!(config.editor, PathBuf::from("/usr/local/bin/code-insiders"));
        assert_eq!(config.logger_file, PathBuf::from("/tmp/iterm_open.log"));
    }

    #[test]
    fn partial_file_overrides_only_named_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".iterm_open.toml");
        std::fs::write(&path, "[open]\neditor = \"/usr/local/bin/subl\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.editor, PathBuf::from("/usr/local/bin/subl"));
        assert_eq!(config.default_opener, PathBuf::from("/usr/bin/open"));
        assert_eq!(config.logger_file, PathBuf::from("/tmp/iterm_open.log"));
    }

    #[test]
    fn full_file_overrides_everything() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".iterm_open.toml");
        std::fs::write(
            &path,
            "logger_file = \"/tmp/other.log\"\n[open]\ndefault = \"/usr/bin/xdg-open\"\neditor = \"/usr/bin/vi\"\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.default_opener, PathBuf::from("/usr/bin/xdg-open"));
        assert_eq!(config.editor, PathBuf::from("/usr/bin/vi"));
        assert_eq!(config.logger_file, PathBuf::from("/tmp/other.log"));
    }

    #[test]
    fn malformed_file_is_an_error_not_a_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".iterm_open.toml");
        std::fs::write(&path, "open = \"not a table\"\n").unwrap();

        assert!(matches!(Config::load_from(&path), Err(Error::TomlDe(_))));
    }
}
