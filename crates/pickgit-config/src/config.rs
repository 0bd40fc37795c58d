//! Configuration types and loading.
//!
//! The main entry point is [`PickGitConfig`], loaded with [`load_config`].
//! Layers, lowest precedence first:
//!
//! 1. built-in defaults
//! 2. `$XDG_CONFIG_HOME/pick-git/config.yaml` (or `~/.config/pick-git/config.yaml`)
//! 3. `PICK_GIT_*` environment variables, e.g. `PICK_GIT_SELECTOR=pick`

use std::env;
use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file exists but could not be read.
    #[error("failed to read config file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A layer contained invalid YAML or a value of the wrong type.
    #[error("invalid configuration: {0}")]
    ParseError(#[from] Box<figment::Error>),
}

/// A specialized `Result` type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Prefix of the environment variables that override file settings.
pub const ENV_PREFIX: &str = "PICK_GIT_";

// ---------------------------------------------------------------------------
// Main config struct
// ---------------------------------------------------------------------------

/// The full pick-git configuration.
///
/// All fields use `serde` defaults so that a partially-specified YAML file
/// is deserialized with sensible values for everything else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct PickGitConfig {
    /// Selector command line. The first word must be on `PATH`.
    pub selector: String,

    /// Shell used to execute commands, ahead of `$SHELL`.
    pub shell: Option<String>,

    /// Startup file passed to the shell with `--rcfile`.
    pub rcfile: Option<String>,

    /// Never touch the clipboard.
    pub no_copy: bool,

    /// Separator between tokens copied together in both-mode.
    pub copy_separator: String,

    /// List reflog entries of all refs, not only HEAD.
    pub reflog_all: bool,
}

impl Default for PickGitConfig {
    fn default() -> Self {
        Self {
            selector: "fzf".to_string(),
            shell: None,
            rcfile: None,
            no_copy: false,
            copy_separator: " ".to_string(),
            reflog_all: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Location of the user's configuration file.
///
/// `$XDG_CONFIG_HOME/pick-git/config.yaml`, falling back to
/// `$HOME/.config/pick-git/config.yaml`. Returns `None` when neither
/// variable is set.
pub fn config_path() -> Option<PathBuf> {
    let base = env::var_os("XDG_CONFIG_HOME")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| {
            env::var_os("HOME")
                .filter(|v| !v.is_empty())
                .map(|home| PathBuf::from(home).join(".config"))
        })?;
    Some(base.join("pick-git").join("config.yaml"))
}

/// Load configuration from defaults, the file at `path` (if any) and the
/// `PICK_GIT_*` environment.
///
/// # Errors
///
/// Returns [`ConfigError::ReadError`] if the file exists but cannot be read,
/// or [`ConfigError::ParseError`] if a layer holds invalid values.
pub fn load_config(path: Option<&Path>) -> Result<PickGitConfig> {
    let figment = file_layers(path)?.merge(env_layer());
    extract(figment)
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

fn file_layers(path: Option<&Path>) -> Result<Figment> {
    let mut figment = Figment::from(Serialized::defaults(PickGitConfig::default()));

    let Some(path) = path else {
        return Ok(figment);
    };

    if !path.exists() {
        debug!(path = %path.display(), "no config file");
        return Ok(figment);
    }

    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
        path: path.to_path_buf(),
        source,
    })?;

    // An empty file is valid and yields default config.
    if !content.trim().is_empty() {
        debug!(path = %path.display(), "loading config file");
        figment = figment.merge(Yaml::string(&content));
    }

    Ok(figment)
}

/// `PICK_GIT_COPY_SEPARATOR` maps to the `copy-separator` key.
fn env_layer() -> Env {
    Env::prefixed(ENV_PREFIX).map(|key| key.as_str().replace('_', "-").into())
}

fn extract(figment: Figment) -> Result<PickGitConfig> {
    figment.extract().map_err(|e| ConfigError::ParseError(Box::new(e)))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn write_config(content: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, content).unwrap();
        (dir, path)
    }

    /// Defaults and file only, so ambient `PICK_GIT_*` variables cannot leak in.
    fn load_config_file(path: &Path) -> Result<PickGitConfig> {
        extract(file_layers(Some(path))?)
    }

    #[test]
    fn test_default_config() {
        let cfg = PickGitConfig::default();
        assert_eq!(cfg.selector, "fzf");
        assert_eq!(cfg.copy_separator, " ");
        assert!(cfg.shell.is_none());
        assert!(cfg.rcfile.is_none());
        assert!(!cfg.no_copy);
        assert!(!cfg.reflog_all);
    }

    #[test]
    fn test_load_missing_config_returns_default() {
        let path = PathBuf::from("/nonexistent/path/pick-git/config.yaml");
        let cfg = load_config_file(&path).unwrap();
        assert_eq!(cfg, PickGitConfig::default());
    }

    #[test]
    fn test_load_empty_config_returns_default() {
        let (_dir, path) = write_config("  \n");
        assert_eq!(load_config_file(&path).unwrap(), PickGitConfig::default());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let (_dir, path) = write_config("selector: pick\nno-copy: true\n");
        let cfg = load_config_file(&path).unwrap();
        assert_eq!(cfg.selector, "pick");
        assert!(cfg.no_copy);
        assert_eq!(cfg.copy_separator, " ");
        assert!(cfg.shell.is_none());
    }

    #[test]
    fn test_full_yaml() {
        let yaml = "\
selector: fzf --height 40%
shell: /bin/zsh
rcfile: ~/.zshrc
copy-separator: ', '
reflog-all: true
";
        let (_dir, path) = write_config(yaml);
        let cfg = load_config_file(&path).unwrap();
        assert_eq!(cfg.selector, "fzf --height 40%");
        assert_eq!(cfg.shell.as_deref(), Some("/bin/zsh"));
        assert_eq!(cfg.rcfile.as_deref(), Some("~/.zshrc"));
        assert_eq!(cfg.copy_separator, ", ");
        assert!(cfg.reflog_all);
    }

    #[test]
    fn test_invalid_yaml_is_an_error() {
        let (_dir, path) = write_config("no-copy: [1, 2\n");
        assert!(matches!(load_config_file(&path), Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_wrong_type_is_an_error() {
        let (_dir, path) = write_config("no-copy: sometimes\n");
        assert!(load_config_file(&path).is_err());
    }
}
