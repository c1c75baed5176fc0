//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/rollback/rollback.toml`
//! 3. Environment variables: `ROLLBACK_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::Deserialize;

use crate::application::ApplicationError;
use crate::domain::expand_env_vars;

/// How git is invoked.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GitConfig {
    /// git executable (name on PATH or absolute path)
    pub binary: String,
    /// strftime-style format passed as `--date=format:` to `git log`
    pub date_format: String,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            binary: "git".into(),
            date_format: "%Y-%m-%d %H:%M:%S".into(),
        }
    }
}

/// Raw git config for intermediate parsing (`None` means "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawGitConfig {
    pub binary: Option<String>,
    pub date_format: Option<String>,
}

/// Raw settings for intermediate parsing.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct RawSettings {
    pub target_filename: Option<String>,
    pub protected_branches: Option<Vec<String>>,
    pub commit_message: Option<String>,
    pub git: RawGitConfig,
}

/// Unified configuration for rollback.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// File name accepted and searched for (case-insensitive)
    pub target_filename: String,
    /// Branches protected in addition to master, develop and main
    pub protected_branches: Vec<String>,
    /// Commit message template; `{path}` and `{revision}` are substituted
    pub commit_message: String,
    /// git invocation settings
    pub git: GitConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            target_filename: "rollout.yaml".into(),
            protected_branches: vec![],
            commit_message: "Rolled back '{path}' to commit {revision}".into(),
            git: GitConfig::default(),
        }
    }
}

/// Get the XDG config directory for rollback.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "rollback").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("rollback.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Expand shell variables and tilde in the git binary path.
    fn expand_paths(&mut self) {
        self.git.binary = expand_env_vars(&self.git.binary);
    }

    /// Apply a config file onto self.
    ///
    /// Scalars: file wins if specified. `protected_branches` is replaced,
    /// which never touches the built-in protected set.
    fn apply_file(&self, raw: &RawSettings) -> Self {
        Self {
            target_filename: raw
                .target_filename
                .clone()
                .unwrap_or_else(|| self.target_filename.clone()),
            protected_branches: raw
                .protected_branches
                .clone()
                .unwrap_or_else(|| self.protected_branches.clone()),
            commit_message: raw
                .commit_message
                .clone()
                .unwrap_or_else(|| self.commit_message.clone()),
            git: GitConfig {
                binary: raw
                    .git
                    .binary
                    .clone()
                    .unwrap_or_else(|| self.git.binary.clone()),
                date_format: raw
                    .git
                    .date_format
                    .clone()
                    .unwrap_or_else(|| self.git.date_format.clone()),
            },
        }
    }

    /// Load settings with layered precedence from the standard locations.
    pub fn load() -> Result<Self, ApplicationError> {
        Self::load_from(global_config_path().as_deref())
    }

    /// Load settings with an explicit global config file.
    ///
    /// # Precedence (lowest to highest)
    /// 1. Compiled defaults
    /// 2. `global_path`, if it exists
    /// 3. Environment variables: `ROLLBACK_*` prefix
    pub fn load_from(global_path: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(path) = global_path {
            if path.exists() {
                let raw = load_raw_settings(path)?;
                current = current.apply_file(&raw);
            }
        }

        current = Self::apply_env_overrides(current)?;
        current.expand_paths();
        current.validate()?;

        Ok(current)
    }

    /// Apply ROLLBACK_* environment variables as explicit overrides.
    ///
    /// `ROLLBACK_GIT__BINARY` maps to `git.binary`; lists are comma separated.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let builder = Config::builder().add_source(
            Environment::with_prefix("ROLLBACK")
                .try_parsing(true)
                .prefix_separator("_")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("protected_branches"),
        );

        let config = builder.build().map_err(config_err)?;

        if let Ok(val) = config.get_string("target_filename") {
            settings.target_filename = val;
        }
        if let Ok(val) = config.get::<Vec<String>>("protected_branches") {
            settings.protected_branches = val;
        }
        if let Ok(val) = config.get_string("commit_message") {
            settings.commit_message = val;
        }
        if let Ok(val) = config.get_string("git.binary") {
            settings.git.binary = val;
        }
        if let Ok(val) = config.get_string("git.date_format") {
            settings.git.date_format = val;
        }

        Ok(settings)
    }

    fn validate(&self) -> Result<(), ApplicationError> {
        if self.target_filename.trim().is_empty() {
            return Err(ApplicationError::Config {
                message: "target_filename must not be empty".into(),
            });
        }
        if self.git.binary.trim().is_empty() {
            return Err(ApplicationError::Config {
                message: "git.binary must not be empty".into(),
            });
        }
        Ok(())
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
