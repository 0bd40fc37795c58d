//! Configuration management for pick-git.
//!
//! Settings come from an optional `config.yaml` in the user's config
//! directory, overridden by `PICK_GIT_*` environment variables. Command-line
//! flags are applied on top by the binary.

pub mod config;

pub use config::{ConfigError, PickGitConfig, config_path, load_config};
