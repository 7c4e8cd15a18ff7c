//! quizgrade configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::strategy::StrategyKind;

/// Top-level quizgrade configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizgradeConfig {
    /// Scoring strategy used when none is given on the command line.
    #[serde(default)]
    pub strategy: StrategyKind,
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_log_filter() -> String {
    "quizgrade=warn".to_string()
}

impl Default for QuizgradeConfig {
    fn default() -> Self {
        Self {
            strategy: StrategyKind::default(),
            log_filter: default_log_filter(),
        }
    }
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `quizgrade.toml` in the current directory
/// 2. `~/.config/quizgrade/config.toml`
///
/// Environment variable override: `QUIZGRADE_STRATEGY`.
pub fn load_config() -> Result<QuizgradeConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<QuizgradeConfig> {
    let config_path = match path {
        Some(p) if p.exists() => Some(p.to_path_buf()),
        Some(p) => anyhow::bail!("config file not found: {}", p.display()),
        None => default_config_path(),
    };

    let mut config = match config_path {
        Some(path) => parse_config_file(&path)?,
        None => QuizgradeConfig::default(),
    };

    if let Ok(strategy) = std::env::var("QUIZGRADE_STRATEGY") {
        config.strategy = strategy
            .parse::<StrategyKind>()
            .context("invalid QUIZGRADE_STRATEGY")?;
    }

    Ok(config)
}

fn parse_config_file(path: &Path) -> Result<QuizgradeConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("failed to parse config: {}", path.display()))
}

fn default_config_path() -> Option<PathBuf> {
    let local = PathBuf::from("quizgrade.toml");
    if local.exists() {
        return Some(local);
    }
    let global = dirs_path()?.join("config.toml");
    global.exists().then_some(global)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("quizgrade"))
}
