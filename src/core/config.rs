//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.tfquiz/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{LevelFilter, debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::labels::Labels;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct QuizConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub labels: LabelsConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Relative paths are resolved against `~/.tfquiz/`.
    pub questions_file: Option<String>,
    pub sound: Option<bool>,
    pub log_level: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LabelsConfig {
    pub true_label: Option<String>,
    pub false_label: Option<String>,
    pub correct: Option<String>,
    pub wrong: Option<String>,
    pub next_question: Option<String>,
    pub results: Option<String>,
    pub quiz_complete: Option<String>,
    pub score: Option<String>,
    pub restart: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_SOUND: bool = true;
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// `None` means the built-in bank.
    pub questions_file: Option<PathBuf>,
    pub sound: bool,
    pub log_level: LevelFilter,
    pub labels: Labels,
}

/// Values given on the command line. `None`/`false` = not specified.
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub questions_file: Option<PathBuf>,
    pub mute: bool,
    pub log_level: Option<String>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns `~/.tfquiz/`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".tfquiz"))
}

/// Returns the path to `~/.tfquiz/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load config from `~/.tfquiz/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `QuizConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<QuizConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(QuizConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(QuizConfig::default());
    }

    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<QuizConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: QuizConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# tfquiz Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# questions_file = "questions.toml"  # Relative to ~/.tfquiz/, or absolute. Env: TFQUIZ_QUESTIONS
# sound = true                       # Bell when the quiz completes. Env: TFQUIZ_SOUND
# log_level = "info"                 # "off", "error", "warn", "info", "debug", "trace". Env: TFQUIZ_LOG_LEVEL

# [labels]
# true_label = "True"
# false_label = "False"
# correct = "Correct Answer"
# wrong = "Wrong Answer"
# next_question = "Next Question"
# results = "Results"
# quiz_complete = "Quiz Complete!"
# score = "Score: {score}/{total}"
# restart = "Restart Quiz"

# Question file format:
#
# [[questions]]
# text = "Android is an operating system."
# answer = true
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &QuizConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// `resolve` with an injectable environment lookup.
pub fn resolve_with_env(
    config: &QuizConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Questions: CLI → env → config (relative to ~/.tfquiz/) → built-in
    let questions_file = cli
        .questions_file
        .clone()
        .or_else(|| env("TFQUIZ_QUESTIONS").map(PathBuf::from))
        .or_else(|| {
            config
                .general
                .questions_file
                .as_deref()
                .map(resolve_config_relative)
        });

    // Sound: --mute → env → config → default
    let sound = if cli.mute {
        false
    } else {
        env("TFQUIZ_SOUND")
            .and_then(|v| parse_bool("TFQUIZ_SOUND", &v))
            .or(config.general.sound)
            .unwrap_or(DEFAULT_SOUND)
    };

    // Log level: CLI → env → config → default
    let log_level = cli
        .log_level
        .clone()
        .or_else(|| env("TFQUIZ_LOG_LEVEL"))
        .or_else(|| config.general.log_level.clone())
        .and_then(|v| parse_level(&v))
        .unwrap_or(DEFAULT_LOG_LEVEL);

    ResolvedConfig {
        questions_file,
        sound,
        log_level,
        labels: resolve_labels(&config.labels),
    }
}

fn resolve_config_relative(file: &str) -> PathBuf {
    let path = PathBuf::from(file);
    if path.is_absolute() {
        return path;
    }
    match config_dir() {
        Some(dir) => dir.join(path),
        None => path,
    }
}

fn resolve_labels(overrides: &LabelsConfig) -> Labels {
    let defaults = Labels::default();
    let pick = |value: &Option<String>, default: String| value.clone().unwrap_or(default);
    Labels {
        true_label: pick(&overrides.true_label, defaults.true_label),
        false_label: pick(&overrides.false_label, defaults.false_label),
        correct: pick(&overrides.correct, defaults.correct),
        wrong: pick(&overrides.wrong, defaults.wrong),
        next_question: pick(&overrides.next_question, defaults.next_question),
        results: pick(&overrides.results, defaults.results),
        quiz_complete: pick(&overrides.quiz_complete, defaults.quiz_complete),
        score: pick(&overrides.score, defaults.score),
        restart: pick(&overrides.restart, defaults.restart),
    }
}

fn parse_bool(key: &str, value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        other => {
            warn!("Ignoring {}={:?}: expected true or false", key, other);
            None
        }
    }
}

fn parse_level(value: &str) -> Option<LevelFilter> {
    match value.trim().parse::<LevelFilter>() {
        Ok(level) => Some(level),
        Err(_) => {
            warn!("Ignoring unknown log level {:?}", value);
            None
        }
    }
}
