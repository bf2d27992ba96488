//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the application works out of the box.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub speech: SpeechConfig,
    #[serde(default)]
    pub player: PlayerConfig,
    #[serde(default)]
    pub sample: SampleConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Text-to-speech request settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeechConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// IETF language tag passed to the speech service (e.g. `"en"`).
    #[serde(default = "default_lang")]
    pub lang: String,
    /// Top-level domain of the Google Translate host, which selects the accent.
    #[serde(default = "default_tld")]
    pub tld: String,
    #[serde(default)]
    pub slow: bool,
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            lang: default_lang(),
            tld: default_tld(),
            slow: false,
            request_timeout_secs: default_request_timeout(),
        }
    }
}

/// External audio player. `{file}` in `args` is replaced by the MP3 path;
/// without a placeholder the path is appended.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerConfig {
    #[serde(default = "default_player_command")]
    pub command: String,
    #[serde(default = "default_player_args")]
    pub args: Vec<String>,
    #[serde(default = "default_player_timeout")]
    pub timeout_secs: u64,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            command: default_player_command(),
            args: default_player_args(),
            timeout_secs: default_player_timeout(),
        }
    }
}

/// Where the bundled sample list is exported.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleConfig {
    #[serde(default = "default_export_dir")]
    pub export_dir: PathBuf,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            export_dir: default_export_dir(),
        }
    }
}

/// Diagnostic log file settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    /// One of `error`, `warn`, `info`, `debug`, `trace`.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_dir: default_log_dir(),
            level: default_log_level(),
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_lang() -> String {
    "en".to_string()
}
fn default_tld() -> String {
    "com".to_string()
}
fn default_request_timeout() -> u64 {
    10
}
fn default_player_command() -> String {
    if cfg!(target_os = "macos") {
        "afplay".to_string()
    } else if cfg!(windows) {
        "ffplay".to_string()
    } else {
        "mpg123".to_string()
    }
}
fn default_player_args() -> Vec<String> {
    let args: &[&str] = if cfg!(target_os = "macos") {
        &["{file}"]
    } else if cfg!(windows) {
        &["-nodisp", "-autoexit", "-loglevel", "quiet", "{file}"]
    } else {
        &["-q", "{file}"]
    };
    args.iter().map(|a| a.to_string()).collect()
}
fn default_player_timeout() -> u64 {
    30
}
fn default_export_dir() -> PathBuf {
    PathBuf::from(".")
}
fn default_log_dir() -> String {
    "~/.local/share/spellbee/logs".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}
