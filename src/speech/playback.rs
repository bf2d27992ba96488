//! Audio playback through an external player process.
//!
//! Audio is staged in a named temp file that lives exactly as long as one
//! `play` call. It is removed when the call returns, whether the player
//! succeeded, failed or timed out.

use super::SpeechError;
use crate::config::PlayerConfig;
use std::io::Write;
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;
use tempfile::NamedTempFile;
use tokio::process::Command;

const FILE_PLACEHOLDER: &str = "{file}";

pub struct AudioPlayer {
    command: String,
    args: Vec<String>,
    timeout: Duration,
}

impl AudioPlayer {
    pub fn new(command: impl Into<String>, args: Vec<String>, timeout: Duration) -> Self {
        Self {
            command: command.into(),
            args,
            timeout,
        }
    }

    pub fn from_config(config: &PlayerConfig) -> Self {
        Self::new(
            config.command.clone(),
            config.args.clone(),
            Duration::from_secs(config.timeout_secs),
        )
    }

    /// Play MP3 bytes, returning when the player exits.
    pub async fn play(&self, audio: &[u8]) -> Result<(), SpeechError> {
        let mut staged = NamedTempFile::with_suffix(".mp3")?;
        staged.write_all(audio)?;
        staged.flush()?;

        let result = self.run(staged.path()).await;
        // Dropping the handle deletes the file on every path.
        drop(staged);
        result
    }

    fn command_args(&self, file: &Path) -> Vec<String> {
        let file = file.to_string_lossy();
        let mut args: Vec<String> = self
            .args
            .iter()
            .map(|a| a.replace(FILE_PLACEHOLDER, &file))
            .collect();
        if !self.args.iter().any(|a| a.contains(FILE_PLACEHOLDER)) {
            args.push(file.into_owned());
        }
        args
    }

    async fn run(&self, file: &Path) -> Result<(), SpeechError> {
        if self.command.trim().is_empty() {
            return Err(SpeechError::NoPlayer);
        }

        let mut child = Command::new(&self.command)
            .args(self.command_args(file))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| SpeechError::PlayerSpawn {
                command: self.command.clone(),
                source,
            })?;

        match tokio::time::timeout(self.timeout, child.wait()).await {
            Ok(status) => {
                let status = status?;
                if status.success() {
                    Ok(())
                } else {
                    Err(SpeechError::PlayerExit(status))
                }
            }
            Err(_) => {
                let _ = child.kill().await;
                Err(SpeechError::PlayerTimeout(self.timeout.as_secs_f64()))
            }
        }
    }
}
