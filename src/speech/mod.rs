//! Speech output: synthesize a word to MP3 and play it.
//!
//! [`Speaker`] glues a [`Synthesize`] implementation to an [`AudioPlayer`].
//! Every failure comes back as a [`SpeechError`] for the caller to report;
//! nothing here touches session state.

pub mod playback;
pub mod synth;

use crate::config::AppConfig;
use std::process::ExitStatus;
use thiserror::Error;

pub use playback::AudioPlayer;
pub use synth::GoogleTts;

#[derive(Debug, Error)]
pub enum SpeechError {
    #[error("speech request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("speech service returned no audio")]
    NoAudio,
    #[error("speech service returned undecodable audio: {0}")]
    Decode(#[from] base64::DecodeError),
    #[error("could not stage audio: {0}")]
    Io(#[from] std::io::Error),
    #[error("no audio player configured")]
    NoPlayer,
    #[error("audio player `{command}` could not start: {source}")]
    PlayerSpawn {
        command: String,
        source: std::io::Error,
    },
    #[error("audio player exited with {0}")]
    PlayerExit(ExitStatus),
    #[error("audio player timed out after {0:.1}s")]
    PlayerTimeout(f64),
}

impl SpeechError {
    /// A pointer to the config key that fixes the error, when there is one.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            SpeechError::NoPlayer | SpeechError::PlayerSpawn { .. } => {
                Some("install it or set `command` under [player] in config.toml")
            }
            SpeechError::Request(_) | SpeechError::NoAudio => {
                Some("check the network, or set `enabled = false` under [speech]")
            }
            _ => None,
        }
    }
}

/// Turns text into encoded audio bytes.
pub trait Synthesize {
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>, SpeechError>;
}

pub struct Speaker<S = GoogleTts> {
    synth: S,
    player: AudioPlayer,
    enabled: bool,
}

impl Speaker<GoogleTts> {
    pub fn from_config(config: &AppConfig) -> Result<Self, SpeechError> {
        Ok(Self::new(
            GoogleTts::new(&config.speech)?,
            AudioPlayer::from_config(&config.player),
            config.speech.enabled,
        ))
    }
}

impl<S: Synthesize> Speaker<S> {
    pub fn new(synth: S, player: AudioPlayer, enabled: bool) -> Self {
        Self {
            synth,
            player,
            enabled,
        }
    }

    /// Synthesize and play `word`, returning once playback has finished.
    pub async fn speak(&self, word: &str) -> Result<(), SpeechError> {
        if !self.enabled {
            return Ok(());
        }
        let audio = self.synth.synthesize(word).await?;
        tracing::debug!(word, bytes = audio.len(), "synthesized");
        self.player.play(&audio).await
    }
}
