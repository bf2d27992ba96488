//! Google Translate text-to-speech client.
//!
//! Speaks the same protocol as gTTS: a form POST to the `batchexecute`
//! endpoint carrying the `jQ1olc` RPC, answered by lines of JSON in which the
//! MP3 audio appears base64-encoded.

use super::{SpeechError, Synthesize};
use crate::config::SpeechConfig;
use base64::Engine;
use serde_json::{json, Value};
use std::time::Duration;

const RPC_ID: &str = "jQ1olc";
const AUDIO_START: &str = r#"jQ1olc","[\""#;
const AUDIO_END: &str = r#"\"]"#;
const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; WOW64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/47.0.2526.106 Safari/537.36";

pub struct GoogleTts {
    client: reqwest::Client,
    lang: String,
    tld: String,
    slow: bool,
}

impl GoogleTts {
    pub fn new(config: &SpeechConfig) -> Result<Self, SpeechError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;
        Ok(Self {
            client,
            lang: config.lang.clone(),
            tld: config.tld.clone(),
            slow: config.slow,
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "https://translate.google.{}/_/TranslateWebserverUi/data/batchexecute",
            self.tld
        )
    }
}

impl Synthesize for GoogleTts {
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>, SpeechError> {
        let payload = rpc_payload(text, &self.lang, self.slow);
        let body = self
            .client
            .post(self.endpoint())
            .header(
                reqwest::header::REFERER,
                format!("http://translate.google.{}/", self.tld),
            )
            .form(&[("f.req", payload)])
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        extract_audio(&body)
    }
}

/// The `f.req` form value: the RPC envelope around `[text, lang, speed, "null"]`.
pub fn rpc_payload(text: &str, lang: &str, slow: bool) -> String {
    let speed = if slow { Value::Bool(true) } else { Value::Null };
    let parameter = json!([text, lang, speed, "null"]).to_string();
    json!([[[RPC_ID, parameter, null, "generic"]]]).to_string()
}

/// Pull every audio chunk out of a batchexecute response and concatenate them.
pub fn extract_audio(body: &str) -> Result<Vec<u8>, SpeechError> {
    let engine = base64::engine::general_purpose::STANDARD;
    let mut audio = Vec::new();
    for line in body.lines().filter(|l| l.contains(RPC_ID)) {
        let Some(start) = line.find(AUDIO_START).map(|i| i + AUDIO_START.len()) else {
            continue;
        };
        let Some(len) = line[start..].rfind(AUDIO_END) else {
            continue;
        };
        audio.extend(engine.decode(&line[start..start + len])?);
    }
    if audio.is_empty() {
        return Err(SpeechError::NoAudio);
    }
    Ok(audio)
}
