use std::path::Path;

use anyhow::Result;
use reqwest::blocking::multipart;

use crate::config::TranscriptionConfig;
use crate::transcribe::backend::TranscriptionBackend;

/// Cloud transcription via Groq's OpenAI-compatible audio API.
pub struct GroqBackend {
    endpoint: String,
    model: String,
}

impl GroqBackend {
    pub fn new(config: &TranscriptionConfig) -> Self {
        Self {
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            model: config.model.clone(),
        }
    }
}

fn guess_mime(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .as_deref()
    {
        Some("mp3") => "audio/mpeg",
        Some("wav") => "audio/wav",
        Some("m4a") => "audio/mp4",
        Some("ogg") => "audio/ogg",
        Some("flac") => "audio/flac",
        _ => "application/octet-stream",
    }
}

/// Pull the plain transcript out of a verbose_json response body.
pub(crate) fn transcript_text(body: &serde_json::Value) -> Result<String> {
    body.get("text")
        .and_then(|t| t.as_str())
        .map(|t| t.trim().to_string())
        .ok_or_else(|| anyhow::anyhow!("transcription response has no text field"))
}

impl TranscriptionBackend for GroqBackend {
    fn name(&self) -> &str {
        "groq"
    }

    fn transcribe(&self, audio_path: &Path, api_key: &str) -> Result<String> {
        let url = format!("{}/audio/transcriptions", self.endpoint);

        let file_bytes = std::fs::read(audio_path)?;
        let filename = audio_path
            .file_name()
            .ok_or_else(|| {
                anyhow::anyhow!("audio path has no filename: {}", audio_path.display())
            })?
            .to_string_lossy()
            .to_string();

        tracing::debug!(
            "Sending {} bytes from {} to {}",
            file_bytes.len(),
            filename,
            url
        );

        let form = multipart::Form::new()
            .part(
                "file",
                multipart::Part::bytes(file_bytes)
                    .file_name(filename)
                    .mime_str(guess_mime(audio_path))?,
            )
            .text("model", self.model.clone())
            .text("response_format", "verbose_json");

        // No request timeout here: the call inherits the transport's own
        // behavior, long files legitimately take a while.
        let client = reqwest::blocking::Client::new();
        let response = client
            .post(&url)
            .bearer_auth(api_key)
            .multipart(form)
            .send()?;

        let response = response.error_for_status()?;
        let body: serde_json::Value = response.json()?;
        transcript_text(&body)
    }
}
