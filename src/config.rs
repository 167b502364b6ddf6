use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub transcription: TranscriptionConfig,
    pub extraction: ExtractionConfig,
}

#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TranscriptionConfig {
    /// Base URL of the OpenAI-compatible transcription API.
    pub endpoint: String,
    /// API key (or set the GROQ_API_KEY environment variable).
    pub api_key: String,
    /// Model identifier sent with every request.
    pub model: String,
}

impl fmt::Debug for TranscriptionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TranscriptionConfig")
            .field("endpoint", &self.endpoint)
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// ffmpeg binary to invoke (name on PATH or absolute path).
    pub ffmpeg_path: String,
    /// Bitrate for the re-encoded MP3 audio track.
    pub audio_bitrate: String,
}

// --- Default implementations ---

impl Default for Config {
    fn default() -> Self {
        Self {
            transcription: TranscriptionConfig::default(),
            extraction: ExtractionConfig::default(),
        }
    }
}

impl Default for TranscriptionConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.groq.com/openai/v1".to_string(),
            api_key: String::new(),
            model: "whisper-large-v3-turbo".to_string(),
        }
    }
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            ffmpeg_path: "ffmpeg".to_string(),
            audio_bitrate: "192k".to_string(),
        }
    }
}

// --- Config loading ---

impl Config {
    /// Load config and return the resolved file path (if any).
    pub fn load_with_path(path: Option<&Path>) -> anyhow::Result<(Self, Option<PathBuf>)> {
        // 1. Check explicit path
        if let Some(p) = path {
            let content = std::fs::read_to_string(p).map_err(|e| {
                anyhow::anyhow!("Failed to read config file {}: {}", p.display(), e)
            })?;
            let config: Config = toml::from_str(&content)?;
            return Ok((config, Some(p.to_path_buf())));
        }

        // 2. Check beside the executable
        if let Ok(exe_path) = std::env::current_exe() {
            let beside_exe = exe_path.parent().map(|p| p.join("transcribex.toml"));
            if let Some(p) = beside_exe {
                if p.exists() {
                    let content = std::fs::read_to_string(&p)?;
                    let config: Config = toml::from_str(&content)?;
                    return Ok((config, Some(p)));
                }
            }
        }

        // 3. Check platform config directory (e.g. ~/.config/transcribex/config.toml)
        if let Some(p) = Self::platform_config_path() {
            if p.exists() {
                let content = std::fs::read_to_string(&p)?;
                let config: Config = toml::from_str(&content)?;
                return Ok((config, Some(p)));
            }
        }

        // 4. Fall back to defaults
        tracing::info!("No config file found, using defaults");
        Ok((Config::default(), None))
    }

    /// Load config (without tracking the resolved path).
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        Self::load_with_path(path).map(|(config, _)| config)
    }

    /// Location of the config file in the platform config directory.
    pub fn platform_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("transcribex").join("config.toml"))
    }

    /// Generate a default config file with all fields and inline documentation.
    pub fn generate_default_commented() -> String {
        r#"# transcribex configuration
# Edit this file to customize transcription and audio extraction settings.

[transcription]
# Base URL of the OpenAI-compatible transcription API.
endpoint = "https://api.groq.com/openai/v1"
# API key for the service. Leave empty to use the GROQ_API_KEY
# environment variable instead.
api_key = ""
# Model identifier sent with every transcription request.
model = "whisper-large-v3-turbo"

[extraction]
# ffmpeg binary used to extract audio from video files.
# A bare name is resolved on PATH; an absolute path is used as-is.
ffmpeg_path = "ffmpeg"
# Bitrate for the MP3 audio track extracted from video input.
audio_bitrate = "192k"
"#
        .to_string()
    }
}
