use std::path::Path;

use anyhow::Result;

use crate::config::TranscriptionConfig;

/// One remote call: submit an audio file, receive the transcript text.
///
/// Blocking from the caller's point of view; the pipeline runs it on a
/// worker thread. A single failed attempt is surfaced immediately, no
/// retry policy lives at this layer.
pub trait TranscriptionBackend: Send {
    fn name(&self) -> &str;
    fn transcribe(&self, audio_path: &Path, api_key: &str) -> Result<String>;
}

/// Supplies the current API key at call time, or `None` if unconfigured.
pub trait CredentialProvider: Send {
    fn api_key(&self) -> Option<String>;
}

/// Resolves the key from the config file first, then the GROQ_API_KEY
/// environment variable.
pub struct ConfigCredentials {
    configured: String,
}

impl ConfigCredentials {
    pub fn new(config: &TranscriptionConfig) -> Self {
        Self {
            configured: config.api_key.clone(),
        }
    }
}

impl CredentialProvider for ConfigCredentials {
    fn api_key(&self) -> Option<String> {
        if !self.configured.is_empty() {
            return Some(self.configured.clone());
        }
        std::env::var("GROQ_API_KEY")
            .ok()
            .filter(|k| !k.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_key_wins() {
        let config = TranscriptionConfig {
            api_key: "from-config".to_string(),
            ..Default::default()
        };
        let creds = ConfigCredentials::new(&config);
        assert_eq!(creds.api_key().as_deref(), Some("from-config"));
    }

    #[test]
    fn test_empty_config_key_is_not_a_credential() {
        // With no configured key the provider falls through to the
        // environment; an empty env value must also count as absent.
        let creds = ConfigCredentials {
            configured: String::new(),
        };
        match std::env::var("GROQ_API_KEY") {
            Ok(v) if !v.is_empty() => assert_eq!(creds.api_key(), Some(v)),
            _ => assert_eq!(creds.api_key(), None),
        }
    }
}
