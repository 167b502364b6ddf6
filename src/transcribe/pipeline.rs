use std::path::Path;

use tempfile::TempPath;

use crate::error::PipelineError;
use crate::media::classify::{classify, MediaKind};
use crate::media::extract::AudioExtractor;
use crate::transcribe::backend::{CredentialProvider, TranscriptionBackend};
use crate::transcribe::status::{PipelineState, StatusSink};

/// Orchestrates one file-to-text conversion: classify the input, extract
/// audio from video if needed, send the audio to the transcription backend,
/// and clean up the temporary artifact.
///
/// All collaborators are trait objects so the presentation layer (and the
/// tests) can swap them out. The pipeline performs no internal parallelism;
/// callers wanting a responsive UI run `transcribe` on a worker thread.
pub struct TranscriptionPipeline {
    credentials: Box<dyn CredentialProvider>,
    extractor: Box<dyn AudioExtractor>,
    backend: Box<dyn TranscriptionBackend>,
    sink: Box<dyn StatusSink>,
}

impl TranscriptionPipeline {
    pub fn new(
        credentials: Box<dyn CredentialProvider>,
        extractor: Box<dyn AudioExtractor>,
        backend: Box<dyn TranscriptionBackend>,
        sink: Box<dyn StatusSink>,
    ) -> Self {
        Self {
            credentials,
            extractor,
            backend,
            sink,
        }
    }

    /// Transcribe a single media file, returning the plain-text transcript.
    ///
    /// All-or-nothing: either the full transcript comes back or a typed
    /// error does, and any extracted audio file is deleted before this
    /// returns, on every path.
    pub fn transcribe(&self, input: &Path) -> Result<String, PipelineError> {
        match self.run(input) {
            Ok(text) => {
                self.enter(PipelineState::Succeeded);
                Ok(text)
            }
            Err(e) => {
                self.enter(PipelineState::Failed);
                self.sink.report(&format!("Error: {e}"));
                Err(e)
            }
        }
    }

    fn run(&self, input: &Path) -> Result<String, PipelineError> {
        // Precondition: a credential must exist before any I/O happens.
        let api_key = self
            .credentials
            .api_key()
            .filter(|k| !k.is_empty())
            .ok_or(PipelineError::MissingCredential)?;

        self.enter(PipelineState::Classifying);
        let kind = classify(input);
        tracing::info!("Classified {} as {}", input.display(), kind);

        // The TempPath owns the extracted file; it is dropped (and the file
        // deleted) when this scope exits, whether we return Ok or Err.
        let extracted: Option<TempPath> = match kind {
            MediaKind::Video => {
                self.enter(PipelineState::ExtractingAudio);
                let temp = self
                    .extractor
                    .extract(input)
                    .map_err(PipelineError::Extraction)?;
                Some(temp)
            }
            MediaKind::Audio => None,
        };

        let audio_path: &Path = extracted.as_deref().unwrap_or(input);

        self.enter(PipelineState::Transcribing);
        let text = self
            .backend
            .transcribe(audio_path, &api_key)
            .map_err(PipelineError::Service)?;

        if text.trim().is_empty() {
            return Err(PipelineError::EmptyResult);
        }

        Ok(text)
    }

    fn enter(&self, state: PipelineState) {
        tracing::debug!("Pipeline state: {state}");
        if let Some(message) = state.announcement() {
            self.sink.report(message);
        }
    }
}
