use thiserror::Error;

/// Failure taxonomy for a single pipeline invocation.
///
/// Every failure is caught at the pipeline boundary and surfaced as one of
/// these variants plus a human-readable status string; nothing propagates
/// past `TranscriptionPipeline::transcribe` as a panic.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// No API key configured. Reported before any I/O is attempted.
    #[error("no API key configured; set transcription.api_key in the config file or the GROQ_API_KEY environment variable")]
    MissingCredential,

    /// Video decode/encode/write error while producing the audio track.
    #[error("audio extraction failed: {0:#}")]
    Extraction(anyhow::Error),

    /// Network, authentication, or remote-service error.
    #[error("transcription service failure: {0:#}")]
    Service(anyhow::Error),

    /// The service answered but returned no usable text.
    #[error("transcription service returned no text")]
    EmptyResult,
}
