use std::sync::mpsc;

/// Where one pipeline invocation currently stands.
///
/// Idle is the entry state; Succeeded and Failed are terminal per
/// invocation. The pipeline itself is reusable for the next call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    Idle,
    Classifying,
    ExtractingAudio,
    Transcribing,
    Succeeded,
    Failed,
}

impl std::fmt::Display for PipelineState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Classifying => write!(f, "classifying"),
            Self::ExtractingAudio => write!(f, "extracting_audio"),
            Self::Transcribing => write!(f, "transcribing"),
            Self::Succeeded => write!(f, "succeeded"),
            Self::Failed => write!(f, "failed"),
        }
    }
}

impl PipelineState {
    /// Status line pushed to the sink on entering this state, if any.
    pub fn announcement(&self) -> Option<&'static str> {
        match self {
            Self::ExtractingAudio => Some("Extracting audio..."),
            Self::Transcribing => Some("Transcribing..."),
            Self::Succeeded => Some("Transcription complete!"),
            _ => None,
        }
    }
}

/// Sink for human-readable progress updates.
///
/// The presentation layer owns the rendering; the pipeline only pushes
/// strings, in order, with no acknowledgement expected.
pub trait StatusSink: Send {
    fn report(&self, message: &str);
}

/// Forwards status lines over an mpsc channel to the presentation thread.
pub struct ChannelSink {
    sender: mpsc::Sender<String>,
}

impl ChannelSink {
    pub fn new(sender: mpsc::Sender<String>) -> Self {
        Self { sender }
    }
}

impl StatusSink for ChannelSink {
    fn report(&self, message: &str) {
        // A closed receiver just means nobody is watching anymore.
        let _ = self.sender.send(message.to_string());
    }
}

/// Discards all status updates.
pub struct NullSink;

impl StatusSink for NullSink {
    fn report(&self, _message: &str) {}
}
