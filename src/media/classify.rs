use std::path::Path;

/// Filename suffixes that require audio extraction before transcription.
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "avi", "mov", "mkv"];

/// What a media file looks like from its filename alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Audio,
    Video,
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Audio => write!(f, "audio"),
            Self::Video => write!(f, "video"),
        }
    }
}

/// Classify a media file by its filename suffix. No content sniffing.
///
/// Anything that is not on the video allow-list is passed through as audio,
/// including unknown suffixes; the remote service is the final arbiter of
/// whether the payload is usable.
pub fn classify(path: &Path) -> MediaKind {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if VIDEO_EXTENSIONS.iter().any(|v| ext.eq_ignore_ascii_case(v)) => {
            MediaKind::Video
        }
        _ => MediaKind::Audio,
    }
}
