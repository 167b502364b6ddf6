use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use tempfile::TempPath;

use transcribex::error::PipelineError;
use transcribex::media::extract::AudioExtractor;
use transcribex::transcribe::backend::{CredentialProvider, TranscriptionBackend};
use transcribex::transcribe::pipeline::TranscriptionPipeline;
use transcribex::transcribe::status::ChannelSink;

struct FixedKey;

impl CredentialProvider for FixedKey {
    fn api_key(&self) -> Option<String> {
        Some("test-key".to_string())
    }
}

struct RecordingExtractor {
    produced: Arc<Mutex<Option<PathBuf>>>,
}

impl AudioExtractor for RecordingExtractor {
    fn extract(&self, _video_path: &Path) -> anyhow::Result<TempPath> {
        let file = tempfile::Builder::new().suffix(".mp3").tempfile()?;
        std::fs::write(file.path(), b"encoded audio")?;
        *self.produced.lock().unwrap() = Some(file.path().to_path_buf());
        Ok(file.into_temp_path())
    }
}

struct CannedBackend {
    text: &'static str,
}

impl TranscriptionBackend for CannedBackend {
    fn name(&self) -> &str {
        "canned"
    }

    fn transcribe(&self, audio_path: &Path, api_key: &str) -> anyhow::Result<String> {
        assert_eq!(api_key, "test-key");
        // The extracted audio must exist while the remote call runs.
        assert!(audio_path.exists(), "audio file missing during transcription");
        Ok(self.text.to_string())
    }
}

#[test]
fn test_video_transcription_across_worker_thread() {
    let produced = Arc::new(Mutex::new(None));
    let (status_tx, status_rx) = mpsc::channel();

    let pipeline = TranscriptionPipeline::new(
        Box::new(FixedKey),
        Box::new(RecordingExtractor {
            produced: produced.clone(),
        }),
        Box::new(CannedBackend {
            text: "hello world",
        }),
        Box::new(ChannelSink::new(status_tx)),
    );

    // One worker per invocation; the calling thread stays free to render
    // status lines as they arrive.
    let worker = std::thread::spawn(move || pipeline.transcribe(Path::new("lecture.mp4")));

    let statuses: Vec<String> = status_rx.iter().collect();
    let text = worker.join().unwrap().unwrap();

    assert_eq!(text, "hello world");
    assert_eq!(
        statuses,
        vec![
            "Extracting audio...",
            "Transcribing...",
            "Transcription complete!"
        ]
    );

    // The temporary audio artifact did not outlive the invocation.
    let temp = produced.lock().unwrap().clone().unwrap();
    assert!(!temp.exists(), "temp audio file leaked: {}", temp.display());
}

#[test]
fn test_audio_passthrough_across_worker_thread() {
    let produced = Arc::new(Mutex::new(None));
    let (status_tx, status_rx) = mpsc::channel();

    let pipeline = TranscriptionPipeline::new(
        Box::new(FixedKey),
        Box::new(RecordingExtractor {
            produced: produced.clone(),
        }),
        Box::new(CannedBackend { text: "test" }),
        Box::new(ChannelSink::new(status_tx)),
    );

    // A real audio file so the backend's existence assertion holds.
    let tmp = tempfile::TempDir::new().unwrap();
    let clip = tmp.path().join("clip.wav");
    std::fs::write(&clip, b"RIFF").unwrap();

    let worker = std::thread::spawn(move || pipeline.transcribe(&clip));
    let statuses: Vec<String> = status_rx.iter().collect();
    let text = worker.join().unwrap().unwrap();

    assert_eq!(text, "test");
    assert_eq!(statuses, vec!["Transcribing...", "Transcription complete!"]);
    assert!(
        produced.lock().unwrap().is_none(),
        "extraction must not run for audio input"
    );
}

#[test]
fn test_failure_is_reported_not_panicked() {
    struct FailingBackend;

    impl TranscriptionBackend for FailingBackend {
        fn name(&self) -> &str {
            "failing"
        }

        fn transcribe(&self, _audio_path: &Path, _api_key: &str) -> anyhow::Result<String> {
            anyhow::bail!("503 Service Unavailable")
        }
    }

    let (status_tx, status_rx) = mpsc::channel();
    let pipeline = TranscriptionPipeline::new(
        Box::new(FixedKey),
        Box::new(RecordingExtractor {
            produced: Arc::new(Mutex::new(None)),
        }),
        Box::new(FailingBackend),
        Box::new(ChannelSink::new(status_tx)),
    );

    let worker = std::thread::spawn(move || pipeline.transcribe(Path::new("song.mp3")));
    let statuses: Vec<String> = status_rx.iter().collect();
    let err = worker.join().unwrap().unwrap_err();

    assert!(matches!(err, PipelineError::Service(_)));
    assert!(err.to_string().contains("503 Service Unavailable"));
    assert!(statuses.last().unwrap().starts_with("Error: "));
}
