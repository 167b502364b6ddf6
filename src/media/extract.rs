use std::ffi::OsString;
use std::path::Path;
use std::process::Command;

use anyhow::Result;
use tempfile::TempPath;

use crate::config::ExtractionConfig;

/// Produces a standalone encoded audio file from a video container.
///
/// The returned `TempPath` owns the file on disk: dropping it deletes the
/// file, which is how the pipeline guarantees the artifact never outlives
/// one invocation.
pub trait AudioExtractor: Send {
    fn extract(&self, video_path: &Path) -> Result<TempPath>;
}

/// Extracts the audio track by shelling out to ffmpeg and re-encoding to MP3.
pub struct FfmpegExtractor {
    ffmpeg_path: String,
    audio_bitrate: String,
}

impl FfmpegExtractor {
    pub fn new(config: &ExtractionConfig) -> Self {
        Self {
            ffmpeg_path: config.ffmpeg_path.clone(),
            audio_bitrate: config.audio_bitrate.clone(),
        }
    }
}

fn ffmpeg_args(input: &Path, output: &Path, bitrate: &str) -> Vec<OsString> {
    vec![
        "-y".into(),
        "-loglevel".into(),
        "error".into(),
        "-i".into(),
        input.into(),
        "-vn".into(),
        "-acodec".into(),
        "libmp3lame".into(),
        "-b:a".into(),
        bitrate.into(),
        output.into(),
    ]
}

impl AudioExtractor for FfmpegExtractor {
    fn extract(&self, video_path: &Path) -> Result<TempPath> {
        anyhow::ensure!(
            video_path.exists(),
            "input file not found: {}",
            video_path.display()
        );

        // Allocate the output first so a failed run still ends with the
        // partial file owned (and deleted) by this TempPath.
        let temp_audio = tempfile::Builder::new()
            .prefix("transcribex-")
            .suffix(".mp3")
            .tempfile()?
            .into_temp_path();

        tracing::debug!(
            "Extracting audio: {} -> {}",
            video_path.display(),
            temp_audio.display()
        );

        let output = Command::new(&self.ffmpeg_path)
            .args(ffmpeg_args(video_path, &temp_audio, &self.audio_bitrate))
            .output()
            .map_err(|e| anyhow::anyhow!("failed to launch {}: {}", self.ffmpeg_path, e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            anyhow::bail!(
                "ffmpeg exited with {}: {}",
                output.status,
                stderr.trim()
            );
        }

        // ffmpeg exits 0 for some degenerate inputs; an empty file means no
        // audio stream was written.
        let size = std::fs::metadata(&temp_audio)?.len();
        anyhow::ensure!(size > 0, "ffmpeg produced no audio output");

        Ok(temp_audio)
    }
}
