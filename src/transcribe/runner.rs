use std::path::Path;
use std::sync::mpsc;

use anyhow::Result;

use crate::config::Config;
use crate::media::extract::FfmpegExtractor;
use crate::transcribe::backend::ConfigCredentials;
use crate::transcribe::groq::GroqBackend;
use crate::transcribe::pipeline::TranscriptionPipeline;
use crate::transcribe::status::ChannelSink;

/// Build the concrete pipeline from config.
fn build_pipeline(config: &Config, status_tx: mpsc::Sender<String>) -> TranscriptionPipeline {
    TranscriptionPipeline::new(
        Box::new(ConfigCredentials::new(&config.transcription)),
        Box::new(FfmpegExtractor::new(&config.extraction)),
        Box::new(GroqBackend::new(&config.transcription)),
        Box::new(ChannelSink::new(status_tx)),
    )
}

/// Transcribe one file end to end, rendering status lines on the calling
/// thread while a dedicated worker runs the pipeline.
pub fn run_transcribe(config: &Config, file: &Path, output: Option<&Path>) -> Result<()> {
    let (status_tx, status_rx) = mpsc::channel();
    let pipeline = build_pipeline(config, status_tx);

    let input = file.to_path_buf();
    let worker = std::thread::spawn(move || pipeline.transcribe(&input));

    // The channel closes when the worker drops the pipeline (and with it
    // the sender), which ends this loop.
    for message in status_rx {
        println!("{message}");
    }

    let result = worker
        .join()
        .map_err(|_| anyhow::anyhow!("transcription worker panicked"))?;
    let text = result?;

    match output {
        Some(path) => {
            std::fs::write(path, &text)?;
            tracing::info!("Saved transcript to {}", path.display());
        }
        None => println!("{text}"),
    }

    Ok(())
}
