use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "transcribex",
    version,
    about = "Convert audio and video files to text transcripts with the Groq Whisper API"
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Transcribe a media file to plain text
    Transcribe {
        /// Audio or video file to transcribe
        file: PathBuf,

        /// Write the transcript here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Write a commented default config file to the platform config directory
    InitConfig {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}
