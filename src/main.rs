use clap::Parser;

use transcribex::cli::{Cli, Commands};
use transcribex::config::Config;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("transcribex=info".parse()?),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Transcribe { file, output } => {
            transcribex::transcribe::runner::run_transcribe(&config, &file, output.as_deref())
        }
        Commands::InitConfig { force } => transcribex::commands::init_config(force),
    }
}
