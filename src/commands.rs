use std::path::Path;

use anyhow::Result;

use crate::config::Config;

/// Write a commented default config file to the platform config directory.
pub fn init_config(force: bool) -> Result<()> {
    let path = Config::platform_config_path()
        .ok_or_else(|| anyhow::anyhow!("Could not determine the platform config directory"))?;
    write_default_config(&path, force)
}

fn write_default_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "Config file already exists at {} (use --force to overwrite)",
            path.display()
        );
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, Config::generate_default_commented())?;

    println!("Wrote default config to {}", path.display());
    println!("Fill in transcription.api_key (or set GROQ_API_KEY) before transcribing.");
    Ok(())
}
