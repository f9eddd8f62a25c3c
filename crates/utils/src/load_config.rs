use std::path::Path;

use anyhow::{Context, Result};
use droidpatch_core::Config;
use tokio::fs::read_to_string;

/// Reads `droidpatch.json` from the app directory, falling back to defaults
/// when the file is absent.
pub async fn load_config(app_dir: &Path) -> Result<Config> {
    let config_file = app_dir.join("droidpatch.json");
    if !config_file.is_file() {
        return Ok(Config::default());
    }
    let content = read_to_string(&config_file).await?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {}", config_file.display()))
}
