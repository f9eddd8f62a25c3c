use std::path::PathBuf;

use thiserror::Error;

/// The one fatal condition of a patch run: the app directory has no manifest.
#[derive(Debug, Error)]
#[error("AndroidManifest.xml not found at {}", path.display())]
pub struct MissingManifest {
    pub path: PathBuf,
}
