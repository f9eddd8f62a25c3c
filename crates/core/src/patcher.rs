use std::path::Path;

use crate::{Config, PatchOutcome};
use anyhow::Result;
use async_trait::async_trait;

/// One implementor per target file under the app directory.
///
/// A patcher owns the full read-transform-write cycle for its file. Every
/// insertion it performs is guarded by a presence check, so `patch` is safe
/// to call any number of times.
#[async_trait]
pub trait Patcher: std::fmt::Debug + Send + Sync {
    /// File label used in per-file status output
    fn label(&self) -> &str;

    /// Apply the patch to the file under `app_dir`.
    ///
    /// With `dry_run` set, the transformation runs in memory and the outcome
    /// is reported without touching the filesystem.
    async fn patch(&self, app_dir: &Path, config: &Config, dry_run: bool) -> Result<PatchOutcome>;
}
