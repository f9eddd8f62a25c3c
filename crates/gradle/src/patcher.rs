use std::path::Path;

use anyhow::Result;
use async_trait::async_trait;
use droidpatch_core::{Config, PatchOutcome, Patcher};
use droidpatch_utils::{gradle_groovy_path, gradle_kts_path};
use tokio::fs::{read_to_string, write};

use crate::dialect::GradleDialect;
use crate::editor::{ensure_desugar_dependency, ensure_desugar_flag};

/// Patches `android/app/build.gradle` or `android/app/build.gradle.kts`,
/// whichever exists (Groovy preferred when both do).
#[derive(Debug, Default)]
pub struct GradlePatcher;

#[async_trait]
impl Patcher for GradlePatcher {
    fn label(&self) -> &str {
        "Gradle build script"
    }

    async fn patch(&self, app_dir: &Path, config: &Config, dry_run: bool) -> Result<PatchOutcome> {
        let groovy = gradle_groovy_path(app_dir);
        let kts = gradle_kts_path(app_dir);
        let path = if groovy.is_file() {
            groovy
        } else if kts.is_file() {
            kts
        } else {
            return Ok(PatchOutcome::Skipped(
                "no build.gradle or build.gradle.kts found".to_string(),
            ));
        };

        let content = read_to_string(&path).await?;
        let file_name = path
            .file_name()
            .and_then(|f| f.to_str())
            .unwrap_or_default();
        let dialect = GradleDialect::from_file_name(file_name);

        let mut updated = ensure_desugar_flag(&content, dialect);
        updated = ensure_desugar_dependency(&updated, dialect, &config.desugar_artifact);

        if updated == content {
            return Ok(PatchOutcome::Unchanged);
        }
        if !dry_run {
            write(&path, &updated).await?;
        }
        Ok(PatchOutcome::Patched)
    }
}
