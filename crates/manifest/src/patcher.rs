use std::path::Path;

use anyhow::Result;
use async_trait::async_trait;
use droidpatch_core::{Config, PatchOutcome, Patcher};
use droidpatch_utils::manifest_path;
use tokio::fs::{read_to_string, write};

use crate::editor::{
    REQUIRED_PERMISSIONS, SERVICE_BLOCK, ensure_namespace, ensure_permission, insert_service,
};
use crate::error::MissingManifest;

/// Patches `android/app/src/main/AndroidManifest.xml`.
#[derive(Debug, Default)]
pub struct ManifestPatcher;

#[async_trait]
impl Patcher for ManifestPatcher {
    fn label(&self) -> &str {
        "AndroidManifest.xml"
    }

    async fn patch(&self, app_dir: &Path, config: &Config, dry_run: bool) -> Result<PatchOutcome> {
        let path = manifest_path(app_dir);
        if !path.is_file() {
            return Err(MissingManifest { path }.into());
        }

        let original = read_to_string(&path).await?;

        let mut manifest = ensure_namespace(&original);
        for permission in REQUIRED_PERMISSIONS {
            manifest = ensure_permission(&manifest, permission);
        }
        for permission in &config.extra_permissions {
            manifest = ensure_permission(&manifest, permission);
        }
        manifest = insert_service(&manifest, SERVICE_BLOCK);

        // written back even when unchanged; the outcome only drives status output
        if !dry_run {
            write(&path, &manifest).await?;
        }
        if manifest == original {
            Ok(PatchOutcome::Unchanged)
        } else {
            Ok(PatchOutcome::Patched)
        }
    }
}
