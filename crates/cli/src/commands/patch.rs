use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use droidpatch_utils::{display_outcome, load_config};

use crate::patchers::get_patchers;

#[derive(Args, Debug)]
pub struct PatchArgs {
    /// Path to the Flutter app directory
    pub app_dir: PathBuf,

    /// If true, do not make any filesystem changes.
    #[arg(short, long, default_value = "false")]
    pub dry_run: bool,
}

/// Run every patcher against the app directory, in order.
pub async fn handle_patch(args: &PatchArgs) -> Result<()> {
    let config = load_config(&args.app_dir).await?;
    for patcher in get_patchers() {
        let outcome = patcher.patch(&args.app_dir, &config, args.dry_run).await?;
        let line = display_outcome(patcher.label(), &outcome);
        // skip notices go to the error stream, status lines to stdout
        if outcome.is_skip() {
            eprintln!("{line}");
        } else {
            println!("{line}");
        }
    }
    Ok(())
}
