//! # droidpatch-cli
//!
//! CLI interface for droidpatch.

use anyhow::Result;
use clap::Parser;

use crate::commands::{PatchArgs, handle_patch};

pub mod commands;
mod patchers;

#[derive(Parser, Debug)]
#[command(
    name = "droidpatch",
    author,
    version,
    about = "Patches a Flutter app's Android files for flutter_foreground_task",
    help_template = "{name} {version}\n{about}\n\n{usage-heading} {usage}\n\n{all-args}"
)]
struct Cli {
    #[command(flatten)]
    patch: PatchArgs,
}

pub async fn main(args: &[String]) -> Result<()> {
    let cli = Cli::parse_from(args);
    handle_patch(&cli.patch).await
}
