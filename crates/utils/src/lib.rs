//! # droidpatch-utils
//!
//! Shared utilities for droidpatch: Android subtree path helpers, raw text
//! splicing, indentation detection, config loading, and colored status lines.

mod android_paths;
mod detect_indent;
mod display_outcome;
mod insert_at;
mod load_config;

pub use android_paths::{gradle_groovy_path, gradle_kts_path, manifest_path};
pub use detect_indent::detect_indent;
pub use display_outcome::display_outcome;
pub use insert_at::insert_at;
pub use load_config::load_config;
