//! # droidpatch-manifest
//!
//! AndroidManifest.xml patching for droidpatch.
//!
//! Inserts the permissions and the foreground service declaration required
//! by flutter_foreground_task. All edits are plain text insertions guarded
//! by substring checks — no XML parsing — so re-running the patch leaves an
//! already-patched manifest untouched.

pub mod editor;
pub mod error;
pub mod patcher;

pub use editor::{REQUIRED_PERMISSIONS, ensure_namespace, ensure_permission, insert_service};
pub use error::MissingManifest;
pub use patcher::ManifestPatcher;
