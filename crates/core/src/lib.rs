//! # droidpatch-core
//!
//! Core types and traits for droidpatch.
//!
//! Defines the [`Patcher`] trait implemented once per target file, the
//! [`PatchOutcome`] reported for each file, and the [`Config`] layer for
//! per-project overrides.

pub mod config;
pub mod outcome;
pub mod patcher;

// Re-export the main types for convenience
pub use config::Config;
pub use outcome::PatchOutcome;
pub use patcher::Patcher;
