//! # droidpatch-gradle
//!
//! Gradle build script patching for droidpatch.
//!
//! Enables core library desugaring in `android/app/build.gradle` or
//! `android/app/build.gradle.kts`, handling both Groovy and Kotlin DSL
//! syntax. The flag goes into the `compileOptions` block (created under the
//! `android` block when missing) and the dependency line into the
//! `dependencies` block.

pub mod dialect;
pub mod editor;
pub mod patcher;

pub use dialect::GradleDialect;
pub use editor::{ensure_desugar_dependency, ensure_desugar_flag};
pub use patcher::GradlePatcher;
