use std::path::{Path, PathBuf};

/// Path of the main AndroidManifest.xml inside a Flutter app directory
#[must_use]
pub fn manifest_path(app_dir: &Path) -> PathBuf {
    app_dir
        .join("android")
        .join("app")
        .join("src")
        .join("main")
        .join("AndroidManifest.xml")
}

/// Path of the Groovy build script inside a Flutter app directory
#[must_use]
pub fn gradle_groovy_path(app_dir: &Path) -> PathBuf {
    app_dir.join("android").join("app").join("build.gradle")
}

/// Path of the Kotlin-DSL build script inside a Flutter app directory
#[must_use]
pub fn gradle_kts_path(app_dir: &Path) -> PathBuf {
    app_dir.join("android").join("app").join("build.gradle.kts")
}
