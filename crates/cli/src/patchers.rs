use droidpatch_core::Patcher;
use droidpatch_gradle::GradlePatcher;
use droidpatch_manifest::ManifestPatcher;

// patcher list, manifest first: a missing manifest aborts the run before the
// Gradle step

pub fn get_patchers() -> [Box<dyn Patcher>; 2] {
    [Box::new(ManifestPatcher), Box::new(GradlePatcher)]
}
