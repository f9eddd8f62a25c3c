use serde::{Deserialize, Serialize};

/// Loaded from `droidpatch.json` in the app directory, controls extra
/// permissions and the desugaring dependency coordinate.
///
/// An absent file means defaults: the built-in permission set and the pinned
/// desugaring library version.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Permission names declared in addition to the built-in set
    #[serde(default)]
    pub extra_permissions: Vec<String>,

    /// Maven coordinate of the desugaring library dependency
    #[serde(default = "default_desugar_artifact")]
    pub desugar_artifact: String,
}

fn default_desugar_artifact() -> String {
    "com.android.tools:desugar_jdk_libs:2.0.4".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extra_permissions: Vec::new(),
            desugar_artifact: default_desugar_artifact(),
        }
    }
}
