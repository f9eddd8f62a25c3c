/// Gradle build script dialect, chosen from the build file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradleDialect {
    /// `build.gradle`
    Groovy,
    /// `build.gradle.kts`
    Kotlin,
}

impl GradleDialect {
    #[must_use]
    pub fn from_file_name(file_name: &str) -> Self {
        if file_name.ends_with(".kts") {
            Self::Kotlin
        } else {
            Self::Groovy
        }
    }

    /// Desugaring flag line for the `compileOptions` block
    #[must_use]
    pub const fn flag_line(&self) -> &'static str {
        match self {
            Self::Groovy => "coreLibraryDesugaringEnabled true",
            Self::Kotlin => "isCoreLibraryDesugaringEnabled = true",
        }
    }

    /// Substring guarding the flag insertion
    #[must_use]
    pub const fn flag_marker(&self) -> &'static str {
        match self {
            Self::Groovy => "coreLibraryDesugaringEnabled",
            Self::Kotlin => "isCoreLibraryDesugaringEnabled",
        }
    }

    /// Desugaring dependency line for the `dependencies` block
    #[must_use]
    pub fn dependency_line(&self, artifact: &str) -> String {
        match self {
            Self::Groovy => format!("coreLibraryDesugaring '{artifact}'"),
            Self::Kotlin => format!("coreLibraryDesugaring(\"{artifact}\")"),
        }
    }
}
