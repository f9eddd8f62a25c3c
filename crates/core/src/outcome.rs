/// Result of applying one patcher to one target file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchOutcome {
    /// Content changed and was written back
    Patched,
    /// Every required entry was already present
    Unchanged,
    /// Target file does not exist, nothing to do
    Skipped(String),
}

impl PatchOutcome {
    /// Returns the status verb used in per-file output lines
    #[must_use]
    pub const fn verb(&self) -> &'static str {
        match self {
            Self::Patched => "Patched",
            Self::Unchanged => "Up-to-date",
            Self::Skipped(_) => "Skipped",
        }
    }

    /// True when the run should route this outcome to the error stream
    #[must_use]
    pub const fn is_skip(&self) -> bool {
        matches!(self, Self::Skipped(_))
    }
}
