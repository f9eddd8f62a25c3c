use colored::*;
use droidpatch_core::PatchOutcome;

/// Format the one-line status message printed for each target file.
#[must_use]
pub fn display_outcome(label: &str, outcome: &PatchOutcome) -> String {
    let verb = match outcome {
        PatchOutcome::Patched => outcome.verb().bright_green().bold(),
        PatchOutcome::Unchanged => outcome.verb().bright_black().bold(),
        PatchOutcome::Skipped(_) => outcome.verb().bright_yellow().bold(),
    };
    match outcome {
        PatchOutcome::Skipped(reason) => {
            format!(
                "{} {} {}",
                verb,
                label.bright_white(),
                format!("({reason})").bright_black()
            )
        }
        _ => format!("{} {}", verb, label.bright_white()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_patched() {
        let line = display_outcome("AndroidManifest.xml", &PatchOutcome::Patched);
        assert!(line.contains("Patched"));
        assert!(line.contains("AndroidManifest.xml"));
    }

    #[test]
    fn test_display_unchanged() {
        let line = display_outcome("build.gradle", &PatchOutcome::Unchanged);
        assert!(line.contains("Up-to-date"));
        assert!(line.contains("build.gradle"));
    }

    #[test]
    fn test_display_skipped_includes_reason() {
        let outcome = PatchOutcome::Skipped("no build.gradle or build.gradle.kts found".to_string());
        let line = display_outcome("build.gradle", &outcome);
        assert!(line.contains("Skipped"));
        assert!(line.contains("no build.gradle or build.gradle.kts found"));
    }
}
