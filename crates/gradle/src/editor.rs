use std::sync::LazyLock;

use droidpatch_utils::{detect_indent, insert_at};
use regex::Regex;

use crate::dialect::GradleDialect;

/// Substring guarding the dependency insertion. The artifact name rather
/// than the full coordinate, so a version bump in the config does not stack
/// a second line next to an already-pinned one.
pub const DESUGAR_DEPENDENCY_MARKER: &str = "desugar_jdk_libs";

static COMPILE_OPTIONS_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^([ \t]*)compileOptions\s*\{").expect("hardcoded regex must compile")
});

static ANDROID_BLOCK_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^android\s*\{").expect("hardcoded regex must compile")
});

static DEPENDENCIES_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^dependencies\s*\{").expect("hardcoded regex must compile")
});

fn indent_unit(content: &str) -> usize {
    match detect_indent(content) {
        0 => 4,
        n => n,
    }
}

/// Inserts the dialect-specific desugaring flag at the top of the
/// `compileOptions` block, creating the block under `android` when absent.
/// No recognizable anchor leaves the content untouched.
#[must_use]
pub fn ensure_desugar_flag(content: &str, dialect: GradleDialect) -> String {
    if content.contains(dialect.flag_marker()) {
        return content.to_string();
    }
    let unit = indent_unit(content);

    if let Some(caps) = COMPILE_OPTIONS_PATTERN.captures(content) {
        let open = caps.get(0).expect("whole match always present");
        let line_indent = caps.get(1).map_or(0, |m| m.as_str().len());
        let insertion = format!(
            "\n{}{}",
            " ".repeat(line_indent + unit),
            dialect.flag_line()
        );
        return insert_at(content, open.end(), &insertion);
    }

    if let Some(open) = ANDROID_BLOCK_PATTERN.find(content) {
        let indent = " ".repeat(unit);
        let block = format!(
            "\n{indent}compileOptions {{\n{indent}{indent}{}\n{indent}}}",
            dialect.flag_line()
        );
        return insert_at(content, open.end(), &block);
    }

    content.to_string()
}

/// Inserts the dialect-specific desugaring dependency at the top of the
/// `dependencies` block. No block, no edit.
#[must_use]
pub fn ensure_desugar_dependency(content: &str, dialect: GradleDialect, artifact: &str) -> String {
    if content.contains(DESUGAR_DEPENDENCY_MARKER) || content.contains(artifact) {
        return content.to_string();
    }
    if let Some(open) = DEPENDENCIES_PATTERN.find(content) {
        let insertion = format!(
            "\n{}{}",
            " ".repeat(indent_unit(content)),
            dialect.dependency_line(artifact)
        );
        return insert_at(content, open.end(), &insertion);
    }
    content.to_string()
}
