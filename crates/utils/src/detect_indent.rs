/// Detects indentation width (2-space, 4-space, or tab) from file content.
///
/// Scans content line-by-line to find the first line with leading whitespace
/// and measures it. Returns 1 for tabs, 0 when nothing is indented.
#[must_use]
pub fn detect_indent(content: &str) -> usize {
    let mut indent = 0;
    for line in content.lines() {
        if line.trim().is_empty() || line.trim() == line.trim_end() {
            continue;
        }
        indent = line.len() - line.trim_start().len();
        break;
    }
    indent
}
