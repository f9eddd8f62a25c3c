/// Inserts `insertion` into `content` at byte offset `at`.
///
/// `at` must lie on a char boundary; every caller derives it from a match on
/// ASCII anchor text.
#[must_use]
pub fn insert_at(content: &str, at: usize, insertion: &str) -> String {
    let mut patched = String::with_capacity(content.len() + insertion.len());
    patched.push_str(&content[..at]);
    patched.push_str(insertion);
    patched.push_str(&content[at..]);
    patched
}
