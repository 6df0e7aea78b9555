//! Text normalization shared by the repository and search layers.

use unicode_normalization::UnicodeNormalization;

/// Convert `\r\n` and lone `\r` line endings to `\n`.
pub fn unify_line_endings(text: &str) -> String {
    if !text.contains('\r') {
        return text.to_string();
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// NFKC normalization (compatibility decomposition + canonical composition).
pub fn nfkc(text: &str) -> String {
    text.nfkc().collect()
}

/// Normalize section text before matching: unified newlines, then NFKC.
pub fn normalize_for_matching(text: &str) -> String {
    nfkc(&unify_line_endings(text))
}
