//! Capture-time content heuristics. Prefix and punctuation checks only.

const CODE_PREFIXES: &[&str] = &["public ", "class ", "def ", "import ", "{", "<"];
const INDENT_RUN: &str = "    ";
const INDENT_MIN_CHARS: usize = 50;

/// Flags text that is probably source code or markup.
pub fn looks_like_code(text: &str) -> bool {
    let t = text.trim();
    if t.is_empty() {
        return false;
    }

    CODE_PREFIXES.iter().any(|p| t.starts_with(p))
        || (t.contains(';') && t.contains('='))
        || (t.chars().count() > INDENT_MIN_CHARS && t.contains(INDENT_RUN))
}

/// Pretty-prints JSON-looking text, keeping key order.
///
/// Returns `None` when the text does not start with `{` or `[` or does not
/// parse, so callers keep the original content untouched.
pub fn normalize_json(text: &str) -> Option<String> {
    let trimmed = text.trim_start();
    if !(trimmed.starts_with('{') || trimmed.starts_with('[')) {
        return None;
    }
    let value: serde_json::Value = serde_json::from_str(text).ok()?;
    serde_json::to_string_pretty(&value).ok()
}
