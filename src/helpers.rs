use crate::parser::CapturedMatch;

/// UAs without a single letter are never parsed.
pub(crate) fn contains_letter(ua: &str) -> bool {
    ua.chars().any(char::is_alphabetic)
}

pub(crate) fn capture_or_empty(captures: &CapturedMatch<'_>, group: usize) -> String {
    captures.get(group).unwrap_or("").to_owned()
}

/// Escape regex metacharacters so `text` can be embedded in a pattern literally.
pub(crate) fn escape_pattern(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if r"\.+*?()|[]{}^$-".contains(c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
