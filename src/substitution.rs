use std::borrow::Cow;

use crate::parser::CapturedMatch;

/// Name reported when a name template builds to nothing.
pub const UNKNOWN_NAME: &str = "Unknown";

/// Replace `$1`, `$2`, ... in `template` with capture groups from the match.
/// A group that did not participate is replaced by the empty string.
/// Placeholders are a single digit, so `$10` is group 1 followed by `0`.
///
/// Returns borrowed data when the template contains no `$N` placeholders,
/// avoiding allocation entirely in that case.
pub(crate) fn substitute<'a>(template: &'a str, captures: &CapturedMatch<'_>) -> Cow<'a, str> {
    // Fast path: no placeholders → borrow directly from the template.
    if !template.contains('$') {
        return Cow::Borrowed(template);
    }

    let mut result = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '$' {
            if let Some(&d) = chars.peek() {
                if d.is_ascii_digit() {
                    chars.next();
                    let idx = (d as u8 - b'0') as usize;
                    if let Some(m) = captures.get(idx) {
                        result.push_str(m);
                    }
                    continue;
                }
            }
        }
        result.push(c);
    }

    Cow::Owned(result)
}

/// Build a name (OS, client, bot). An empty result becomes [`UNKNOWN_NAME`].
pub(crate) fn build_name(template: &str, captures: &CapturedMatch<'_>) -> String {
    let name = substitute(template, captures);
    let name = name.trim();
    if name.is_empty() {
        UNKNOWN_NAME.to_owned()
    } else {
        name.to_owned()
    }
}

/// Build a version: `_` separators become `.`, and separators left over by
/// optional groups that did not participate are stripped from both ends.
pub(crate) fn build_version(template: &str, captures: &CapturedMatch<'_>) -> String {
    substitute(template, captures)
        .replace('_', ".")
        .trim_matches(|c: char| c.is_whitespace() || c == '.')
        .to_owned()
}

/// Build a device model: `_` becomes a space and a bare `Build` token (a
/// build-id prefix caught by a loose pattern) is dropped.
pub(crate) fn build_model(template: &str, captures: &CapturedMatch<'_>) -> String {
    let model = substitute(template, captures).replace('_', " ");
    let model = model.trim();
    if model.eq_ignore_ascii_case("Build") {
        String::new()
    } else {
        model.to_owned()
    }
}
