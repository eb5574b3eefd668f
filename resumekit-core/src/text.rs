//! Length and trimming rules for form values, matching what the browser
//! reports for `value.trim().length`.

/// Length in UTF-16 code units, the unit browser string lengths use
#[must_use]
pub fn utf16_len(value: &str) -> usize {
    value.encode_utf16().count()
}

/// Whitespace removed by a browser string trim: Unicode white space and the
/// byte order mark, but not NEL (U+0085).
const fn is_trimmed(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{85}')
}

/// Strip leading and trailing whitespace the way form values are trimmed
#[must_use]
pub fn trim_form_value(value: &str) -> &str {
    value.trim_matches(is_trimmed)
}
