//! Case-insensitive text comparisons used by the resolver.
//!
//! Queried names are compared literally, so characters such as `.` or `*`
//! only ever match themselves.

/// Returns the remainder of `text` after `prefix` if `text` starts with
/// `prefix`, ignoring case.
fn strip_prefix_ci<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    let mut rest = text.char_indices();
    for expected in prefix.chars() {
        let (_, actual) = rest.next()?;
        if !chars_eq_ci(actual, expected) {
            return None;
        }
    }
    let offset = rest.next().map(|(idx, _)| idx).unwrap_or(text.len());
    Some(&text[offset..])
}

fn chars_eq_ci(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// `text` starts with `name`, ignoring case, and the match ends on a word
/// boundary.
pub fn starts_with_word(text: &str, name: &str) -> bool {
    if name.is_empty() {
        return false;
    }
    let Some(rest) = strip_prefix_ci(text, name) else {
        return false;
    };
    let last = name.chars().last().map(is_word_char).unwrap_or(false);
    let next = rest.chars().next().map(is_word_char).unwrap_or(false);
    !(last && next)
}

/// `text` is exactly `"<name> Class"`, ignoring case.
pub fn is_class_named(text: &str, name: &str) -> bool {
    !name.is_empty()
        && strip_prefix_ci(text, name)
            .map(|rest| rest.eq_ignore_ascii_case(" Class"))
            .unwrap_or(false)
}

/// `text` starts with `"<name>("`, ignoring case.
pub fn is_member_named(text: &str, name: &str) -> bool {
    !name.is_empty()
        && strip_prefix_ci(text, name)
            .map(|rest| rest.starts_with('('))
            .unwrap_or(false)
}
