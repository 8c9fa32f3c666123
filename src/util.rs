/// Scan a leading decimal integer the way `scanf("%d")` does: skip leading
/// whitespace, accept an optional sign, then consume digits. Anything after
/// the digits is ignored.
///
/// Returns `None` if no digits follow the optional sign or the value does not
/// fit an `i64`.
pub fn parse_leading_int(text: &str) -> Option<i64> {
    let s = text.trim_start();
    let (sign_len, rest) = match s.as_bytes().first() {
        Some(b'+') | Some(b'-') => (1, &s[1..]),
        _ => (0, s),
    };
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if end == 0 {
        return None;
    }
    s[..sign_len + end].parse().ok()
}

/// Cut `text` to at most `max_len` bytes without splitting a character.
pub fn truncate_to_boundary(text: &mut String, max_len: usize) {
    if text.len() <= max_len {
        return;
    }
    let mut end = max_len;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    text.truncate(end);
}
