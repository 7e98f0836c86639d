//! Reduces raw host file lines to the characters the grammar understands.

/// Returns true for bytes that may appear in a host or label line.
fn is_allowed(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'-' | b'.' | b'@' | b':' | b'%')
}

/// Returns the leading run of allowed bytes in `raw`.
///
/// Anything from the first disallowed byte on is dropped, including the line
/// terminator and trailing comments. Returns `None` when nothing is left, in
/// which case the line is treated as blank.
pub fn sanitize(raw: &[u8]) -> Option<&str> {
    let end = raw.iter().position(|&b| !is_allowed(b)).unwrap_or(raw.len());
    if end == 0 {
        return None;
    }
    // Allowed bytes are all ASCII.
    std::str::from_utf8(&raw[..end]).ok()
}
