//! Credential normalisation.

/// Strip a leading case-insensitive `Bearer` marker and every whitespace
/// character from a raw credential.
///
/// `None` and blank input both yield an empty string. Applying the function
/// to its own output returns the same value.
pub fn sanitize_token(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return String::new();
    };
    strip_bearer(raw.trim_start())
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}

fn strip_bearer(s: &str) -> &str {
    const MARKER: &str = "bearer";
    let Some(head) = s.get(..MARKER.len()) else {
        return s;
    };
    if !head.eq_ignore_ascii_case(MARKER) {
        return s;
    }
    let rest = &s[MARKER.len()..];
    // "Bearerabc" is a token, not a marker.
    match rest.chars().next() {
        Some(c) if c.is_whitespace() => rest,
        _ => s,
    }
}
