//! Tolerant location of a JSON object inside free-form reply text.
//!
//! Completion models often wrap their JSON in prose or fenced code
//! blocks, so the reply cannot be assumed to be pure JSON. This scanner
//! finds the first balanced, well-formed object instead.

/// Locate the first well-formed JSON object embedded in `text`.
///
/// Returns the exact slice spanning the object, or `None` when no
/// well-formed object exists anywhere in the text.
pub fn first_object(text: &str) -> Option<&str> {
    let mut search_from = 0;
    while let Some(rel) = text[search_from..].find('{') {
        let start = search_from + rel;
        if let Some(len) = balanced_len(&text[start..]) {
            let candidate = &text[start..start + len];
            if serde_json::from_str::<serde_json::Value>(candidate).is_ok() {
                return Some(candidate);
            }
        }
        search_from = start + 1;
    }
    None
}

/// Byte length of the balanced object starting at `s` (whose first byte
/// must be `{`), or `None` when the braces never close. String literals
/// and escapes are honored so braces inside values do not end the scan.
fn balanced_len(s: &str) -> Option<usize> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, b) in s.bytes().enumerate() {
        if in_string {
            if escaped {
                escaped = false;
            } else if b == b'\\' {
                escaped = true;
            } else if b == b'"' {
                in_string = false;
            }
            continue;
        }
        match b {
            b'"' => in_string = true,
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i + 1);
                }
            }
            _ => {}
        }
    }
    None
}
