//! Leading directive detection.
//!
//! A component opts out of server rendering by starting with a
//! `"use client"` directive. Only comments and whitespace may come before it.

use std::sync::LazyLock;

use regex::Regex;

// ASCII whitespace only, matching `is_space`
static USE_CLIENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^["']use client["'](?:;|[ \t\n\r\x0B\x0C]|$)"#).expect("valid regex")
});

/// Return the first line of real code in `source`, trimmed.
///
/// Leading whitespace, `//` line comments and `/* */` block comments are
/// skipped. A line comment without a terminating newline or an unterminated
/// block comment means there is no statement, and an empty string is
/// returned.
pub fn first_statement(source: &str) -> &str {
    let bytes = source.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        while i < bytes.len() && is_space(bytes[i]) {
            i += 1;
        }
        if i >= bytes.len() {
            break;
        }

        let rest = &source[i..];
        if rest.starts_with("//") {
            match rest.find('\n') {
                Some(nl) => i += nl + 1,
                None => return "",
            }
        } else if rest.starts_with("/*") {
            match rest.find("*/") {
                Some(end) => i += end + 2,
                None => return "",
            }
        } else {
            let line = match rest.find('\n') {
                Some(nl) => &rest[..nl],
                None => rest,
            };
            return line.trim_matches(|c: char| c.is_ascii() && is_space(c as u8));
        }
    }

    ""
}

/// Whether `source` starts with a `"use client"` directive.
///
/// Either quote style is accepted, optionally followed by `;`, whitespace or
/// the end of the statement.
pub fn is_client_directive(source: &str) -> bool {
    USE_CLIENT.is_match(first_statement(source))
}

fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | b'\x0b' | b'\x0c')
}
