//! Extracts API method names from an API module's exported object literal.
//!
//! This is text scanning, not parsing: strings, template literals and
//! comments are skipped while matching braces, and anything nested inside
//! the exported object is masked before keys are collected.

use once_cell::sync::Lazy;
use regex::Regex;

/// Request helpers that sit next to real API methods in module objects.
pub const RESERVED_HTTP_KEYS: [&str; 5] = ["get", "post", "put", "delete", "patch"];

static API_OBJECT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"export\s+const\s+[A-Za-z_$][\w$]*Api\s*(?::[^=]+)?=\s*\{")
        .expect("api object pattern is valid")
});

static EXPORT_OBJECT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"export\s+(?:const\s+[A-Za-z_$][\w$]*\s*(?::[^=]+)?=|default)\s*\{")
        .expect("export pattern is valid")
});

static TOP_LEVEL_KEY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*([A-Za-z_$][\w$]*)\s*:").expect("key pattern is valid"));

/// Returns the top-level method keys of the module's API object in source
/// order, duplicates kept, HTTP verb helpers removed.
pub fn extract_api_methods(source: &str) -> Vec<String> {
    let Some(body) = exported_object_body(source) else {
        return Vec::new();
    };

    let masked = mask_nested(body);
    masked
        .split(',')
        .filter_map(|segment| TOP_LEVEL_KEY.captures(segment))
        .map(|caps| caps[1].to_string())
        .filter(|key| !RESERVED_HTTP_KEYS.contains(&key.as_str()))
        .collect()
}

/// Text between the braces of the `...Api` export, falling back to the
/// first exported object literal.
fn exported_object_body(source: &str) -> Option<&str> {
    let found = API_OBJECT
        .find(source)
        .or_else(|| EXPORT_OBJECT.find(source))?;
    // match ends right after the opening brace
    let start = found.end();
    let close = matching_brace(source, start)?;
    Some(&source[start..close])
}

/// Byte index of the `}` closing a brace opened just before `start`.
fn matching_brace(source: &str, start: usize) -> Option<usize> {
    let bytes = source.as_bytes();
    let mut depth = 1usize;
    let mut i = start;

    while i < bytes.len() {
        match bytes[i] {
            b'\'' | b'"' | b'`' => i = skip_string(bytes, i),
            b'/' if bytes.get(i + 1) == Some(&b'/') => i = skip_line_comment(bytes, i),
            b'/' if bytes.get(i + 1) == Some(&b'*') => i = skip_block_comment(bytes, i),
            b'{' => {
                depth += 1;
                i += 1;
            }
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
                i += 1;
            }
            _ => i += 1,
        }
    }

    None
}

/// Replaces everything that is not at depth zero (nested brackets, strings,
/// comments) with spaces, keeping top-level text and commas in place.
fn mask_nested(body: &str) -> String {
    let bytes = body.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut depth = 0usize;
    let mut i = 0;

    while i < bytes.len() {
        let next = match bytes[i] {
            b'\'' | b'"' | b'`' => skip_string(bytes, i),
            b'/' if bytes.get(i + 1) == Some(&b'/') => skip_line_comment(bytes, i),
            b'/' if bytes.get(i + 1) == Some(&b'*') => skip_block_comment(bytes, i),
            b'{' | b'(' | b'[' => {
                depth += 1;
                i + 1
            }
            b'}' | b')' | b']' => {
                depth = depth.saturating_sub(1);
                i + 1
            }
            b if depth == 0 => {
                out.push(b);
                i += 1;
                continue;
            }
            _ => i + 1,
        };

        out.resize(out.len() + (next - i), b' ');
        i = next;
    }

    // only ASCII bytes were replaced, so the top-level text stays valid UTF-8
    String::from_utf8_lossy(&out).into_owned()
}

fn skip_string(bytes: &[u8], start: usize) -> usize {
    let quote = bytes[start];
    let mut i = start + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b if b == quote => return i + 1,
            _ => i += 1,
        }
    }
    bytes.len()
}

fn skip_line_comment(bytes: &[u8], start: usize) -> usize {
    bytes[start..]
        .iter()
        .position(|&b| b == b'\n')
        .map(|offset| start + offset)
        .unwrap_or(bytes.len())
}

fn skip_block_comment(bytes: &[u8], start: usize) -> usize {
    bytes[start + 2..]
        .windows(2)
        .position(|w| w == b"*/")
        .map(|offset| start + 2 + offset + 2)
        .unwrap_or(bytes.len())
}
