//! Extraction of the JSON payload from a module-loader chunk.
//!
//! The documentation generator ships sidebar data inside a webpack module
//! wrapper:
//!
//! ```text
//! (window.webpackJsonp=window.webpackJsonp||[]).push([[31],
//!     {131:function(e){e.exports=JSON.parse('{"docsSidebars":...}')}}]);
//! ```
//!
//! The payload is a single-quoted JS string literal wrapping the JSON
//! document. This module locates the literal and decodes its escape
//! sequences. Bare JSON documents bypass extraction entirely.

use crate::error::LoadError;

const PARSE_PREFIX: &str = "JSON.parse('";

/// True if the input looks like a bare JSON document rather than a chunk.
pub(crate) fn is_bare_json(text: &str) -> bool {
    text.trim_start().starts_with('{')
}

/// Extract and unescape the `JSON.parse` payload from a module chunk.
pub(crate) fn extract_payload(text: &str) -> Result<String, LoadError> {
    let start = text.find(PARSE_PREFIX).ok_or(LoadError::PayloadNotFound)? + PARSE_PREFIX.len();
    unescape_js_string(&text[start..])
}

/// Decode a single-quoted JS string literal, stopping at the closing quote.
///
/// Handles the escapes the generator emits: `\'`, `\"`, `\\`, `\/`,
/// `\n`, `\r`, `\t`, and `\uXXXX` (including surrogate pairs).
fn unescape_js_string(input: &str) -> Result<String, LoadError> {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars();

    while let Some(c) = chars.next() {
        match c {
            '\'' => return Ok(out),
            '\\' => match chars.next().ok_or(LoadError::UnterminatedPayload)? {
                'n' => out.push('\n'),
                'r' => out.push('\r'),
                't' => out.push('\t'),
                'u' => out.push(unescape_unicode(&mut chars)?),
                // \' \" \\ \/ decode to the escaped character itself
                other @ ('\'' | '"' | '\\' | '/') => out.push(other),
                _ => return Err(LoadError::InvalidEscape),
            },
            _ => out.push(c),
        }
    }

    Err(LoadError::UnterminatedPayload)
}

/// Decode a `\uXXXX` escape, consuming a trailing low surrogate if the
/// first unit is a high surrogate.
fn unescape_unicode(chars: &mut std::str::Chars<'_>) -> Result<char, LoadError> {
    let high = hex_unit(chars)?;

    if (0xD800..0xDC00).contains(&high) {
        // Surrogate pair: expect \uXXXX with a low surrogate
        if chars.next() != Some('\\') || chars.next() != Some('u') {
            return Err(LoadError::InvalidEscape);
        }
        let low = hex_unit(chars)?;
        if !(0xDC00..0xE000).contains(&low) {
            return Err(LoadError::InvalidEscape);
        }
        let value = 0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00);
        return char::from_u32(value).ok_or(LoadError::InvalidEscape);
    }

    char::from_u32(high).ok_or(LoadError::InvalidEscape)
}

/// Read four hex digits as a UTF-16 code unit.
fn hex_unit(chars: &mut std::str::Chars<'_>) -> Result<u32, LoadError> {
    let mut value = 0u32;
    for _ in 0..4 {
        let digit = chars
            .next()
            .and_then(|c| c.to_digit(16))
            .ok_or(LoadError::InvalidEscape)?;
        value = value * 16 + digit;
    }
    Ok(value)
}
