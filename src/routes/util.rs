//! Form body parsing for route handlers.

use crate::error::{DominoError, Result};

/// Decoded `key=value` pairs from a form body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(Vec<(String, String)>);

impl Params {
    /// Parse a URL-encoded form body (`key=value&key2=value2`, as HTMX posts it).
    pub fn from_form(body: &str) -> Self {
        if body.is_empty() {
            return Self::default();
        }
        let pairs = body
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| {
                let (key, val) = pair.split_once('=').unwrap_or((pair, ""));
                (percent_decode(key), percent_decode(val))
            })
            .collect();
        Self(pairs)
    }

    /// First value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    /// Value for `key`, or `MissingParam` when absent or blank.
    pub fn require(&self, key: &'static str) -> Result<&str> {
        match self.get(key) {
            Some(v) if !v.trim().is_empty() => Ok(v),
            _ => Err(DominoError::MissingParam(key)),
        }
    }
}

/// Percent-decode a URL-encoded value. `+` becomes a space; multi-byte
/// sequences are reassembled as UTF-8 so Arabic team names survive.
pub fn percent_decode(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'%' => match bytes.get(i + 1..i + 3).and_then(hex_byte) {
                Some(b) => {
                    out.push(b);
                    i += 3;
                    continue;
                }
                None => out.push(b'%'),
            },
            b'+' => out.push(b' '),
            b => out.push(b),
        }
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex_byte(pair: &[u8]) -> Option<u8> {
    let s = std::str::from_utf8(pair).ok()?;
    u8::from_str_radix(s, 16).ok()
}
