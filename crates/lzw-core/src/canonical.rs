//! Canonicalization: arbitrary bytes <-> printable-ASCII text.
//!
//! Escape table:
//! - printable ASCII 32..=126 other than `\` and `'` is emitted as-is
//! - `\n`, `\r`, `\t`, `\\` and `\'` short forms
//! - every other byte becomes `\xHH` with lowercase hex digits

use crate::alphabet;
use crate::error::{LzwError, Result};

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Short escape for a byte, if it has one.
fn short_escape(byte: u8) -> Option<u8> {
    match byte {
        b'\n' => Some(b'n'),
        b'\r' => Some(b'r'),
        b'\t' => Some(b't'),
        b'\\' => Some(b'\\'),
        b'\'' => Some(b'\''),
        _ => None,
    }
}

fn short_unescape(symbol: u8) -> Option<u8> {
    match symbol {
        b'n' => Some(b'\n'),
        b'r' => Some(b'\r'),
        b't' => Some(b'\t'),
        b'\\' => Some(b'\\'),
        b'\'' => Some(b'\''),
        _ => None,
    }
}

fn push_symbol(out: &mut String, symbol: u8) -> Result<()> {
    if !alphabet::contains(symbol) {
        return Err(LzwError::Encoding(format!(
            "symbol {symbol:#04x} is outside the seeded alphabet"
        )));
    }
    out.push(symbol as char);
    Ok(())
}

/// Render raw bytes as canonical text.
pub fn to_text(bytes: &[u8]) -> Result<String> {
    let mut out = String::with_capacity(bytes.len());
    for &b in bytes {
        if let Some(short) = short_escape(b) {
            push_symbol(&mut out, b'\\')?;
            push_symbol(&mut out, short)?;
        } else if (32..=126).contains(&b) {
            push_symbol(&mut out, b)?;
        } else {
            push_symbol(&mut out, b'\\')?;
            push_symbol(&mut out, b'x')?;
            push_symbol(&mut out, HEX_DIGITS[(b >> 4) as usize])?;
            push_symbol(&mut out, HEX_DIGITS[(b & 0x0f) as usize])?;
        }
    }
    Ok(out)
}

fn hex_value(symbol: u8) -> Option<u8> {
    (symbol as char).to_digit(16).map(|d| d as u8)
}

/// Parse canonical text back into the exact original bytes.
pub fn to_bytes(text: &[u8]) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(text.len());
    let mut i = 0;
    while i < text.len() {
        let b = text[i];
        if b != b'\\' {
            if !alphabet::contains(b) {
                return Err(LzwError::MalformedEscape { offset: i });
            }
            out.push(b);
            i += 1;
            continue;
        }
        let escaped = *text.get(i + 1).ok_or(LzwError::MalformedEscape { offset: i })?;
        if let Some(byte) = short_unescape(escaped) {
            out.push(byte);
            i += 2;
        } else if escaped == b'x' {
            let hi = text.get(i + 2).copied().and_then(hex_value);
            let lo = text.get(i + 3).copied().and_then(hex_value);
            match (hi, lo) {
                (Some(hi), Some(lo)) => out.push((hi << 4) | lo),
                _ => return Err(LzwError::MalformedEscape { offset: i }),
            }
            i += 4;
        } else {
            return Err(LzwError::MalformedEscape { offset: i });
        }
    }
    Ok(out)
}
