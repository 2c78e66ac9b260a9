//! Value extraction from the text of literal tokens. The scanner never calls
//! into this module; later stages use it once a token has been classified.

use cci_ast::{CharacterConstantKind, StringLiteralKind};
use cci_errors::thiserror;
use cci_errors::thiserror::Error;

use super::char_class::{is_digit, is_hexdigit, is_octdigit};

/// Value of an `IntegerConstant` token, `None` if it does not fit in 64 bits.
pub fn integer_value(text: &str) -> Option<u64> {
    let (digits, radix) = match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(hex) => (hex, 16),
        None => (text, 10),
    };
    let valid = |c: u8| if radix == 16 { is_hexdigit(c) } else { is_digit(c) };
    if digits.is_empty() || !digits.bytes().all(valid) {
        return None;
    }
    u64::from_str_radix(digits, radix).ok()
}

/// Splits `text` into its encoding prefix and the quoted part.
fn split_prefix(text: &str) -> (&str, &str) {
    let quote = text.find(['\'', '"']).unwrap_or(text.len());
    text.split_at(quote)
}

pub fn char_encoding(text: &str) -> CharacterConstantKind {
    match split_prefix(text).0 {
        "u" => CharacterConstantKind::UTF16,
        "U" => CharacterConstantKind::UTF32,
        "L" => CharacterConstantKind::Wide,
        _ => CharacterConstantKind::Ascii,
    }
}

pub fn string_encoding(text: &str) -> StringLiteralKind {
    match split_prefix(text).0 {
        "u8" => StringLiteralKind::UTF8,
        "u" => StringLiteralKind::UTF16,
        "U" => StringLiteralKind::UTF32,
        "L" => StringLiteralKind::Wide,
        _ => StringLiteralKind::Ascii,
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EscapeError {
    #[error("unknown escape sequence '\\{ch}' at offset {offset}")]
    Unknown { ch: char, offset: usize },
    #[error("\\x used with no following hex digits at offset {offset}")]
    MissingHexDigits { offset: usize },
    #[error("hex escape sequence out of range at offset {offset}")]
    HexOutOfRange { offset: usize },
    #[error("trailing backslash")]
    TrailingBackslash,
}

/// Decodes the body of a character or string literal (without prefix and
/// quotes) into code units.
pub fn unescape(body: &str) -> Result<Vec<u32>, EscapeError> {
    let bytes = body.as_bytes();
    let mut out = Vec::with_capacity(body.len());
    let mut chars = body.char_indices();
    while let Some((offset, ch)) = chars.next() {
        if ch != '\\' {
            out.push(ch as u32);
            continue;
        }
        let Some((_, esc)) = chars.next() else {
            return Err(EscapeError::TrailingBackslash);
        };
        let value = match esc {
            'n' => 0x0a,
            't' => 0x09,
            'r' => 0x0d,
            'a' => 0x07,
            'b' => 0x08,
            'f' => 0x0c,
            'v' => 0x0b,
            '\\' | '\'' | '"' | '?' => esc as u32,
            '0'..='7' => {
                let mut value = esc as u32 - '0' as u32;
                let mut next = offset + 2;
                while next < bytes.len() && next < offset + 4 && is_octdigit(bytes[next]) {
                    value = value * 8 + (bytes[next] - b'0') as u32;
                    chars.next();
                    next += 1;
                }
                value
            }
            'x' => {
                let mut value: u32 = 0;
                let mut next = offset + 2;
                while next < bytes.len() && is_hexdigit(bytes[next]) {
                    let digit = (bytes[next] as char).to_digit(16).unwrap_or_default();
                    value = value
                        .checked_mul(16)
                        .and_then(|v| v.checked_add(digit))
                        .ok_or(EscapeError::HexOutOfRange { offset })?;
                    chars.next();
                    next += 1;
                }
                if next == offset + 2 {
                    return Err(EscapeError::MissingHexDigits { offset });
                }
                value
            }
            ch => return Err(EscapeError::Unknown { ch, offset }),
        };
        out.push(value);
    }
    Ok(out)
}

/// Value of a character constant holding exactly one (possibly escaped)
/// character.
pub fn char_value(text: &str) -> Option<u32> {
    let quoted = split_prefix(text).1;
    let body = quoted.strip_prefix('\'')?.strip_suffix('\'')?;
    match unescape(body).ok()?.as_slice() {
        [value] => Some(*value),
        _ => None,
    }
}
