#[inline(always)]
pub fn is_digit(c: u8) -> bool {
    c.is_ascii_digit()
}

#[inline(always)]
pub fn is_hexdigit(c: u8) -> bool {
    c.is_ascii_hexdigit()
}

#[inline(always)]
pub fn is_octdigit(c: u8) -> bool {
    (b'0'..=b'7').contains(&c)
}

/// Letters and `_`.
#[inline(always)]
pub fn is_alpha(c: u8) -> bool {
    c.is_ascii_alphabetic() || c == b'_'
}

#[inline(always)]
pub fn is_alphanum(c: u8) -> bool {
    is_alpha(c) || is_digit(c)
}

#[inline(always)]
pub fn is_space(c: u8) -> bool {
    matches!(c, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
}

#[inline(always)]
pub fn is_line_break(c: u8) -> bool {
    c == b'\n' || c == b'\r'
}

/// Bytes that start an operator or punctuator and end any run before them.
/// Excludes `.` and the quotes.
#[inline(always)]
pub fn is_special(c: u8) -> bool {
    matches!(
        c,
        b'=' | b'+'
            | b'-'
            | b'*'
            | b'/'
            | b'%'
            | b'>'
            | b'<'
            | b'!'
            | b'&'
            | b'|'
            | b'~'
            | b'^'
            | b'('
            | b')'
            | b'['
            | b']'
            | b'{'
            | b'}'
            | b','
            | b':'
            | b';'
            | b'?'
    )
}

/// Token boundary.
#[inline(always)]
pub fn is_white(c: u8) -> bool {
    is_space(c) || is_special(c)
}

#[inline(always)]
pub fn is_constant_start(c: u8) -> bool {
    is_digit(c) || c == b'\'' || c == b'"'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classes() {
        assert!(is_digit(b'7') && !is_digit(b'a'));
        assert!(is_hexdigit(b'F') && is_hexdigit(b'a') && !is_hexdigit(b'g'));
        assert!(is_octdigit(b'7') && !is_octdigit(b'8'));
        assert!(is_alpha(b'_') && is_alpha(b'Z') && !is_alpha(b'1'));
        assert!(is_alphanum(b'1') && !is_alphanum(b'$'));
        assert!(is_space(b'\x0b') && is_space(b'\r') && !is_space(b'a'));
        assert!(is_white(b';') && is_white(b' '));
        assert!(!is_white(b'.') && !is_white(b'"') && !is_white(b'\''));
        assert!(is_constant_start(b'\'') && is_constant_start(b'"') && is_constant_start(b'0'));
        assert!(!is_constant_start(b'.'));
    }

    #[test]
    fn test_every_symbol_start_is_special_except_dot() {
        for (kind, text) in cci_ast::SYMBOLS {
            let first = text.as_bytes()[0];
            assert_eq!(is_special(first), first != b'.', "{kind:?}");
        }
    }
}
