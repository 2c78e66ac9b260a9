use rustc_hash::FxHashMap;

use crate::TokenKind;

/// Reserved words and the token each one lexes to.
pub const KEYWORDS: &[(TokenKind, &str)] = &[
    (TokenKind::If, "if"),
    (TokenKind::Else, "else"),
    (TokenKind::For, "for"),
    (TokenKind::While, "while"),
    (TokenKind::Do, "do"),
    (TokenKind::Typedef, "typedef"),
    (TokenKind::Break, "break"),
    (TokenKind::Case, "case"),
    (TokenKind::Continue, "continue"),
    (TokenKind::Default, "default"),
    (TokenKind::Enum, "enum"),
    (TokenKind::Extern, "extern"),
    (TokenKind::Goto, "goto"),
    (TokenKind::Inline, "inline"),
    (TokenKind::Register, "register"),
    (TokenKind::Restrict, "restrict"),
    (TokenKind::Return, "return"),
    (TokenKind::Sizeof, "sizeof"),
    (TokenKind::Static, "static"),
    (TokenKind::Auto, "auto"),
    (TokenKind::Struct, "struct"),
    (TokenKind::Switch, "switch"),
    (TokenKind::Union, "union"),
    // types
    (TokenKind::CharType, "char"),
    (TokenKind::ShortType, "short"),
    (TokenKind::IntType, "int"),
    (TokenKind::LongType, "long"),
    (TokenKind::FloatType, "float"),
    (TokenKind::DoubleType, "double"),
    (TokenKind::VoidType, "void"),
    (TokenKind::Signed, "signed"),
    (TokenKind::Unsigned, "unsigned"),
    (TokenKind::Volatile, "volatile"),
    (TokenKind::Const, "const"),
];

/// Exact-text lookup of a reserved word.
pub fn keyword_to_token(text: &str) -> Option<TokenKind> {
    static KWS: std::sync::LazyLock<FxHashMap<&'static str, TokenKind>> =
        std::sync::LazyLock::new(|| {
            let mut map = cci_utils::fx_hashmap_with_capacity(KEYWORDS.len());
            map.extend(KEYWORDS.iter().map(|&(kind, text)| (text, kind)));
            map
        });
    KWS.get(text).copied()
}
