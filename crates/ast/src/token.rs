use cci_span::Span;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        debug_assert!(!span.is_empty(), "empty span for {kind:?}");
        Self { kind, span }
    }

    #[inline]
    pub fn start(&self) -> u32 {
        self.span.lo()
    }

    #[inline]
    pub fn end(&self) -> u32 {
        self.span.hi()
    }

    /// Source text of this token. `source` must be the buffer it was scanned from.
    pub fn text<'s>(&self, source: &'s str) -> &'s str {
        self.span.slice(source)
    }
}

/// Operators and punctuators with their exact spelling. The quote marks are
/// absent: a quote always begins a literal.
pub const SYMBOLS: &[(TokenKind, &str)] = &[
    // operators
    (TokenKind::Increment, "++"),
    (TokenKind::Decrement, "--"),
    (TokenKind::RightArrow, "->"),
    (TokenKind::Assign, "="),
    (TokenKind::Plus, "+"),
    (TokenKind::Minus, "-"),
    (TokenKind::Times, "*"),
    (TokenKind::Divide, "/"),
    (TokenKind::Percent, "%"),
    (TokenKind::PlusAssign, "+="),
    (TokenKind::MinusAssign, "-="),
    (TokenKind::TimesAssign, "*="),
    (TokenKind::DivideAssign, "/="),
    (TokenKind::ModuloAssign, "%="),
    (TokenKind::GreaterThan, ">"),
    (TokenKind::LessThan, "<"),
    (TokenKind::GreaterEqual, ">="),
    (TokenKind::LessEqual, "<="),
    (TokenKind::EqualsTo, "=="),
    (TokenKind::NotEqualTo, "!="),
    (TokenKind::LogicalNot, "!"),
    (TokenKind::LogicalAnd, "&&"),
    (TokenKind::LogicalOr, "||"),
    // bitwise operators
    (TokenKind::BitwiseNot, "~"),
    (TokenKind::BitwiseAnd, "&"),
    (TokenKind::BitwiseOr, "|"),
    (TokenKind::BitwiseXor, "^"),
    (TokenKind::BitwiseAndAssign, "&="),
    (TokenKind::BitwiseOrAssign, "|="),
    (TokenKind::BitwiseXorAssign, "^="),
    (TokenKind::BitwiseRightShift, ">>"),
    (TokenKind::BitwiseLeftShift, "<<"),
    (TokenKind::BitwiseRightShiftAssign, ">>="),
    (TokenKind::BitwiseLeftShiftAssign, "<<="),
    // matches
    (TokenKind::LeftParen, "("),
    (TokenKind::RightParen, ")"),
    (TokenKind::LeftBraces, "["),
    (TokenKind::RightBraces, "]"),
    (TokenKind::LeftCurlyBraces, "{"),
    (TokenKind::RightCurlyBraces, "}"),
    (TokenKind::Dot, "."),
    (TokenKind::Comma, ","),
    (TokenKind::Colon, ":"),
    (TokenKind::Semicolon, ";"),
    (TokenKind::QuestionMark, "?"),
];

/// Longest entry of [`SYMBOLS`] that prefixes `input`, independent of the
/// order the table is declared in.
pub fn longest_symbol(input: &[u8]) -> Option<(TokenKind, usize)> {
    SYMBOLS
        .iter()
        .filter(|(_, text)| input.starts_with(text.as_bytes()))
        .max_by_key(|(_, text)| text.len())
        .map(|&(kind, text)| (kind, text.len()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TokenKind {
    /// `++`
    Increment,
    /// `--`
    Decrement,
    /// `->`
    RightArrow,
    /// `=`
    Assign,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Times,
    /// `/`
    Divide,
    /// `%`
    Percent,
    /// `+=`
    PlusAssign,
    /// `-=`
    MinusAssign,
    /// `*=`
    TimesAssign,
    /// `/=`
    DivideAssign,
    /// `%=`
    ModuloAssign,
    /// `>`
    GreaterThan,
    /// `<`
    LessThan,
    /// `>=`
    GreaterEqual,
    /// `<=`
    LessEqual,
    /// `==`
    EqualsTo,
    /// `!=`
    NotEqualTo,
    /// `!`
    LogicalNot,
    /// `&&`
    LogicalAnd,
    /// `||`
    LogicalOr,
    /// `~`
    BitwiseNot,
    /// `&`
    BitwiseAnd,
    /// `|`
    BitwiseOr,
    /// `^`
    BitwiseXor,
    /// `&=`
    BitwiseAndAssign,
    /// `|=`
    BitwiseOrAssign,
    /// `^=`
    BitwiseXorAssign,
    /// `>>`
    BitwiseRightShift,
    /// `<<`
    BitwiseLeftShift,
    /// `>>=`
    BitwiseRightShiftAssign,
    /// `<<=`
    BitwiseLeftShiftAssign,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `[`
    LeftBraces,
    /// `]`
    RightBraces,
    /// `{`
    LeftCurlyBraces,
    /// `}`
    RightCurlyBraces,
    /// `"`
    StringMark,
    /// `'`
    CharMark,
    /// `.`
    Dot,
    /// `,`
    Comma,
    /// `:`
    Colon,
    /// `;`
    Semicolon,
    /// `?`
    QuestionMark,
    // =====
    // keyword
    If,
    Else,
    For,
    While,
    Do,
    Typedef,
    Break,
    Case,
    Continue,
    Default,
    Enum,
    Extern,
    Goto,
    Inline,
    Register,
    Restrict,
    Return,
    Sizeof,
    Static,
    Auto,
    Struct,
    Switch,
    Union,
    CharType,
    ShortType,
    IntType,
    LongType,
    FloatType,
    DoubleType,
    VoidType,
    Signed,
    Unsigned,
    Volatile,
    Const,
    // =====
    Identifier,
    IntegerConstant,
    FloatConstant,
    CharConstant,
    StringConstant,
    /// A run the scanner could not classify. Always accompanied by a diagnostic.
    Unknown,
}

const KEYWORD_TOKEN_START: u8 = TokenKind::If as u8;
const KEYWORD_TOKEN_END: u8 = TokenKind::Const as u8;

impl TokenKind {
    pub fn as_str(&self) -> &'static str {
        use TokenKind::*;
        match self {
            Increment => "++",
            Decrement => "--",
            RightArrow => "->",
            Assign => "=",
            Plus => "+",
            Minus => "-",
            Times => "*",
            Divide => "/",
            Percent => "%",
            PlusAssign => "+=",
            MinusAssign => "-=",
            TimesAssign => "*=",
            DivideAssign => "/=",
            ModuloAssign => "%=",
            GreaterThan => ">",
            LessThan => "<",
            GreaterEqual => ">=",
            LessEqual => "<=",
            EqualsTo => "==",
            NotEqualTo => "!=",
            LogicalNot => "!",
            LogicalAnd => "&&",
            LogicalOr => "||",
            BitwiseNot => "~",
            BitwiseAnd => "&",
            BitwiseOr => "|",
            BitwiseXor => "^",
            BitwiseAndAssign => "&=",
            BitwiseOrAssign => "|=",
            BitwiseXorAssign => "^=",
            BitwiseRightShift => ">>",
            BitwiseLeftShift => "<<",
            BitwiseRightShiftAssign => ">>=",
            BitwiseLeftShiftAssign => "<<=",
            LeftParen => "(",
            RightParen => ")",
            LeftBraces => "[",
            RightBraces => "]",
            LeftCurlyBraces => "{",
            RightCurlyBraces => "}",
            StringMark => "\"",
            CharMark => "'",
            Dot => ".",
            Comma => ",",
            Colon => ":",
            Semicolon => ";",
            QuestionMark => "?",
            If => "if",
            Else => "else",
            For => "for",
            While => "while",
            Do => "do",
            Typedef => "typedef",
            Break => "break",
            Case => "case",
            Continue => "continue",
            Default => "default",
            Enum => "enum",
            Extern => "extern",
            Goto => "goto",
            Inline => "inline",
            Register => "register",
            Restrict => "restrict",
            Return => "return",
            Sizeof => "sizeof",
            Static => "static",
            Auto => "auto",
            Struct => "struct",
            Switch => "switch",
            Union => "union",
            CharType => "char",
            ShortType => "short",
            IntType => "int",
            LongType => "long",
            FloatType => "float",
            DoubleType => "double",
            VoidType => "void",
            Signed => "signed",
            Unsigned => "unsigned",
            Volatile => "volatile",
            Const => "const",
            Identifier => "identifier",
            IntegerConstant => "integer constant",
            FloatConstant => "floating constant",
            CharConstant => "character constant",
            StringConstant => "string literal",
            Unknown => "unknown",
        }
    }

    pub fn is_keyword(&self) -> bool {
        (KEYWORD_TOKEN_START..=KEYWORD_TOKEN_END).contains(&(*self as u8))
    }

    pub fn is_punctuator(&self) -> bool {
        (*self as u8) < KEYWORD_TOKEN_START
    }

    pub fn is_literal(&self) -> bool {
        use TokenKind::*;
        matches!(
            self,
            IntegerConstant | FloatConstant | CharConstant | StringConstant
        )
    }

    /// Whether every token of this kind has the same spelling.
    pub fn has_fixed_text(&self) -> bool {
        self.is_punctuator() || self.is_keyword()
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.has_fixed_text() {
            write!(f, "'{}'", self.as_str())
        } else {
            write!(f, "{}", self.as_str())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_match_canonical_text() {
        for (kind, text) in SYMBOLS {
            assert_eq!(kind.as_str(), *text);
            assert!(kind.is_punctuator());
            assert!(!kind.is_keyword());
        }
    }

    #[test]
    fn longest_symbol_prefers_longer_forms() {
        assert_eq!(
            longest_symbol(b">>=1"),
            Some((TokenKind::BitwiseRightShiftAssign, 3))
        );
        assert_eq!(longest_symbol(b">>1"), Some((TokenKind::BitwiseRightShift, 2)));
        assert_eq!(longest_symbol(b">1"), Some((TokenKind::GreaterThan, 1)));
        assert_eq!(longest_symbol(b"->x"), Some((TokenKind::RightArrow, 2)));
        assert_eq!(longest_symbol(b"@"), None);
        assert_eq!(longest_symbol(b""), None);
    }

    #[test]
    fn classification() {
        assert!(TokenKind::Const.is_keyword());
        assert!(TokenKind::If.is_keyword());
        assert!(!TokenKind::Identifier.is_keyword());
        assert!(TokenKind::StringMark.is_punctuator());
        assert!(TokenKind::CharConstant.is_literal());
        assert!(!TokenKind::Unknown.is_literal());
        assert_eq!(TokenKind::Semicolon.to_string(), "';'");
        assert_eq!(TokenKind::Identifier.to_string(), "identifier");
    }
}
