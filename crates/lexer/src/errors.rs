use std::fmt;

use cci_errors::DiagnosticExt;
use cci_errors::miette;
use cci_errors::miette::Diagnostic;
use cci_errors::thiserror;
use cci_errors::thiserror::Error;
use cci_span::Span;

#[derive(Error, Diagnostic, DiagnosticExt, Debug)]
#[error("missing terminating ' character")]
#[diagnostic(code(lex::unterminated_char_literal))]
pub struct UnterminatedCharLiteral {
    #[label(primary)]
    pub span: Span,
}

#[derive(Error, Diagnostic, DiagnosticExt, Debug)]
#[error("missing terminating \" character")]
#[diagnostic(code(lex::unterminated_string_literal))]
pub struct UnterminatedStringLiteral {
    #[label(primary)]
    pub span: Span,
}

#[derive(Error, Diagnostic, DiagnosticExt, Debug)]
#[error("empty character constant")]
#[diagnostic(code(lex::empty_char_literal))]
pub struct EmptyCharLiteral {
    #[label(primary)]
    pub span: Span,
}

#[derive(Error, Diagnostic, DiagnosticExt, Debug)]
#[error("empty string literal")]
#[diagnostic(code(lex::empty_string_literal))]
pub struct EmptyStringLiteral {
    #[label(primary)]
    pub span: Span,
}

#[derive(Error, Diagnostic, DiagnosticExt, Debug)]
#[error("multi-character character constant")]
#[diagnostic(code(lex::multibyte_char_literal), severity(Warning))]
pub struct MultibyteCharLiteral {
    #[label(primary)]
    pub span: Span,
    pub size: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericKind {
    Integer,
    Floating,
}

impl fmt::Display for NumericKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericKind::Integer => write!(f, "integer"),
            NumericKind::Floating => write!(f, "floating"),
        }
    }
}

#[derive(Error, Diagnostic, DiagnosticExt, Debug)]
#[error("invalid digit '{found}' in {kind} constant")]
#[diagnostic(code(lex::invalid_numeric_literal))]
pub struct InvalidNumericLiteral {
    #[label(primary)]
    pub span: Span,
    #[label("invalid digit")]
    pub digit: Span,
    pub kind: NumericKind,
    pub found: char,
}

#[derive(Error, Diagnostic, DiagnosticExt, Debug)]
#[error("unknown character '{ch}'")]
#[diagnostic(code(lex::unknown_character))]
pub struct UnknownCharacter {
    #[label(primary)]
    pub span: Span,
    pub ch: char,
}
