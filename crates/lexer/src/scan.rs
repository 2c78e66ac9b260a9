use cci_ast::{Token, TokenKind, keyword, longest_symbol};
use cci_config::LangOptions;
use cci_errors::{Diag, DiagnosticSink, diag_ext::DiagnosticExt};
use cci_span::{ModuleID, Span};

use super::char_class::*;
use super::errors::{self, NumericKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Quote {
    Char,
    String,
}

impl Quote {
    fn from_byte(c: u8) -> Option<Quote> {
        match c {
            b'\'' => Some(Quote::Char),
            b'"' => Some(Quote::String),
            _ => None,
        }
    }
}

pub(super) struct LexerState<'a, S: DiagnosticSink> {
    source: &'a str,
    input: &'a [u8],
    pos: usize,
    module: ModuleID,
    options: &'a LangOptions,
    sink: &'a mut S,
    tokens: Vec<Token>,
}

impl<'a, S: DiagnosticSink> LexerState<'a, S> {
    pub(super) fn new(
        source: &'a str,
        module: ModuleID,
        options: &'a LangOptions,
        sink: &'a mut S,
    ) -> Self {
        Self {
            source,
            input: source.as_bytes(),
            pos: 0,
            module,
            options,
            sink,
            tokens: Vec::with_capacity(source.len() / 4),
        }
    }

    #[inline(always)]
    fn ch(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    #[inline(always)]
    fn new_span(&self, lo: usize, hi: usize) -> Span {
        Span::new(lo as u32, hi as u32, self.module)
    }

    fn push_error(&mut self, error: Box<dyn DiagnosticExt + Send + Sync + 'static>) {
        tracing::debug!(span = %error.primary_span(), "{error}");
        self.sink.push(Diag::new(error));
    }

    fn add_token(&mut self, kind: TokenKind, lo: usize, hi: usize) {
        let token = Token::new(kind, self.new_span(lo, hi));
        tracing::trace!(?kind, lo, hi, "token");
        self.tokens.push(token);
    }

    /// End of the run starting at `from` that stops before the first byte
    /// satisfying `stop`.
    fn run_end(&self, from: usize, stop: impl Fn(u8) -> bool) -> usize {
        self.input[from..]
            .iter()
            .position(|&c| stop(c))
            .map_or(self.input.len(), |i| from + i)
    }

    pub(super) fn scan(mut self) -> Vec<Token> {
        while let Some(c) = self.ch() {
            if is_space(c) {
                self.pos += 1;
            } else if is_constant_start(c) {
                self.scan_constant();
            } else if is_alphanum(c) {
                self.scan_identifier();
            } else if let Some((kind, len)) = longest_symbol(&self.input[self.pos..]) {
                self.add_token(kind, self.pos, self.pos + len);
                self.pos += len;
            } else {
                self.scan_unknown();
            }
        }
        self.tokens
    }

    fn scan_constant(&mut self) {
        let start = self.pos;
        match Quote::from_byte(self.input[start]) {
            Some(quote) => self.scan_quoted(start, quote),
            None => self.scan_numeric(),
        }
    }

    /// Scans a quoted literal whose opening quote is at `self.pos`. `start`
    /// is before the quote when the literal carries an encoding prefix.
    fn scan_quoted(&mut self, start: usize, quote: Quote) {
        let open = self.pos;
        debug_assert_eq!(Quote::from_byte(self.input[open]), Some(quote));
        let Some(close) = self.find_closing_quote(open + 1, self.input[open]) else {
            let recover = self.run_end(open + 1, is_white);
            let span = self.new_span(start, recover);
            let error: Box<dyn DiagnosticExt + Send + Sync> = match quote {
                Quote::Char => Box::new(errors::UnterminatedCharLiteral { span }),
                Quote::String => Box::new(errors::UnterminatedStringLiteral { span }),
            };
            self.push_error(error);
            self.pos = recover;
            return;
        };
        let end = close + 1;
        self.pos = end;

        if close == open + 1 {
            let span = self.new_span(start, end);
            let error: Box<dyn DiagnosticExt + Send + Sync> = match quote {
                Quote::Char => Box::new(errors::EmptyCharLiteral { span }),
                Quote::String => Box::new(errors::EmptyStringLiteral { span }),
            };
            self.push_error(error);
            return;
        }

        match quote {
            Quote::Char => {
                let size = content_size(&self.input[open + 1..close]);
                if size > 1 && self.options.warn_multichar() {
                    let span = self.new_span(start, end);
                    self.push_error(Box::new(errors::MultibyteCharLiteral { span, size }));
                }
                self.add_token(TokenKind::CharConstant, start, end);
            }
            Quote::String => self.add_token(TokenKind::StringConstant, start, end),
        }
    }

    fn find_closing_quote(&self, from: usize, quote: u8) -> Option<usize> {
        let mut i = from;
        while let Some(&c) = self.input.get(i) {
            if c == quote {
                return Some(i);
            } else if c == b'\\' {
                i += 2;
            } else if is_line_break(c) {
                return None;
            } else {
                i += 1;
            }
        }
        None
    }

    fn scan_numeric(&mut self) {
        let start = self.pos;
        let end = self.run_end(start, is_white);
        self.pos = end;
        match classify_numeric(&self.input[start..end]) {
            Ok(kind) => self.add_token(kind, start, end),
            Err((kind, offset)) => {
                let at = start + offset;
                let found = self.source[at..]
                    .chars()
                    .next()
                    .unwrap_or(char::REPLACEMENT_CHARACTER);
                let error = errors::InvalidNumericLiteral {
                    span: self.new_span(start, end),
                    digit: self.new_span(at, at + found.len_utf8()),
                    kind,
                    found,
                };
                self.push_error(Box::new(error));
                self.add_token(TokenKind::Unknown, start, end);
            }
        }
    }

    fn scan_identifier(&mut self) {
        let start = self.pos;
        debug_assert!(is_alpha(self.input[start]));
        let end = self.run_end(start, |c| !is_alphanum(c));
        let text = &self.source[start..end];
        self.pos = end;

        if let Some(quote) = self.ch().and_then(Quote::from_byte) {
            if self.allows_literal_prefix(text, quote) {
                return self.scan_quoted(start, quote);
            }
        }

        let kind = keyword::keyword_to_token(text).unwrap_or(TokenKind::Identifier);
        self.add_token(kind, start, end);
    }

    fn allows_literal_prefix(&self, prefix: &str, quote: Quote) -> bool {
        match (prefix, quote) {
            ("L", _) => true,
            ("u" | "U", _) | ("u8", Quote::String) => {
                self.options.allows_unicode_literal_prefix()
            }
            ("u8", Quote::Char) => self.options.allows_utf8_char_prefix(),
            _ => false,
        }
    }

    fn scan_unknown(&mut self) {
        let start = self.pos;
        let ch = self.source[start..]
            .chars()
            .next()
            .unwrap_or(char::REPLACEMENT_CHARACTER);
        let end = start + ch.len_utf8();
        let span = self.new_span(start, end);
        self.push_error(Box::new(errors::UnknownCharacter { span, ch }));
        self.pos = end;
    }
}

/// Logical size of a character literal body: an escape and the byte it
/// introduces count as one.
fn content_size(body: &[u8]) -> usize {
    let mut count = 0;
    let mut i = 0;
    while i < body.len() {
        i += if body[i] == b'\\' { 2 } else { 1 };
        count += 1;
    }
    count
}

/// Classifies a numeric run. On failure returns the kind that was attempted
/// and the offset of the first offending byte.
pub(super) fn classify_numeric(run: &[u8]) -> Result<TokenKind, (NumericKind, usize)> {
    let has_hex_prefix = run.len() > 2 && run[0] == b'0' && matches!(run[1], b'x' | b'X');
    let digits = if has_hex_prefix { 2 } else { 0 };
    let is_valid_digit = |c: u8| {
        if has_hex_prefix {
            is_hexdigit(c)
        } else {
            is_digit(c)
        }
    };

    // a `.` ends integer classification without complaint
    let Some(int_failure) = run[digits..]
        .iter()
        .position(|&c| !is_valid_digit(c))
        .map(|i| digits + i)
    else {
        return Ok(TokenKind::IntegerConstant);
    };

    let Some(dot) = run.iter().position(|&c| c == b'.') else {
        return Err((NumericKind::Integer, int_failure));
    };

    let suffix = run[dot..]
        .iter()
        .position(|&c| c == b'f' || c == b'F')
        .map(|i| dot + i);
    if let Some(suffix) = suffix.filter(|&s| s + 1 != run.len()) {
        return Err((NumericKind::Floating, suffix + 1));
    }

    match run
        .iter()
        .enumerate()
        .position(|(i, &c)| i != dot && Some(i) != suffix && !is_digit(c))
    {
        Some(i) => Err((NumericKind::Floating, i)),
        None => Ok(TokenKind::FloatConstant),
    }
}
