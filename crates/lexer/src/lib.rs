pub mod char_class;
pub mod errors;
pub mod literal;
mod scan;

use cci_ast::Token;
use cci_config::LangOptions;
use cci_errors::{Diag, DiagnosticSink};
use cci_span::{ModuleArena, ModuleID};
use rayon::prelude::*;

use self::scan::LexerState;

pub struct LexResult {
    pub tokens: Vec<Token>,
    pub diags: Vec<Diag>,
}

impl LexResult {
    pub fn has_errors(&self) -> bool {
        cci_errors::has_errors(&self.diags)
    }
}

/// Tokenizes `input` with default language options.
pub fn tokenize(input: &str, module: ModuleID) -> LexResult {
    tokenize_with_options(input, module, &LangOptions::default())
}

pub fn tokenize_with_options(input: &str, module: ModuleID, options: &LangOptions) -> LexResult {
    let mut diags = Vec::new();
    let tokens = tokenize_with(input, module, options, &mut diags);
    LexResult { tokens, diags }
}

/// Scans the whole of `input` in one pass. Lexical errors are reported to
/// `sink` and scanning resumes after them, so the returned tokens always
/// cover every productive part of the input.
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(module = module.as_u32(), len = input.len())
)]
pub fn tokenize_with(
    input: &str,
    module: ModuleID,
    options: &LangOptions,
    sink: &mut impl DiagnosticSink,
) -> Vec<Token> {
    assert!(
        u32::try_from(input.len()).is_ok(),
        "source of {} bytes exceeds span range",
        input.len()
    );
    let tokens = LexerState::new(input, module, options, sink).scan();
    tracing::debug!(count = tokens.len(), "tokenized");
    tokens
}

/// Tokenizes independent compilation units in parallel. Results keep the
/// order of `modules`.
pub fn tokenize_modules(
    module_arena: &ModuleArena,
    modules: &[ModuleID],
    options: &LangOptions,
) -> Vec<(ModuleID, LexResult)> {
    modules
        .par_iter()
        .map(|&module| {
            let input = module_arena.get_content(module);
            (module, tokenize_with_options(input, module, options))
        })
        .collect()
}
