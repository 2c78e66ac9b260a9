use super::source_code::SourceCode;

use cci_span::{ModuleArena, ModuleID, Span};

pub trait DiagnosticExt: miette::Diagnostic {
    fn module_id(&self) -> ModuleID;
    fn primary_span(&self) -> Span;
}

#[derive(Debug)]
struct DiagConstructor {
    source_code: SourceCode,
    inner: Box<dyn DiagnosticExt + Send + Sync + 'static>,
}

impl std::error::Error for DiagConstructor {}

impl std::fmt::Display for DiagConstructor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.inner.fmt(f)
    }
}

impl miette::Diagnostic for DiagConstructor {
    fn code<'a>(&'a self) -> Option<Box<dyn std::fmt::Display + 'a>> {
        self.inner.code()
    }
    fn severity(&self) -> Option<miette::Severity> {
        self.inner.severity()
    }
    fn help<'a>(&'a self) -> Option<Box<dyn std::fmt::Display + 'a>> {
        self.inner.help()
    }
    fn url<'a>(&'a self) -> Option<Box<dyn std::fmt::Display + 'a>> {
        self.inner.url()
    }
    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.source_code)
    }
    fn labels(&self) -> Option<Box<dyn Iterator<Item = miette::LabeledSpan> + '_>> {
        self.inner.labels()
    }
    fn diagnostic_source(&self) -> Option<&dyn miette::Diagnostic> {
        self.inner.diagnostic_source()
    }
}

pub fn into_miette_diagnostic(
    diag: Box<dyn DiagnosticExt + Send + Sync + 'static>,
    module_arena: &ModuleArena,
) -> Box<dyn miette::Diagnostic + Send + Sync + 'static> {
    let module_id = diag.module_id();
    let source_code = SourceCode::new(module_arena, module_id);
    Box::new(DiagConstructor {
        source_code,
        inner: diag,
    })
}
