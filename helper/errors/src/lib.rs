pub mod diag_ext;
mod source_code;

pub use cci_diag_derive::DiagnosticExt;
use cci_span::{ModuleArena, Span};
use diag_ext::into_miette_diagnostic;
pub use miette;
pub use thiserror;

#[derive(Debug)]
pub struct Diag {
    pub inner: Box<dyn diag_ext::DiagnosticExt + Send + Sync + 'static>,
}

impl Diag {
    pub fn new(inner: Box<dyn diag_ext::DiagnosticExt + Send + Sync + 'static>) -> Self {
        Self { inner }
    }

    /// Stable identifier of the diagnostic kind, e.g. `lex::empty_char_literal`.
    pub fn code(&self) -> Option<String> {
        self.inner.code().map(|code| code.to_string())
    }

    pub fn severity(&self) -> miette::Severity {
        self.inner.severity().unwrap_or(miette::Severity::Error)
    }

    pub fn is_error(&self) -> bool {
        self.severity() == miette::Severity::Error
    }

    pub fn span(&self) -> Span {
        self.inner.primary_span()
    }

    pub fn message(&self) -> String {
        self.inner.to_string()
    }

    pub fn emit_message(
        self,
        module_arena: &ModuleArena,
        no_color: bool,
    ) -> Result<String, std::fmt::Error> {
        let mut out = String::new();
        let error = into_miette_diagnostic(self.inner, module_arena);
        let error_report = miette::ErrReport::new_boxed(error);
        let theme = if no_color {
            miette::GraphicalTheme::unicode_nocolor()
        } else {
            miette::GraphicalTheme::unicode()
        };
        miette::GraphicalReportHandler::new_themed(theme)
            .with_width(80)
            .with_context_lines(0)
            .render_report(&mut out, error_report.as_ref())?;
        Ok(out.trim_start_matches('\n').to_string())
    }

    pub fn emit(self, module_arena: &ModuleArena) -> Result<(), std::fmt::Error> {
        let no_color = match std::env::var("NO_COLOR") {
            Ok(string) => string != "0",
            _ => false,
        };
        let out = self.emit_message(module_arena, no_color)?;
        eprintln!("{out}");
        Ok(())
    }
}

/// Receiver of every diagnostic a front-end stage produces. Stages only push;
/// ordering and rendering belong to the owner of the sink.
pub trait DiagnosticSink {
    fn push(&mut self, diag: Diag);
}

impl DiagnosticSink for Vec<Diag> {
    fn push(&mut self, diag: Diag) {
        Vec::push(self, diag)
    }
}

pub fn has_errors(diags: &[Diag]) -> bool {
    diags.iter().any(Diag::is_error)
}
