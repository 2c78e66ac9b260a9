use cci_errors::{Diag, miette::Severity};
use cci_lexer::tokenize_with;
use cci_span::{ModuleArena, ModulePath};
use expect_test::expect;

fn dump(diags: &[Diag]) -> String {
    diags
        .iter()
        .map(|d| {
            let severity = match d.severity() {
                Severity::Warning => "warning",
                Severity::Advice => "advice",
                Severity::Error => "error",
            };
            let span = d.span();
            format!(
                "{severity}[{}] {}..{}: {}\n",
                d.code().unwrap_or_default(),
                span.lo,
                span.hi,
                d.message()
            )
        })
        .collect()
}

#[test]
fn diagnostics_are_reported_in_source_order() {
    let src = "c = 'ab' + 1e5 @ '';";
    let mut arena = ModuleArena::new(1);
    let module = arena.new_module_with_content(ModulePath::Virtual, src.to_string());
    let mut diags = Vec::new();
    let tokens = tokenize_with(src, module, &Default::default(), &mut diags);

    assert_eq!(tokens.len(), 6);
    assert!(diags.iter().all(|d| d.span().module == module));
    expect![[r#"
        warning[lex::multibyte_char_literal] 4..8: multi-character character constant
        error[lex::invalid_numeric_literal] 11..14: invalid digit 'e' in integer constant
        error[lex::unknown_character] 15..16: unknown character '@'
        error[lex::empty_char_literal] 17..19: empty character constant
    "#]]
    .assert_eq(&dump(&diags));
}

#[test]
fn rendering_names_the_file_and_the_code() {
    let src = "int x = 'a;\n";
    let mut arena = ModuleArena::new(1);
    let module =
        arena.new_module_with_content(ModulePath::Real("main.c".into()), src.to_string());
    let mut diags = Vec::new();
    tokenize_with(src, module, &Default::default(), &mut diags);

    assert_eq!(diags.len(), 1);
    let diag = diags.pop().unwrap();
    assert_eq!(diag.code().as_deref(), Some("lex::unterminated_char_literal"));
    let rendered = diag.emit_message(&arena, true).unwrap();
    assert!(rendered.contains("lex::unterminated_char_literal"), "{rendered}");
    assert!(rendered.contains("missing terminating ' character"), "{rendered}");
    assert!(rendered.contains("main.c"), "{rendered}");
}

#[test]
fn every_diagnostic_emits_to_stderr() {
    let src = "'ab' 1e5 @ '' \"\"";
    let mut arena = ModuleArena::new(1);
    let module = arena.new_module_with_content(ModulePath::Virtual, src.to_string());
    let mut diags = Vec::new();
    tokenize_with(src, module, &Default::default(), &mut diags);

    assert_eq!(diags.len(), 5);
    for diag in diags {
        assert!(diag.emit(&arena).is_ok());
    }
}
