use cci_arena::Bump;
use cci_ast::*;
use cci_span::{ModuleID, Span};
use expect_test::expect;

fn span(lo: u32, hi: u32) -> Span {
    Span::new(lo, hi, ModuleID::DEFAULT)
}

#[test]
fn paren_inherits_inner_value_kind_and_type() {
    // (42)
    let arena = Bump::new();
    let mut cx = AstContext::new(&arena, ModuleID::DEFAULT);
    let int = cx.builtin(BuiltinTy::Int);
    let lit = cx.create_integer_literal(42, int, span(1, 3));
    let paren = cx.create_paren_expr(lit, 0, 3);

    assert!(lit.is_rvalue());
    assert_eq!(paren.expr_class(), ExprClass::ParenExpr);
    assert_eq!(paren.value_kind(), ExprValueKind::RValue);
    assert_eq!(paren.ty(), lit.ty());
    assert_eq!(paren.begin_loc(), 0);
    assert_eq!(paren.end_loc(), 4);
    assert!(std::ptr::eq(paren.skip_parens(), lit));

    expect![[r#"
        ParenExpr <0..4> 'int' rvalue
          IntegerLiteral <1..3> 'int' rvalue 42
    "#]]
    .assert_eq(&dump_expr(paren));
}

#[test]
fn subscript_of_decayed_string_literal() {
    // "ab"[1]
    let arena = Bump::new();
    let mut cx = AstContext::new(&arena, ModuleID::DEFAULT);
    let char_ty = cx.builtin(BuiltinTy::Char);
    let int = cx.builtin(BuiltinTy::Int);
    let array = cx.array_of(char_ty, Some(3));
    let ptr = cx.pointer_to(char_ty);

    let s = cx.create_string_literal(array, b"ab", StringLiteralKind::Ascii, 1, &[0], 3);
    let decay = cx.create_implicit_cast(
        ExprValueKind::RValue,
        ptr,
        CastKind::ArrayToPointerDecay,
        s,
    );
    let idx = cx.create_integer_literal(1, int, span(5, 6));
    let sub = cx.create_array_subscript(decay, idx, ExprValueKind::LValue, char_ty, 4, 6);

    assert_eq!(decay.span(), s.span());
    assert_eq!(sub.span(), span(0, 7));
    assert!(sub.is_lvalue());
    let view = sub.as_array_subscript().unwrap();
    assert_eq!(view.open_bracket_loc(), 4);
    assert!(std::ptr::eq(view.base_expr().ignore_implicit_casts(), s));

    expect![[r#"
        ArraySubscriptExpr <0..7> 'char' lvalue
          ImplicitCastExpr <0..4> 'char *' rvalue <ArrayToPointerDecay>
            StringLiteral <0..4> 'char [3]' lvalue Ascii "ab"
          IntegerLiteral <5..6> 'int' rvalue 1
    "#]]
    .assert_eq(&dump_expr(sub));
}

#[test]
#[should_panic(expected = "subscript base must have pointer type")]
fn subscript_rejects_non_pointer_base() {
    let arena = Bump::new();
    let mut cx = AstContext::new(&arena, ModuleID::DEFAULT);
    let int = cx.builtin(BuiltinTy::Int);
    let base = cx.create_integer_literal(1, int, span(0, 1));
    let idx = cx.create_integer_literal(2, int, span(2, 3));
    cx.create_array_subscript(base, idx, ExprValueKind::LValue, int, 1, 3);
}

#[test]
#[should_panic(expected = "subscript index must not have pointer type")]
fn subscript_rejects_pointer_index() {
    let arena = Bump::new();
    let mut cx = AstContext::new(&arena, ModuleID::DEFAULT);
    let char_ty = cx.builtin(BuiltinTy::Char);
    let array = cx.array_of(char_ty, Some(2));
    let ptr = cx.pointer_to(char_ty);
    let a = cx.create_string_literal(array, b"a", StringLiteralKind::Ascii, 1, &[0], 2);
    let a = cx.create_implicit_cast(ExprValueKind::RValue, ptr, CastKind::ArrayToPointerDecay, a);
    let b = cx.create_string_literal(array, b"b", StringLiteralKind::Ascii, 1, &[4], 6);
    let b = cx.create_implicit_cast(ExprValueKind::RValue, ptr, CastKind::ArrayToPointerDecay, b);
    cx.create_array_subscript(a, b, ExprValueKind::LValue, char_ty, 3, 7);
}

#[test]
#[should_panic(expected = "string literal without source locations")]
fn string_literal_needs_a_location() {
    let arena = Bump::new();
    let mut cx = AstContext::new(&arena, ModuleID::DEFAULT);
    let char_ty = cx.builtin(BuiltinTy::Char);
    cx.create_string_literal(char_ty, b"", StringLiteralKind::Ascii, 1, &[], 1);
}

#[test]
fn string_literal_pieces_and_length() {
    // U"ab" U"c"
    let arena = Bump::new();
    let mut cx = AstContext::new(&arena, ModuleID::DEFAULT);
    let uint = cx.builtin(BuiltinTy::UInt);
    let array = cx.array_of(uint, Some(4));
    let bytes: Vec<u8> = ['a', 'b', 'c']
        .iter()
        .flat_map(|c| (*c as u32).to_le_bytes())
        .collect();
    let s = cx.create_string_literal(array, &bytes, StringLiteralKind::UTF32, 4, &[0, 6], 9);
    let lit = s.as_string_literal().unwrap();

    assert!(s.is_lvalue());
    assert_eq!(s.span(), span(0, 10));
    assert_eq!(lit.byte_length(), 12);
    assert_eq!(lit.length(), 3);
    assert_eq!(lit.char_byte_width(), 4);
    assert_eq!(lit.tok_locs(), &[0, 6]);
    assert_eq!(lit.str_kind(), StringLiteralKind::UTF32);
}

#[test]
#[should_panic(expected = "viewed as utf-8")]
fn wide_string_is_not_utf8() {
    let arena = Bump::new();
    let mut cx = AstContext::new(&arena, ModuleID::DEFAULT);
    let ushort = cx.builtin(BuiltinTy::UShort);
    let s = cx.create_string_literal(ushort, &[b'a', 0], StringLiteralKind::UTF16, 2, &[0], 4);
    let _ = s.as_string_literal().unwrap().as_utf8();
}

#[test]
fn downcast_is_driven_by_class() {
    let arena = Bump::new();
    let mut cx = AstContext::new(&arena, ModuleID::DEFAULT);
    let int = cx.builtin(BuiltinTy::Int);
    let c = cx.create_character_constant(
        'x' as u32,
        CharacterConstantKind::Ascii,
        int,
        span(0, 3),
    );

    assert!(c.is_character_constant());
    assert!(!c.is_integer_literal());
    assert!(c.get_as::<IntegerLiteral>().is_none());
    assert!(c.get_as::<CastExpr>().is_none());
    let view = c.get_as::<CharacterConstant>().unwrap();
    assert_eq!(view.char_value(), 'x' as u32);
    assert_eq!(view.char_kind(), CharacterConstantKind::Ascii);
}

#[test]
fn lvalue_to_rvalue_cast_covers_operand() {
    let arena = Bump::new();
    let mut cx = AstContext::new(&arena, ModuleID::DEFAULT);
    let char_ty = cx.builtin(BuiltinTy::Char);
    let array = cx.array_of(char_ty, Some(1));
    let s = cx.create_string_literal(array, b"", StringLiteralKind::Ascii, 1, &[2], 3);
    let cast = cx.create_implicit_cast(ExprValueKind::RValue, array, CastKind::LValueToRValue, s);

    assert_eq!(cast.span(), s.span());
    assert!(cast.is_rvalue());
    assert_eq!(cast.as_cast_expr().unwrap().cast_kind(), CastKind::LValueToRValue);
    assert!(std::ptr::eq(cast.ignore_implicit_casts(), s));
}

#[test]
#[should_panic(expected = "lvalue-to-rvalue conversion of an rvalue")]
fn lvalue_to_rvalue_needs_lvalue() {
    let arena = Bump::new();
    let mut cx = AstContext::new(&arena, ModuleID::DEFAULT);
    let int = cx.builtin(BuiltinTy::Int);
    let lit = cx.create_integer_literal(0, int, span(0, 1));
    cx.create_implicit_cast(ExprValueKind::RValue, int, CastKind::LValueToRValue, lit);
}

#[test]
fn atomic_to_non_atomic_cast_covers_operand() {
    let arena = Bump::new();
    let mut cx = AstContext::new(&arena, ModuleID::DEFAULT);
    let int = cx.builtin(BuiltinTy::Int);
    let atomic_int = cx.atomic_of(int);
    let lit = cx.create_integer_literal(3, atomic_int, span(4, 6));
    let cast =
        cx.create_implicit_cast(ExprValueKind::RValue, int, CastKind::AtomicToNonAtomic, lit);

    assert_eq!(cast.span(), lit.span());
    assert_eq!(cast.ty(), int);
    assert!(!cast.ty().is_atomic());
    assert_eq!(cast.as_cast_expr().unwrap().cast_kind(), CastKind::AtomicToNonAtomic);
    assert!(std::ptr::eq(cast.ignore_implicit_casts(), lit));
}

#[test]
#[should_panic(expected = "atomic conversion of non-atomic")]
fn atomic_to_non_atomic_needs_atomic_operand() {
    let arena = Bump::new();
    let mut cx = AstContext::new(&arena, ModuleID::DEFAULT);
    let int = cx.builtin(BuiltinTy::Int);
    let lit = cx.create_integer_literal(3, int, span(0, 1));
    cx.create_implicit_cast(ExprValueKind::RValue, int, CastKind::AtomicToNonAtomic, lit);
}

#[test]
#[should_panic(expected = "array decay from")]
fn array_decay_needs_array_operand() {
    let arena = Bump::new();
    let mut cx = AstContext::new(&arena, ModuleID::DEFAULT);
    let int = cx.builtin(BuiltinTy::Int);
    let ptr = cx.pointer_to(int);
    let lit = cx.create_integer_literal(0, int, span(0, 1));
    cx.create_implicit_cast(ExprValueKind::RValue, ptr, CastKind::ArrayToPointerDecay, lit);
}

#[test]
#[should_panic(expected = "array decay from")]
fn array_decay_needs_pointer_target() {
    let arena = Bump::new();
    let mut cx = AstContext::new(&arena, ModuleID::DEFAULT);
    let char_ty = cx.builtin(BuiltinTy::Char);
    let array = cx.array_of(char_ty, Some(2));
    let s = cx.create_string_literal(array, b"a", StringLiteralKind::Ascii, 1, &[0], 2);
    cx.create_implicit_cast(ExprValueKind::RValue, char_ty, CastKind::ArrayToPointerDecay, s);
}

#[test]
#[should_panic(expected = "do not enclose")]
fn paren_must_enclose_operand() {
    let arena = Bump::new();
    let mut cx = AstContext::new(&arena, ModuleID::DEFAULT);
    let int = cx.builtin(BuiltinTy::Int);
    let lit = cx.create_integer_literal(42, int, span(1, 3));
    cx.create_paren_expr(lit, 1, 3);
}

#[test]
#[should_panic(expected = "invalid character width 3")]
fn string_literal_rejects_odd_char_width() {
    let arena = Bump::new();
    let mut cx = AstContext::new(&arena, ModuleID::DEFAULT);
    let char_ty = cx.builtin(BuiltinTy::Char);
    cx.create_string_literal(char_ty, b"abc", StringLiteralKind::Ascii, 3, &[0], 4);
}

#[test]
#[should_panic(expected = "3 bytes is not a whole number of 2-byte characters")]
fn string_literal_rejects_partial_code_unit() {
    let arena = Bump::new();
    let mut cx = AstContext::new(&arena, ModuleID::DEFAULT);
    let ushort = cx.builtin(BuiltinTy::UShort);
    cx.create_string_literal(ushort, b"abc", StringLiteralKind::UTF16, 2, &[0], 4);
}

#[test]
fn node_table_resolves_ids() {
    let arena = Bump::new();
    let mut cx = AstContext::new(&arena, ModuleID::DEFAULT);
    let int = cx.builtin(BuiltinTy::Int);
    let a = cx.create_integer_literal(1, int, span(1, 2));
    let b = cx.create_paren_expr(a, 0, 2);

    assert_eq!(cx.node_count(), 2);
    assert!(std::ptr::eq(cx.expr(a.id()), a));
    assert!(std::ptr::eq(cx.expr(b.id()), b));
    assert_ne!(a.id(), b.id());
}

#[test]
fn qualified_types_compare_by_identity_and_qualifiers() {
    let arena = Bump::new();
    let mut cx = AstContext::new(&arena, ModuleID::DEFAULT);
    let int = cx.builtin(BuiltinTy::Int);
    let long = cx.builtin(BuiltinTy::Long);

    assert_eq!(int, cx.builtin(BuiltinTy::Int));
    assert_ne!(int, long);
    assert_ne!(int, int.with_const());
    assert_eq!(int.with_const().unqualified(), int);
    assert!(int.with_const().is_const());
    assert!(int.is_integer());

    let p1 = cx.pointer_to(int.with_const());
    let p2 = cx.pointer_to(int.with_const());
    assert_eq!(p1, p2);
    assert_ne!(p1, cx.pointer_to(int));
    assert_eq!(p1.as_pointer(), Some(int.with_const()));
    assert!(!p1.is_integer());
    assert_eq!(p1.with_const().to_string(), "const int *const");

    let atomic = cx.atomic_of(int);
    assert!(atomic.is_atomic());
    assert_eq!(atomic.to_string(), "_Atomic(int)");
    assert_eq!(cx.array_of(long, None).to_string(), "long []");
}

#[derive(Default)]
struct ClassCounter {
    seen: Vec<ExprClass>,
    literals: u64,
}

impl<'cx> Visitor<'cx> for ClassCounter {
    fn visit_expr(&mut self, node: &'cx Expr<'cx>) {
        self.seen.push(node.expr_class());
        visitor::visit_expr(self, node);
    }

    fn visit_integer_literal(&mut self, node: &'cx IntegerLiteral) {
        self.literals += node.value();
    }
}

#[test]
fn visitor_walks_children_in_order() {
    // ((p))[(7)] with p a decayed string literal
    let arena = Bump::new();
    let mut cx = AstContext::new(&arena, ModuleID::DEFAULT);
    let char_ty = cx.builtin(BuiltinTy::Char);
    let int = cx.builtin(BuiltinTy::Int);
    let array = cx.array_of(char_ty, Some(2));
    let ptr = cx.pointer_to(char_ty);

    let s = cx.create_string_literal(array, b"p", StringLiteralKind::Ascii, 1, &[2], 4);
    let decay =
        cx.create_implicit_cast(ExprValueKind::RValue, ptr, CastKind::ArrayToPointerDecay, s);
    let inner = cx.create_paren_expr(decay, 1, 5);
    let base = cx.create_paren_expr(inner, 0, 6);
    let seven = cx.create_integer_literal(7, int, span(9, 10));
    let idx = cx.create_paren_expr(seven, 8, 10);
    let sub = cx.create_array_subscript(base, idx, ExprValueKind::LValue, char_ty, 7, 11);

    let mut v = ClassCounter::default();
    v.visit_expr(sub);
    assert_eq!(
        v.seen,
        [
            ExprClass::ArraySubscript,
            ExprClass::ParenExpr,
            ExprClass::ParenExpr,
            ExprClass::ImplicitCast,
            ExprClass::StringLiteral,
            ExprClass::ParenExpr,
            ExprClass::IntegerLiteral,
        ]
    );
    assert_eq!(v.literals, 7);
    assert_eq!(sub.span(), span(0, 12));
    assert!(std::ptr::eq(base.skip_parens(), decay));
}
