use cci_span::{ByteLoc, Span};

use super::*;

impl<'cx> AstContext<'cx> {
    fn alloc_expr(
        &mut self,
        kind: ExprKind<'cx>,
        value_kind: ExprValueKind,
        ty: QualType<'cx>,
        span: Span,
    ) -> &'cx Expr<'cx> {
        let id = self.next_expr_id();
        let expr: &'cx Expr<'cx> = cci_arena::alloc_no_drop(
            self.arena,
            Expr {
                id,
                kind,
                value_kind,
                ty,
                span,
            },
        );
        self.nodes.push(expr);
        tracing::trace!(id = id.as_u32(), class = expr.expr_class().as_str(), %span, "create expr");
        expr
    }

    #[inline(always)]
    pub fn create_integer_literal(
        &mut self,
        value: u64,
        ty: QualType<'cx>,
        span: Span,
    ) -> &'cx Expr<'cx> {
        let kind = ExprKind::IntegerLiteral(IntegerLiteral { value });
        self.alloc_expr(kind, ExprValueKind::RValue, ty, span)
    }

    #[inline(always)]
    pub fn create_character_constant(
        &mut self,
        value: u32,
        char_kind: CharacterConstantKind,
        ty: QualType<'cx>,
        span: Span,
    ) -> &'cx Expr<'cx> {
        let kind = ExprKind::CharacterConstant(CharacterConstant {
            value,
            kind: char_kind,
        });
        self.alloc_expr(kind, ExprValueKind::RValue, ty, span)
    }

    /// `locs` holds the opening location of every concatenated piece, and
    /// `rquote` the closing quote of the last one.
    pub fn create_string_literal(
        &mut self,
        ty: QualType<'cx>,
        bytes: &[u8],
        str_kind: StringLiteralKind,
        char_byte_width: usize,
        locs: &[ByteLoc],
        rquote: ByteLoc,
    ) -> &'cx Expr<'cx> {
        assert!(!locs.is_empty(), "string literal without source locations");
        assert!(
            matches!(char_byte_width, 1 | 2 | 4),
            "invalid character width {char_byte_width}"
        );
        assert!(
            bytes.len() % char_byte_width == 0,
            "{} bytes is not a whole number of {char_byte_width}-byte characters",
            bytes.len()
        );
        let data = cci_arena::alloc_slice_copy(self.arena, bytes);
        let tok_locs = cci_arena::alloc_slice_copy(self.arena, locs);
        let span = self.span(locs[0], rquote + 1);
        let kind = ExprKind::StringLiteral(StringLiteral {
            data,
            kind: str_kind,
            char_byte_width: char_byte_width as u8,
            tok_locs,
        });
        self.alloc_expr(kind, ExprValueKind::LValue, ty, span)
    }

    pub fn create_paren_expr(
        &mut self,
        inner: &'cx Expr<'cx>,
        lparen: ByteLoc,
        rparen: ByteLoc,
    ) -> &'cx Expr<'cx> {
        assert!(
            lparen < inner.begin_loc() && inner.end_loc() <= rparen,
            "parentheses {lparen}..{rparen} do not enclose {}",
            inner.span()
        );
        let span = self.span(lparen, rparen + 1);
        let kind = ExprKind::Paren(ParenExpr {
            inner,
            lparen,
            rparen,
        });
        self.alloc_expr(kind, inner.value_kind(), inner.ty(), span)
    }

    pub fn create_array_subscript(
        &mut self,
        base: &'cx Expr<'cx>,
        index: &'cx Expr<'cx>,
        value_kind: ExprValueKind,
        ty: QualType<'cx>,
        lbracket: ByteLoc,
        rbracket: ByteLoc,
    ) -> &'cx Expr<'cx> {
        assert!(
            base.ty().is_pointer(),
            "subscript base must have pointer type, found `{}`",
            base.ty()
        );
        assert!(
            !index.ty().is_pointer(),
            "subscript index must not have pointer type, found `{}`",
            index.ty()
        );
        let span = self.span(base.begin_loc(), rbracket + 1);
        let kind = ExprKind::ArraySubscript(ArraySubscriptExpr {
            base,
            index,
            lbracket,
        });
        self.alloc_expr(kind, value_kind, ty, span)
    }

    /// Casts are synthesized, so the node covers exactly its operand.
    pub fn create_implicit_cast(
        &mut self,
        value_kind: ExprValueKind,
        ty: QualType<'cx>,
        cast_kind: CastKind,
        operand: &'cx Expr<'cx>,
    ) -> &'cx Expr<'cx> {
        match cast_kind {
            CastKind::LValueToRValue => assert!(
                operand.is_lvalue(),
                "lvalue-to-rvalue conversion of an rvalue"
            ),
            CastKind::ArrayToPointerDecay => assert!(
                operand.ty().is_array() && ty.is_pointer(),
                "array decay from `{}` to `{ty}`",
                operand.ty()
            ),
            CastKind::AtomicToNonAtomic => assert!(
                operand.ty().is_atomic(),
                "atomic conversion of non-atomic `{}`",
                operand.ty()
            ),
        }
        let kind = ExprKind::ImplicitCast(CastExpr {
            kind: cast_kind,
            operand,
        });
        self.alloc_expr(kind, value_kind, ty, operand.span())
    }
}
