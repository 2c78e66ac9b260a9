pub fn visit_expr<'cx>(v: &mut impl Visitor<'cx>, expr: &'cx super::Expr<'cx>) {
    use super::ExprKind::*;
    match &expr.kind {
        IntegerLiteral(n) => v.visit_integer_literal(n),
        CharacterConstant(n) => v.visit_character_constant(n),
        StringLiteral(n) => v.visit_string_literal(n),
        Paren(n) => v.visit_paren_expr(n),
        ArraySubscript(n) => v.visit_array_subscript(n),
        ImplicitCast(n) => v.visit_cast_expr(n),
    }
}

pub fn visit_integer_literal<'cx>(_: &mut impl Visitor<'cx>, _: &'cx super::IntegerLiteral) {}

pub fn visit_character_constant<'cx>(_: &mut impl Visitor<'cx>, _: &'cx super::CharacterConstant) {}

pub fn visit_string_literal<'cx>(_: &mut impl Visitor<'cx>, _: &'cx super::StringLiteral<'cx>) {}

pub fn visit_paren_expr<'cx>(v: &mut impl Visitor<'cx>, n: &'cx super::ParenExpr<'cx>) {
    v.visit_expr(n.inner);
}

pub fn visit_array_subscript<'cx>(
    v: &mut impl Visitor<'cx>,
    n: &'cx super::ArraySubscriptExpr<'cx>,
) {
    v.visit_expr(n.base);
    v.visit_expr(n.index);
}

pub fn visit_cast_expr<'cx>(v: &mut impl Visitor<'cx>, n: &'cx super::CastExpr<'cx>) {
    v.visit_expr(n.operand);
}

macro_rules! make_visitor {
    ($( ($visit_node: ident, $ty: ty) ),* $(,)?) => {
      pub trait Visitor<'cx>: Sized {
        $(
          fn $visit_node(&mut self, node: &'cx $ty) {
            $visit_node(self, node)
          }
        )*
      }
    };
}

make_visitor!(
    (visit_expr, super::Expr<'cx>),
    (visit_integer_literal, super::IntegerLiteral),
    (visit_character_constant, super::CharacterConstant),
    (visit_string_literal, super::StringLiteral<'cx>),
    (visit_paren_expr, super::ParenExpr<'cx>),
    (visit_array_subscript, super::ArraySubscriptExpr<'cx>),
    (visit_cast_expr, super::CastExpr<'cx>),
);
