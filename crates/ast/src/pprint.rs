use super::{Expr, ExprKind, ExprValueKind};

/// Indented tree dump of `expr`, one node per line.
pub fn dump_expr(expr: &Expr<'_>) -> String {
    let mut out = String::new();
    dump_expr_into(&mut out, expr, 0);
    out
}

fn dump_expr_into(out: &mut String, expr: &Expr<'_>, depth: usize) {
    let value_kind = match expr.value_kind() {
        ExprValueKind::LValue => "lvalue",
        ExprValueKind::RValue => "rvalue",
    };
    out.push_str(&format!(
        "{:indent$}{} <{}..{}> '{}' {value_kind}",
        "",
        expr.expr_class().as_str(),
        expr.begin_loc(),
        expr.end_loc(),
        expr.ty(),
        indent = depth * 2,
    ));
    match expr.kind() {
        ExprKind::IntegerLiteral(n) => {
            out.push_str(&format!(" {}\n", n.value()));
        }
        ExprKind::CharacterConstant(n) => {
            out.push_str(&format!(" {:?} {}\n", n.char_kind(), n.char_value()));
        }
        ExprKind::StringLiteral(n) => {
            out.push_str(&format!(
                " {:?} {:?}\n",
                n.str_kind(),
                String::from_utf8_lossy(n.bytes())
            ));
        }
        ExprKind::Paren(n) => {
            out.push('\n');
            dump_expr_into(out, n.sub_expr(), depth + 1);
        }
        ExprKind::ArraySubscript(n) => {
            out.push('\n');
            dump_expr_into(out, n.base_expr(), depth + 1);
            dump_expr_into(out, n.index_expr(), depth + 1);
        }
        ExprKind::ImplicitCast(n) => {
            out.push_str(&format!(" <{}>\n", n.cast_kind().as_str()));
            dump_expr_into(out, n.operand_expr(), depth + 1);
        }
    }
}
