use cci_span::{ByteLoc, Span};

use super::QualType;

cci_utils::index!(ExprID);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExprValueKind {
    LValue,
    RValue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExprClass {
    IntegerLiteral,
    CharacterConstant,
    StringLiteral,
    ParenExpr,
    ArraySubscript,
    ImplicitCast,
}

impl ExprClass {
    pub fn as_str(self) -> &'static str {
        match self {
            ExprClass::IntegerLiteral => "IntegerLiteral",
            ExprClass::CharacterConstant => "CharacterConstant",
            ExprClass::StringLiteral => "StringLiteral",
            ExprClass::ParenExpr => "ParenExpr",
            ExprClass::ArraySubscript => "ArraySubscriptExpr",
            ExprClass::ImplicitCast => "ImplicitCastExpr",
        }
    }
}

/// An expression node. Only `AstContext::create_*` builds these, and nothing
/// mutates one afterwards.
#[derive(Debug, Clone, Copy)]
pub struct Expr<'cx> {
    pub(crate) id: ExprID,
    pub(crate) kind: ExprKind<'cx>,
    pub(crate) value_kind: ExprValueKind,
    pub(crate) ty: QualType<'cx>,
    pub(crate) span: Span,
}

#[derive(Debug, Clone, Copy)]
pub enum ExprKind<'cx> {
    IntegerLiteral(IntegerLiteral),
    CharacterConstant(CharacterConstant),
    StringLiteral(StringLiteral<'cx>),
    Paren(ParenExpr<'cx>),
    ArraySubscript(ArraySubscriptExpr<'cx>),
    ImplicitCast(CastExpr<'cx>),
}

impl<'cx> Expr<'cx> {
    #[inline]
    pub fn id(&self) -> ExprID {
        self.id
    }

    pub fn expr_class(&self) -> ExprClass {
        use ExprKind::*;
        match self.kind {
            IntegerLiteral(_) => ExprClass::IntegerLiteral,
            CharacterConstant(_) => ExprClass::CharacterConstant,
            StringLiteral(_) => ExprClass::StringLiteral,
            Paren(_) => ExprClass::ParenExpr,
            ArraySubscript(_) => ExprClass::ArraySubscript,
            ImplicitCast(_) => ExprClass::ImplicitCast,
        }
    }

    #[inline]
    pub fn kind(&self) -> &ExprKind<'cx> {
        &self.kind
    }

    #[inline]
    pub fn value_kind(&self) -> ExprValueKind {
        self.value_kind
    }

    #[inline]
    pub fn ty(&self) -> QualType<'cx> {
        self.ty
    }

    #[inline]
    pub fn span(&self) -> Span {
        self.span
    }

    #[inline]
    pub fn begin_loc(&self) -> ByteLoc {
        self.span.lo()
    }

    #[inline]
    pub fn end_loc(&self) -> ByteLoc {
        self.span.hi()
    }

    pub fn is_lvalue(&self) -> bool {
        self.value_kind == ExprValueKind::LValue
    }

    pub fn is_rvalue(&self) -> bool {
        self.value_kind == ExprValueKind::RValue
    }

    /// Typed view of this node, present only when its class is one `T` covers.
    pub fn get_as<T: ExprVariant<'cx>>(&self) -> Option<&T> {
        if T::classof(self.expr_class()) {
            T::cast(self)
        } else {
            None
        }
    }

    pub fn skip_parens(&'cx self) -> &'cx Expr<'cx> {
        let mut e = self;
        while let ExprKind::Paren(p) = &e.kind {
            e = p.inner;
        }
        e
    }

    pub fn ignore_implicit_casts(&'cx self) -> &'cx Expr<'cx> {
        let mut e = self;
        while let ExprKind::ImplicitCast(c) = &e.kind {
            e = c.operand;
        }
        e
    }
}

macro_rules! expr_variant_queries {
    ($( ($name: ident, $ty: ty) ),* $(,)?) => {
        paste::paste! {
            impl<'cx> Expr<'cx> {
                $(
                    pub fn [<as_ $name>](&self) -> Option<&$ty> {
                        self.get_as::<$ty>()
                    }
                    pub fn [<is_ $name>](&self) -> bool {
                        <$ty as ExprVariant<'cx>>::classof(self.expr_class())
                    }
                )*
            }
        }
    };
}

expr_variant_queries!(
    (integer_literal, IntegerLiteral),
    (character_constant, CharacterConstant),
    (string_literal, StringLiteral<'cx>),
    (paren_expr, ParenExpr<'cx>),
    (array_subscript, ArraySubscriptExpr<'cx>),
    (cast_expr, CastExpr<'cx>),
);

mod sealed {
    pub trait Sealed {}
}

/// A concrete payload view reachable through [`Expr::get_as`].
pub trait ExprVariant<'cx>: sealed::Sealed + Sized {
    fn classof(class: ExprClass) -> bool;
    fn cast<'a>(expr: &'a Expr<'cx>) -> Option<&'a Self>;
}

macro_rules! impl_expr_variant {
    ($ty: ty, $( $kind: ident => $class: ident ),+) => {
        impl<'cx> sealed::Sealed for $ty {}
        impl<'cx> ExprVariant<'cx> for $ty {
            fn classof(class: ExprClass) -> bool {
                matches!(class, $(ExprClass::$class)|+)
            }
            fn cast<'a>(expr: &'a Expr<'cx>) -> Option<&'a Self> {
                match &expr.kind {
                    $(ExprKind::$kind(n) => Some(n),)+
                    #[allow(unreachable_patterns)]
                    _ => None,
                }
            }
        }
    };
}

impl_expr_variant!(IntegerLiteral, IntegerLiteral => IntegerLiteral);
impl_expr_variant!(CharacterConstant, CharacterConstant => CharacterConstant);
impl_expr_variant!(StringLiteral<'cx>, StringLiteral => StringLiteral);
impl_expr_variant!(ParenExpr<'cx>, Paren => ParenExpr);
impl_expr_variant!(ArraySubscriptExpr<'cx>, ArraySubscript => ArraySubscript);
impl_expr_variant!(CastExpr<'cx>, ImplicitCast => ImplicitCast);

#[derive(Debug, Clone, Copy)]
pub struct IntegerLiteral {
    pub(crate) value: u64,
}

impl IntegerLiteral {
    pub fn value(&self) -> u64 {
        self.value
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterConstantKind {
    Ascii,
    UTF16,
    UTF32,
    Wide,
}

#[derive(Debug, Clone, Copy)]
pub struct CharacterConstant {
    pub(crate) value: u32,
    pub(crate) kind: CharacterConstantKind,
}

impl CharacterConstant {
    pub fn char_value(&self) -> u32 {
        self.value
    }
    pub fn char_kind(&self) -> CharacterConstantKind {
        self.kind
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StringLiteralKind {
    Ascii,
    UTF8,
    UTF16,
    UTF32,
    Wide,
}

#[derive(Debug, Clone, Copy)]
pub struct StringLiteral<'cx> {
    pub(crate) data: &'cx [u8],
    pub(crate) kind: StringLiteralKind,
    pub(crate) char_byte_width: u8,
    /// Start of every adjacent piece that was concatenated into this literal.
    pub(crate) tok_locs: &'cx [ByteLoc],
}

impl<'cx> StringLiteral<'cx> {
    pub fn str_kind(&self) -> StringLiteralKind {
        self.kind
    }

    pub fn bytes(&self) -> &'cx [u8] {
        self.data
    }

    /// Content as text. Only valid for single-byte character widths.
    pub fn as_utf8(&self) -> Option<&'cx str> {
        assert_eq!(
            self.char_byte_width, 1,
            "string literal with {}-byte characters viewed as utf-8",
            self.char_byte_width
        );
        std::str::from_utf8(self.data).ok()
    }

    pub fn byte_length(&self) -> usize {
        self.data.len()
    }

    pub fn length(&self) -> usize {
        self.byte_length() / self.char_byte_width as usize
    }

    pub fn char_byte_width(&self) -> usize {
        self.char_byte_width as usize
    }

    pub fn tok_locs(&self) -> &'cx [ByteLoc] {
        self.tok_locs
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ParenExpr<'cx> {
    pub(crate) inner: &'cx Expr<'cx>,
    pub(crate) lparen: ByteLoc,
    pub(crate) rparen: ByteLoc,
}

impl<'cx> ParenExpr<'cx> {
    pub fn sub_expr(&self) -> &'cx Expr<'cx> {
        self.inner
    }
    pub fn open_paren_loc(&self) -> ByteLoc {
        self.lparen
    }
    pub fn close_paren_loc(&self) -> ByteLoc {
        self.rparen
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ArraySubscriptExpr<'cx> {
    pub(crate) base: &'cx Expr<'cx>,
    pub(crate) index: &'cx Expr<'cx>,
    pub(crate) lbracket: ByteLoc,
}

impl<'cx> ArraySubscriptExpr<'cx> {
    pub fn base_expr(&self) -> &'cx Expr<'cx> {
        self.base
    }
    pub fn index_expr(&self) -> &'cx Expr<'cx> {
        self.index
    }
    pub fn open_bracket_loc(&self) -> ByteLoc {
        self.lbracket
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastKind {
    LValueToRValue,
    ArrayToPointerDecay,
    AtomicToNonAtomic,
}

impl CastKind {
    pub fn as_str(self) -> &'static str {
        match self {
            CastKind::LValueToRValue => "LValueToRValue",
            CastKind::ArrayToPointerDecay => "ArrayToPointerDecay",
            CastKind::AtomicToNonAtomic => "AtomicToNonAtomic",
        }
    }
}

/// Shared view of every cast class.
#[derive(Debug, Clone, Copy)]
pub struct CastExpr<'cx> {
    pub(crate) kind: CastKind,
    pub(crate) operand: &'cx Expr<'cx>,
}

impl<'cx> CastExpr<'cx> {
    pub fn cast_kind(&self) -> CastKind {
        self.kind
    }
    pub fn operand_expr(&self) -> &'cx Expr<'cx> {
        self.operand
    }
}

const _: () = {
    assert!(!std::mem::needs_drop::<Expr<'static>>());
    assert!(!std::mem::needs_drop::<ExprKind<'static>>());
    assert!(!std::mem::needs_drop::<StringLiteral<'static>>());
    assert!(!std::mem::needs_drop::<super::Ty<'static>>());
};
