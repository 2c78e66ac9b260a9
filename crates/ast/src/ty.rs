use std::fmt;

cci_utils::index!(TyID);

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Qualifiers: u8 {
        const CONST    = 1 << 0;
        const VOLATILE = 1 << 1;
        const RESTRICT = 1 << 2;
    }
}

impl fmt::Display for Qualifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (name, flag) in [
            ("const", Qualifiers::CONST),
            ("volatile", Qualifiers::VOLATILE),
            ("restrict", Qualifiers::RESTRICT),
        ] {
            if self.contains(flag) {
                if !first {
                    f.write_str(" ")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        Ok(())
    }
}

/// Declaration order matches [`BuiltinTy::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum BuiltinTy {
    Void,
    Char,
    SChar,
    UChar,
    Short,
    UShort,
    Int,
    UInt,
    Long,
    ULong,
    LongLong,
    ULongLong,
    Float,
    Double,
    LongDouble,
    Bool,
}

impl BuiltinTy {
    pub const ALL: [BuiltinTy; 16] = [
        BuiltinTy::Void,
        BuiltinTy::Char,
        BuiltinTy::SChar,
        BuiltinTy::UChar,
        BuiltinTy::Short,
        BuiltinTy::UShort,
        BuiltinTy::Int,
        BuiltinTy::UInt,
        BuiltinTy::Long,
        BuiltinTy::ULong,
        BuiltinTy::LongLong,
        BuiltinTy::ULongLong,
        BuiltinTy::Float,
        BuiltinTy::Double,
        BuiltinTy::LongDouble,
        BuiltinTy::Bool,
    ];

    pub fn is_integer(self) -> bool {
        use BuiltinTy::*;
        matches!(
            self,
            Char | SChar
                | UChar
                | Short
                | UShort
                | Int
                | UInt
                | Long
                | ULong
                | LongLong
                | ULongLong
                | Bool
        )
    }

    pub fn is_floating(self) -> bool {
        matches!(
            self,
            BuiltinTy::Float | BuiltinTy::Double | BuiltinTy::LongDouble
        )
    }

    pub fn as_str(self) -> &'static str {
        use BuiltinTy::*;
        match self {
            Void => "void",
            Char => "char",
            SChar => "signed char",
            UChar => "unsigned char",
            Short => "short",
            UShort => "unsigned short",
            Int => "int",
            UInt => "unsigned int",
            Long => "long",
            ULong => "unsigned long",
            LongLong => "long long",
            ULongLong => "unsigned long long",
            Float => "float",
            Double => "double",
            LongDouble => "long double",
            Bool => "_Bool",
        }
    }
}

#[derive(Debug)]
pub struct Ty<'cx> {
    pub id: TyID,
    pub kind: TyKind<'cx>,
}

#[derive(Debug, Clone, Copy)]
pub enum TyKind<'cx> {
    Builtin(BuiltinTy),
    Pointer(QualType<'cx>),
    Array { elem: QualType<'cx>, len: Option<u64> },
    Atomic(QualType<'cx>),
}

/// A type handle paired with its qualifiers. Two qualified types are equal
/// when they refer to the same interned type and carry the same qualifiers.
#[derive(Debug, Clone, Copy)]
pub struct QualType<'cx> {
    pub ty: &'cx Ty<'cx>,
    pub quals: Qualifiers,
}

impl PartialEq for QualType<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.ty.id == other.ty.id && self.quals == other.quals
    }
}

impl Eq for QualType<'_> {}

impl std::hash::Hash for QualType<'_> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.ty.id.hash(state);
        self.quals.hash(state);
    }
}

impl<'cx> QualType<'cx> {
    pub fn new(ty: &'cx Ty<'cx>, quals: Qualifiers) -> Self {
        Self { ty, quals }
    }

    pub fn kind(&self) -> TyKind<'cx> {
        self.ty.kind
    }

    pub fn is_const(&self) -> bool {
        self.quals.contains(Qualifiers::CONST)
    }

    pub fn is_volatile(&self) -> bool {
        self.quals.contains(Qualifiers::VOLATILE)
    }

    pub fn with_const(self) -> Self {
        self.with_quals(Qualifiers::CONST)
    }

    pub fn with_quals(self, quals: Qualifiers) -> Self {
        Self {
            ty: self.ty,
            quals: self.quals | quals,
        }
    }

    pub fn unqualified(self) -> Self {
        Self {
            ty: self.ty,
            quals: Qualifiers::empty(),
        }
    }

    /// Pointee type if this is a pointer.
    pub fn as_pointer(&self) -> Option<QualType<'cx>> {
        match self.ty.kind {
            TyKind::Pointer(pointee) => Some(pointee),
            _ => None,
        }
    }

    pub fn is_pointer(&self) -> bool {
        self.as_pointer().is_some()
    }

    pub fn as_array(&self) -> Option<(QualType<'cx>, Option<u64>)> {
        match self.ty.kind {
            TyKind::Array { elem, len } => Some((elem, len)),
            _ => None,
        }
    }

    pub fn is_array(&self) -> bool {
        self.as_array().is_some()
    }

    pub fn is_atomic(&self) -> bool {
        matches!(self.ty.kind, TyKind::Atomic(_))
    }

    pub fn as_builtin(&self) -> Option<BuiltinTy> {
        match self.ty.kind {
            TyKind::Builtin(b) => Some(b),
            _ => None,
        }
    }

    pub fn is_integer(&self) -> bool {
        self.as_builtin().is_some_and(BuiltinTy::is_integer)
    }
}

impl fmt::Display for QualType<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.ty.kind {
            TyKind::Builtin(b) => {
                if !self.quals.is_empty() {
                    write!(f, "{} ", self.quals)?;
                }
                f.write_str(b.as_str())
            }
            TyKind::Pointer(pointee) => {
                write!(f, "{pointee} *")?;
                if !self.quals.is_empty() {
                    write!(f, "{}", self.quals)?;
                }
                Ok(())
            }
            TyKind::Array { elem, len } => match len {
                Some(len) => write!(f, "{elem} [{len}]"),
                None => write!(f, "{elem} []"),
            },
            TyKind::Atomic(inner) => {
                if !self.quals.is_empty() {
                    write!(f, "{} ", self.quals)?;
                }
                write!(f, "_Atomic({inner})")
            }
        }
    }
}
