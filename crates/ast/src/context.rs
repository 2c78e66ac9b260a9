use cci_arena::Bump;
use cci_span::{ModuleID, Span};
use rustc_hash::FxHashMap;

use super::{BuiltinTy, Expr, ExprID, QualType, Qualifiers, Ty, TyID, TyKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum DerivedTy {
    Pointer(TyID, Qualifiers),
    Array(TyID, Qualifiers, Option<u64>),
    Atomic(TyID, Qualifiers),
}

/// Owns every node and type of one compilation unit. Nodes and types live in
/// `arena` and are reachable by id through the tables kept here.
pub struct AstContext<'cx> {
    pub(crate) arena: &'cx Bump,
    pub(crate) module: ModuleID,
    pub(crate) nodes: Vec<&'cx Expr<'cx>>,
    builtins: [&'cx Ty<'cx>; BuiltinTy::ALL.len()],
    derived: FxHashMap<DerivedTy, &'cx Ty<'cx>>,
    next_ty_id: TyID,
}

impl<'cx> AstContext<'cx> {
    pub fn new(arena: &'cx Bump, module: ModuleID) -> Self {
        let mut next_ty_id = TyID::root();
        let builtins = BuiltinTy::ALL.map(|b| {
            let id = next_ty_id;
            next_ty_id = next_ty_id.next();
            let ty: &'cx Ty<'cx> = cci_arena::alloc_no_drop(
                arena,
                Ty {
                    id,
                    kind: TyKind::Builtin(b),
                },
            );
            ty
        });
        Self {
            arena,
            module,
            nodes: Vec::with_capacity(256),
            builtins,
            derived: cci_utils::fx_hashmap_with_capacity(32),
            next_ty_id,
        }
    }

    #[inline]
    pub fn module(&self) -> ModuleID {
        self.module
    }

    pub fn expr(&self, id: ExprID) -> &'cx Expr<'cx> {
        self.nodes[id.as_usize()]
    }

    pub fn exprs(&self) -> impl Iterator<Item = &'cx Expr<'cx>> + '_ {
        self.nodes.iter().copied()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Span inside this context's module.
    pub fn span(&self, lo: u32, hi: u32) -> Span {
        Span::new(lo, hi, self.module)
    }

    pub fn builtin(&self, b: BuiltinTy) -> QualType<'cx> {
        let ty = self.builtins[b as usize];
        debug_assert!(matches!(ty.kind, TyKind::Builtin(x) if x == b));
        QualType::new(ty, Qualifiers::empty())
    }

    pub fn pointer_to(&mut self, pointee: QualType<'cx>) -> QualType<'cx> {
        let key = DerivedTy::Pointer(pointee.ty.id, pointee.quals);
        self.intern(key, TyKind::Pointer(pointee))
    }

    pub fn array_of(&mut self, elem: QualType<'cx>, len: Option<u64>) -> QualType<'cx> {
        let key = DerivedTy::Array(elem.ty.id, elem.quals, len);
        self.intern(key, TyKind::Array { elem, len })
    }

    pub fn atomic_of(&mut self, inner: QualType<'cx>) -> QualType<'cx> {
        let key = DerivedTy::Atomic(inner.ty.id, inner.quals);
        self.intern(key, TyKind::Atomic(inner))
    }

    fn intern(&mut self, key: DerivedTy, kind: TyKind<'cx>) -> QualType<'cx> {
        if let Some(&ty) = self.derived.get(&key) {
            return QualType::new(ty, Qualifiers::empty());
        }
        let id = self.next_ty_id;
        self.next_ty_id = id.next();
        let ty: &'cx Ty<'cx> = cci_arena::alloc_no_drop(self.arena, Ty { id, kind });
        self.derived.insert(key, ty);
        QualType::new(ty, Qualifiers::empty())
    }

    pub(crate) fn next_expr_id(&self) -> ExprID {
        ExprID::new(self.nodes.len() as u32)
    }
}
