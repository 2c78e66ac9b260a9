use std::sync::Arc;

cci_utils::index!(ModuleID);

impl ModuleID {
    pub const DEFAULT: ModuleID = ModuleID(u32::MAX - 1);
}

impl Default for ModuleID {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Byte offset into a module's source buffer.
pub type ByteLoc = u32;

/// Half-open byte range `[lo, hi)` into the source buffer of `module`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Span {
    pub lo: ByteLoc,
    pub hi: ByteLoc,
    pub module: ModuleID,
}

impl Span {
    pub fn new(lo: ByteLoc, hi: ByteLoc, module: ModuleID) -> Self {
        debug_assert!(lo <= hi, "lo: {lo}, hi: {hi}");
        Self { lo, hi, module }
    }

    #[inline]
    pub fn lo(&self) -> ByteLoc {
        self.lo
    }

    #[inline]
    pub fn hi(&self) -> ByteLoc {
        self.hi
    }

    #[inline]
    pub fn len(&self) -> u32 {
        self.hi - self.lo
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lo == self.hi
    }

    pub fn contains(&self, loc: ByteLoc) -> bool {
        self.lo <= loc && loc < self.hi
    }

    /// Smallest span covering both `self` and `other`.
    pub fn to(self, other: Span) -> Span {
        debug_assert_eq!(self.module, other.module);
        Span::new(self.lo.min(other.lo), self.hi.max(other.hi), self.module)
    }

    /// The bytes of `source` this span covers.
    pub fn slice<'s>(&self, source: &'s str) -> &'s str {
        &source[self.lo as usize..self.hi as usize]
    }
}

impl From<Span> for miette::SourceSpan {
    fn from(value: Span) -> Self {
        let len = value.hi - value.lo;
        (value.lo as usize, len as usize).into()
    }
}

impl std::fmt::Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.module.as_u32(), self.lo, self.hi)
    }
}

#[derive(Debug, Clone)]
pub enum ModulePath {
    Real(std::path::PathBuf),
    Virtual,
}

/// Owns the source buffers of every compilation unit. Buffers are never
/// mutated once added, so tokens and nodes may borrow from them freely.
#[derive(Debug, Default)]
pub struct ModuleArena {
    path_map: Vec<ModulePath>,
    content_map: Vec<Arc<String>>,
}

impl ModuleArena {
    pub fn new(cap: usize) -> Self {
        Self {
            path_map: Vec::with_capacity(cap),
            content_map: Vec::with_capacity(cap),
        }
    }

    pub fn new_module_with_content(&mut self, p: ModulePath, content: String) -> ModuleID {
        let id = ModuleID(self.content_map.len() as u32);
        assert!(id.as_u32() < ModuleID::DEFAULT.as_u32());
        self.content_map.push(Arc::new(content));
        assert_eq!(id.as_usize(), self.path_map.len());
        self.path_map.push(p);
        id
    }

    pub fn get_path(&self, id: ModuleID) -> &ModulePath {
        &self.path_map[id.as_usize()]
    }

    pub fn get_content(&self, id: ModuleID) -> &Arc<String> {
        &self.content_map[id.as_usize()]
    }
}
