use crate::options::Standard;

macro_rules! normalized_option {
    ($s: ident, $(($option: ident, $ty: ty)),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub struct $s {
            $(pub(super) $option: $ty,)*
        }
        impl $s {
            $(pub fn $option(&self) -> & $ty {
                &self.$option
            })*
        }
    };
}

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct LangOptionFlags: u8 {
        const WARN_MULTICHAR = 1 << 0;
    }
}

normalized_option!(LangOptions, (std, Standard), (flags, LangOptionFlags));

impl Default for LangOptions {
    fn default() -> Self {
        crate::RawLangOptions::default().normalize()
    }
}

impl LangOptions {
    #[inline(always)]
    pub const fn warn_multichar(&self) -> bool {
        self.flags.contains(LangOptionFlags::WARN_MULTICHAR)
    }

    /// `u'x'`, `U'x'`, `u"x"`, `U"x"` and `u8"x"`.
    pub fn allows_unicode_literal_prefix(&self) -> bool {
        self.std >= Standard::C11
    }

    /// `u8'x'`.
    pub fn allows_utf8_char_prefix(&self) -> bool {
        self.std >= Standard::C23
    }
}
