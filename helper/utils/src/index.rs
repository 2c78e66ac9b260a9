#[macro_export]
macro_rules! index {
    ($name: ident) => {
        #[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
        pub struct $name(u32);
        impl $name {
            #[allow(dead_code)]
            pub(crate) const fn new(raw: u32) -> $name {
                $name(raw)
            }
            pub const fn root() -> $name {
                $name(0)
            }
            pub const fn next(&self) -> $name {
                $name(self.0 + 1)
            }
            pub const fn as_u32(&self) -> u32 {
                self.0
            }
            pub const fn as_usize(&self) -> usize {
                self.0 as usize
            }
        }
    };
}
