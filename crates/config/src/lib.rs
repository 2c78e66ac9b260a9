mod normalized;
mod options;
mod raw;

pub use normalized::{LangOptionFlags, LangOptions};
pub use options::{RawStandard, Standard};
pub use raw::RawLangOptions;
