#[derive(Debug, Clone, Copy, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum RawStandard {
    #[serde(alias = "c89", alias = "c90")]
    C89,
    #[serde(alias = "c99")]
    C99,
    #[serde(alias = "c11")]
    C11,
    #[default]
    #[serde(alias = "c17", alias = "c18")]
    C17,
    #[serde(alias = "c23", alias = "c2x")]
    C23,
}

/// Language revision the front end accepts. Ordered oldest first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Standard {
    C89,
    C99,
    C11,
    #[default]
    C17,
    C23,
}

impl From<RawStandard> for Standard {
    fn from(val: RawStandard) -> Self {
        match val {
            RawStandard::C89 => Standard::C89,
            RawStandard::C99 => Standard::C99,
            RawStandard::C11 => Standard::C11,
            RawStandard::C17 => Standard::C17,
            RawStandard::C23 => Standard::C23,
        }
    }
}
