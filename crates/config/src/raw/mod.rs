use super::RawStandard;

macro_rules! with_option {
    ($s: ident, $(($option: ident, $ty: ty)),* $(,)?) => {
        #[derive(Debug, Default, Clone, serde::Deserialize, serde::Serialize)]
        #[serde(rename_all = "camelCase")]
        pub struct $s {
            $(pub(super) $option: Option<$ty>,)*
        }
        impl $s {
            paste::paste! {
                $(
                    pub fn [<with_ $option>](mut self, $option: $ty) -> Self {
                        self.$option = Some($option);
                        self
                    }
                    pub fn [<with_ $option _if_none>](mut self, $option: $ty) -> Self {
                        if self.$option.is_none() {
                            self.$option = Some($option);
                        }
                        self
                    }
                )*
            }
        }
    };
}

with_option!(
    RawLangOptions,
    (std, RawStandard),
    (warn_multichar, bool),
);

impl RawLangOptions {
    pub fn normalize(self) -> super::LangOptions {
        use super::LangOptionFlags;
        let std = self.std.unwrap_or_default().into();
        let mut flags = LangOptionFlags::empty();
        flags.set(
            LangOptionFlags::WARN_MULTICHAR,
            self.warn_multichar.unwrap_or(true),
        );
        super::LangOptions { std, flags }
    }
}
