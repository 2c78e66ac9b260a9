use quote::quote;
use syn::{Attribute, DeriveInput, parse_macro_input};

fn find_field_satisfy_attr(
    input: &DeriveInput,
    attr_f: impl Fn(&Attribute) -> bool,
) -> Option<syn::Ident> {
    let syn::Data::Struct(data_struct) = &input.data else {
        return None;
    };
    let syn::Fields::Named(fields_named) = &data_struct.fields else {
        return None;
    };
    fields_named
        .named
        .iter()
        .find(|field| field.attrs.iter().any(&attr_f))
        .and_then(|field| field.ident.clone())
}

struct DiagnosticExt {
    name: syn::Ident,
    primary_field_name: syn::Ident,
}

impl DiagnosticExt {
    fn from_derive_input(input: DeriveInput) -> syn::Result<Self> {
        if !matches!(input.data, syn::Data::Struct(_)) {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "`DiagnosticExt` can only be derived for structs.",
            ));
        }
        let primary_field_name = find_field_satisfy_attr(&input, |attr| {
            attr.meta.require_list().is_ok_and(|list| {
                list.path.is_ident("label") && list.tokens.to_string() == "primary"
            })
        })
        .ok_or_else(|| syn::Error::new_spanned(&input.ident, "`#[label(primary)]` not found."))?;
        Ok(Self {
            name: input.ident,
            primary_field_name,
        })
    }

    fn r#gen(self) -> proc_macro2::TokenStream {
        let Self {
            name,
            primary_field_name,
        } = self;
        quote! {
            impl ::cci_errors::diag_ext::DiagnosticExt for #name {
                fn module_id(&self) -> ::cci_span::ModuleID {
                    self.#primary_field_name.module
                }

                fn primary_span(&self) -> ::cci_span::Span {
                    self.#primary_field_name
                }
            }
        }
    }
}

#[proc_macro_derive(DiagnosticExt, attributes(label))]
pub fn derive_diagnostic_ext(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match DiagnosticExt::from_derive_input(input) {
        Ok(ext) => proc_macro::TokenStream::from(ext.r#gen()),
        Err(err) => err.to_compile_error().into(),
    }
}
