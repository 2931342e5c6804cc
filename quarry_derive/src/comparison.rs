use heck::ToSnakeCase;
use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::{Attribute, Data, DeriveInput, Error, Fields, LitStr, parse_macro_input};

pub fn comparison_methods_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let enum_name = &input.ident;

    let variants = match &input.data {
        Data::Enum(data) => &data.variants,
        _ => {
            return Error::new_spanned(
                &input.ident,
                "`#[derive(ComparisonMethods)]` can only be applied to enums",
            )
            .to_compile_error()
            .into();
        }
    };

    let mut methods = Vec::with_capacity(variants.len());
    for variant in variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Error::new_spanned(&variant.ident, "only unit variants are supported")
                .to_compile_error()
                .into();
        }

        let symbol = match sql_symbol(&variant.attrs) {
            Ok(symbol) => symbol,
            Err(err) => return err.to_compile_error().into(),
        };

        let var_name = &variant.ident;
        let snake = var_name.to_string().to_snake_case();
        let where_fn = format_ident!("where_{}", snake);
        let or_where_fn = format_ident!("or_where_{}", snake);

        let (and_doc, or_doc) = match symbol {
            Some(symbol) => (
                format!("AND-appends `column {symbol} value`."),
                format!("OR-appends `column {symbol} value`."),
            ),
            None => (
                format!("AND-appends a `{enum_name}::{var_name}` comparison."),
                format!("OR-appends a `{enum_name}::{var_name}` comparison."),
            ),
        };

        methods.push(quote! {
            #[doc = #and_doc]
            fn #where_fn<C, V>(&mut self, column: C, value: V) -> &mut Self
            where
                C: crate::IntoRaw,
                V: crate::IntoValue,
            {
                self.where_comparison(
                    crate::expr::Conjunction::And,
                    column,
                    #enum_name::#var_name,
                    value,
                )
            }

            #[doc = #or_doc]
            fn #or_where_fn<C, V>(&mut self, column: C, value: V) -> &mut Self
            where
                C: crate::IntoRaw,
                V: crate::IntoValue,
            {
                self.where_comparison(
                    crate::expr::Conjunction::Or,
                    column,
                    #enum_name::#var_name,
                    value,
                )
            }
        });
    }

    let trait_name = format_ident!("{}Conditions", enum_name);
    let trait_doc = format!("Shorthand filters generated for every [`{enum_name}`] variant.");

    quote! {
        #[doc = #trait_doc]
        pub trait #trait_name: crate::Conditional {
            #(#methods)*
        }

        impl<T: crate::Conditional + ?Sized> #trait_name for T {}
    }
    .into()
}

/// Reads `#[comparison(sql = "...")]`, used only for the generated docs.
fn sql_symbol(attrs: &[Attribute]) -> syn::Result<Option<String>> {
    let mut symbol = None;
    for attr in attrs {
        if !attr.path().is_ident("comparison") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("sql") {
                let lit: LitStr = meta.value()?.parse()?;
                symbol = Some(lit.value());
                Ok(())
            } else {
                Err(meta.error("unsupported comparison attribute"))
            }
        })?;
    }
    Ok(symbol)
}
