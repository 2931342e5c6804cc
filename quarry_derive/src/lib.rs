use proc_macro::TokenStream;

mod comparison;

/// Generates the `where_<op>` / `or_where_<op>` shorthands for every unit
/// variant of a comparison operator enum.
///
/// The methods live on a generated `<Enum>Conditions` trait that is blanket
/// implemented for every `crate::Conditional`.
#[proc_macro_derive(ComparisonMethods, attributes(comparison))]
pub fn comparison_methods(input: TokenStream) -> TokenStream {
    comparison::comparison_methods_impl(input)
}
