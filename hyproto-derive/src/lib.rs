use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, Path, parse_macro_input, parse_quote};

/// Generate the `Callable` impl that classifies a type as a primitive transform.
///
/// The type still needs its own `Transform` impl(s).
#[proc_macro_derive(PrimitiveTransform)]
pub fn derive_primitive_transform(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    callable_impl(&input, parse_quote!(::hyproto::transform::ViaTransform))
}

/// Generate the `Callable` impl that classifies a type as a function object.
///
/// The type still needs its own `Apply` impl(s), one per accepted argument tuple.
#[proc_macro_derive(FunctionObject)]
pub fn derive_function_object(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    callable_impl(&input, parse_quote!(::hyproto::transform::ViaFunction))
}

fn callable_impl(input: &DeriveInput, protocol: Path) -> TokenStream {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let expanded = quote! {
        impl #impl_generics ::hyproto::transform::Callable for #name #ty_generics #where_clause {
            type Protocol = #protocol;
        }
    };
    TokenStream::from(expanded)
}
