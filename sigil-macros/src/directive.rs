//! Directive-related macros.
//!
//! This module contains:
//! - `#[directive]` - Attribute macro for creating Directive implementations from functions

use proc_macro::TokenStream;
use quote::quote;
use syn::{
    Expr, FnArg, GenericArgument, Ident, ItemFn, LitStr, PathArguments, Token, Type,
    parse::Parse, parse_macro_input,
};

/// Arguments for the `#[directive]` macro.
pub(crate) struct DirectiveArgs {
    pub name: Option<LitStr>,
    pub attribute: Option<LitStr>,
    pub matches: Option<Expr>,
}

impl Parse for DirectiveArgs {
    fn parse(input: syn::parse::ParseStream) -> syn::Result<Self> {
        let mut name = None;
        let mut attribute = None;
        let mut matches = None;

        while !input.is_empty() {
            let ident: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            match ident.to_string().as_str() {
                "name" => {
                    name = Some(input.parse()?);
                }
                "attribute" => {
                    attribute = Some(input.parse()?);
                }
                "matches" => {
                    matches = Some(input.parse()?);
                }
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown attribute: {}", other),
                    ));
                }
            }

            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        Ok(DirectiveArgs {
            name,
            attribute,
            matches,
        })
    }
}

/// Pulls the node type out of `ProcessingContext<'_, Node>`.
fn node_type(ty: &Type) -> Option<&Type> {
    let Type::Path(type_path) = ty else {
        return None;
    };
    let segment = type_path.path.segments.last()?;
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    args.args.iter().rev().find_map(|arg| match arg {
        GenericArgument::Type(ty) => Some(ty),
        _ => None,
    })
}

/// Parses `name = "..."` into the identifier of the generated struct.
fn struct_ident(lit: &LitStr) -> syn::Result<Ident> {
    syn::parse_str::<Ident>(&lit.value()).map_err(|_| {
        syn::Error::new(
            lit.span(),
            format!("`{}` is not a valid struct name", lit.value()),
        )
    })
}

/// Implementation of the `#[directive]` macro.
pub fn directive_impl(attr: TokenStream, item: TokenStream) -> TokenStream {
    let args = parse_macro_input!(attr as DirectiveArgs);
    let input = parse_macro_input!(item as ItemFn);

    let fn_name = &input.sig.ident;
    let fn_vis = &input.vis;
    let fn_block = &input.block;

    if let Some(asyncness) = &input.sig.asyncness {
        return syn::Error::new_spanned(asyncness, "Directive function must not be async")
            .to_compile_error()
            .into();
    }

    let match_body = match (&args.attribute, &args.matches) {
        (Some(lit), None) => quote! { __attribute == #lit },
        (None, Some(expr)) => quote! { (#expr)(__attribute) },
        _ => {
            return syn::Error::new_spanned(
                &input.sig.ident,
                "Directive needs exactly one of `attribute = \"...\"` or `matches = <expr>`",
            )
            .to_compile_error()
            .into();
        }
    };

    let inputs = &input.sig.inputs;
    let (ctx_pat, ctx_type) = match (inputs.len(), inputs.first()) {
        (1, Some(FnArg::Typed(pat_type))) => (&pat_type.pat, &*pat_type.ty),
        _ => {
            return syn::Error::new_spanned(
                inputs,
                "Directive function must take one argument: fn(ctx: ProcessingContext<'_, Node>)",
            )
            .to_compile_error()
            .into();
        }
    };

    let Some(node_type) = node_type(ctx_type) else {
        return syn::Error::new_spanned(
            ctx_type,
            "Directive argument must be a `ProcessingContext<'_, Node>`",
        )
        .to_compile_error()
        .into();
    };

    let struct_name = match &args.name {
        Some(lit) => match struct_ident(lit) {
            Ok(ident) => ident,
            Err(err) => return err.to_compile_error().into(),
        },
        None => fn_name.clone(),
    };
    let directive_name = fn_name.to_string();

    let expanded = quote! {
        #[allow(non_camel_case_types)]
        #[derive(Clone, Copy, Debug, Default)]
        #[doc = concat!("Auto-generated Directive from `#[sigil::directive]` on `", stringify!(#fn_name), "`")]
        #fn_vis struct #struct_name;

        impl ::sigil::Directive<#node_type> for #struct_name {
            fn name(&self) -> &str {
                #directive_name
            }

            fn matches(&self, __attribute: &str) -> bool {
                #match_body
            }

            fn process(
                &self,
                #ctx_pat: #ctx_type,
            ) -> ::core::result::Result<::sigil::UpdateHandle<#node_type>, ::sigil::BoxError> #fn_block
        }
    };

    TokenStream::from(expanded)
}
