use super::derived_traits;
use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::parse::Parser;
use syn::punctuated::Punctuated;
use syn::{Attribute, Expr, ItemFn, ItemStruct, Lit, LitStr, Meta, MetaNameValue, Token};

const DEFAULT_RENAME: &str = "camelCase";

#[derive(Default)]
struct ModelArgs {
    rename_all: Option<LitStr>,
    deny_unknown_fields: Option<bool>,
}

#[derive(Default)]
struct ExistingSerde {
    rename_all: Option<LitStr>,
    deny_unknown_fields: bool,
}

pub fn expand_api_model(args: TokenStream, input: ItemStruct) -> TokenStream {
    match model_attributes(args, &input) {
        Ok(attrs) => quote! {
            #attrs
            #input
        },
        Err(err) => err.to_compile_error(),
    }
}

pub fn expand_api_handler(args: TokenStream, input: ItemFn) -> TokenStream {
    let ItemFn { attrs, vis, sig, block } = input;

    quote! {
        #(#attrs)*
        #[allow(clippy::unused_async)]
        #[cfg_attr(feature = "server", ::utoipa::path(#args))]
        #vis #sig #block
    }
}

fn model_attributes(args: TokenStream, input: &ItemStruct) -> syn::Result<TokenStream> {
    let args = parse_model_args(args)?;
    let serde = existing_serde(&input.attrs)?;
    let derives = derived_traits(&input.attrs);

    let mut missing = Vec::new();
    if !derives.contains("Debug") {
        missing.push(quote! { Debug });
    }
    if !derives.contains("Serialize") {
        missing.push(quote! { ::serde::Serialize });
    }
    if !derives.contains("Deserialize") {
        missing.push(quote! { ::serde::Deserialize });
    }
    let derive = if missing.is_empty() { quote! {} } else { quote! { #[derive(#(#missing),*)] } };

    let schema = if derives.contains("ToSchema") {
        quote! {}
    } else {
        quote! { #[cfg_attr(feature = "server", derive(::utoipa::ToSchema))] }
    };

    let wanted = args.rename_all.unwrap_or_else(|| LitStr::new(DEFAULT_RENAME, Span::call_site()));
    let rename = match &serde.rename_all {
        Some(existing) if existing.value() != wanted.value() => {
            return Err(syn::Error::new_spanned(
                existing,
                "serde rename_all conflicts with api_model(rename_all = \"...\")",
            ));
        }
        Some(_) => quote! {},
        None => quote! { #[serde(rename_all = #wanted)] },
    };

    let deny = args.deny_unknown_fields.unwrap_or(true);
    let strict = match (serde.deny_unknown_fields, deny) {
        (true, false) => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "deny_unknown_fields is already set via serde; remove it before disabling",
            ));
        }
        (false, true) => quote! { #[serde(deny_unknown_fields)] },
        _ => quote! {},
    };

    Ok(quote! {
        #derive
        #schema
        #rename
        #strict
    })
}

fn parse_model_args(args: TokenStream) -> syn::Result<ModelArgs> {
    let metas = Punctuated::<Meta, Token![,]>::parse_terminated.parse2(args)?;
    let mut parsed = ModelArgs::default();

    for meta in metas {
        let Meta::NameValue(pair) = meta else {
            return Err(syn::Error::new_spanned(
                meta,
                "expected name-value arguments like `rename_all = \"...\"`",
            ));
        };

        if pair.path.is_ident("rename_all") {
            let Lit::Str(value) = literal(&pair)? else {
                return Err(syn::Error::new_spanned(&pair.value, "rename_all must be a string"));
            };
            assign_once(&mut parsed.rename_all, value.clone(), &pair)?;
        } else if pair.path.is_ident("deny_unknown_fields") {
            let Lit::Bool(value) = literal(&pair)? else {
                return Err(syn::Error::new_spanned(
                    &pair.value,
                    "deny_unknown_fields must be a boolean",
                ));
            };
            assign_once(&mut parsed.deny_unknown_fields, value.value, &pair)?;
        } else {
            return Err(syn::Error::new_spanned(
                &pair.path,
                "unsupported argument; expected rename_all or deny_unknown_fields",
            ));
        }
    }

    Ok(parsed)
}

fn literal(pair: &MetaNameValue) -> syn::Result<&Lit> {
    match &pair.value {
        Expr::Lit(expr) => Ok(&expr.lit),
        other => Err(syn::Error::new_spanned(other, "expected a literal value")),
    }
}

fn assign_once<T>(slot: &mut Option<T>, value: T, pair: &MetaNameValue) -> syn::Result<()> {
    if slot.is_some() {
        return Err(syn::Error::new_spanned(pair, "duplicate argument"));
    }
    *slot = Some(value);
    Ok(())
}

fn existing_serde(attrs: &[Attribute]) -> syn::Result<ExistingSerde> {
    let mut found = ExistingSerde::default();

    for attr in attrs.iter().filter(|attr| attr.path().is_ident("serde")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename_all") {
                found.rename_all = Some(meta.value()?.parse()?);
            } else if meta.path.is_ident("deny_unknown_fields") {
                found.deny_unknown_fields = true;
            } else if meta.input.peek(Token![=]) {
                // Leave other serde options untouched.
                let _: Expr = meta.value()?.parse()?;
            }
            Ok(())
        })?;
    }

    Ok(found)
}
