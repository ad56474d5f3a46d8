#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Attribute macros shared by every CorBas crate: the runtime entry point,
//! API models and handlers, error enums and feature slices.
//!
//! Examples below are `ignore`d because a proc-macro crate cannot expand its
//! own macros; the consuming crates carry the compiled examples and tests.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemFn, ItemStruct, parse_macro_input};

/// Turns an `async fn main` into a synchronous `main` that builds a
/// `corbas_runtime` Tokio runtime and blocks on the body.
///
/// Accepted profiles: `high_performance`, `memory_efficient`, `default`
/// (also used when no argument is given). The function must return a `Result`.
///
/// ```rust,ignore
/// #[corbas_runtime::main(high_performance)]
/// async fn main() -> anyhow::Result<()> {
///     Ok(())
/// }
/// ```
#[proc_macro_attribute]
pub fn main(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::runtime::expand_main(args.into(), input).into()
}

/// Declares a request/response DTO.
///
/// Adds `Debug`, `Serialize` and `Deserialize` when missing, derives
/// `utoipa::ToSchema` under the `server` feature and applies the serde policy:
/// `rename_all = "camelCase"` and `deny_unknown_fields` unless overridden.
///
/// ```rust,ignore
/// #[api_model(rename_all = "snake_case", deny_unknown_fields = false)]
/// pub struct AnalyzeRequest {
///     pub text: Option<String>,
///     pub corpus_name: Option<String>,
/// }
/// ```
#[proc_macro_attribute]
pub fn api_model(attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::api::expand_api_model(attr.into(), input).into()
}

/// Registers an Axum handler with `utoipa::path` (under the `server` feature).
///
/// Arguments are forwarded verbatim to `utoipa::path`.
///
/// ```rust,ignore
/// #[api_handler(
///     post,
///     path = "/analyze",
///     request_body = AnalyzeRequest,
///     responses((status = OK, body = AnalyzeResponse)),
///     tag = ANALYSIS_TAG,
/// )]
/// pub async fn analyze_handler() -> impl IntoResponse { /* ... */ }
/// ```
#[proc_macro_attribute]
pub fn api_handler(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::api::expand_api_handler(args.into(), input).into()
}

/// Turns an enum into the crate's error type.
///
/// * Derives `Debug` and `thiserror::Error` when missing.
/// * Generates a `<Name>Ext` trait with `.context(...)` for `Result<T, Name>`
///   and for `Result<T, Source>` of every variant with a source field.
/// * Generates `From<Source>` for those variants.
/// * Generates `From<&'static str>` and `From<String>` when an `Internal`
///   variant exists.
///
/// Every variant must use named fields. A variant with a source (a field
/// named `source`, or marked `#[source]`/`#[from]`) must also carry
/// `context: Option<Cow<'static, str>>`.
///
/// ```rust,ignore
/// #[corbas_error]
/// pub enum LexiconError {
///     #[error("Lexicon I/O error{}: {source}", format_context(.context))]
///     Io { source: std::io::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal lexicon error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// let file = File::open(path).context("Opening lexicon")?;
/// ```
#[proc_macro_attribute]
pub fn corbas_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}

/// Declares a feature slice handle.
///
/// The annotated struct becomes `<Name>Inner`; `<Name>` is a cheap-to-clone
/// `Arc` wrapper with `Deref` to the inner state that implements
/// `corbas_kernel::domain::registry::FeatureSlice`.
///
/// ```rust,ignore
/// #[corbas_derive::corbas_slice]
/// pub struct Analysis {
///     pub tagger: SemanticTagger,
/// }
///
/// let slice = Analysis::new(AnalysisInner { tagger });
/// ```
#[proc_macro_attribute]
pub fn corbas_slice(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::slice::expand_slice(input).into()
}
