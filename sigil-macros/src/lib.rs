//! Procedural macros for Sigil.
//!
//! - `#[directive]` - turns a processing function into a `Directive` implementation

use proc_macro::TokenStream;

mod directive;

/// Turns a processing function into a unit struct implementing `Directive`.
///
/// The function takes a `ProcessingContext<'_, Node>` and returns
/// `Result<UpdateHandle<Node>, BoxError>`. Exactly one of `attribute = "..."`
/// (exact name) or `matches = <expr>` (any `Fn(&str) -> bool`) selects the
/// attributes it claims. `name = "..."` renames the generated struct.
///
/// ```rust,ignore
/// #[sigil::directive(attribute = "#focus")]
/// fn focus(ctx: ProcessingContext<'_, Element>) -> Result<UpdateHandle<Element>, BoxError> {
///     ctx.target.focus();
///     Ok(UpdateHandle::noop())
/// }
///
/// let registry = RegistryBuilder::new().add(focus).build();
/// ```
#[proc_macro_attribute]
pub fn directive(attr: TokenStream, item: TokenStream) -> TokenStream {
    directive::directive_impl(attr, item)
}
