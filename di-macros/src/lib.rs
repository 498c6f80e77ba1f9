//! Compile-time dependency injection macros for curriculum-mcp.
//!
//! - `#[derive(Context)]` makes every field of the root context extractable
//! - `#[derive(FromContext)]` builds a type by resolving each of its fields
//!
//! Generated code refers to `crate::FromRef`, so the consuming crate must
//! define or re-export that trait at its root.

use proc_macro::TokenStream;

mod context;
mod fields;
mod from_context;

/// Derive macro for the DI root.
///
/// Generates `impl FromRef<Ctx> for FieldType` for every field, cloning the
/// field out of the context. Fields must be `Clone` and their types distinct.
///
/// ```ignore
/// #[derive(Context, Clone)]
/// pub struct Context {
///     pub store: Arc<Store>,
///     pub config: Arc<Config>,
/// }
/// // impl FromRef<Context> for Arc<Store> { ... }
/// // impl FromRef<Context> for Arc<Config> { ... }
/// ```
#[proc_macro_derive(Context)]
pub fn derive_context(input: TokenStream) -> TokenStream {
    context::derive_context_impl(input)
}

/// Derive macro for types resolved from a context.
///
/// Generates `impl FromRef<Context> for Type`, resolving each field with
/// `FromRef::from_ref(ctx)`. Override the context type with
/// `#[from_context(Context = "MyContext")]`.
///
/// ```ignore
/// #[derive(FromContext, Clone)]
/// pub struct RecordRepository {
///     store: Arc<Store>,
/// }
/// ```
#[proc_macro_derive(FromContext, attributes(from_context))]
pub fn derive_from_context(input: TokenStream) -> TokenStream {
    from_context::derive_from_context_impl(input)
}
