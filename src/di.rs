//! Dependency injection infrastructure.
//!
//! `FromRef<T>` extracts a value from `&T`. The root [`Context`](crate::context::Context)
//! derives `Context` so each of its fields is extractable, and repositories
//! derive `FromContext` so they are assembled from those fields.
//!
//! ```ignore
//! let ctx = Context::new(store);
//! let records = RecordRepository::from_ref(&ctx);
//! ```

/// Trait for extracting a value from a reference to another type.
pub trait FromRef<T> {
    fn from_ref(input: &T) -> Self;
}

/// Blanket implementation: any Clone type can be extracted from itself.
impl<T: Clone> FromRef<T> for T {
    fn from_ref(input: &T) -> Self {
        input.clone()
    }
}

// Re-export derive macros
pub use di_macros::{Context, FromContext};
