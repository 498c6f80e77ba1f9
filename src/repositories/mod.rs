//! Data access layer over the collection store.
//!
//! Repositories are resolved from the application context with the
//! `FromContext` derive macro and translate store outcomes into `AppError`s.

mod record;

pub use record::{Lookup, RecordRepository};
