//! # Mergington Registry
//!
//! The in-memory store behind extracurricular sign-ups.
//!
//! An [`ActivityRegistry`] is seeded once from a [`Catalog`] and owns every
//! [`Activity`] for the lifetime of the process. Only two operations mutate
//! it, and both check before they act:
//!
//! - **signup** appends an email unless the student is already registered.
//! - **unregister** removes an email only if the student is registered.
//!
//! Any call naming an unknown activity fails with
//! [`RegistryError::NotFound`] and touches nothing.

mod activity;
mod catalog;
mod error;
mod registry;

pub use activity::{Activity, ActivityListing};
pub use catalog::Catalog;
pub use error::{CatalogError, ErrorKind, RegistryError};
pub use registry::ActivityRegistry;
