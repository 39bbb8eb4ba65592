//! Model catalog data for the sharded build-script generator

/// Built-in catalogs and their output script lists
pub mod catalogs;
/// Descriptor and catalog types
pub mod types;

pub use types::{Catalog, ModelDescriptor};
