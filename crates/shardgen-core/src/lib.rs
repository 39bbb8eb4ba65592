//! # Shardgen Core
//!
//! Deterministic partitioning of ASR model catalogs across parallel CI
//! runners, plus rendering of the per-shard build-script templates.
//!
//! ## Example
//!
//! ```rust
//! use shardgen_core::{model::catalogs, partition, ShardSpec};
//!
//! fn main() -> shardgen_core::ShardgenResult<()> {
//!     let catalog = catalogs::vad_asr();
//!     let spec = ShardSpec::new(2, 0)?;
//!     let assignment = partition(&catalog, &spec)?;
//!     println!("{}", assignment.summary());
//!     Ok(())
//! }
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod model;
pub mod partition;
pub mod render;

// Re-export main types for convenience
pub use error::{ShardgenError, ShardgenResult};
pub use model::{Catalog, ModelDescriptor};
pub use partition::{partition, ShardAssignment, ShardSpec};
pub use render::{render_script, render_scripts, render_str, TEMPLATE_SUFFIX};

/// Version information for the shardgen-core crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
