//! Deterministic catalog partitioning across parallel CI runners.
//!
//! Every runner computes its own assignment independently from the same
//! catalog, so correctness of the overall scheme rests entirely on
//! [`partition`] being a pure function of `(catalog, total, index)`: the
//! union of all shards reconstructs the catalog with no item dropped or
//! duplicated.

use crate::error::{ShardgenError, ShardgenResult};
use crate::model::{Catalog, ModelDescriptor};

/// Which shard of how many this invocation computes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShardSpec {
    /// Total number of shards (runners)
    pub total: usize,
    /// Index of this shard, in `[0, total)`
    pub index: usize,
}

impl ShardSpec {
    /// Create a validated shard spec.
    ///
    /// Fails with an invalid-input error unless `total >= 1` and
    /// `index < total`.
    pub fn new(total: usize, index: usize) -> ShardgenResult<Self> {
        if total == 0 {
            return Err(ShardgenError::invalid_input("total shards must be >= 1"));
        }
        if index >= total {
            return Err(ShardgenError::invalid_input(format!(
                "shard index {index} out of range for total {total}"
            )));
        }
        Ok(Self { total, index })
    }
}

/// The sub-list of the catalog assigned to one shard, plus the range
/// bookkeeping reported on the console.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShardAssignment {
    /// Assigned descriptors, in catalog order
    pub models: Vec<ModelDescriptor>,
    /// Index of this shard
    pub shard_index: usize,
    /// Total number of shards
    pub total_shards: usize,
    /// Start of the base slice (inclusive)
    pub start: usize,
    /// End of the base slice (exclusive)
    pub end: usize,
    /// Catalog size the assignment was computed from
    pub catalog_len: usize,
    /// Absolute catalog index of the appended remainder item, if any
    pub extra_index: Option<usize>,
}

impl ShardAssignment {
    /// Progress line in the `index/total: start-end/len` format
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "{}/{}: {}-{}/{}",
            self.shard_index, self.total_shards, self.start, self.end, self.catalog_len
        )
    }
}

/// Compute the contiguous sub-list of `catalog` assigned to the shard
/// described by `spec`.
///
/// The catalog is split into `total` base slices of `len / total` items in
/// original order. The `len % total` leftover items are handed out one each
/// to the lowest-indexed shards.
///
/// Fails with a configuration error when more shards are requested than
/// there are catalog items (the base slice would be empty).
pub fn partition(catalog: &Catalog, spec: &ShardSpec) -> ShardgenResult<ShardAssignment> {
    let num_models = catalog.len();
    let base = num_models / spec.total;
    if base == 0 {
        return Err(ShardgenError::configuration(format!(
            "num_models: {num_models}, num_runners: {}",
            spec.total
        )));
    }

    let start = spec.index * base;
    let end = start + base;
    let remainder = num_models - spec.total * base;

    let mut models: Vec<ModelDescriptor> = catalog.models[start..end].to_vec();
    let extra_index = if spec.index < remainder {
        let absolute = spec.total * base + spec.index;
        models.push(catalog.models[absolute].clone());
        Some(absolute)
    } else {
        None
    };

    tracing::debug!(
        shard = spec.index,
        total = spec.total,
        start,
        end,
        extra = ?extra_index,
        "computed shard assignment"
    );

    Ok(ShardAssignment {
        models,
        shard_index: spec.index,
        total_shards: spec.total,
        start,
        end,
        catalog_len: num_models,
        extra_index,
    })
}
