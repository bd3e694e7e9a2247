mod fjall_store;
mod memory_store;
mod wire;

use std::future::Future;

use anyhow::Result;

pub use fjall_store::FjallStore;
pub use memory_store::MemoryStore;

use crate::graph::Graph;

/// Somewhere to put named graphs.
///
/// Implementations own whatever atomicity holds between separate calls;
/// callers get none.
pub trait Store {
    /// Persists `graph` as a new resource at `iri`.
    fn add(&self, iri: &str, graph: &Graph) -> impl Future<Output = Result<()>> + Send;

    /// Merges the statements of `graph` into the resource at `iri`.
    fn merge(&self, iri: &str, graph: &Graph) -> impl Future<Output = Result<()>> + Send;
}
