use std::path::Path;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result, anyhow};
use fjall::{Keyspace, PartitionCreateOptions, PartitionHandle, PersistMode};
use tracing::debug;

use crate::graph::Graph;

use super::{Store, wire};

/// Named graphs in a fjall keyspace, keyed by IRI.
#[derive(Clone)]
pub struct FjallStore {
    keyspace: Keyspace,
    graphs: PartitionHandle,
    merge_lock: Arc<Mutex<()>>,
}

impl FjallStore {
    pub fn open(path: impl AsRef<Path>) -> Result<FjallStore> {
        let path = path.as_ref();
        let keyspace = fjall::Config::new(path)
            .open()
            .with_context(|| format!("unable to open keyspace at {}", path.display()))?;
        FjallStore::new(keyspace)
    }
    pub fn new(keyspace: Keyspace) -> Result<FjallStore> {
        let graphs = keyspace.open_partition("graphs", PartitionCreateOptions::default())?;
        Ok(FjallStore {
            keyspace,
            graphs,
            merge_lock: Arc::default(),
        })
    }
    pub fn find(&self, iri: &str) -> Result<Option<Graph>> {
        if let Some(bytes) = self.graphs.get(iri)? {
            return Ok(Some(wire::from_bytes(&bytes)?));
        }
        Ok(None)
    }
    pub fn persist(&self) -> Result<()> {
        self.keyspace.persist(PersistMode::SyncAll)?;
        Ok(())
    }
    fn put(&self, iri: &str, graph: &Graph) -> Result<()> {
        debug!(target: "store", iri, triples = graph.len(), "add graph");
        self.graphs.insert(iri, wire::to_bytes(graph)?)?;
        Ok(())
    }
    fn union(&self, iri: &str, graph: &Graph) -> Result<()> {
        let _guard = self
            .merge_lock
            .lock()
            .map_err(|_| anyhow!("merge lock poisoned"))?;
        let mut merged = self.find(iri)?.unwrap_or_default();
        merged.union(graph);
        debug!(target: "store", iri, triples = merged.len(), "merge graph");
        self.graphs.insert(iri, wire::to_bytes(&merged)?)?;
        Ok(())
    }
}

impl Store for FjallStore {
    async fn add(&self, iri: &str, graph: &Graph) -> Result<()> {
        self.put(iri, graph)
    }

    async fn merge(&self, iri: &str, graph: &Graph) -> Result<()> {
        self.union(iri, graph)
    }
}
