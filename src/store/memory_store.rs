use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use anyhow::{Result, anyhow};
use tracing::debug;

use crate::graph::Graph;

use super::Store;

/// Keeps graphs in process memory. Clones share the same graphs.
#[derive(Clone, Default)]
pub struct MemoryStore {
    graphs: Arc<Mutex<BTreeMap<String, Graph>>>,
}

impl MemoryStore {
    pub fn new() -> MemoryStore {
        MemoryStore::default()
    }
    pub fn find(&self, iri: &str) -> Result<Option<Graph>> {
        Ok(self.lock()?.get(iri).cloned())
    }
    pub fn iris(&self) -> Result<Vec<String>> {
        Ok(self.lock()?.keys().cloned().collect())
    }
    fn lock(&self) -> Result<MutexGuard<'_, BTreeMap<String, Graph>>> {
        self.graphs
            .lock()
            .map_err(|_| anyhow!("memory store lock poisoned"))
    }
    fn put(&self, iri: &str, graph: &Graph) -> Result<()> {
        debug!(target: "store", iri, triples = graph.len(), "add graph");
        self.lock()?.insert(iri.to_owned(), graph.clone());
        Ok(())
    }
    fn union(&self, iri: &str, graph: &Graph) -> Result<()> {
        debug!(target: "store", iri, triples = graph.len(), "merge graph");
        self.lock()?.entry(iri.to_owned()).or_default().union(graph);
        Ok(())
    }
}

impl Store for MemoryStore {
    async fn add(&self, iri: &str, graph: &Graph) -> Result<()> {
        self.put(iri, graph)
    }

    async fn merge(&self, iri: &str, graph: &Graph) -> Result<()> {
        self.union(iri, graph)
    }
}

#[cfg(test)]
mod tests {
    use anyhow::Result;

    use super::{MemoryStore, Store};
    use crate::graph::Graph;
    use crate::vocab::{HYDRA_MEMBER, Term};

    fn note(content: &str) -> Graph {
        Graph::new().with(
            Term::iri("http://example.org/note"),
            Term::iri("http://example.org/content"),
            Term::literal(content),
        )
    }

    #[tokio::test]
    async fn add_replaces() -> Result<()> {
        let store = MemoryStore::new();
        store.add("http://example.org/a", &note("first")).await?;
        store.add("http://example.org/a", &note("second")).await?;
        assert_eq!(store.find("http://example.org/a")?, Some(note("second")));
        assert_eq!(store.find("http://example.org/b")?, None);
        Ok(())
    }

    #[tokio::test]
    async fn merge_accumulates() -> Result<()> {
        let store = MemoryStore::new();
        let container = Term::iri("http://example.org/container/");
        for member in ["http://example.org/container/1", "http://example.org/container/2"] {
            let membership = Graph::new().with(container.clone(), HYDRA_MEMBER, Term::iri(member));
            store.merge(container.as_str(), &membership).await?;
        }
        let graph = store.find(container.as_str())?.unwrap_or_default();
        assert_eq!(graph.matching(Some(&container), Some(&HYDRA_MEMBER), None).count(), 2);
        assert_eq!(store.iris()?, vec![container.as_str().to_owned()]);
        Ok(())
    }
}
