//! Timestamp RDF graphs and file them under time-derived IRIs.
//!
//! ```no_run
//! # async fn example() -> anyhow::Result<()> {
//! use cronify::{Graph, MemoryStore, Term};
//!
//! let subject = Term::iri("http://example.org/subject");
//! let container = Term::iri("http://example.org/container/");
//! let graph = cronify::add_timestamp(Graph::new(), &subject, None);
//! let _iri = cronify::store(&MemoryStore::new(), &subject, &container, &graph).await?;
//! # Ok(())
//! # }
//! ```
//!
//! The free functions use a default [`Cronifier`]; build one with
//! [`Options`] to change the vocabulary.

mod cronify;
mod graph;
mod store;
mod timestamp;
mod vocab;

pub mod config;

use anyhow::Result;
use jiff::Timestamp;

pub use self::cronify::{Cronifier, Options};
pub use self::graph::{Graph, Triple};
pub use self::store::{FjallStore, MemoryStore, Store};
pub use self::vocab::{DC_DATE, HYDRA_MEMBER, Literal, Term, XSD_DATE_TIME};

pub fn add_timestamp(graph: Graph, subject: &Term, timestamp: Option<Timestamp>) -> Graph {
    Cronifier::default().add_timestamp(graph, subject, timestamp)
}

pub fn create_cronified_iri(container: &Term, timestamp: Timestamp) -> Term {
    Cronifier::default().create_cronified_iri(container, timestamp)
}

pub fn create_timestamp_literal(timestamp: Option<Timestamp>) -> Term {
    Cronifier::default().create_timestamp_literal(timestamp)
}

pub async fn store<S: Store>(
    store: &S,
    subject: &Term,
    container: &Term,
    graph: &Graph,
) -> Result<Term> {
    Cronifier::default()
        .store(store, subject, container, graph)
        .await
}
