//! Stamp a subject with its creation time and file the graph under a
//! time-derived IRI in a container.

use anyhow::{Context, Result};
use jiff::Timestamp;
use tracing::debug;

use crate::graph::Graph;
use crate::store::Store;
use crate::timestamp;
use crate::vocab::{DC_DATE, HYDRA_MEMBER, Term, XSD_DATE_TIME};

/// Construction options. Unset fields fall back to Dublin Core `date`,
/// `xsd:dateTime` and Hydra `member`.
#[derive(Debug, Clone, Default)]
pub struct Options {
    pub timestamp_predicate: Option<Term>,
    pub timestamp_datatype: Option<Term>,
    pub container_predicate: Option<Term>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cronifier {
    timestamp_predicate: Term,
    timestamp_datatype: Term,
    container_predicate: Term,
}

impl Default for Cronifier {
    fn default() -> Self {
        Cronifier::new(Options::default())
    }
}

impl Cronifier {
    pub fn new(options: Options) -> Cronifier {
        Cronifier {
            timestamp_predicate: options.timestamp_predicate.unwrap_or(DC_DATE),
            timestamp_datatype: options.timestamp_datatype.unwrap_or(XSD_DATE_TIME),
            container_predicate: options.container_predicate.unwrap_or(HYDRA_MEMBER),
        }
    }

    pub fn timestamp_predicate(&self) -> &Term {
        &self.timestamp_predicate
    }

    pub fn timestamp_datatype(&self) -> &Term {
        &self.timestamp_datatype
    }

    pub fn container_predicate(&self) -> &Term {
        &self.container_predicate
    }

    /// Adds `(subject, timestamp_predicate, <timestamp or now>)` unless the
    /// subject already has any value for the timestamp predicate, in which
    /// case the graph comes back untouched.
    pub fn add_timestamp(
        &self,
        mut graph: Graph,
        subject: &Term,
        timestamp: Option<Timestamp>,
    ) -> Graph {
        if graph.has_match(Some(subject), Some(&self.timestamp_predicate), None) {
            debug!(target: "cronify", %subject, "subject already stamped");
            return graph;
        }
        let literal = self.create_timestamp_literal(timestamp);
        debug!(target: "cronify", %subject, %literal, "stamp subject");
        graph.insert(subject.clone(), self.timestamp_predicate.clone(), literal);
        graph
    }

    /// `container` followed by the timestamp with `-`, `:` and the first `.`
    /// removed, e.g. `http://example.org/container/20000101T000000000Z`.
    pub fn create_cronified_iri(&self, container: &Term, timestamp: Timestamp) -> Term {
        container.join(&timestamp::to_compact(timestamp))
    }

    pub fn create_timestamp_literal(&self, timestamp: Option<Timestamp>) -> Term {
        let timestamp = timestamp.unwrap_or_else(Timestamp::now);
        Term::typed_literal(timestamp::to_iso_millis(timestamp), &self.timestamp_datatype)
    }

    /// Writes `graph` under the IRI derived from the subject's timestamp and
    /// records that IRI as a member of `container`. Both writes are issued
    /// together; the first failure is returned.
    pub async fn store<S: Store>(
        &self,
        store: &S,
        subject: &Term,
        container: &Term,
        graph: &Graph,
    ) -> Result<Term> {
        let stamp = graph
            .matching(Some(subject), Some(&self.timestamp_predicate), None)
            .next()
            .with_context(|| {
                format!(
                    "{subject} has no {} value, add a timestamp before storing",
                    self.timestamp_predicate
                )
            })?;
        let timestamp = timestamp::parse(stamp.object.as_str())
            .with_context(|| format!("invalid timestamp on {subject}"))?;
        let cronified_iri = self.create_cronified_iri(container, timestamp);

        let membership = Graph::new().with(
            Term::iri(container.as_str()),
            self.container_predicate.clone(),
            cronified_iri.clone(),
        );

        debug!(target: "cronify", %container, iri = cronified_iri.as_str(), "store graph");
        tokio::try_join!(
            store.add(cronified_iri.as_str(), graph),
            store.merge(container.as_str(), &membership)
        )?;

        Ok(cronified_iri)
    }
}
