//! On-disk encoding of graphs.

use anyhow::{Context, Result};
use minicbor::{Decode, Encode};

use crate::graph::{Graph, Triple};
use crate::vocab::Term;

#[derive(Debug, Encode, Decode)]
enum WireTerm {
    #[n(0)]
    Iri(#[n(0)] String),
    #[n(1)]
    Literal(#[n(0)] String, #[n(1)] Option<String>),
    #[n(2)]
    Blank(#[n(0)] String),
}

#[derive(Debug, Encode, Decode)]
struct WireTriple {
    #[n(0)]
    subject: WireTerm,
    #[n(1)]
    predicate: WireTerm,
    #[n(2)]
    object: WireTerm,
}

#[derive(Debug, Encode, Decode)]
struct WireGraph {
    #[n(0)]
    version: u32,
    #[n(1)]
    triples: Vec<WireTriple>,
}

impl WireGraph {
    const V_1: u32 = 1;
}

impl From<&Term> for WireTerm {
    fn from(term: &Term) -> Self {
        match term {
            Term::Iri(iri) => WireTerm::Iri(iri.to_string()),
            Term::Blank(label) => WireTerm::Blank(label.to_string()),
            Term::Literal(literal) => WireTerm::Literal(
                literal.value().to_owned(),
                literal.datatype().map(str::to_owned),
            ),
        }
    }
}

impl From<WireTerm> for Term {
    fn from(term: WireTerm) -> Self {
        match term {
            WireTerm::Iri(iri) => Term::iri(iri),
            WireTerm::Blank(label) => Term::blank(label),
            WireTerm::Literal(value, None) => Term::literal(value),
            WireTerm::Literal(value, Some(datatype)) => {
                Term::typed_literal(value, &Term::iri(datatype))
            }
        }
    }
}

pub(super) fn to_bytes(graph: &Graph) -> Result<Vec<u8>> {
    let wire = WireGraph {
        version: WireGraph::V_1,
        triples: graph
            .iter()
            .map(|t| WireTriple {
                subject: (&t.subject).into(),
                predicate: (&t.predicate).into(),
                object: (&t.object).into(),
            })
            .collect(),
    };
    minicbor::to_vec(&wire).context("unable to encode graph")
}

pub(super) fn from_bytes(bytes: &[u8]) -> Result<Graph> {
    let wire: WireGraph = minicbor::decode(bytes).context("unable to decode graph")?;
    if wire.version != WireGraph::V_1 {
        tracing::error!(target: "store", version = wire.version, "unknown graph encoding version");
    }
    Ok(wire
        .triples
        .into_iter()
        .map(|t| Triple::new(t.subject.into(), t.predicate.into(), t.object.into()))
        .collect())
}

#[cfg(test)]
mod tests {
    use anyhow::Result;

    use super::{from_bytes, to_bytes};
    use crate::graph::Graph;
    use crate::vocab::{DC_DATE, Term, XSD_DATE_TIME};

    #[test]
    fn keeps_every_term_kind() -> Result<()> {
        let subject = Term::iri("http://example.org/subject");
        let graph = Graph::new()
            .with(
                subject.clone(),
                DC_DATE,
                Term::typed_literal("2000-01-01T00:00:00.000Z", &XSD_DATE_TIME),
            )
            .with(
                subject.clone(),
                Term::iri("http://example.org/predicate"),
                Term::literal("object"),
            )
            .with(subject, Term::iri("http://example.org/knows"), Term::blank("b0"));

        assert_eq!(from_bytes(&to_bytes(&graph)?)?, graph);
        Ok(())
    }

    #[test]
    fn garbage_is_an_error() {
        assert!(from_bytes(&[0xff, 0x00, 0x13]).is_err());
    }
}
