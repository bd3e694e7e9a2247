//! Set-semantics RDF graph.

use std::collections::BTreeSet;

use crate::vocab::Term;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Triple {
    pub subject: Term,
    pub predicate: Term,
    pub object: Term,
}

impl Triple {
    pub fn new(subject: Term, predicate: Term, object: Term) -> Triple {
        Triple {
            subject,
            predicate,
            object,
        }
    }

    /// `None` components act as wildcards.
    pub fn matches(
        &self,
        subject: Option<&Term>,
        predicate: Option<&Term>,
        object: Option<&Term>,
    ) -> bool {
        subject.is_none_or(|s| *s == self.subject)
            && predicate.is_none_or(|p| *p == self.predicate)
            && object.is_none_or(|o| *o == self.object)
    }
}

/// An unordered set of triples. Two graphs are equal when they hold the
/// same triples.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    triples: BTreeSet<Triple>,
}

impl Graph {
    pub fn new() -> Graph {
        Graph::default()
    }

    /// Returns `false` when the triple was already present.
    pub fn add(&mut self, triple: Triple) -> bool {
        self.triples.insert(triple)
    }

    pub fn insert(&mut self, subject: Term, predicate: Term, object: Term) -> bool {
        self.add(Triple::new(subject, predicate, object))
    }

    pub fn with(mut self, subject: Term, predicate: Term, object: Term) -> Graph {
        self.insert(subject, predicate, object);
        self
    }

    pub fn contains(&self, triple: &Triple) -> bool {
        self.triples.contains(triple)
    }

    pub fn len(&self) -> usize {
        self.triples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Triple> {
        self.triples.iter()
    }

    pub fn matching<'a>(
        &'a self,
        subject: Option<&'a Term>,
        predicate: Option<&'a Term>,
        object: Option<&'a Term>,
    ) -> impl Iterator<Item = &'a Triple> + 'a {
        self.triples
            .iter()
            .filter(move |t| t.matches(subject, predicate, object))
    }

    pub fn has_match(
        &self,
        subject: Option<&Term>,
        predicate: Option<&Term>,
        object: Option<&Term>,
    ) -> bool {
        self.triples
            .iter()
            .any(|t| t.matches(subject, predicate, object))
    }

    /// Adds every triple of `other`.
    pub fn union(&mut self, other: &Graph) {
        self.triples.extend(other.triples.iter().cloned());
    }
}

impl IntoIterator for Graph {
    type Item = Triple;
    type IntoIter = std::collections::btree_set::IntoIter<Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.triples.into_iter()
    }
}

impl<'a> IntoIterator for &'a Graph {
    type Item = &'a Triple;
    type IntoIter = std::collections::btree_set::Iter<'a, Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.triples.iter()
    }
}

impl FromIterator<Triple> for Graph {
    fn from_iter<T: IntoIterator<Item = Triple>>(iter: T) -> Self {
        Graph {
            triples: iter.into_iter().collect(),
        }
    }
}

impl Extend<Triple> for Graph {
    fn extend<T: IntoIterator<Item = Triple>>(&mut self, iter: T) {
        self.triples.extend(iter);
    }
}
