use std::borrow::Cow;
use std::fmt::Display;

/// An RDF term.
///
/// IRIs and blank node labels are stored verbatim; nothing here checks that
/// an IRI is well formed.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Term {
    Iri(Cow<'static, str>),
    Literal(Literal),
    Blank(Cow<'static, str>),
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Literal {
    value: Cow<'static, str>,
    datatype: Option<Cow<'static, str>>,
}

impl Literal {
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Datatype IRI, if the literal carries one.
    pub fn datatype(&self) -> Option<&str> {
        self.datatype.as_deref()
    }
}

impl Term {
    pub fn iri(iri: impl Into<String>) -> Term {
        Term::Iri(Cow::Owned(iri.into()))
    }

    pub const fn const_iri(iri: &'static str) -> Term {
        Term::Iri(Cow::Borrowed(iri))
    }

    pub fn blank(label: impl Into<String>) -> Term {
        Term::Blank(Cow::Owned(label.into()))
    }

    pub fn literal(value: impl Into<String>) -> Term {
        Term::Literal(Literal {
            value: Cow::Owned(value.into()),
            datatype: None,
        })
    }

    pub fn typed_literal(value: impl Into<String>, datatype: &Term) -> Term {
        Term::Literal(Literal {
            value: Cow::Owned(value.into()),
            datatype: Some(Cow::Owned(datatype.as_str().to_owned())),
        })
    }

    /// The lexical form: IRI string, literal value, or blank node label.
    pub fn as_str(&self) -> &str {
        match self {
            Term::Iri(iri) => iri,
            Term::Literal(literal) => literal.value(),
            Term::Blank(label) => label,
        }
    }

    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Term::Literal(literal) => Some(literal),
            _ => None,
        }
    }

    pub fn is_iri(&self) -> bool {
        matches!(self, Term::Iri(_))
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Term::Literal(_))
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, Term::Blank(_))
    }

    /// Appends `suffix` to the lexical form and returns it as an IRI.
    pub fn join(&self, suffix: &str) -> Term {
        Term::iri(format!("{}{}", self.as_str(), suffix))
    }
}

impl Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Term::Iri(iri) => write!(f, "<{iri}>"),
            Term::Blank(label) => write!(f, "_:{label}"),
            Term::Literal(literal) => match literal.datatype() {
                Some(datatype) => write!(f, "{:?}^^<{datatype}>", literal.value()),
                None => write!(f, "{:?}", literal.value()),
            },
        }
    }
}

pub const DC_DATE: Term = Term::const_iri("http://purl.org/dc/elements/1.1/date");
pub const XSD_DATE_TIME: Term = Term::const_iri("http://www.w3.org/2001/XMLSchema#dateTime");
pub const HYDRA_MEMBER: Term = Term::const_iri("http://www.w3.org/ns/hydra/core#member");
