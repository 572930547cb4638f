//! Query clauses and the rendering contract they share
//!
//! Every clause serializes to a single JSON object whose only key names the
//! clause type (`term`, `bool`, ...). Rendering is a pure function of the
//! node, so a node can be rendered any number of times.

mod bool_query;
mod function_score;
pub(crate) mod float32;
mod types;

pub use bool_query::{bool_query, BoolQuery};
pub use function_score::{function_score, Function, FunctionScore};
pub use types::{
    ExistsQuery, FieldQuery, MatchAllQuery, MinimumShouldMatch, MultiMatchParams, MultiMatchType,
    Operator, RangeParams,
};

use serde::Serialize;
use serde_json::Value;

/// A node that renders to a JSON value through its serde encoding
///
/// Rendering fails only when a node holds a value JSON cannot express,
/// such as a NaN weight.
pub trait Render: Serialize {
    fn render(&self) -> crate::Result<Value> {
        Ok(serde_json::to_value(self)?)
    }
}

/// A query clause
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Query {
    /// Match all documents
    MatchAll(MatchAllQuery),

    /// Analyzed full-text match on one field
    Match(FieldQuery<String>),

    /// Phrase match; the tokens are already joined with single spaces
    MatchPhrase(FieldQuery<String>),

    /// Exact match, not analyzed
    Term(FieldQuery<Value>),

    /// Exact match against any of several values
    Terms(FieldQuery<Vec<Value>>),

    Prefix(FieldQuery<String>),

    Exists(ExistsQuery),

    Range(FieldQuery<RangeParams>),

    MultiMatch(MultiMatchParams),

    Bool(BoolQuery),

    FunctionScore(FunctionScore),
}

impl Query {
    /// The JSON key this clause renders under
    pub fn kind(&self) -> &'static str {
        match self {
            Query::MatchAll(_) => "match_all",
            Query::Match(_) => "match",
            Query::MatchPhrase(_) => "match_phrase",
            Query::Term(_) => "term",
            Query::Terms(_) => "terms",
            Query::Prefix(_) => "prefix",
            Query::Exists(_) => "exists",
            Query::Range(_) => "range",
            Query::MultiMatch(_) => "multi_match",
            Query::Bool(_) => "bool",
            Query::FunctionScore(_) => "function_score",
        }
    }
}

impl Render for Query {}

impl From<&Query> for Query {
    fn from(query: &Query) -> Self {
        query.clone()
    }
}

impl From<BoolQuery> for Query {
    fn from(bool_query: BoolQuery) -> Self {
        Query::Bool(bool_query)
    }
}

impl From<&BoolQuery> for Query {
    fn from(bool_query: &BoolQuery) -> Self {
        Query::Bool(bool_query.clone())
    }
}

impl From<FunctionScore> for Query {
    fn from(function_score: FunctionScore) -> Self {
        Query::FunctionScore(function_score)
    }
}

impl From<&FunctionScore> for Query {
    fn from(function_score: &FunctionScore) -> Self {
        Query::FunctionScore(function_score.clone())
    }
}

impl From<MultiMatchParams> for Query {
    fn from(params: MultiMatchParams) -> Self {
        Query::MultiMatch(params)
    }
}

pub fn match_all() -> Query {
    Query::MatchAll(MatchAllQuery {})
}

pub fn match_query(field: impl Into<String>, value: impl Into<String>) -> Query {
    Query::Match(FieldQuery::new(field, value.into()))
}

/// Phrase match over `tokens`, joined in order with single spaces
pub fn match_phrase<I, S>(field: impl Into<String>, tokens: I) -> Query
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let phrase = tokens
        .into_iter()
        .map(|token| token.as_ref().to_string())
        .collect::<Vec<_>>()
        .join(" ");
    Query::MatchPhrase(FieldQuery::new(field, phrase))
}

pub fn term(field: impl Into<String>, value: impl Into<Value>) -> Query {
    Query::Term(FieldQuery::new(field, value.into()))
}

/// Terms clause; the element type is up to the caller and is not checked
pub fn terms<I, T>(field: impl Into<String>, values: I) -> Query
where
    I: IntoIterator<Item = T>,
    T: Into<Value>,
{
    Query::Terms(FieldQuery::new(
        field,
        values.into_iter().map(Into::into).collect(),
    ))
}

pub fn prefix(field: impl Into<String>, value: impl Into<String>) -> Query {
    Query::Prefix(FieldQuery::new(field, value.into()))
}

pub fn exists(field: impl Into<String>) -> Query {
    Query::Exists(ExistsQuery {
        field: field.into(),
    })
}

pub fn range(field: impl Into<String>, params: RangeParams) -> Query {
    Query::Range(FieldQuery::new(field, params))
}

pub fn multi_match(params: MultiMatchParams) -> Query {
    Query::MultiMatch(params)
}
