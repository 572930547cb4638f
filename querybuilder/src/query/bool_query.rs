//! Boolean composition of clauses

use super::{MinimumShouldMatch, Query};
use serde::Serialize;

/// A `bool` query
///
/// Each slot keeps its clauses in insertion order and only grows. Empty
/// slots are left out of the encoded object, so a fresh `BoolQuery`
/// renders as `{"bool":{}}`. Children may themselves be bool queries.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BoolQuery {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    must: Vec<Query>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    must_not: Vec<Query>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    should: Vec<Query>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    filter: Vec<Query>,
    #[serde(skip_serializing_if = "Option::is_none")]
    minimum_should_match: Option<MinimumShouldMatch>,
}

pub fn bool_query() -> BoolQuery {
    BoolQuery::default()
}

impl BoolQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn must<I, Q>(mut self, clauses: I) -> Self
    where
        I: IntoIterator<Item = Q>,
        Q: Into<Query>,
    {
        self.must.extend(clauses.into_iter().map(Into::into));
        self
    }

    pub fn must_not<I, Q>(mut self, clauses: I) -> Self
    where
        I: IntoIterator<Item = Q>,
        Q: Into<Query>,
    {
        self.must_not.extend(clauses.into_iter().map(Into::into));
        self
    }

    pub fn should<I, Q>(mut self, clauses: I) -> Self
    where
        I: IntoIterator<Item = Q>,
        Q: Into<Query>,
    {
        self.should.extend(clauses.into_iter().map(Into::into));
        self
    }

    /// Non-scoring clauses
    pub fn filter<I, Q>(mut self, clauses: I) -> Self
    where
        I: IntoIterator<Item = Q>,
        Q: Into<Query>,
    {
        self.filter.extend(clauses.into_iter().map(Into::into));
        self
    }

    pub fn minimum_should_match(mut self, value: impl Into<MinimumShouldMatch>) -> Self {
        self.minimum_should_match = Some(value.into());
        self
    }

    pub fn must_clauses(&self) -> &[Query] {
        &self.must
    }

    pub fn must_not_clauses(&self) -> &[Query] {
        &self.must_not
    }

    pub fn should_clauses(&self) -> &[Query] {
        &self.should
    }

    pub fn filter_clauses(&self) -> &[Query] {
        &self.filter
    }

    pub fn is_empty(&self) -> bool {
        self.must.is_empty()
            && self.must_not.is_empty()
            && self.should.is_empty()
            && self.filter.is_empty()
    }
}
