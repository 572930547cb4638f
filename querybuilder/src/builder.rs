//! Top-level search request assembly

use crate::aggregation::{Aggregations, TermsAggregation};
use crate::config::BuilderConfig;
use crate::query::Query;
use crate::sort::Sort;
use crate::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Search engine dialect a request is built for
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Destination {
    #[default]
    #[serde(alias = "es")]
    Elasticsearch,
}

/// Wire form of an Elasticsearch search request body
///
/// Zero, empty and unset fields are left out rather than sent as defaults.
#[derive(Serialize)]
struct EsSearchBody<'a> {
    #[serde(skip_serializing_if = "is_zero")]
    size: usize,

    #[serde(skip_serializing_if = "is_zero")]
    from: usize,

    #[serde(skip_serializing_if = "Option::is_none")]
    query: Option<&'a Query>,

    #[serde(skip_serializing_if = "is_empty")]
    sort: &'a [Sort],

    #[serde(rename = "_source", skip_serializing_if = "is_empty")]
    source: &'a [String],

    #[serde(skip_serializing_if = "is_empty")]
    search_after: &'a [String],

    #[serde(skip_serializing_if = "Aggregations::is_empty")]
    aggs: Aggregations<'a>,
}

fn is_zero(n: &usize) -> bool {
    *n == 0
}

fn is_empty<T>(items: &&[T]) -> bool {
    items.is_empty()
}

/// Fluent builder for a search request
///
/// The query is captured when it is assigned: changing a node after
/// passing it to [`SearchBuilder::query`] does not affect the request.
/// Nothing is encoded until `build`, which is where a value JSON cannot
/// express (a NaN weight, say) is reported.
#[derive(Debug, Clone, Default)]
pub struct SearchBuilder {
    size: usize,
    from: usize,
    query: Option<Query>,
    sort: Vec<Sort>,
    source: Vec<String>,
    search_after: Vec<String>,
    aggregations: Vec<TermsAggregation>,
    destination: Destination,
    pretty: bool,
}

impl SearchBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from configured defaults
    pub fn with_config(config: &BuilderConfig) -> Self {
        Self {
            size: config.defaults.size,
            from: config.defaults.from,
            destination: config.output.destination,
            pretty: config.output.pretty,
            ..Self::default()
        }
    }

    /// Maximum number of hits; zero leaves `size` out of the request
    pub fn size(&mut self, size: usize) -> &mut Self {
        self.size = size;
        self
    }

    /// Offset of the first hit; zero leaves `from` out of the request
    pub fn from(&mut self, from: usize) -> &mut Self {
        self.from = from;
        self
    }

    /// Fields returned in `_source`; replaces any earlier list
    pub fn source<I, S>(&mut self, fields: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.source = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Store a snapshot of `query` as the request query
    ///
    /// Passing a reference clones the node, so the caller may keep
    /// extending it without touching this request.
    pub fn query(&mut self, query: impl Into<Query>) -> &mut Self {
        self.query = Some(query.into());
        self
    }

    /// Append sort specifications after any already added
    pub fn sort<I>(&mut self, specs: I) -> &mut Self
    where
        I: IntoIterator<Item = Sort>,
    {
        self.sort.extend(specs);
        self
    }

    /// Cursor values of the last hit of the previous page
    pub fn search_after<I, S>(&mut self, tokens: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.search_after = tokens.into_iter().map(Into::into).collect();
        self
    }

    /// Replace all aggregations with `aggregations`
    ///
    /// Within one call, a later aggregation overwrites an earlier one that
    /// has the same name.
    pub fn aggregations<I>(&mut self, aggregations: I) -> &mut Self
    where
        I: IntoIterator<Item = TermsAggregation>,
    {
        self.aggregations = aggregations.into_iter().collect();
        self
    }

    pub fn destination(&self) -> Destination {
        self.destination
    }

    /// Build the request for the configured destination
    pub fn build(&self) -> Result<String> {
        self.build_for(self.destination)
    }

    pub fn build_for(&self, destination: Destination) -> Result<String> {
        match destination {
            Destination::Elasticsearch => self.build_elasticsearch(),
        }
    }

    /// The request as a JSON value instead of text
    pub fn to_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(self.elasticsearch_body())?)
    }

    fn build_elasticsearch(&self) -> Result<String> {
        let body = self.elasticsearch_body();
        let encoded = if self.pretty {
            serde_json::to_string_pretty(&body)?
        } else {
            serde_json::to_string(&body)?
        };

        tracing::debug!(
            destination = ?Destination::Elasticsearch,
            bytes = encoded.len(),
            has_query = body.query.is_some(),
            sorts = body.sort.len(),
            aggregations = body.aggs.len(),
            "Built search request"
        );

        Ok(encoded)
    }

    fn elasticsearch_body(&self) -> EsSearchBody<'_> {
        EsSearchBody {
            size: self.size,
            from: self.from,
            query: self.query.as_ref(),
            sort: &self.sort,
            source: &self.source,
            search_after: &self.search_after,
            aggs: Aggregations::merge(&self.aggregations),
        }
    }
}
