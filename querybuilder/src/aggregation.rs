//! Terms aggregation

use crate::query::Render;
use crate::sort::SortOrder;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

/// Plain parameters for [`terms_agg`]
///
/// A `size` of zero means "engine default" and is left out of the output.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AggregateParams {
    pub name: String,
    pub field: String,
    pub order: Option<BTreeMap<String, SortOrder>>,
    pub size: usize,
}

/// A named `terms` aggregation
///
/// Encodes as a single-entry mapping `{ name: { "terms": {...} } }` so that
/// several aggregations can be merged into one `aggs` object by name.
#[derive(Debug, Clone, PartialEq)]
pub struct TermsAggregation {
    name: String,
    terms: TermsParams,
    sub_aggregations: Vec<TermsAggregation>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
struct TermsParams {
    field: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    order: Option<BTreeMap<String, SortOrder>>,
    #[serde(skip_serializing_if = "is_zero")]
    size: usize,
}

fn is_zero(n: &usize) -> bool {
    *n == 0
}

/// Value side of an aggregation entry
#[derive(Serialize)]
struct AggregationBody<'a> {
    terms: &'a TermsParams,
    #[serde(skip_serializing_if = "Aggregations::is_empty")]
    aggs: Aggregations<'a>,
}

pub fn terms_agg(params: AggregateParams) -> TermsAggregation {
    TermsAggregation {
        name: params.name,
        terms: TermsParams {
            field: params.field,
            order: params.order,
            size: params.size,
        },
        sub_aggregations: Vec::new(),
    }
}

impl TermsAggregation {
    pub fn new(name: impl Into<String>, field: impl Into<String>) -> Self {
        terms_agg(AggregateParams {
            name: name.into(),
            field: field.into(),
            ..Default::default()
        })
    }

    /// Order buckets by `key` (`_count`, `_key`, or a sub-aggregation name)
    pub fn order(mut self, key: impl Into<String>, direction: SortOrder) -> Self {
        self.terms
            .order
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), direction);
        self
    }

    pub fn size(mut self, size: usize) -> Self {
        self.terms.size = size;
        self
    }

    /// Nested aggregations computed per bucket; replaces any set before
    pub fn sub_aggregations<I>(mut self, aggregations: I) -> Self
    where
        I: IntoIterator<Item = TermsAggregation>,
    {
        self.sub_aggregations = aggregations.into_iter().collect();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn field(&self) -> &str {
        &self.terms.field
    }

    fn body(&self) -> AggregationBody<'_> {
        AggregationBody {
            terms: &self.terms,
            aggs: Aggregations::merge(&self.sub_aggregations),
        }
    }
}

impl Serialize for TermsAggregation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.name, &self.body())?;
        map.end()
    }
}

impl Render for TermsAggregation {}

/// Several aggregations encoded as one name-keyed `aggs` object
///
/// Names collide last-write-wins: a later aggregation replaces an earlier
/// one with the same name and takes over its position.
pub(crate) struct Aggregations<'a> {
    entries: Vec<&'a TermsAggregation>,
}

impl<'a> Aggregations<'a> {
    pub(crate) fn merge(aggregations: &'a [TermsAggregation]) -> Self {
        let mut entries: Vec<&'a TermsAggregation> = Vec::with_capacity(aggregations.len());
        for aggregation in aggregations {
            match entries.iter_mut().find(|kept| kept.name == aggregation.name) {
                Some(kept) => {
                    tracing::trace!(aggregation = %aggregation.name, "duplicate aggregation name, keeping the later one");
                    *kept = aggregation;
                }
                None => entries.push(aggregation),
            }
        }
        Self { entries }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for Aggregations<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for aggregation in &self.entries {
            map.serialize_entry(&aggregation.name, &aggregation.body())?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sport_params() -> AggregateParams {
        AggregateParams {
            name: "sportID_term".to_string(),
            field: "sport_id".to_string(),
            order: Some(BTreeMap::from([("_count".to_string(), SortOrder::Desc)])),
            size: 10,
        }
    }

    #[test]
    fn test_terms_agg_render() {
        let agg = terms_agg(sport_params());
        assert_eq!(
            serde_json::to_string(&agg).unwrap(),
            r#"{"sportID_term":{"terms":{"field":"sport_id","order":{"_count":"desc"},"size":10}}}"#
        );
    }

    #[test]
    fn test_zero_size_and_no_order_omitted() {
        let agg = TermsAggregation::new("by_status", "status");
        assert_eq!(agg.render().unwrap(), json!({"by_status": {"terms": {"field": "status"}}}));
    }

    #[test]
    fn test_builder_matches_params() {
        let agg = TermsAggregation::new("sportID_term", "sport_id")
            .order("_count", SortOrder::Desc)
            .size(10);
        assert_eq!(agg, terms_agg(sport_params()));
        assert_eq!(agg.name(), "sportID_term");
        assert_eq!(agg.field(), "sport_id");
    }

    #[test]
    fn test_sub_aggregations() {
        let agg = TermsAggregation::new("by_sport", "sport_id").sub_aggregations([
            TermsAggregation::new("by_city", "city").size(5),
        ]);
        assert_eq!(
            agg.render().unwrap(),
            json!({"by_sport": {
                "terms": {"field": "sport_id"},
                "aggs": {"by_city": {"terms": {"field": "city", "size": 5}}}
            }})
        );
    }

    #[test]
    fn test_merge_last_write_wins() {
        let aggregations = [
            TermsAggregation::new("a", "first"),
            TermsAggregation::new("b", "other"),
            TermsAggregation::new("a", "second"),
        ];
        let merged = Aggregations::merge(&aggregations);
        assert_eq!(merged.len(), 2);
        assert_eq!(
            serde_json::to_string(&merged).unwrap(),
            r#"{"a":{"terms":{"field":"second"}},"b":{"terms":{"field":"other"}}}"#
        );
    }

    #[test]
    fn test_sub_aggregation_collisions_merge() {
        let agg = TermsAggregation::new("top", "t").sub_aggregations([
            TermsAggregation::new("inner", "x"),
            TermsAggregation::new("inner", "y"),
        ]);
        assert_eq!(
            agg.render().unwrap()["top"]["aggs"],
            json!({"inner": {"terms": {"field": "y"}}})
        );
    }
}
