//! Payload types of the individual clauses

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MatchAllQuery {}

/// `exists` names its field under a fixed `field` key
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExistsQuery {
    pub field: String,
}

/// Payload keyed by the field it applies to: `{"<field>": value}`
#[derive(Debug, Clone, PartialEq)]
pub struct FieldQuery<T> {
    pub field: String,
    pub value: T,
}

impl<T> FieldQuery<T> {
    pub fn new(field: impl Into<String>, value: T) -> Self {
        Self {
            field: field.into(),
            value,
        }
    }
}

impl<T: Serialize> Serialize for FieldQuery<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.field, &self.value)?;
        map.end()
    }
}

/// Bounds of a `range` clause
///
/// Each bound is optional and omitted from the output when unset. Nothing
/// stops a caller from setting both `gte` and `gt`; the engine decides what
/// that means.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RangeParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gte: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gt: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lte: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lt: Option<Value>,
}

impl RangeParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gte(mut self, value: impl Into<Value>) -> Self {
        self.gte = Some(value.into());
        self
    }

    pub fn gt(mut self, value: impl Into<Value>) -> Self {
        self.gt = Some(value.into());
        self
    }

    pub fn lte(mut self, value: impl Into<Value>) -> Self {
        self.lte = Some(value.into());
        self
    }

    pub fn lt(mut self, value: impl Into<Value>) -> Self {
        self.lt = Some(value.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.gte.is_none() && self.gt.is_none() && self.lte.is_none() && self.lt.is_none()
    }
}

/// How a `multi_match` query combines the per-field scores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MultiMatchType {
    BestFields,
    MostFields,
    CrossFields,
    Phrase,
    PhrasePrefix,
    BoolPrefix,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    And,
    Or,
}

/// Search input matched against several fields
///
/// Field names may carry a boost suffix such as `name^3`; it is passed
/// through untouched. The input is usually text but any JSON scalar is
/// accepted and sent as given.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MultiMatchParams {
    pub fields: Vec<String>,

    pub query: Value,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub match_type: Option<MultiMatchType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub operator: Option<Operator>,

    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "super::float32::serialize_option"
    )]
    pub tie_breaker: Option<f32>,
}

impl MultiMatchParams {
    pub fn new<I, S>(query: impl Into<Value>, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
            query: query.into(),
            match_type: None,
            operator: None,
            tie_breaker: None,
        }
    }

    pub fn match_type(mut self, match_type: MultiMatchType) -> Self {
        self.match_type = Some(match_type);
        self
    }

    pub fn operator(mut self, operator: Operator) -> Self {
        self.operator = Some(operator);
        self
    }

    pub fn tie_breaker(mut self, tie_breaker: f32) -> Self {
        self.tie_breaker = Some(tie_breaker);
        self
    }
}

/// `minimum_should_match` of a bool query: an absolute count or a percentage
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum MinimumShouldMatch {
    Number(i32),
    Percentage(String),
}

impl From<i32> for MinimumShouldMatch {
    fn from(n: i32) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for MinimumShouldMatch {
    fn from(s: &str) -> Self {
        Self::Percentage(s.to_string())
    }
}
