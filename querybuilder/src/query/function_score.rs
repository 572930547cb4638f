//! `function_score`: re-scoring a query with weighted filters

use super::Query;
use serde::Serialize;

/// One weighted filter of a `function_score` query
///
/// A weight that is NaN or infinite makes the request fail to encode.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Function {
    pub filter: Query,
    #[serde(serialize_with = "super::float32::serialize")]
    pub weight: f32,
}

impl Function {
    pub fn new(filter: impl Into<Query>, weight: f32) -> Self {
        Self {
            filter: filter.into(),
            weight,
        }
    }
}

/// Wraps a query and boosts documents matching each function's filter
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FunctionScore {
    query: Box<Query>,
    functions: Vec<Function>,
}

/// Functions keep the order they are given in
pub fn function_score<I>(query: impl Into<Query>, functions: I) -> FunctionScore
where
    I: IntoIterator<Item = Function>,
{
    FunctionScore {
        query: Box::new(query.into()),
        functions: functions.into_iter().collect(),
    }
}

impl FunctionScore {
    pub fn query(&self) -> &Query {
        &self.query
    }

    pub fn functions(&self) -> &[Function] {
        &self.functions
    }
}
