//! Typed construction of Elasticsearch search request documents
//!
//! Queries are assembled bottom-up from small clause nodes, composed with
//! `bool` and `function_score`, and handed to a [`SearchBuilder`] that adds
//! pagination, sorting, source filtering, `search_after` cursors and
//! aggregations before serializing the whole request to JSON.
//!
//! ```
//! use querybuilder::query::{bool_query, exists, multi_match, MultiMatchParams};
//! use querybuilder::{SearchBuilder, Sort};
//!
//! let body = SearchBuilder::new()
//!     .query(
//!         bool_query()
//!             .must([multi_match(MultiMatchParams::new("tokyo", ["name^3", "city"]))])
//!             .must_not([exists("deleted_at")]),
//!     )
//!     .sort([Sort::desc("updated_at")])
//!     .size(20)
//!     .build()
//!     .unwrap();
//!
//! assert!(body.starts_with(r#"{"size":20,"query":{"bool":"#));
//! ```
//!
//! # Supported clauses
//!
//! - `match_all`, `match`, `match_phrase`, `multi_match`
//! - `term`, `terms`, `prefix`, `exists`, `range`
//! - `bool` (must, must_not, should, filter)
//! - `function_score` with filter/weight functions
//!
//! Supported aggregations:
//! - `terms` (with nested sub-aggregations)

pub mod aggregation;
pub mod builder;
pub mod config;
pub mod error;
pub mod query;
pub mod sort;

pub use aggregation::{terms_agg, AggregateParams, TermsAggregation};
pub use builder::{Destination, SearchBuilder};
pub use config::BuilderConfig;
pub use error::QueryError;
pub use query::{Query, Render};
pub use sort::{Sort, SortOrder};

/// Result type for query builder operations
pub type Result<T> = std::result::Result<T, QueryError>;
