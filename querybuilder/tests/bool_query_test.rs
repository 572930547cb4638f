//! Boolean composition through the request builder

mod common;

use common::trim;
use querybuilder::query::{bool_query, term, terms, Query};
use querybuilder::{Destination, SearchBuilder};

#[test]
fn test_bool_must_term() {
    let query = SearchBuilder::new()
        .query(bool_query().must([term("target.keyword", "v")]))
        .build_for(Destination::Elasticsearch)
        .unwrap();
    assert_eq!(
        query,
        trim(
            r#"{
                "query":{
                    "bool":{
                        "must":[
                            {"term":{"target.keyword":"v"}}
                        ]
                    }
                }
            }"#
        )
    );
}

#[test]
fn test_bool_must_two_terms() {
    let query = SearchBuilder::new()
        .query(bool_query().must([
            term("target1.keyword", "v1"),
            term("target2.keyword", "v2"),
        ]))
        .build_for(Destination::Elasticsearch)
        .unwrap();
    assert_eq!(
        query,
        trim(
            r#"{
                "query":{
                    "bool":{
                        "must":[
                            {"term":{"target1.keyword":"v1"}},
                            {"term":{"target2.keyword":"v2"}}
                        ]
                    }
                }
            }"#
        )
    );
}

#[test]
fn test_bool_must_terms() {
    let query = SearchBuilder::new()
        .query(bool_query().must([terms("target.keyword", [1, 2, 3])]))
        .build_for(Destination::Elasticsearch)
        .unwrap();
    assert_eq!(
        query,
        trim(r#"{"query":{"bool":{"must":[{"terms":{"target.keyword":[1,2,3]}}]}}}"#)
    );
}

#[test]
fn test_bool_must_and_must_not() {
    let query = SearchBuilder::new()
        .query(
            bool_query()
                .must([terms("target.keyword", [1, 2, 3])])
                .must_not([terms("not.keyword", ["1", "2", "3"])]),
        )
        .build_for(Destination::Elasticsearch)
        .unwrap();
    assert_eq!(
        query,
        trim(
            r#"{
                "query":{
                    "bool":{
                        "must":[
                            {"terms":{"target.keyword":[1,2,3]}}
                        ],
                        "must_not":[
                            {"terms":{"not.keyword":["1","2","3"]}}
                        ]
                    }
                }
            }"#
        )
    );
}

#[test]
fn test_bool_should_nested_bool() {
    let query = SearchBuilder::new()
        .query(bool_query().should([
            bool_query().must([
                terms("target1.keyword", [1, 2, 3]),
                terms("target2.keyword", [1, 2, 3]),
            ]),
            bool_query().must([
                terms("target3.keyword", [1, 2, 3]),
                terms("target4.keyword", [1, 2, 3]),
            ]),
        ]))
        .build_for(Destination::Elasticsearch)
        .unwrap();
    assert_eq!(
        query,
        trim(
            r#"{
                "query":{
                    "bool":{
                        "should":[
                            {
                                "bool":{
                                    "must":[
                                        {"terms":{"target1.keyword":[1,2,3]}},
                                        {"terms":{"target2.keyword":[1,2,3]}}
                                    ]
                                }
                            },
                            {
                                "bool":{
                                    "must":[
                                        {"terms":{"target3.keyword":[1,2,3]}},
                                        {"terms":{"target4.keyword":[1,2,3]}}
                                    ]
                                }
                            }
                        ]
                    }
                }
            }"#
        )
    );
}

#[test]
fn test_bool_nested_three_levels() {
    let inner = bool_query().must_not([term("deleted", true)]);
    let middle = bool_query().should([Query::from(inner), term("pinned", true)]);
    let outer = bool_query().must([middle]);

    let query = SearchBuilder::new().query(outer).build().unwrap();
    assert_eq!(
        query,
        trim(
            r#"{
                "query":{"bool":{"must":[
                    {"bool":{"should":[
                        {"bool":{"must_not":[{"term":{"deleted":true}}]}},
                        {"term":{"pinned":true}}
                    ]}}
                ]}}
            }"#
        )
    );
}

#[test]
fn test_building_query_incrementally() {
    let clauses = bool_query();
    let clauses = clauses.must([term("term", "value")]);
    let clauses = clauses.must([terms("terms", [1, 2, 3])]);
    let clauses = clauses.must_not([term("notTarget", "exclusion")]);

    let query = SearchBuilder::new()
        .query(&clauses)
        .build_for(Destination::Elasticsearch)
        .unwrap();
    assert_eq!(
        query,
        trim(
            r#"{
                "query":{
                    "bool":{
                        "must":[
                            {"term":{"term":"value"}},
                            {"terms":{"terms":[1,2,3]}}
                        ],
                        "must_not":[
                            {"term":{"notTarget":"exclusion"}}
                        ]
                    }
                }
            }"#
        )
    );
}

#[test]
fn test_empty_bool() {
    let query = SearchBuilder::new().query(bool_query()).build().unwrap();
    assert_eq!(query, r#"{"query":{"bool":{}}}"#);
}
