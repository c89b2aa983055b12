use async_graphql::value;
use tutoriq::error::Error;
use tutoriq::graphql::{CatalogSchema, build_schema, execute};
use tutoriq::model::Catalog;

fn schema() -> CatalogSchema {
    build_schema(Catalog::populate())
}

// =============================================================================
// Root field: list
// =============================================================================

#[tokio::test]
async fn list_returns_all_tutorials_in_insertion_order() {
    let response = execute(&schema(), "{ list { id title } }").await.unwrap();

    assert_eq!(
        response.data,
        value!({
            "list": [
                { "id": 1, "title": "Magic Covers" },
                { "id": 2, "title": "Harry Potter Covers" },
            ]
        })
    );
}

#[tokio::test]
async fn list_preserves_comment_order() {
    let response = execute(&schema(), "{ list { id title comments { body } } }")
        .await
        .unwrap();

    assert_eq!(
        response.data,
        value!({
            "list": [
                {
                    "id": 1,
                    "title": "Magic Covers",
                    "comments": [{ "body": "First review comment" }],
                },
                {
                    "id": 2,
                    "title": "Harry Potter Covers",
                    "comments": [
                        { "body": "Second review comment" },
                        { "body": "Third review comment" },
                    ],
                },
            ]
        })
    );
}

#[tokio::test]
async fn list_resolves_nested_author() {
    let response = execute(&schema(), "{ list { author { name tutorials } } }")
        .await
        .unwrap();

    assert_eq!(
        response.data,
        value!({
            "list": [
                { "author": { "name": "PSJohn", "tutorials": [1] } },
                { "author": { "name": "JK. Rowling", "tutorials": [2] } },
            ]
        })
    );
}

// =============================================================================
// Root field: tutorial(id)
// =============================================================================

#[tokio::test]
async fn tutorial_by_id_returns_the_matching_record() {
    let response = execute(&schema(), "{ tutorial(id: 1) { title } }")
        .await
        .unwrap();

    assert_eq!(response.data, value!({ "tutorial": { "title": "Magic Covers" } }));
}

#[tokio::test]
async fn tutorial_by_id_keeps_comments_intact() {
    let response = execute(&schema(), "{ tutorial(id: 2) { id title comments { body } } }")
        .await
        .unwrap();

    assert_eq!(
        response.data,
        value!({
            "tutorial": {
                "id": 2,
                "title": "Harry Potter Covers",
                "comments": [
                    { "body": "Second review comment" },
                    { "body": "Third review comment" },
                ],
            }
        })
    );
}

#[tokio::test]
async fn tutorial_with_unknown_id_is_null_not_an_error() {
    let response = execute(&schema(), "{ tutorial(id: 99) { title } }")
        .await
        .unwrap();

    assert_eq!(response.data, value!({ "tutorial": null }));
}

#[tokio::test]
async fn tutorial_with_string_id_is_null() {
    let response = execute(&schema(), "{ tutorial(id: \"one\") { title } }")
        .await
        .unwrap();

    assert_eq!(response.data, value!({ "tutorial": null }));
}

#[tokio::test]
async fn tutorial_with_missing_id_is_null() {
    let response = execute(&schema(), "{ tutorial { title } }").await.unwrap();

    assert_eq!(response.data, value!({ "tutorial": null }));
}

// =============================================================================
// Execution semantics
// =============================================================================

#[tokio::test]
async fn repeated_queries_return_identical_results() {
    let schema = schema();
    let query = "{ list { id title comments { body } } }";

    let first = execute(&schema, query).await.unwrap();
    let second = execute(&schema, query).await.unwrap();

    assert_eq!(first.data, second.data);
}

#[tokio::test]
async fn unknown_root_field_surfaces_as_execution_error() {
    let err = execute(&schema(), "{ nope }").await.unwrap_err();

    assert!(matches!(err, Error::Execution(_)));
}

#[tokio::test]
async fn malformed_query_surfaces_as_execution_error() {
    let err = execute(&schema(), "{ list {").await.unwrap_err();

    assert!(matches!(err, Error::Execution(_)));
}
