//! Integration tests using a mock HTTP server
//!
//! Tests the full request path: options encoding → HTTP → key normalization
//! → typed models.

use philomena_client::api::{
    get_featured_image, get_forums, get_image, get_image_comments, get_system_filters, get_tag,
    get_user, get_user_filters, search_images, search_tags,
};
use philomena_client::{ConnectionConfig, Error, SearchOptions, SortDirection};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod payloads;
use payloads::{sample_comment, sample_filter, sample_forum, sample_image, sample_tag, sample_user};

fn config_for(server: &MockServer) -> ConnectionConfig {
    ConnectionConfig::new(format!("{}/api/v1/json", server.uri()))
}

// ============================================================================
// Wire Casing Round-Trip Tests
// ============================================================================

#[tokio::test]
async fn test_search_images_decodes_snake_case_payload() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/json/search/images"))
        .and(query_param("q", "safe"))
        .and(query_param("per_page", "25"))
        .and(query_param("sort_field", "wilson_score"))
        .and(query_param("sort_direction", "desc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total": 2,
            "images": [sample_image(1), sample_image(2)]
        })))
        .mount(&mock_server)
        .await;

    let options = SearchOptions::new()
        .query("safe")
        .per_page(25)
        .sort_field("wilsonScore")
        .sort_direction(SortDirection::Desc);

    let collection = search_images(&config_for(&mock_server), &options)
        .await
        .unwrap();

    assert_eq!(collection.total, 2);
    assert_eq!(collection.images.len(), 2);
    assert_eq!(collection.images[0].id, 1);
    assert_eq!(collection.images[0].wilson_score, 0.93);
    assert_eq!(
        collection.images[0].representations.thumb_small,
        "https://example.com/1/thumb_small.png"
    );
    assert_eq!(
        collection.images[0].created_at.to_rfc3339(),
        "2024-01-02T03:04:05+00:00"
    );
}

#[tokio::test]
async fn test_get_image_unwraps_single_entity() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/json/images/42"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "image": sample_image(42) })),
        )
        .mount(&mock_server)
        .await;

    let image = get_image(&config_for(&mock_server), 42, None).await.unwrap();

    assert_eq!(image.id, 42);
    assert_eq!(image.uploader, "somepony");
    assert!(image.intensities.is_some());
}

#[tokio::test]
async fn test_get_featured_image() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/json/images/featured"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "image": sample_image(7) })))
        .mount(&mock_server)
        .await;

    let image = get_featured_image(&config_for(&mock_server)).await.unwrap();
    assert_eq!(image.id, 7);
}

// ============================================================================
// Auth Key Tests
// ============================================================================

#[tokio::test]
async fn test_config_api_key_is_sent_as_query_param() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/json/forums"))
        .and(query_param("key", "sekrit"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total": 1,
            "forums": [sample_forum()]
        })))
        .mount(&mock_server)
        .await;

    let config = ConnectionConfig::builder(format!("{}/api/v1/json", mock_server.uri()))
        .api_key("sekrit")
        .build();

    let collection = get_forums(&config).await.unwrap();
    assert_eq!(collection.forums[0].short_name, "dis");
}

#[tokio::test]
async fn test_options_key_takes_precedence_over_config_key() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/json/search/tags"))
        .and(query_param("key", "per-request"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total": 0,
            "tags": []
        })))
        .mount(&mock_server)
        .await;

    let config = ConnectionConfig::builder(format!("{}/api/v1/json", mock_server.uri()))
        .api_key("config-wide")
        .build();

    let options = SearchOptions::new().key("per-request");
    let collection = search_tags(&config, &options).await.unwrap();
    assert_eq!(collection.total, 0);
}

#[tokio::test]
async fn test_get_user_filters_fails_fast_without_key() {
    // No server: the error must occur before any request.
    let config = ConnectionConfig::new("http://localhost:9/api/v1/json");

    let err = get_user_filters(&config).await.unwrap_err();
    assert!(matches!(err, Error::InvalidOptions { .. }));
}

#[tokio::test]
async fn test_get_user_filters_with_key() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/json/filters/user"))
        .and(query_param("key", "sekrit"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total": 1,
            "filters": [sample_filter()]
        })))
        .mount(&mock_server)
        .await;

    let config = ConnectionConfig::builder(format!("{}/api/v1/json", mock_server.uri()))
        .api_key("sekrit")
        .build();

    let collection = get_user_filters(&config).await.unwrap();
    assert!(collection.filters[0].system);
}

// ============================================================================
// Error Propagation Tests
// ============================================================================

#[tokio::test]
async fn test_http_error_status_propagates() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/json/images/1"))
        .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
        .mount(&mock_server)
        .await;

    let err = get_image(&config_for(&mock_server), 1, None)
        .await
        .unwrap_err();

    match err {
        Error::HttpStatus { status, body } => {
            assert_eq!(status, 404);
            assert_eq!(body, "not found");
        }
        other => panic!("expected HttpStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn test_shape_mismatch_surfaces_offending_path() {
    let mock_server = MockServer::start().await;

    // Second tag is missing most required fields.
    Mock::given(method("GET"))
        .and(path("/api/v1/json/search/tags"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total": 2,
            "tags": [sample_tag(1), { "id": 2 }]
        })))
        .mount(&mock_server)
        .await;

    let err = search_tags(&config_for(&mock_server), &SearchOptions::new())
        .await
        .unwrap_err();

    match err {
        Error::Shape { path, .. } => assert_eq!(path, "tags[1]"),
        other => panic!("expected Shape, got {other:?}"),
    }
}

#[tokio::test]
async fn test_invalid_per_page_rejected_before_request() {
    // Port 9 (discard) would hang or refuse; validation must trip first.
    let config = ConnectionConfig::new("http://localhost:9/api/v1/json");
    let options = SearchOptions::new().per_page(99);

    let err = search_images(&config, &options).await.unwrap_err();
    match err {
        Error::InvalidOptions { field, .. } => assert_eq!(field, "perPage"),
        other => panic!("expected InvalidOptions, got {other:?}"),
    }
}

// ============================================================================
// Query Merge Tests
// ============================================================================

#[tokio::test]
async fn test_get_image_comments_merges_image_clause_into_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/json/search/comments"))
        .and(query_param("q", "image_id:7,author:somepony"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total": 1,
            "comments": [sample_comment(1, 7)]
        })))
        .mount(&mock_server)
        .await;

    let options = SearchOptions::new().query("author:somepony");
    let collection = get_image_comments(&config_for(&mock_server), 7, Some(&options))
        .await
        .unwrap();

    assert_eq!(collection.comments[0].image_id, 7);
}

#[tokio::test]
async fn test_get_image_comments_without_caller_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/json/search/comments"))
        .and(query_param("q", "image_id:7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total": 0,
            "comments": []
        })))
        .mount(&mock_server)
        .await;

    let collection = get_image_comments(&config_for(&mock_server), 7, None)
        .await
        .unwrap();

    assert_eq!(collection.total, 0);
}

// ============================================================================
// Remaining Single-Entity Endpoints
// ============================================================================

#[tokio::test]
async fn test_get_tag() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/json/tags/100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "tag": sample_tag(100) })))
        .mount(&mock_server)
        .await;

    let tag = get_tag(&config_for(&mock_server), 100).await.unwrap();
    assert_eq!(tag.id, 100);
    assert_eq!(tag.slug, "cute");
}

#[tokio::test]
async fn test_get_user() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/json/profiles/9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "user": sample_user(9) })))
        .mount(&mock_server)
        .await;

    let user = get_user(&config_for(&mock_server), 9).await.unwrap();
    assert_eq!(user.id, 9);
    assert_eq!(user.awards.len(), 1);
}

#[tokio::test]
async fn test_get_system_filters() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/json/filters/system"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total": 1,
            "filters": [sample_filter()]
        })))
        .mount(&mock_server)
        .await;

    let collection = get_system_filters(&config_for(&mock_server)).await.unwrap();
    assert_eq!(collection.filters.len(), 1);
}
