//! HTTP behavior of the newsapi.org client against a local mock server.

use httpmock::prelude::*;
use newsapi_rs_config::NewsApiSettings;
use newsapi_rs_tools::{NewsApiClient, NewsProvider, NewsProviderError, NewsQuery, search_news};
use pretty_assertions::assert_eq;
use serde_json::json;

fn settings(server: &MockServer) -> NewsApiSettings {
    NewsApiSettings::builder()
        .api_key("test-key")
        .base_url(server.url("/v2"))
        .build()
        .expect("settings")
}

/// One GET carries the keywords and API key and nothing else.
#[tokio::test]
async fn issues_single_get_with_keywords_and_api_key() {
    let server = MockServer::start_async().await;
    let with_domains = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v2/everything")
                .query_param_exists("domains");
            then.status(500);
        })
        .await;
    let everything = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v2/everything")
                .query_param("q", "rust language")
                .query_param("apiKey", "test-key");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({ "status": "ok", "totalResults": 0, "articles": [] }));
        })
        .await;

    let settings = settings(&server);
    let client = NewsApiClient::from_settings(&settings);
    let outcome = search_news(&client, &settings, "rust language").await;

    assert_eq!(outcome.to_string(), "No news found");
    everything.assert_async().await;
    with_domains.assert_hits_async(0).await;
}

/// Configured domain filters are forwarded verbatim.
#[tokio::test]
async fn forwards_domain_filters() {
    let server = MockServer::start_async().await;
    let everything = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v2/everything")
                .query_param("domains", "bbc.co.uk")
                .query_param("excludeDomains", "www.xataka.com")
                .query_param("q", "elections");
            then.status(200).json_body(json!({
                "status": "ok",
                "articles": [
                    { "description": null, "url": "a" },
                    {
                        "description": "d",
                        "url": "b",
                        "publishedAt": "t",
                        "urlToImage": "i",
                        "title": "ignored",
                    },
                ],
            }));
        })
        .await;

    let settings = NewsApiSettings::builder()
        .api_key("test-key")
        .domains("bbc.co.uk")
        .exclude_domains("www.xataka.com")
        .base_url(server.url("/v2"))
        .build()
        .expect("settings");
    let client = NewsApiClient::from_settings(&settings);
    let articles = client
        .everything(&NewsQuery::from_settings("elections", &settings))
        .await
        .expect("articles");

    assert_eq!(articles.len(), 2);
    assert_eq!(articles[1].url_to_image.as_deref(), Some("i"));
    everything.assert_async().await;
}

/// Non-2xx answers surface the status and the provider message.
#[tokio::test]
async fn maps_error_status_with_provider_message() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/v2/everything");
            then.status(401).json_body(json!({
                "status": "error",
                "code": "apiKeyInvalid",
                "message": "Your API key is invalid or incorrect.",
            }));
        })
        .await;

    let settings = settings(&server);
    let client = NewsApiClient::from_settings(&settings);
    let err = client
        .everything(&NewsQuery::from_settings("rust", &settings))
        .await
        .expect_err("unauthorized");

    assert_eq!(
        err,
        NewsProviderError::Status {
            status: 401,
            message: Some("Your API key is invalid or incorrect.".to_string()),
        }
    );
    assert_eq!(
        search_news(&client, &settings, "rust").await.to_string(),
        "Error: Request failed with status code 401: Your API key is invalid or incorrect."
    );
}

/// A 2xx body without an articles array is a decode failure.
#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/v2/everything");
            then.status(200).body("<html>maintenance</html>");
        })
        .await;

    let settings = settings(&server);
    let client = NewsApiClient::from_settings(&settings);
    let err = client
        .everything(&NewsQuery::from_settings("rust", &settings))
        .await
        .expect_err("decode");
    assert!(matches!(err, NewsProviderError::Decode(_)));

    let outcome = search_news(&client, &settings, "rust").await;
    assert!(outcome.is_failure());
    assert!(outcome.to_string().starts_with("Error: "));
}

/// Unreachable hosts become network errors rendered as text.
#[tokio::test]
async fn unreachable_provider_is_a_network_error() {
    let settings = NewsApiSettings::builder()
        .api_key("test-key")
        .base_url("http://127.0.0.1:9/v2")
        .build()
        .expect("settings");
    let client = NewsApiClient::from_settings(&settings);
    let err = client
        .everything(&NewsQuery::from_settings("rust", &settings))
        .await
        .expect_err("connection refused");
    assert!(matches!(err, NewsProviderError::Network(_)));
}

/// Transport failures never echo the request URL or the API key.
#[tokio::test]
async fn network_error_text_hides_api_key() {
    let settings = NewsApiSettings::builder()
        .api_key("SECRET-KEY-123")
        .base_url("http://127.0.0.1:9/v2")
        .build()
        .expect("settings");
    let client = NewsApiClient::from_settings(&settings);

    let outcome = search_news(&client, &settings, "rust").await;
    let rendered = outcome.to_string();

    assert!(outcome.is_failure());
    assert!(rendered.starts_with("Error: "), "{rendered}");
    assert!(!rendered.contains("SECRET-KEY-123"), "{rendered}");
    assert!(!rendered.contains("apiKey="), "{rendered}");
    // cause chain follows the top-level message
    assert!(
        rendered.trim_start_matches("Error: ").contains(": "),
        "{rendered}"
    );
}

/// A null timestamp on a skipped article does not fail the batch.
#[tokio::test]
async fn null_timestamp_on_skipped_article_is_tolerated() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/v2/everything");
            then.status(200).json_body(json!({
                "status": "ok",
                "articles": [
                    { "description": null, "url": "a", "publishedAt": null },
                    { "description": "d", "url": "b", "publishedAt": "t", "urlToImage": "i" },
                ],
            }));
        })
        .await;

    let settings = settings(&server);
    let client = NewsApiClient::from_settings(&settings);
    let outcome = search_news(&client, &settings, "rust").await;

    assert_eq!(
        outcome.to_string(),
        "Latest news (t): d. Invite the user to open the article by clicking on the attached link."
    );
}

/// Null fields on the reported article render as empty text.
#[tokio::test]
async fn null_fields_on_reported_article_render_empty() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/v2/everything");
            then.status(200).json_body(json!({
                "status": "ok",
                "articles": [
                    { "description": "no link", "url": null, "publishedAt": null },
                ],
            }));
        })
        .await;

    let settings = settings(&server);
    let client = NewsApiClient::from_settings(&settings);
    let articles = client
        .everything(&NewsQuery::from_settings("rust", &settings))
        .await
        .expect("articles");
    assert_eq!(articles[0].url, "");

    let outcome = search_news(&client, &settings, "rust").await;
    assert_eq!(
        outcome.to_string(),
        "Latest news (): no link. Invite the user to open the article by clicking on the attached link."
    );
}

/// A shared reqwest client works and a trailing slash on the base URL is ignored.
#[tokio::test]
async fn shared_client_trims_trailing_slash() {
    let server = MockServer::start_async().await;
    let everything = server
        .mock_async(|when, then| {
            when.method(GET).path("/v2/everything").query_param("q", "rust");
            then.status(200).json_body(json!({ "status": "ok", "articles": [] }));
        })
        .await;

    let settings = settings(&server);
    let client = NewsApiClient::with_client(reqwest::Client::new(), server.url("/v2/"));
    assert_eq!(client.endpoint(), server.url("/v2/everything"));

    let articles = client
        .everything(&NewsQuery::from_settings("rust", &settings))
        .await
        .expect("articles");
    assert!(articles.is_empty());
    everything.assert_async().await;
}
