/*!
 * Fetch client tests against a local HTTP server
 */

use std::time::Duration;
use anyhow::Result;
use clinic_content::api::{self, ApiClient, ContentSource};
use clinic_content::content::configs::{ContactConfig, IvfIcsiConfig, TreatmentsConfig};
use clinic_content::errors::FetchError;

use crate::common::{home_page_json, MockReply, MockServer};

#[tokio::test]
async fn test_fetchPage_withOkBody_shouldReturnPage() -> Result<()> {
    let server = MockServer::start(MockReply::json(200, &home_page_json())).await?;

    let page = api::fetch_page(&server.client(), "home", "en").await;

    let page = page.expect("page should be present");
    assert_eq!(page.slug, "home");
    assert_eq!(page.page_title, "Home");
    Ok(())
}

#[tokio::test]
async fn test_fetchPage_shouldForwardSlugAndLocaleAsQuery() -> Result<()> {
    let server = MockServer::start(MockReply::json(200, &home_page_json())).await?;

    api::fetch_page(&server.client(), "ivf & icsi", "tr").await;

    let lines = server.request_lines().await;
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("GET /api/pages?slug=ivf+%26+icsi&locale=tr "), "got {}", lines[0]);
    Ok(())
}

#[tokio::test]
async fn test_fetchPage_withServerError_shouldReturnNone() -> Result<()> {
    let server = MockServer::start(MockReply::json(500, r#"{"error":"boom"}"#)).await?;
    assert!(api::fetch_page(&server.client(), "home", "en").await.is_none());
    Ok(())
}

#[tokio::test]
async fn test_fetchPage_withNotFound_shouldReturnNone() -> Result<()> {
    let server = MockServer::start(MockReply::json(404, "")).await?;
    assert!(api::fetch_page(&server.client(), "missing", "en").await.is_none());
    Ok(())
}

#[tokio::test]
async fn test_fetchPage_withNullBody_shouldReturnNone() -> Result<()> {
    let server = MockServer::start(MockReply::json(200, "null")).await?;
    assert!(api::fetch_page(&server.client(), "home", "en").await.is_none());
    Ok(())
}

#[tokio::test]
async fn test_fetchPage_withEmptyBody_shouldReturnNone() -> Result<()> {
    let server = MockServer::start(MockReply::json(200, "")).await?;
    assert!(api::fetch_page(&server.client(), "home", "en").await.is_none());
    Ok(())
}

#[tokio::test]
async fn test_fetchPage_withMalformedBody_shouldReturnNone() -> Result<()> {
    let server = MockServer::start(MockReply::json(200, "<html>oops</html>")).await?;
    assert!(api::fetch_page(&server.client(), "home", "en").await.is_none());
    Ok(())
}

#[tokio::test]
async fn test_fetchPage_withHangingServer_shouldTimeOutToNone() -> Result<()> {
    let server = MockServer::start(MockReply::Hang).await?;

    let started = std::time::Instant::now();
    let page = api::fetch_page(&server.client(), "home", "en").await;

    assert!(page.is_none());
    assert!(started.elapsed() < Duration::from_secs(5));
    Ok(())
}

#[tokio::test]
async fn test_getJson_withHangingServer_shouldReportTimeout() -> Result<()> {
    let server = MockServer::start(MockReply::Hang).await?;

    let result = server.client().get_json(api::PAGES_ENDPOINT, &[]).await;
    assert!(matches!(result, Err(FetchError::Timeout(_))), "got {:?}", result);
    Ok(())
}

#[tokio::test]
async fn test_getJson_withServerError_shouldReportStatus() -> Result<()> {
    let server = MockServer::start(MockReply::json(503, "down")).await?;

    let result = server.client().get_json("api/contact", &[]).await;
    match result {
        Err(FetchError::ApiError { status_code, message }) => {
            assert_eq!(status_code, 503);
            assert_eq!(message, "down");
        }
        other => panic!("expected ApiError, got {:?}", other),
    }
    Ok(())
}

#[tokio::test]
async fn test_fetchPage_withUnreachableHost_shouldReturnNone() {
    // Nothing listens on port 9 locally
    let client = ApiClient::new("http://127.0.0.1:9", Duration::from_millis(300)).unwrap();
    assert!(api::fetch_page(&client, "home", "en").await.is_none());
}

#[tokio::test]
async fn test_fetchPage_withoutBaseUrl_shouldReturnNone() {
    let client = ApiClient::new("", Duration::from_millis(300)).unwrap();
    assert!(api::fetch_page(&client, "home", "en").await.is_none());
}

#[tokio::test]
async fn test_fetchContact_withEnvelope_shouldUnwrapData() -> Result<()> {
    let body = r#"{"data":{"title":"Bize Ulaşın","phone":"+90 1"},"meta":{"locale":"tr","timestamp":"2024-05-01T10:00:00Z"}}"#;
    let server = MockServer::start(MockReply::json(200, body)).await?;

    let config = api::fetch_contact(&server.client(), "tr").await;

    assert_eq!(config.title, "Bize Ulaşın");
    assert_eq!(config.phone, "+90 1");
    let lines = server.request_lines().await;
    assert!(lines[0].starts_with("GET /api/contact?locale=tr "), "got {}", lines[0]);
    Ok(())
}

#[tokio::test]
async fn test_fetchConfigs_withFailingApi_shouldFallBackToDefaults() -> Result<()> {
    let server = MockServer::start(MockReply::json(500, "")).await?;
    let client = server.client();

    assert_eq!(api::fetch_contact(&client, "en").await, ContactConfig::default());
    assert_eq!(api::fetch_treatments(&client, "en").await, TreatmentsConfig::default());
    assert_eq!(api::fetch_ivf_icsi(&client, "en").await, IvfIcsiConfig::default());
    assert_eq!(api::fetch_contact_map(&client, "en").await.title, "Find Us");
    Ok(())
}

#[tokio::test]
async fn test_fetchConfig_withNullBody_shouldReturnNone() -> Result<()> {
    let server = MockServer::start(MockReply::json(200, "null")).await?;
    let config: Option<TreatmentsConfig> = api::fetch_config(&server.client(), "en").await;
    assert!(config.is_none());
    Ok(())
}

#[tokio::test]
async fn test_fetchConfig_withMalformedEnvelopeData_shouldReturnNone() -> Result<()> {
    let body = r#"{"data":{"title":"Tedaviler","treatments":[{"title":"no id","order":1}]}}"#;
    let server = MockServer::start(MockReply::json(200, body)).await?;

    let config: Option<TreatmentsConfig> = api::fetch_config(&server.client(), "tr").await;
    assert!(config.is_none());

    // The page still renders, from the built-in config
    let fallback = api::fetch_treatments(&server.client(), "tr").await;
    assert_eq!(fallback, TreatmentsConfig::default());
    Ok(())
}
