/*!
 * Controller tests: fetch, reduce and render end to end
 */

use anyhow::Result;
use clinic_content::app_config::Config;
use clinic_content::app_controller::{Controller, DomainPage};

use crate::common::{home_page_json, MockReply, MockServer};

fn controller_for(server: &MockServer) -> Controller {
    Controller::with_source(Config::default(), server.client())
}

#[tokio::test]
async fn test_renderPage_withPage_shouldRenderActiveSectionsInOrder() -> Result<()> {
    let _ = env_logger::builder().is_test(true).try_init();
    let server = MockServer::start(MockReply::json(200, &home_page_json())).await?;

    let html = controller_for(&server).render_page("home", "en").await;

    assert!(html.contains("<title>Clinic | Home</title>"));
    assert!(html.contains("<h1>Home</h1>"));
    assert!(html.contains("hreflang=\"tr\" href=\"/tr/anasayfa\""));
    assert!(!html.contains("secret"));
    let intro = html.find("id=\"intro\"").expect("intro rendered");
    let faq = html.find("id=\"faq\"").expect("faq rendered");
    assert!(intro < faq);
    assert!(html.contains("<ul><li>IVF</li><li>ICSI</li></ul>"));
    Ok(())
}

#[tokio::test]
async fn test_renderPage_withMissingPage_shouldRenderLocalizedNotFound() -> Result<()> {
    let server = MockServer::start(MockReply::json(404, "")).await?;

    let html = controller_for(&server).render_page("nope", "tr").await;

    assert!(html.contains("Sayfa bulunamadı"));
    Ok(())
}

#[tokio::test]
async fn test_renderDomainPage_withFailingApi_shouldUseDefaults() -> Result<()> {
    let server = MockServer::start(MockReply::json(500, "")).await?;
    let controller = controller_for(&server);

    let treatments = controller.render_domain_page(DomainPage::Treatments, "en").await;
    assert!(treatments.contains("Our Treatments"));
    assert!(treatments.contains("href=\"/en/ivf-icsi\""));

    let ivf = controller.render_domain_page(DomainPage::IvfIcsi, "en").await;
    assert!(ivf.contains("<ol><li>Ovarian stimulation</li>"));

    let contact = controller.render_domain_page(DomainPage::Contact, "tr").await;
    assert!(contact.contains("Çalışma saatleri"));

    let map = controller.render_domain_page(DomainPage::ContactMap, "en").await;
    assert!(map.contains("How to get here"));
    Ok(())
}

#[tokio::test]
async fn test_resolveLocale_withoutLocale_shouldUseConfiguredDefault() -> Result<()> {
    let server = MockServer::start(MockReply::json(404, "")).await?;
    let controller = controller_for(&server);

    assert_eq!(controller.resolve_locale(None), "en");
    assert_eq!(controller.resolve_locale(Some("tr")), "tr");
    assert_eq!(controller.translate("nav.treatments", "tr"), "Tedaviler");
    assert_eq!(controller.translate("nav.unknown", "xx"), "nav.unknown");
    Ok(())
}

#[test]
fn test_withConfig_withInvalidBaseUrl_shouldFail() {
    let mut config = Config::default();
    config.api.base_url = "not a url".to_string();
    assert!(Controller::with_config(config).is_err());
}
