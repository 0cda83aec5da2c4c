/*!
 * Content API access.
 *
 * `ContentSource` is the transport seam: it reports precise failures as
 * `FetchError`. The `fetch_*` functions below are the error boundary of the
 * crate. They log whatever went wrong and hand the caller either a document
 * or nothing, never an error.
 */

use async_trait::async_trait;
use log::{debug, warn};
use serde_json::Value;
use std::fmt::Debug;

use crate::content::configs::{
    ContactConfig, ContactMapConfig, IvfIcsiConfig, PageConfig, TreatmentsConfig, parse_config,
};
use crate::content::PageDoc;
use crate::errors::FetchError;

pub mod client;

pub use client::ApiClient;

/// Endpoint serving page documents
pub const PAGES_ENDPOINT: &str = "api/pages";

/// Anything that can answer a GET on the content API with a JSON body
#[async_trait]
pub trait ContentSource: Send + Sync + Debug {
    /// GET `endpoint` with `query` parameters.
    ///
    /// # Returns
    /// * `Ok(Some(value))` - 2xx with a JSON body
    /// * `Ok(None)` - 2xx with an empty body or JSON `null`
    /// * `Err(_)` - anything else
    async fn get_json(&self, endpoint: &str, query: &[(&str, &str)]) -> Result<Option<Value>, FetchError>;
}

async fn try_fetch_page<S>(source: &S, slug: &str, locale: &str) -> Result<Option<PageDoc>, FetchError>
where
    S: ContentSource + ?Sized,
{
    let body = source
        .get_json(PAGES_ENDPOINT, &[("slug", slug), ("locale", locale)])
        .await?;

    body.map(|value| serde_json::from_value::<PageDoc>(value).map_err(|e| FetchError::ParseError(e.to_string())))
        .transpose()
}

/// Fetch the page `slug` in `locale`.
///
/// Returns `None` when the page does not exist, the API is unreachable, the
/// request times out or the body is not a page document.
pub async fn fetch_page<S>(source: &S, slug: &str, locale: &str) -> Option<PageDoc>
where
    S: ContentSource + ?Sized,
{
    match try_fetch_page(source, slug, locale).await {
        Ok(Some(page)) => {
            debug!("Fetched page '{}' ({}) with {} sections", page.slug, page.locale, page.sections.len());
            Some(page)
        }
        Ok(None) => {
            debug!("No page document for '{}' ({})", slug, locale);
            None
        }
        Err(e) => {
            warn!("Fetching page '{}' ({}) failed: {}", slug, locale, e);
            None
        }
    }
}

async fn try_fetch_config<C, S>(source: &S, locale: &str) -> Result<Option<C>, FetchError>
where
    C: PageConfig,
    S: ContentSource + ?Sized,
{
    let body = source.get_json(C::ENDPOINT, &[("locale", locale)]).await?;

    body.map(|value| parse_config::<C>(value).map_err(|e| FetchError::ParseError(e.to_string())))
        .transpose()
}

/// Fetch a domain config, or `None` on any failure
pub async fn fetch_config<C, S>(source: &S, locale: &str) -> Option<C>
where
    C: PageConfig,
    S: ContentSource + ?Sized,
{
    match try_fetch_config::<C, S>(source, locale).await {
        Ok(Some(config)) => Some(config),
        Ok(None) => {
            debug!("No {} config returned for {}", C::NAME, locale);
            None
        }
        Err(e) => {
            warn!("Fetching {} config ({}) failed: {}", C::NAME, locale, e);
            None
        }
    }
}

/// Fetch a domain config, falling back to its built-in default
pub async fn fetch_config_or_default<C, S>(source: &S, locale: &str) -> C
where
    C: PageConfig,
    S: ContentSource + ?Sized,
{
    match fetch_config::<C, S>(source, locale).await {
        Some(config) => config,
        None => {
            debug!("Using built-in {} config", C::NAME);
            C::default()
        }
    }
}

pub async fn fetch_contact<S: ContentSource + ?Sized>(source: &S, locale: &str) -> ContactConfig {
    fetch_config_or_default(source, locale).await
}

pub async fn fetch_contact_map<S: ContentSource + ?Sized>(source: &S, locale: &str) -> ContactMapConfig {
    fetch_config_or_default(source, locale).await
}

pub async fn fetch_treatments<S: ContentSource + ?Sized>(source: &S, locale: &str) -> TreatmentsConfig {
    fetch_config_or_default(source, locale).await
}

pub async fn fetch_ivf_icsi<S: ContentSource + ?Sized>(source: &S, locale: &str) -> IvfIcsiConfig {
    fetch_config_or_default(source, locale).await
}
