use anyhow::{Context, Result};
use log::{debug, info};

use crate::api::{self, ApiClient, ContentSource};
use crate::app_config::Config;
use crate::i18n;
use crate::render;

// @module: Application controller tying config, API client and renderer together

/// Domain pages served from their own config endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainPage {
    Contact,
    ContactMap,
    Treatments,
    IvfIcsi,
}

/// Main application controller
#[derive(Debug)]
pub struct Controller<S: ContentSource = ApiClient> {
    // @field: App configuration
    config: Config,
    // @field: Where documents come from
    source: S,
}

impl Controller<ApiClient> {
    // @method: Create a controller talking HTTP to the configured API
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;
        let source = ApiClient::from_config(&config.api)
            .context("Failed to create content API client")?;
        Ok(Self { config, source })
    }
}

impl<S: ContentSource> Controller<S> {
    /// Create a controller over any content source
    pub fn with_source(config: Config, source: S) -> Self {
        Self { config, source }
    }

    /// The locale to use when the caller did not pick one
    pub fn resolve_locale(&self, locale: Option<&str>) -> String {
        locale.unwrap_or(&self.config.default_locale).to_string()
    }

    /// Fetch and render a page; absent pages render the not-found fragment
    pub async fn render_page(&self, slug: &str, locale: &str) -> String {
        info!("Rendering page '{}' ({})", slug, locale);
        match api::fetch_page(&self.source, slug, locale).await {
            Some(page) => render::render_page(&page),
            None => render::render_not_found(locale),
        }
    }

    /// Fetch and render a domain page, using its built-in config when the API
    /// has nothing
    pub async fn render_domain_page(&self, page: DomainPage, locale: &str) -> String {
        info!("Rendering {:?} page ({})", page, locale);
        match page {
            DomainPage::Contact => {
                let config = api::fetch_contact(&self.source, locale).await;
                render::render_contact(&config, locale)
            }
            DomainPage::ContactMap => {
                let config = api::fetch_contact_map(&self.source, locale).await;
                render::render_contact_map(&config, locale)
            }
            DomainPage::Treatments => {
                let config = api::fetch_treatments(&self.source, locale).await;
                render::render_treatments(&config, locale)
            }
            DomainPage::IvfIcsi => {
                let config = api::fetch_ivf_icsi(&self.source, locale).await;
                render::render_ivf_icsi(&config)
            }
        }
    }

    /// Resolve a UI string
    pub fn translate(&self, key: &str, locale: &str) -> String {
        if !i18n::is_supported(locale) {
            debug!("Locale '{}' has no dictionary, using '{}'", locale, i18n::PRIMARY_LOCALE);
        }
        i18n::lookup(locale, key).to_string()
    }
}
