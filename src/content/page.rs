use serde::{Deserialize, Serialize};

use super::section::{active_sections, Section};

/// Link to the same page in another locale
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alternate {
    pub locale: String,
    pub slug: String,
}

/// One localized page as returned by `GET /api/pages`
///
/// Only `slug` is required on the wire; missing text fields come through
/// empty and missing lists come through empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageDoc {
    pub slug: String,

    #[serde(default)]
    pub locale: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero_image: Option<String>,

    #[serde(default)]
    pub page_title: String,

    #[serde(default)]
    pub meta_title: String,

    #[serde(default)]
    pub meta_description: String,

    #[serde(default)]
    pub sections: Vec<Section>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternates: Option<Vec<Alternate>>,
}

impl PageDoc {
    /// Sections to render, in render order
    pub fn active_sections(&self) -> Vec<&Section> {
        active_sections(&self.sections)
    }

    /// Slug of this page in `locale`, if the backend listed one
    pub fn alternate_for(&self, locale: &str) -> Option<&Alternate> {
        self.alternates
            .as_deref()
            .unwrap_or_default()
            .iter()
            .find(|alt| alt.locale == locale)
    }

    /// Title for the document head, falling back to the page title
    pub fn head_title(&self) -> &str {
        if self.meta_title.is_empty() {
            &self.page_title
        } else {
            &self.meta_title
        }
    }
}
