use serde::{Deserialize, Serialize};

use super::{ConfigMeta, PageConfig};
use crate::content::ordering::{active_in_order, Orderable};

/// A "how to get here" entry shown under the map
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Direction {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub order: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl Orderable for Direction {
    fn order(&self) -> i64 {
        self.order
    }

    fn active_flag(&self) -> Option<bool> {
        self.is_active
    }
}

/// Location block of the contact page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactMapConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<ConfigMeta>,
    pub title: String,
    pub address: String,
    pub embed_url: String,
    pub latitude: f64,
    pub longitude: f64,
    pub zoom: u8,
    pub directions: Vec<Direction>,
}

impl ContactMapConfig {
    pub fn active_directions(&self) -> Vec<&Direction> {
        active_in_order(&self.directions)
    }
}

impl PageConfig for ContactMapConfig {
    const ENDPOINT: &'static str = "api/contact-map";
    const NAME: &'static str = "contact-map";
}

impl Default for ContactMapConfig {
    fn default() -> Self {
        Self {
            meta: None,
            title: "Find Us".to_string(),
            address: "Istanbul, Turkey".to_string(),
            embed_url: "https://www.google.com/maps/embed?pb=clinic".to_string(),
            latitude: 41.0082,
            longitude: 28.9784,
            zoom: 15,
            directions: vec![
                Direction {
                    id: "metro".to_string(),
                    title: "By metro".to_string(),
                    description: "Five minutes on foot from the nearest metro station.".to_string(),
                    order: 1,
                    is_active: None,
                },
                Direction {
                    id: "car".to_string(),
                    title: "By car".to_string(),
                    description: "Free parking is available for patients.".to_string(),
                    order: 2,
                    is_active: None,
                },
            ],
        }
    }
}
