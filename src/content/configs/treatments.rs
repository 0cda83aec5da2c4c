use serde::{Deserialize, Serialize};

use super::{ConfigMeta, PageConfig};
use crate::content::ordering::{active_in_order, Orderable};

/// One treatment card
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Treatment {
    pub id: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub order: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl Orderable for Treatment {
    fn order(&self) -> i64 {
        self.order
    }

    fn active_flag(&self) -> Option<bool> {
        self.is_active
    }
}

/// Treatments overview page document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TreatmentsConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<ConfigMeta>,
    pub title: String,
    pub subtitle: String,
    pub treatments: Vec<Treatment>,
}

impl TreatmentsConfig {
    pub fn active_treatments(&self) -> Vec<&Treatment> {
        active_in_order(&self.treatments)
    }
}

impl PageConfig for TreatmentsConfig {
    const ENDPOINT: &'static str = "api/treatments";
    const NAME: &'static str = "treatments";
}

fn treatment(id: &str, order: i64, title: &str, summary: &str) -> Treatment {
    Treatment {
        id: id.to_string(),
        slug: id.to_string(),
        title: title.to_string(),
        summary: summary.to_string(),
        image: None,
        order,
        is_active: None,
    }
}

impl Default for TreatmentsConfig {
    fn default() -> Self {
        Self {
            meta: Some(ConfigMeta {
                version: Some("1.0".to_string()),
                last_updated: None,
            }),
            title: "Our Treatments".to_string(),
            subtitle: "Personalised fertility care at every step.".to_string(),
            treatments: vec![
                treatment("ivf-icsi", 1, "IVF / ICSI", "In vitro fertilisation with intracytoplasmic sperm injection."),
                treatment("iui", 2, "Insemination (IUI)", "Prepared sperm placed directly in the uterus around ovulation."),
                treatment("egg-freezing", 3, "Egg Freezing", "Preserve fertility by vitrifying mature eggs."),
                treatment("pgt", 4, "Genetic Testing (PGT)", "Screening embryos before transfer."),
            ],
        }
    }
}
