use serde::{Deserialize, Serialize};

use super::{ConfigMeta, PageConfig};
use crate::content::block::{heading, ordered_list, paragraph, unordered_list};
use crate::content::section::{active_sections, Section};

/// IVF / ICSI treatment page document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IvfIcsiConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<ConfigMeta>,
    pub hero_title: String,
    pub hero_subtitle: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hero_image: Option<String>,
    pub sections: Vec<Section>,
}

impl IvfIcsiConfig {
    pub fn active_sections(&self) -> Vec<&Section> {
        active_sections(&self.sections)
    }
}

impl PageConfig for IvfIcsiConfig {
    const ENDPOINT: &'static str = "api/ivf-icsi";
    const NAME: &'static str = "ivf-icsi";
}

impl Default for IvfIcsiConfig {
    fn default() -> Self {
        Self {
            meta: Some(ConfigMeta {
                version: Some("1.0".to_string()),
                last_updated: None,
            }),
            hero_title: "IVF / ICSI".to_string(),
            hero_subtitle: "Assisted reproduction tailored to you.".to_string(),
            hero_image: None,
            sections: vec![
                Section::new("what-is-ivf", 1)
                    .with_title("What is IVF / ICSI?")
                    .with_block(paragraph(
                        "Eggs are collected and fertilised in the laboratory. With ICSI a single sperm is injected into each mature egg.",
                    )),
                Section::new("process", 2)
                    .with_title("Treatment steps")
                    .with_block(ordered_list([
                        "Ovarian stimulation",
                        "Egg collection",
                        "Fertilisation (ICSI)",
                        "Embryo culture",
                        "Embryo transfer",
                    ])),
                Section::new("candidates", 3)
                    .with_title("Who is it for?")
                    .with_block(heading("Common indications"))
                    .with_block(unordered_list([
                        "Blocked or damaged fallopian tubes",
                        "Low sperm count or motility",
                        "Unexplained infertility",
                    ])),
            ],
        }
    }
}
