use serde::{Deserialize, Serialize};

use super::block::Block;
use super::ordering::{active_in_order, Orderable};

/// An ordered, independently activatable group of blocks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    /// Unique identifier within the page
    pub id: String,

    /// Optional section title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Render position, ascending
    #[serde(default)]
    pub order: i64,

    /// Absent means active
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,

    /// Blocks in rendering order
    #[serde(default)]
    pub blocks: Vec<Block>,
}

impl Section {
    pub fn new(id: impl Into<String>, order: i64) -> Self {
        Self {
            id: id.into(),
            title: None,
            order,
            is_active: None,
            blocks: Vec::new(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_active(mut self, active: bool) -> Self {
        self.is_active = Some(active);
        self
    }

    pub fn with_block(mut self, block: Block) -> Self {
        self.blocks.push(block);
        self
    }
}

impl Orderable for Section {
    fn order(&self) -> i64 {
        self.order
    }

    fn active_flag(&self) -> Option<bool> {
        self.is_active
    }
}

/// Sections to render: `isActive != false`, sorted by `order`
pub fn active_sections(sections: &[Section]) -> Vec<&Section> {
    active_in_order(sections)
}
