/*!
 * Content blocks: the smallest renderable unit of a page section.
 *
 * Blocks arrive as JSON objects discriminated by their `type` field. Tags
 * this crate does not know yet are kept as `Block::Unknown` so a newer
 * backend never breaks an older renderer.
 */

use serde::{Deserialize, Serialize};

/// One renderable content unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Block {
    /// Free text
    Paragraph {
        #[serde(default)]
        value: String,
    },

    /// Single-level subheading
    Heading {
        #[serde(default)]
        value: String,
    },

    /// Bulleted list, items in rendering order
    UnorderedList {
        #[serde(default)]
        items: Vec<String>,
    },

    /// Numbered list, items in rendering order
    OrderedList {
        #[serde(default)]
        items: Vec<String>,
    },

    /// Image with optional alternative text
    Image {
        #[serde(default)]
        url: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        alt: Option<String>,
    },

    /// Any tag not listed above
    #[serde(other)]
    Unknown,
}

impl Block {
    /// Wire tag of this block
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Paragraph { .. } => "paragraph",
            Self::Heading { .. } => "heading",
            Self::UnorderedList { .. } => "unorderedList",
            Self::OrderedList { .. } => "orderedList",
            Self::Image { .. } => "image",
            Self::Unknown => "unknown",
        }
    }

    /// True for variants a renderer knows how to draw
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

/// Build a paragraph block. Empty text is valid.
pub fn paragraph(value: impl Into<String>) -> Block {
    Block::Paragraph { value: value.into() }
}

/// Build a heading block. Empty text is valid.
pub fn heading(value: impl Into<String>) -> Block {
    Block::Heading { value: value.into() }
}

/// Build an unordered list block. An empty list is valid.
pub fn unordered_list<I, S>(items: I) -> Block
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Block::UnorderedList {
        items: items.into_iter().map(Into::into).collect(),
    }
}

/// Build an ordered list block. An empty list is valid.
pub fn ordered_list<I, S>(items: I) -> Block
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Block::OrderedList {
        items: items.into_iter().map(Into::into).collect(),
    }
}

/// Build an image block
pub fn image(url: impl Into<String>, alt: Option<&str>) -> Block {
    Block::Image {
        url: url.into(),
        alt: alt.map(str::to_string),
    }
}
