//! Props shared by container save components.

use block_sdk::block_core::Block;

/// Wrapper elements a group may render as.
const ALLOWED_TAGS: &[&str] = &["div", "section", "main", "article", "aside", "header", "footer"];

/// Save props derived from a container block's attributes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SaveProps {
    /// Wrapper element.
    pub tag_name: &'static str,
    /// Extra class names from the `className` attribute.
    pub class_name: Option<String>,
    /// Column width from the `width` attribute.
    pub width: Option<String>,
}

impl SaveProps {
    /// Read save props from block attributes.
    pub fn from_block(block: &Block) -> Self {
        let tag_name = block
            .attribute_str("tagName")
            .and_then(|tag| ALLOWED_TAGS.iter().copied().find(|allowed| *allowed == tag))
            .unwrap_or("div");

        Self {
            tag_name,
            class_name: block.attribute_str("className").map(String::from),
            width: block.attribute_str("width").map(String::from),
        }
    }

    /// Class list with the block's base class first.
    pub fn classes(&self, base: &str) -> String {
        match &self.class_name {
            Some(extra) if !extra.trim().is_empty() => format!("{} {}", base, extra.trim()),
            _ => base.to_string(),
        }
    }
}
