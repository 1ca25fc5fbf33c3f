//! Block descriptors.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Free-form block attributes, keyed by attribute name.
pub type Attributes = Map<String, Value>;

/// A structured representation of one editable content unit.
///
/// Blocks nest: a container block (a group, a column) owns an ordered list of
/// inner blocks that are serialized as part of its saved markup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    /// Block type name (e.g., "core/paragraph").
    pub name: String,
    /// Block attributes.
    #[serde(default)]
    pub attributes: Attributes,
    /// Nested blocks, in document order.
    #[serde(default)]
    pub inner_blocks: Vec<Block>,
    /// Saved HTML of this block, excluding its inner blocks.
    #[serde(default, rename = "innerHTML")]
    pub inner_html: String,
}

impl Block {
    /// Create a new block with no attributes or content.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set an attribute.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Append a single inner block.
    pub fn with_inner_block(mut self, block: Block) -> Self {
        self.inner_blocks.push(block);
        self
    }

    /// Replace the inner block list.
    pub fn with_inner_blocks(mut self, blocks: Vec<Block>) -> Self {
        self.inner_blocks = blocks;
        self
    }

    /// Set the saved HTML.
    pub fn with_inner_html(mut self, html: impl Into<String>) -> Self {
        self.inner_html = html.into();
        self
    }

    /// Get an attribute by name.
    pub fn attribute(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    /// Get a string attribute by name.
    pub fn attribute_str(&self, key: &str) -> Option<&str> {
        self.attribute(key).and_then(Value::as_str)
    }

    /// Whether this block has nested blocks.
    pub fn has_inner_blocks(&self) -> bool {
        !self.inner_blocks.is_empty()
    }

    /// Count every block nested below this one.
    pub fn descendant_count(&self) -> usize {
        self.inner_blocks
            .iter()
            .map(|b| 1 + b.descendant_count())
            .sum()
    }
}
