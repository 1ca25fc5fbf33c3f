//! The serializer seam: block lists in, markup out.

use std::rc::Rc;

use thiserror::Error;

use crate::block::Block;

/// Options passed to a [`BlockSerializer`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SerializeOptions {
    /// The list being serialized is nested inside a parent block.
    pub is_inner_blocks: bool,
}

impl SerializeOptions {
    /// Options for serializing a parent's inner blocks.
    pub fn inner_blocks() -> Self {
        Self {
            is_inner_blocks: true,
        }
    }
}

/// Errors a serializer may report.
#[derive(Error, Debug)]
pub enum SerializeError {
    /// Block has an empty or malformed name.
    #[error("Invalid block name: {0:?}")]
    InvalidBlockName(String),

    /// Block type is not known to the serializer.
    #[error("Unknown block type: {0}")]
    UnknownBlockType(String),

    /// Block attributes could not be serialized.
    #[error("Invalid attributes for {block}: {message}")]
    InvalidAttributes { block: String, message: String },

    /// JSON encoding error.
    #[error("JSON error: {0}")]
    Json(String),

    /// Any other serializer failure.
    #[error("Serialization failed: {0}")]
    Failed(String),
}

impl From<serde_json::Error> for SerializeError {
    fn from(e: serde_json::Error) -> Self {
        SerializeError::Json(e.to_string())
    }
}

/// Turns an ordered list of blocks into markup text.
pub trait BlockSerializer {
    /// Serialize `blocks` in order.
    fn serialize(
        &self,
        blocks: &[Block],
        options: &SerializeOptions,
    ) -> Result<String, SerializeError>;
}

impl<F> BlockSerializer for F
where
    F: Fn(&[Block], &SerializeOptions) -> Result<String, SerializeError>,
{
    fn serialize(
        &self,
        blocks: &[Block],
        options: &SerializeOptions,
    ) -> Result<String, SerializeError> {
        self(blocks, options)
    }
}

impl<S: BlockSerializer + ?Sized> BlockSerializer for Rc<S> {
    fn serialize(
        &self,
        blocks: &[Block],
        options: &SerializeOptions,
    ) -> Result<String, SerializeError> {
        (**self).serialize(blocks, options)
    }
}
