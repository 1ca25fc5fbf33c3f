//! Access to a parent block's serialized inner blocks.
//!
//! A container block's save output needs the markup of its nested blocks.
//! This crate provides:
//! - `BlockContentProvider` - Binds a serializer over a block's inner blocks
//!   and shares the result with everything rendered below it
//! - `with_block_content_context` - Decorates a component with props derived
//!   from the nearest `BlockContent`
//! - `inner_blocks_content` - Renders the nearest inner block markup verbatim
//!
//! ```ignore
//! let provider = BlockContentProvider::new(serializer);
//! let props = BlockContentProviderProps::new(block.inner_blocks.clone())
//!     .with_children(Children::component(inner_blocks_content(), ()));
//! let html = render_to_string(&provider, &props)?;
//! ```

mod inject;
mod inner_blocks;
mod provider;

pub use inject::*;
pub use inner_blocks::*;
pub use provider::*;
