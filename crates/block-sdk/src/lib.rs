//! Public SDK for rendering nested block content.
//!
//! This crate re-exports all block content functionality:
//!
//! ```ignore
//! use block_sdk::prelude::*;
//!
//! fn save_group(scope: &Scope, _: &()) -> RenderResult {
//!     let inner = inner_blocks_content().render(scope, &())?;
//!     Ok(Markup::element("div", &[("class", "wp-block-group")], inner))
//! }
//!
//! let provider = BlockContentProvider::new(serializer);
//! let props = BlockContentProviderProps::new(group.inner_blocks.clone())
//!     .with_children(Children::component(save_group, ()));
//! let html = render_to_string(&provider, &props)?;
//! ```

pub use block_content;
pub use block_context;
pub use block_core;
pub use block_observability;

/// Prelude for convenient imports.
pub mod prelude {
    pub use block_content::*;
    pub use block_context::*;
    pub use block_core::*;
    pub use block_observability::*;
}
