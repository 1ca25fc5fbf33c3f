//! Explicit context scopes and the component model.
//!
//! Values that a parent wants to share with its descendants are placed in a
//! [`Scope`] and handed down explicitly:
//! - `Scope` - A node in the render tree holding typed shared values
//! - `Component` trait - Renders props against a scope
//! - `Children` - A renderable subtree

mod component;
mod scope;

pub use component::*;
pub use scope::*;
