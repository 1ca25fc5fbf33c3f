//! Core abstractions for rendering nested block content.
//!
//! This crate provides the fundamental types and traits:
//! - `Block` - Structured block descriptor
//! - `BlockSerializer` trait - Turns a block list into markup
//! - `RawHtml` / `Markup` - Trusted and escaped HTML fragments

mod block;
mod markup;
mod serialize;

pub use block::*;
pub use markup::*;
pub use serialize::*;
