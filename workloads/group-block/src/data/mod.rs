//! Sample content.

mod post;

pub use post::*;
