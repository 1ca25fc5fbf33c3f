//! Save output for container blocks.

mod columns;
mod group;
mod props;

pub use columns::*;
pub use group::*;
pub use props::*;
