//! Rendering the nearest inner block markup.

use block_context::{Component, RenderResult, Scope};
use block_core::Markup;

use crate::inject::{with_block_content_context, Merged};
use crate::provider::BlockContent;

fn render_block_content(_: &Scope, props: &Merged<(), BlockContent>) -> RenderResult {
    let html = props.extra.render()?;
    Ok(Markup::raw(html))
}

/// A component that renders the serialized inner blocks of the nearest
/// [`BlockContentProvider`](crate::BlockContentProvider) verbatim.
///
/// Renders nothing when no provider is above it.
pub fn inner_blocks_content() -> impl Component<()> + Clone {
    with_block_content_context(|content: &BlockContent, _: &()| content.clone())
        .wrap(render_block_content)
}
