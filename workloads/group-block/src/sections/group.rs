//! Group block.

use block_sdk::prelude::*;

use super::props::SaveProps;

/// Render the saved markup of a group.
pub fn save_group(scope: &Scope, props: &SaveProps) -> RenderResult {
    let inner = inner_blocks_content().render(scope, &())?;
    let classes = props.classes("wp-block-group");
    Ok(Markup::element(props.tag_name, &[("class", classes.as_str())], inner))
}
