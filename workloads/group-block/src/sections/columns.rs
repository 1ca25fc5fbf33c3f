//! Columns and column blocks.

use block_sdk::prelude::*;

use super::props::SaveProps;

/// Render the saved markup of a columns container.
pub fn save_columns(scope: &Scope, props: &SaveProps) -> RenderResult {
    with_block_content_context(|content: &BlockContent, _: &SaveProps| content.clone())
        .wrap(columns_markup)
        .render(scope, props)
}

fn columns_markup(_: &Scope, props: &Merged<SaveProps, BlockContent>) -> RenderResult {
    let inner = Markup::raw(props.extra.render()?);
    let classes = props.classes("wp-block-columns");
    Ok(Markup::element("div", &[("class", classes.as_str())], inner))
}

/// Render the saved markup of a single column.
pub fn save_column(scope: &Scope, props: &SaveProps) -> RenderResult {
    let inner = inner_blocks_content().render(scope, &())?;
    let classes = props.classes("wp-block-column");

    match &props.width {
        Some(width) => {
            let style = format!("flex-basis:{}", width);
            Ok(Markup::element(
                "div",
                &[("class", classes.as_str()), ("style", style.as_str())],
                inner,
            ))
        }
        None => Ok(Markup::element("div", &[("class", classes.as_str())], inner)),
    }
}
