//! Container blocks - saved markup that embeds nested blocks.
//!
//! This workload demonstrates:
//! - Group, columns and column save output built around their inner blocks
//! - A `BlockContentProvider` per container, bound to that container's blocks
//! - A comment-delimited serializer that recurses through container saves
//! - Logging and serializer metrics driven by `ObservabilityConfig`

mod data;
mod sections;
mod serializer;

use std::rc::{Rc, Weak};

use block_sdk::prelude::*;

pub use data::*;
pub use sections::*;
pub use serializer::CommentDelimitedSerializer;

type SaveFn = fn(&Scope, &SaveProps) -> RenderResult;

/// Save component for a container block type.
pub fn save_component(name: &str) -> Option<SaveFn> {
    match name {
        "core/group" => Some(save_group as SaveFn),
        "core/columns" => Some(save_columns),
        "core/column" => Some(save_column),
        _ => None,
    }
}

/// Render the saved markup of one block.
///
/// Container blocks render their save component under a provider bound to
/// their inner blocks; other blocks render their stored HTML.
pub fn render_block(block: &Block, serializer: Rc<dyn BlockSerializer>) -> RenderResult {
    let Some(save) = save_component(&block.name) else {
        return Ok(Markup::raw(RawHtml::new(block.inner_html.clone())));
    };

    let provider = BlockContentProvider::from_shared(serializer);
    let props = BlockContentProviderProps::new(block.inner_blocks.clone())
        .with_children(Children::component(save, SaveProps::from_block(block)));

    let scope = Scope::root().child(block.name.clone());
    provider.render(&scope, &props)
}

/// Serialize a sequence of top-level blocks.
pub fn render_page(
    blocks: &[Block],
    serializer: &dyn BlockSerializer,
) -> Result<RawHtml, SerializeError> {
    serializer
        .serialize(blocks, &SerializeOptions::default())
        .map(RawHtml::new)
}

/// Build a comment-delimited serializer wrapped with logging and, when
/// enabled, metrics. Nested containers serialize through the same wrapper, so
/// every serializer call of a render pass is logged and measured.
pub fn instrumented_serializer(
    config: &ObservabilityConfig,
    logger: StructuredLogger,
) -> (Rc<dyn BlockSerializer>, Option<MetricsHandle>) {
    type Instrumented = InstrumentedSerializer<CommentDelimitedSerializer>;

    let mut metrics = None;
    let instrumented = Rc::new_cyclic(|weak: &Weak<Instrumented>| {
        let outer: Weak<dyn BlockSerializer> = weak.clone();
        let (serializer, handle) =
            config.instrument(CommentDelimitedSerializer::nested_through(outer), logger);
        metrics = handle;
        serializer
    });
    let serializer: Rc<dyn BlockSerializer> = instrumented;
    (serializer, metrics)
}

/// A rendered document.
#[derive(Debug, Clone)]
pub struct RenderedDocument {
    /// Full HTML page.
    pub html: String,
    /// Serializer metrics, when enabled.
    pub metrics: Option<SerializeMetrics>,
}

/// Serialize a post and wrap it in a page.
pub fn render_document(
    title: &str,
    blocks: &[Block],
    config: &ObservabilityConfig,
) -> anyhow::Result<RenderedDocument> {
    let logger = config.logger(RenderId::generate());
    let (serializer, metrics) = instrumented_serializer(config, logger.clone());

    let content = render_page(blocks, serializer.as_ref())?;
    let html = page_shell(title, &content);

    logger
        .info_builder("rendered document")
        .field("title", title)
        .field_u64("blocks", blocks.len() as u64)
        .field_u64("bytes", html.len() as u64)
        .emit();

    Ok(RenderedDocument {
        html,
        metrics: metrics.map(|m| m.snapshot()),
    })
}

fn page_shell(title: &str, content: &RawHtml) -> String {
    let mut body = Markup::new();
    body.push_raw(content);

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{}</title>
</head>
<body>
{}
</body>
</html>"#,
        escape_html(title),
        Markup::element("main", &[("class", "entry-content")], body)
    )
}
