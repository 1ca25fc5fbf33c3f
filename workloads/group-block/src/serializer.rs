//! Comment-delimited block serializer.

use std::rc::{Rc, Weak};

use block_sdk::prelude::*;

/// Blocks rendered at the top level without delimiters.
const FREEFORM_BLOCK: &str = "core/freeform";

/// Serializes each block as its saved markup between HTML comment delimiters:
///
/// ```text
/// <!-- wp:group {"tagName":"section"} -->
/// <section class="wp-block-group">...</section>
/// <!-- /wp:group -->
/// ```
///
/// Container blocks get their saved markup from [`render_block`](crate::render_block),
/// which in turn serializes their inner blocks through this serializer, or
/// through the outer serializer set with [`nested_through`](Self::nested_through).
#[derive(Debug, Clone, Default)]
pub struct CommentDelimitedSerializer {
    outer: Option<Weak<dyn BlockSerializer>>,
}

impl CommentDelimitedSerializer {
    /// Serializer that recurses into inner blocks through itself.
    pub fn new() -> Self {
        Self::default()
    }

    /// Serializer that recurses into inner blocks through `outer`, usually a
    /// wrapper around this serializer. Falls back to itself once `outer` is
    /// dropped.
    pub fn nested_through(outer: Weak<dyn BlockSerializer>) -> Self {
        Self { outer: Some(outer) }
    }

    fn nested(&self) -> Rc<dyn BlockSerializer> {
        match self.outer.as_ref().and_then(Weak::upgrade) {
            Some(outer) => outer,
            None => Rc::new(Self::new()),
        }
    }

    /// Serialize one block.
    pub fn serialize_block(
        &self,
        block: &Block,
        options: &SerializeOptions,
    ) -> Result<String, SerializeError> {
        validate_name(&block.name)?;

        let content = crate::render_block(block, self.nested())
            .map_err(|RenderError::Serialize(e)| e)?
            .into_string();

        if block.name == FREEFORM_BLOCK && !options.is_inner_blocks {
            return Ok(content);
        }

        let name = delimiter_name(&block.name);
        let attrs = serialize_attributes(block)?;
        let opening = match attrs {
            Some(json) => format!("wp:{} {}", name, json),
            None => format!("wp:{}", name),
        };

        if content.is_empty() {
            return Ok(format!("<!-- {} /-->", opening));
        }

        Ok(format!("<!-- {} -->\n{}\n<!-- /wp:{} -->", opening, content, name))
    }
}

impl BlockSerializer for CommentDelimitedSerializer {
    fn serialize(
        &self,
        blocks: &[Block],
        options: &SerializeOptions,
    ) -> Result<String, SerializeError> {
        let separator = if options.is_inner_blocks { "" } else { "\n\n" };
        let parts = blocks
            .iter()
            .map(|block| self.serialize_block(block, options))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(parts.join(separator))
    }
}

/// Names are `name` or `namespace/name`; each segment starts with a
/// lowercase letter followed by lowercase letters, digits or `-`.
fn validate_name(name: &str) -> Result<(), SerializeError> {
    let segments: Vec<&str> = name.split('/').collect();
    let valid = segments.len() <= 2 && segments.iter().all(|segment| valid_segment(segment));

    if valid {
        Ok(())
    } else {
        Err(SerializeError::InvalidBlockName(name.to_string()))
    }
}

fn valid_segment(segment: &str) -> bool {
    let mut chars = segment.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_lowercase())
        && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

/// Core blocks drop their namespace in delimiters.
fn delimiter_name(name: &str) -> &str {
    name.strip_prefix("core/").unwrap_or(name)
}

/// Attributes as JSON that cannot terminate the surrounding comment.
fn serialize_attributes(block: &Block) -> Result<Option<String>, SerializeError> {
    if block.attributes.is_empty() {
        return Ok(None);
    }

    let json = serde_json::to_string(&block.attributes).map_err(|e| {
        SerializeError::InvalidAttributes {
            block: block.name.clone(),
            message: e.to_string(),
        }
    })?;

    Ok(Some(
        json.replace("--", "\\u002d\\u002d")
            .replace('<', "\\u003c")
            .replace('>', "\\u003e")
            .replace('&', "\\u0026"),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paragraph(text: &str) -> Block {
        Block::new("core/paragraph").with_inner_html(format!("<p>{}</p>", text))
    }

    #[test]
    fn test_leaf_block() {
        let html = CommentDelimitedSerializer::new()
            .serialize(&[paragraph("Hi")], &SerializeOptions::default())
            .unwrap();
        assert_eq!(html, "<!-- wp:paragraph -->\n<p>Hi</p>\n<!-- /wp:paragraph -->");
    }

    #[test]
    fn test_void_block_with_attributes() {
        let block = Block::new("acme/spacer").with_attribute("height", 40);
        let html = CommentDelimitedSerializer::new()
            .serialize(&[block], &SerializeOptions::default())
            .unwrap();
        assert_eq!(html, r#"<!-- wp:acme/spacer {"height":40} /-->"#);
    }

    #[test]
    fn test_attributes_cannot_close_comment() {
        let block = Block::new("core/paragraph")
            .with_attribute("note", "--> <b>")
            .with_inner_html("<p>x</p>");
        let html = CommentDelimitedSerializer::new()
            .serialize_block(&block, &SerializeOptions::default())
            .unwrap();
        assert!(html.starts_with(
            r#"<!-- wp:paragraph {"note":"\u002d\u002d\u003e \u003cb\u003e"} -->"#
        ));
    }

    #[test]
    fn test_top_level_separator() {
        let blocks = [Block::new("core/separator"), Block::new("core/spacer")];
        let serializer = CommentDelimitedSerializer::new();

        let html = serializer
            .serialize(&blocks, &SerializeOptions::default())
            .unwrap();
        assert_eq!(html, "<!-- wp:separator /-->\n\n<!-- wp:spacer /-->");

        let html = serializer
            .serialize(&blocks, &SerializeOptions::inner_blocks())
            .unwrap();
        assert_eq!(html, "<!-- wp:separator /--><!-- wp:spacer /-->");
    }

    #[test]
    fn test_freeform_only_undelimited_at_top_level() {
        let classic = Block::new(FREEFORM_BLOCK).with_inner_html("<p>classic</p>");

        let top = CommentDelimitedSerializer::new()
            .serialize(&[classic.clone()], &SerializeOptions::default())
            .unwrap();
        assert_eq!(top, "<p>classic</p>");

        let nested = CommentDelimitedSerializer::new()
            .serialize(&[classic], &SerializeOptions::inner_blocks())
            .unwrap();
        assert_eq!(nested, "<!-- wp:freeform -->\n<p>classic</p>\n<!-- /wp:freeform -->");
    }

    #[test]
    fn test_invalid_names() {
        for name in ["", "Core/Paragraph", "a/b/c", "/x", "x/", "1x", "-a/b", "a/-", "a b"] {
            let err = CommentDelimitedSerializer::new()
                .serialize(&[Block::new(name)], &SerializeOptions::default())
                .unwrap_err();
            assert!(matches!(err, SerializeError::InvalidBlockName(n) if n == name));
        }
    }

    #[test]
    fn test_valid_names() {
        for name in ["paragraph", "core/paragraph", "acme/hero-2", "my-plugin/a1"] {
            let block = Block::new(name).with_inner_html("<p>x</p>");
            assert!(CommentDelimitedSerializer::new()
                .serialize_block(&block, &SerializeOptions::default())
                .is_ok());
        }
    }

    #[test]
    fn test_nested_through_outer_serializer() {
        let calls = Rc::new(std::cell::Cell::new(0));
        let counting = Rc::new_cyclic(|weak: &Weak<Counting>| Counting {
            calls: calls.clone(),
            inner: CommentDelimitedSerializer::nested_through(weak.clone()),
        });
        let outer: Rc<dyn BlockSerializer> = counting;

        let group = Block::new("core/group").with_inner_block(
            Block::new("core/group").with_inner_block(paragraph("deep")),
        );
        let html = outer.serialize(&[group], &SerializeOptions::default()).unwrap();

        assert!(html.contains("<p>deep</p>"));
        assert_eq!(calls.get(), 3);
    }

    struct Counting {
        calls: Rc<std::cell::Cell<usize>>,
        inner: CommentDelimitedSerializer,
    }

    impl BlockSerializer for Counting {
        fn serialize(
            &self,
            blocks: &[Block],
            options: &SerializeOptions,
        ) -> Result<String, SerializeError> {
            self.calls.set(self.calls.get() + 1);
            self.inner.serialize(blocks, options)
        }
    }
}
