//! A sample post built from container and leaf blocks.

use block_sdk::block_core::Block;

/// Heading block.
pub fn heading(text: &str) -> Block {
    Block::new("core/heading").with_inner_html(format!("<h2>{}</h2>", text))
}

/// Paragraph block.
pub fn paragraph(text: &str) -> Block {
    Block::new("core/paragraph").with_inner_html(format!("<p>{}</p>", text))
}

/// Column block with a width.
pub fn column(width: &str, inner_blocks: Vec<Block>) -> Block {
    Block::new("core/column")
        .with_attribute("width", width)
        .with_inner_blocks(inner_blocks)
}

/// A landing-style post: a heading, a section group, and two columns.
pub fn sample_post() -> Vec<Block> {
    vec![
        heading("Transform Your Business"),
        Block::new("core/group")
            .with_attribute("tagName", "section")
            .with_attribute("className", "is-style-card")
            .with_inner_blocks(vec![
                paragraph("The all-in-one platform for modern teams."),
                paragraph("Scale without limits."),
            ]),
        Block::new("core/columns").with_inner_blocks(vec![
            column("66.66%", vec![paragraph("Everything you need.")]),
            column("33.33%", vec![Block::new("core/separator")]),
        ]),
    ]
}
