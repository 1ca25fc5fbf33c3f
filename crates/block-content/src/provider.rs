//! Inner block content provider.

use std::fmt;
use std::rc::Rc;

use block_context::{Children, Component, RenderResult, Scope};
use block_core::{Block, BlockSerializer, RawHtml, SerializeError, SerializeOptions};

type RenderFn = dyn Fn() -> Result<RawHtml, SerializeError>;

/// Shared with every component rendered below a [`BlockContentProvider`].
///
/// Holds a single render function. Each call re-serializes the inner blocks
/// it was bound over and returns the markup marked for verbatim injection.
/// Serializer errors are returned unchanged.
#[derive(Clone)]
pub struct BlockContent {
    render: Rc<RenderFn>,
}

impl BlockContent {
    /// Create from a render function.
    pub fn new(render: impl Fn() -> Result<RawHtml, SerializeError> + 'static) -> Self {
        Self {
            render: Rc::new(render),
        }
    }

    /// Bind a serializer over a list of inner blocks.
    pub fn from_blocks(serializer: Rc<dyn BlockSerializer>, blocks: Vec<Block>) -> Self {
        let blocks: Rc<[Block]> = blocks.into();
        Self::new(move || {
            let html = serializer.serialize(&blocks, &SerializeOptions::inner_blocks())?;
            Ok(RawHtml::new(html))
        })
    }

    /// Serialize the inner blocks.
    pub fn render(&self) -> Result<RawHtml, SerializeError> {
        (self.render)()
    }
}

/// Renders nothing; seen by consumers with no provider above them.
impl Default for BlockContent {
    fn default() -> Self {
        Self::new(|| Ok(RawHtml::empty()))
    }
}

impl fmt::Debug for BlockContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BlockContent")
    }
}

/// Props for [`BlockContentProvider`].
#[derive(Debug, Clone, Default)]
pub struct BlockContentProviderProps {
    /// Inner blocks of the parent block, in order.
    pub inner_blocks: Vec<Block>,
    /// Subtree that may consume the content.
    pub children: Children,
}

impl BlockContentProviderProps {
    /// Create props for a list of inner blocks.
    pub fn new(inner_blocks: Vec<Block>) -> Self {
        Self {
            inner_blocks,
            children: Children::none(),
        }
    }

    /// Set the subtree.
    pub fn with_children(mut self, children: Children) -> Self {
        self.children = children;
        self
    }
}

/// Makes a parent's serialized inner blocks available to its subtree.
///
/// Every render creates a child scope holding a fresh [`BlockContent`] bound
/// over the current inner blocks, then renders the children in it.
#[derive(Clone)]
pub struct BlockContentProvider {
    serializer: Rc<dyn BlockSerializer>,
}

impl BlockContentProvider {
    /// Create a provider that serializes with `serializer`.
    pub fn new(serializer: impl BlockSerializer + 'static) -> Self {
        Self {
            serializer: Rc::new(serializer),
        }
    }

    /// Create a provider from an already shared serializer.
    pub fn from_shared(serializer: Rc<dyn BlockSerializer>) -> Self {
        Self { serializer }
    }
}

impl Component<BlockContentProviderProps> for BlockContentProvider {
    fn render(&self, scope: &Scope, props: &BlockContentProviderProps) -> RenderResult {
        let scope = scope.child("BlockContentProvider");
        tracing::debug!(
            scope = scope.name(),
            depth = scope.depth(),
            inner_blocks = props.inner_blocks.len(),
            "providing block content"
        );
        scope.provide(BlockContent::from_blocks(
            self.serializer.clone(),
            props.inner_blocks.clone(),
        ));
        props.children.render(&scope)
    }
}

impl fmt::Debug for BlockContentProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BlockContentProvider")
    }
}
