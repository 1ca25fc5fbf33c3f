//! Decorating components with props derived from [`BlockContent`].

use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use block_context::{Component, RenderResult, Scope};

use crate::provider::BlockContent;

/// Props seen by a component wrapped with [`with_block_content_context`]:
/// the caller's own props plus the props derived from the block content.
#[derive(Debug, Clone, PartialEq)]
pub struct Merged<P, X> {
    /// Props passed by the caller, unchanged.
    pub own: P,
    /// Props returned by the mapping function.
    pub extra: X,
}

impl<P, X> Merged<P, X> {
    /// Split into own and extra props.
    pub fn into_parts(self) -> (P, X) {
        (self.own, self.extra)
    }
}

impl<P, X> Deref for Merged<P, X> {
    type Target = P;

    fn deref(&self) -> &P {
        &self.own
    }
}

/// Wraps components so they receive props derived from the nearest
/// [`BlockContent`]. Created by [`with_block_content_context`].
pub struct BlockContentDecorator<M> {
    map: Rc<M>,
}

impl<M> BlockContentDecorator<M> {
    /// Wrap a component.
    pub fn wrap<C>(&self, component: C) -> WithBlockContent<C, M> {
        WithBlockContent {
            inner: component,
            map: self.map.clone(),
        }
    }
}

impl<M> Clone for BlockContentDecorator<M> {
    fn clone(&self) -> Self {
        Self {
            map: self.map.clone(),
        }
    }
}

impl<M> fmt::Debug for BlockContentDecorator<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BlockContentDecorator")
    }
}

/// A component wrapped by a [`BlockContentDecorator`].
pub struct WithBlockContent<C, M> {
    inner: C,
    map: Rc<M>,
}

impl<C: Clone, M> Clone for WithBlockContent<C, M> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            map: self.map.clone(),
        }
    }
}

impl<P, X, C, M> Component<P> for WithBlockContent<C, M>
where
    P: Clone,
    M: Fn(&BlockContent, &P) -> X,
    C: Component<Merged<P, X>>,
{
    fn render(&self, scope: &Scope, props: &P) -> RenderResult {
        let content = scope.consume::<BlockContent>().unwrap_or_default();
        let extra = (self.map)(&content, props);
        let merged = Merged {
            own: props.clone(),
            extra,
        };
        self.inner.render(scope, &merged)
    }
}

/// Build a decorator from a mapping of (block content, own props) to extra props.
///
/// The mapping runs once per render of a wrapped component, with the nearest
/// [`BlockContent`] (or an empty one when no provider is above) and the
/// current props. Its result is handed to the wrapped component as is.
pub fn with_block_content_context<P, X, M>(map: M) -> BlockContentDecorator<M>
where
    M: Fn(&BlockContent, &P) -> X,
{
    BlockContentDecorator { map: Rc::new(map) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use block_core::{Markup, RawHtml};

    #[derive(Debug, Clone, PartialEq)]
    struct Label {
        text: String,
    }

    fn show_label(_: &Scope, props: &Merged<Label, ()>) -> RenderResult {
        Ok(Markup::text(&props.text))
    }

    #[test]
    fn test_deref_to_own_props() {
        let merged = Merged {
            own: Label {
                text: "x".to_string(),
            },
            extra: 7,
        };
        assert_eq!(merged.text, "x");
        assert_eq!(merged.into_parts().1, 7);
    }

    #[test]
    fn test_unit_extra_leaves_props_unchanged() {
        let wrapped = with_block_content_context(|_: &BlockContent, _: &Label| ()).wrap(show_label);
        let props = Label {
            text: "a & b".to_string(),
        };
        let html = wrapped.render(&Scope::root(), &props).unwrap();
        assert_eq!(html.as_str(), "a &amp; b");
    }

    #[test]
    fn test_mapping_sees_nearest_content() {
        let root = Scope::root();
        root.provide(BlockContent::new(|| Ok(RawHtml::new("<i>inner</i>"))));

        let decorator = with_block_content_context(|content: &BlockContent, label: &Label| {
            format!("{}:{}", label.text, content.render().unwrap())
        });
        let wrapped = decorator.wrap(|_: &Scope, props: &Merged<Label, String>| -> RenderResult {
            Ok(Markup::raw(RawHtml::new(props.extra.clone())))
        });

        let props = Label {
            text: "t".to_string(),
        };
        let html = wrapped.render(&root.child("leaf"), &props).unwrap();
        assert_eq!(html.as_str(), "t:<i>inner</i>");
    }

    #[test]
    fn test_decorator_wraps_many_components() {
        let decorator = with_block_content_context(|_: &BlockContent, _: &Label| 1u8);
        let first = decorator.wrap(|_: &Scope, p: &Merged<Label, u8>| -> RenderResult {
            Ok(Markup::text(&format!("first {}", p.extra)))
        });
        let second = decorator.clone().wrap(|_: &Scope, p: &Merged<Label, u8>| -> RenderResult {
            Ok(Markup::text(&format!("second {}", p.extra)))
        });

        let props = Label {
            text: String::new(),
        };
        let scope = Scope::root();
        assert_eq!(first.render(&scope, &props).unwrap().as_str(), "first 1");
        assert_eq!(second.render(&scope, &props).unwrap().as_str(), "second 1");
    }
}
