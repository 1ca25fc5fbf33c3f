//! The component model.

use std::fmt;
use std::rc::Rc;

use block_core::{Markup, SerializeError};
use thiserror::Error;

use crate::scope::Scope;

/// Result of rendering a component.
pub type RenderResult = Result<Markup, RenderError>;

/// Errors that can occur while rendering.
#[derive(Error, Debug)]
pub enum RenderError {
    /// The block serializer failed.
    #[error(transparent)]
    Serialize(#[from] SerializeError),
}

/// Renders props of type `P` against a scope.
///
/// Any `Fn(&Scope, &P) -> RenderResult` is a component.
pub trait Component<P> {
    /// Render this component.
    fn render(&self, scope: &Scope, props: &P) -> RenderResult;
}

impl<P, F> Component<P> for F
where
    F: Fn(&Scope, &P) -> RenderResult,
{
    fn render(&self, scope: &Scope, props: &P) -> RenderResult {
        self(scope, props)
    }
}

/// A renderable subtree, rendered against whatever scope its parent chooses.
#[derive(Clone)]
pub struct Children(Rc<dyn Fn(&Scope) -> RenderResult>);

impl Children {
    /// Create children from a render function.
    pub fn new(render: impl Fn(&Scope) -> RenderResult + 'static) -> Self {
        Self(Rc::new(render))
    }

    /// Children that render nothing.
    pub fn none() -> Self {
        Self::new(|_| Ok(Markup::new()))
    }

    /// Children that render a component with fixed props.
    pub fn component<P, C>(component: C, props: P) -> Self
    where
        P: 'static,
        C: Component<P> + 'static,
    {
        Self::new(move |scope| component.render(scope, &props))
    }

    /// Render the subtree.
    pub fn render(&self, scope: &Scope) -> RenderResult {
        (self.0)(scope)
    }
}

impl Default for Children {
    fn default() -> Self {
        Self::none()
    }
}

impl fmt::Debug for Children {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Children")
    }
}

/// Render a component against a fresh root scope.
pub fn render_to_string<P, C>(component: &C, props: &P) -> Result<String, RenderError>
where
    C: Component<P>,
{
    let scope = Scope::root();
    component.render(&scope, props).map(Markup::into_string)
}
