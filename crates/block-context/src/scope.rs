//! Scoped shared values.

use std::any::{type_name, Any};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// A node in the render tree.
///
/// A scope holds at most one value per type. Descendant scopes see the value
/// of the nearest ancestor that provides it.
#[derive(Clone)]
pub struct Scope {
    inner: Rc<ScopeInner>,
}

struct ScopeInner {
    name: String,
    parent: Option<Scope>,
    contexts: RefCell<Vec<Box<dyn Any>>>,
}

impl Scope {
    /// Create a root scope with no values.
    pub fn root() -> Self {
        Self::with_parent("root", None)
    }

    /// Create a child scope.
    pub fn child(&self, name: impl Into<String>) -> Self {
        Self::with_parent(name, Some(self.clone()))
    }

    fn with_parent(name: impl Into<String>, parent: Option<Scope>) -> Self {
        Self {
            inner: Rc::new(ScopeInner {
                name: name.into(),
                parent,
                contexts: RefCell::new(Vec::new()),
            }),
        }
    }

    /// Scope name.
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Parent scope, if any.
    pub fn parent(&self) -> Option<&Scope> {
        self.inner.parent.as_ref()
    }

    /// Number of ancestors above this scope.
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut current = self.parent();
        while let Some(scope) = current {
            depth += 1;
            current = scope.parent();
        }
        depth
    }

    /// Provide a value to this scope and its descendants.
    ///
    /// A value of the same type already in this scope is replaced.
    pub fn provide<T: Clone + 'static>(&self, value: T) -> T {
        tracing::trace!("providing context {} in {}", type_name::<T>(), self.name());
        let mut contexts = self.inner.contexts.borrow_mut();

        for ctx in contexts.iter_mut() {
            if let Some(slot) = ctx.downcast_mut::<T>() {
                *slot = value.clone();
                return value;
            }
        }

        contexts.push(Box::new(value.clone()));
        value
    }

    /// Get a value provided directly on this scope.
    pub fn has<T: Clone + 'static>(&self) -> Option<T> {
        self.inner
            .contexts
            .borrow()
            .iter()
            .find_map(|ctx| ctx.downcast_ref::<T>())
            .cloned()
    }

    /// Get the nearest value of type `T`, searching toward the root.
    pub fn consume<T: Clone + 'static>(&self) -> Option<T> {
        let mut current = Some(self);
        while let Some(scope) = current {
            tracing::trace!("looking for context {} in {}", type_name::<T>(), scope.name());
            if let Some(value) = scope.has::<T>() {
                return Some(value);
            }
            current = scope.parent();
        }
        None
    }

    /// Get the nearest value of type `T`, or its default.
    pub fn consume_or_default<T: Clone + Default + 'static>(&self) -> T {
        self.consume().unwrap_or_default()
    }
}

impl fmt::Debug for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scope")
            .field("name", &self.inner.name)
            .field("depth", &self.depth())
            .field("contexts", &self.inner.contexts.borrow().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Default)]
    struct Theme(&'static str);

    #[test]
    fn test_consume_from_ancestor() {
        let root = Scope::root();
        root.provide(Theme("dark"));
        let leaf = root.child("a").child("b");

        assert_eq!(leaf.consume::<Theme>(), Some(Theme("dark")));
        assert_eq!(leaf.has::<Theme>(), None);
        assert_eq!(leaf.depth(), 2);
    }

    #[test]
    fn test_nearest_wins() {
        let root = Scope::root();
        root.provide(Theme("dark"));
        let child = root.child("inner");
        child.provide(Theme("light"));

        assert_eq!(child.child("leaf").consume::<Theme>(), Some(Theme("light")));
        assert_eq!(root.consume::<Theme>(), Some(Theme("dark")));
    }

    #[test]
    fn test_provide_replaces() {
        let scope = Scope::root();
        scope.provide(Theme("one"));
        scope.provide(Theme("two"));

        assert_eq!(scope.consume::<Theme>(), Some(Theme("two")));
        assert_eq!(format!("{:?}", scope), r#"Scope { name: "root", depth: 0, contexts: 1 }"#);
    }

    #[test]
    fn test_missing_value() {
        let scope = Scope::root().child("x");
        assert_eq!(scope.consume::<Theme>(), None);
        assert_eq!(scope.consume_or_default::<Theme>(), Theme(""));
    }

    #[test]
    fn test_values_are_keyed_by_type() {
        let scope = Scope::root();
        scope.provide(Theme("dark"));
        scope.provide(42u32);

        assert_eq!(scope.consume::<u32>(), Some(42));
        assert_eq!(scope.consume::<Theme>(), Some(Theme("dark")));
        assert_eq!(scope.consume::<u64>(), None);
    }
}
