//! Immutable context carrier.
//!
//! A `Context` is a persistent singly-linked chain of typed values. Deriving
//! a child pushes a node in front of the parent's chain; the parent keeps
//! pointing at its own head and never sees the child's values.
//!
//! Setting a key that the head node already holds replaces the head rather
//! than stacking on it, so repeated attaches of one key keep the chain short.

use std::any::{Any, TypeId};
use std::fmt;
use std::sync::Arc;

struct Node {
    key: TypeId,
    value: Arc<dyn Any + Send + Sync>,
    parent: Option<Arc<Node>>,
}

impl Drop for Node {
    // Unlink iteratively; the default recursive drop overflows the stack on
    // long chains.
    fn drop(&mut self) {
        let mut next = self.parent.take();
        while let Some(node) = next {
            next = match Arc::into_inner(node) {
                Some(mut owned) => owned.parent.take(),
                None => None,
            };
        }
    }
}

/// Request-scoped carrier of typed values.
///
/// Values are addressed by a key *type* `K`; a module that keeps its key
/// type private owns its slot exclusively.
#[derive(Clone, Default)]
pub struct Context {
    head: Option<Arc<Node>>,
}

impl Context {
    /// The empty root context.
    pub fn background() -> Self {
        Self::default()
    }

    /// Derive a child context carrying `value` under key type `K`.
    ///
    /// A later lookup for `K` on the child resolves to `value`, shadowing
    /// any value the ancestors hold for the same key.
    pub fn with_value<K, V>(&self, value: V) -> Self
    where
        K: 'static,
        V: Any + Send + Sync,
    {
        let key = TypeId::of::<K>();
        let parent = match &self.head {
            Some(head) if head.key == key => head.parent.clone(),
            other => other.clone(),
        };
        Self {
            head: Some(Arc::new(Node {
                key,
                value: Arc::new(value),
                parent,
            })),
        }
    }

    /// Look up the nearest value stored under key type `K`.
    ///
    /// Returns `None` when no ancestor holds `K`, or when the nearest value
    /// for `K` is not a `V`.
    pub fn value<K, V>(&self) -> Option<&V>
    where
        K: 'static,
        V: Any,
    {
        let key = TypeId::of::<K>();
        let mut node = self.head.as_deref();
        while let Some(current) = node {
            if current.key == key {
                return current.value.downcast_ref::<V>();
            }
            node = current.parent.as_deref();
        }
        None
    }

    /// Number of values pushed onto this chain.
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut node = self.head.as_deref();
        while let Some(current) = node {
            depth += 1;
            node = current.parent.as_deref();
        }
        depth
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context").field("depth", &self.depth()).finish()
    }
}
