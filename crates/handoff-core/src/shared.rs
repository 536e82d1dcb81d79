//! A chain that can be appended to while other threads dispatch.
//!
//! [`SharedChain`] puts a [`HandlerChain`] behind a single
//! `parking_lot::RwLock`. Appends take the write lock; every dispatch holds
//! the read lock for its whole traversal, so a traversal always sees a
//! stable sequence of links.
//!
//! Dispatch takes the lock recursively, so a handler may dispatch into the
//! chain it belongs to even while an append is waiting. A handler must not
//! append to or seal its own chain: the write lock is never granted while
//! the traversal holds the read lock, and the call deadlocks.

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::chain::{HandlerChain, Routed};
use crate::error::ChainResult;
use crate::link::Link;

/// A cheaply clonable, lock-protected [`HandlerChain`].
pub struct SharedChain<R: ?Sized, T> {
    inner: Arc<RwLock<HandlerChain<R, T>>>,
}

impl<R: ?Sized, T> SharedChain<R, T> {
    /// Creates an empty shared chain.
    pub fn new() -> Self {
        Self::from(HandlerChain::new())
    }

    /// Appends a link under the write lock.
    ///
    /// Same rules as [`HandlerChain::append`].
    pub fn append(&self, link: Link<R, T>) -> ChainResult<()> {
        self.inner.write().append(link)
    }

    /// Seals the chain; later appends fail with
    /// [`ChainError::Sealed`](crate::ChainError::Sealed).
    pub fn seal(&self) {
        self.inner.write().seal();
    }

    /// Returns whether the chain is sealed.
    pub fn is_sealed(&self) -> bool {
        self.inner.read().is_sealed()
    }

    /// Returns the number of links.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Returns `true` if no links were appended.
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Dispatches a request under the read lock.
    pub fn dispatch(&self, request: &R) -> Option<T> {
        self.inner.read_recursive().dispatch(request)
    }

    /// Dispatches and reports the claiming link's position and name.
    pub fn route(&self, request: &R) -> Option<Routed<T>> {
        self.inner
            .read_recursive()
            .route(request)
            .map(Routed::from)
    }

    /// Runs `f` with read access to the underlying chain.
    ///
    /// `f` must not append to or seal this chain.
    pub fn with_chain<F, O>(&self, f: F) -> O
    where
        F: FnOnce(&HandlerChain<R, T>) -> O,
    {
        f(&self.inner.read_recursive())
    }
}

impl<R: ?Sized, U, E> SharedChain<R, Result<U, E>> {
    /// Fallible dispatch under the read lock, see
    /// [`HandlerChain::try_dispatch`].
    pub fn try_dispatch(&self, request: &R) -> Result<Option<U>, E> {
        self.inner.read_recursive().try_dispatch(request)
    }
}

impl<R: ?Sized, T> From<HandlerChain<R, T>> for SharedChain<R, T> {
    fn from(chain: HandlerChain<R, T>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(chain)),
        }
    }
}

impl<R: ?Sized, T> Default for SharedChain<R, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: ?Sized, T> Clone for SharedChain<R, T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<R: ?Sized, T> fmt::Debug for SharedChain<R, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SharedChain").field(&*self.inner.read()).finish()
    }
}
