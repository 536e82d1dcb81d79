//! The handler chain.
//!
//! A [`HandlerChain`] owns an ordered list of [`Link`]s. Dispatch walks the
//! links in append order and stops at the first one whose handler claims the
//! request:
//!
//! 1. Links are tried in the order they were appended
//! 2. The first `Some` returned by a handler is the result
//! 3. If every link declines, the request is unhandled (`None`)
//!
//! ```rust
//! use handoff_core::{HandlerChain, on_eq};
//!
//! let mut chain = HandlerChain::<str, &str>::new();
//! chain.append(on_eq("A", |_| "ResultA").name("a"))?;
//! chain.append(on_eq("B", |_| "ResultB").name("b"))?;
//! chain.append(on_eq("C", |_| "ResultC").name("c"))?;
//!
//! assert_eq!(chain.dispatch("C"), Some("ResultC"));
//! assert_eq!(chain.dispatch("D"), None);
//! # Ok::<(), handoff_core::ChainError>(())
//! ```
//!
//! # Construction rules
//!
//! A [`Link`] owns its handler and is moved into the chain on `append`, so a
//! handler belongs to exactly one chain and the chain can never contain a
//! cycle. `append` rejects a link whose name is already taken and any link
//! once the chain is sealed; the chain is left unchanged in both cases.
//!
//! # Thread Safety
//!
//! Handlers are `Send + Sync` and dispatch takes `&self`, so a built chain can
//! be shared across threads as-is. Use [`SharedChain`](crate::SharedChain)
//! when appends and dispatches must interleave.

use std::fmt;

use tracing::{Level, debug, span, trace};

use crate::error::{ChainError, ChainResult};
use crate::link::Link;

/// The outcome of a successful [`HandlerChain::route`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Handled<'a, T> {
    /// Position of the claiming link, starting at 0.
    pub position: usize,
    /// Name of the claiming link, if it has one.
    pub name: Option<&'a str>,
    /// The value produced by the claiming handler.
    pub value: T,
}

/// A [`Handled`] that owns the claiming link's name.
///
/// Returned where the chain itself cannot be borrowed past the call, as in
/// [`SharedChain::route`](crate::SharedChain::route).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Routed<T> {
    pub position: usize,
    pub name: Option<String>,
    pub value: T,
}

impl<T> From<Handled<'_, T>> for Routed<T> {
    fn from(handled: Handled<'_, T>) -> Self {
        Self {
            position: handled.position,
            name: handled.name.map(str::to_string),
            value: handled.value,
        }
    }
}

/// An ordered, first-match-wins chain of handlers.
pub struct HandlerChain<R: ?Sized, T> {
    links: Vec<Link<R, T>>,
    sealed: bool,
}

impl<R: ?Sized, T> Default for HandlerChain<R, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: ?Sized, T> HandlerChain<R, T> {
    /// Creates an empty chain.
    pub fn new() -> Self {
        Self {
            links: Vec::new(),
            sealed: false,
        }
    }

    /// Appends a link at the tail of the chain.
    ///
    /// # Errors
    ///
    /// - [`ChainError::Sealed`] if [`seal`](Self::seal) was called
    /// - [`ChainError::DuplicateName`] if another link has the same name
    pub fn append(&mut self, link: Link<R, T>) -> ChainResult<()> {
        if self.sealed {
            return Err(ChainError::Sealed);
        }

        if let Some(name) = link.get_name()
            && self.position(name).is_some()
        {
            return Err(ChainError::DuplicateName(name.to_string()));
        }

        trace!(
            link = link.get_name().unwrap_or("unnamed"),
            position = self.links.len(),
            "Appending link"
        );
        self.links.push(link);
        Ok(())
    }

    /// Appends a link (builder pattern).
    pub fn with(mut self, link: Link<R, T>) -> ChainResult<Self> {
        self.append(link)?;
        Ok(self)
    }

    /// Builds a chain from links in order.
    ///
    /// Fails with the first error [`append`](Self::append) reports.
    pub fn try_from_links<I>(links: I) -> ChainResult<Self>
    where
        I: IntoIterator<Item = Link<R, T>>,
    {
        links
            .into_iter()
            .try_fold(Self::new(), |chain, link| chain.with(link))
    }

    /// Forbids any further appends.
    pub fn seal(&mut self) {
        self.sealed = true;
    }

    /// Returns whether the chain is sealed.
    pub fn is_sealed(&self) -> bool {
        self.sealed
    }

    /// Returns the number of links.
    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// Returns `true` if no links were appended.
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Iterates over link names in dispatch order, `None` for unnamed links.
    pub fn names(&self) -> impl Iterator<Item = Option<&str>> {
        self.links.iter().map(Link::get_name)
    }

    /// Returns the position of the link called `name`.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.links
            .iter()
            .position(|link| link.get_name() == Some(name))
    }

    /// Routes a request and reports which link claimed it.
    pub fn route(&self, request: &R) -> Option<Handled<'_, T>> {
        let span = span!(Level::TRACE, "dispatch", links = self.links.len());
        let _enter = span.enter();

        for (position, link) in self.links.iter().enumerate() {
            let name = link.get_name();
            match link.handle(request) {
                Some(value) => {
                    debug!(
                        link = name.unwrap_or("unnamed"),
                        position, "Link claimed request"
                    );
                    return Some(Handled {
                        position,
                        name,
                        value,
                    });
                }
                None => {
                    trace!(
                        link = name.unwrap_or("unnamed"),
                        position, "Link declined, passing on"
                    );
                }
            }
        }

        debug!("Request unhandled");
        None
    }

    /// Routes a request through the chain.
    ///
    /// Returns the first produced value, or `None` when no link claims the
    /// request. Never mutates the chain.
    pub fn dispatch(&self, request: &R) -> Option<T> {
        self.route(request).map(|handled| handled.value)
    }
}

impl<R: ?Sized, U, E> HandlerChain<R, Result<U, E>> {
    /// Routes a request through a chain of fallible handlers.
    ///
    /// A handler that returns `Some(Err(_))` claims the request: traversal
    /// stops and its error is returned unchanged.
    pub fn try_dispatch(&self, request: &R) -> Result<Option<U>, E> {
        self.dispatch(request).transpose()
    }
}

impl<R: ?Sized, T> fmt::Debug for HandlerChain<R, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerChain")
            .field("link_count", &self.links.len())
            .field("sealed", &self.sealed)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::link::{catch_all, on_eq, when};

    fn abc_chain() -> HandlerChain<str, &'static str> {
        HandlerChain::new()
            .with(on_eq("A", |_| "ResultA").name("a"))
            .and_then(|c| c.with(on_eq("B", |_| "ResultB").name("b")))
            .and_then(|c| c.with(on_eq("C", |_| "ResultC").name("c")))
            .unwrap()
    }

    #[test]
    fn test_empty_chain_is_unhandled() {
        let chain: HandlerChain<str, ()> = HandlerChain::new();
        assert!(chain.is_empty());
        assert_eq!(chain.dispatch("anything"), None);
        assert_eq!(chain.dispatch(""), None);
    }

    #[test]
    fn test_falls_through_to_match() {
        let chain = abc_chain();
        assert_eq!(chain.dispatch("C"), Some("ResultC"));
        assert_eq!(chain.dispatch("D"), None);
        assert_eq!(chain.dispatch("A"), Some("ResultA"));
    }

    #[test]
    fn test_first_match_stops_traversal() {
        let visited = Arc::new(AtomicUsize::new(0));
        let counting = |label: &'static str| {
            let visited = Arc::clone(&visited);
            on_eq(label, move |_| {
                visited.fetch_add(1, Ordering::SeqCst);
                label
            })
        };
        let never_reached = {
            let visited = Arc::clone(&visited);
            when(
                move |_: &str| {
                    visited.fetch_add(100, Ordering::SeqCst);
                    false
                },
                |_| "never",
            )
        };

        let chain = HandlerChain::new()
            .with(counting("A"))
            .and_then(|c| c.with(never_reached))
            .unwrap();

        assert_eq!(chain.dispatch("A"), Some("A"));
        assert_eq!(visited.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_route_reports_position_and_name() {
        let chain = abc_chain();
        let handled = chain.route("B").unwrap();
        assert_eq!(handled.position, 1);
        assert_eq!(handled.name, Some("b"));
        assert_eq!(handled.value, "ResultB");
        assert!(chain.route("Z").is_none());
    }

    #[test]
    fn test_order_decides_between_overlapping_handlers() {
        let first = |label: &'static str| catch_all(move |_: &str| label);

        let chain = HandlerChain::new()
            .with(first("h1"))
            .and_then(|c| c.with(first("h2")))
            .unwrap();
        assert_eq!(chain.dispatch("r"), Some("h1"));

        let swapped = HandlerChain::new()
            .with(first("h2"))
            .and_then(|c| c.with(first("h1")))
            .unwrap();
        assert_eq!(swapped.dispatch("r"), Some("h2"));
    }

    #[test]
    fn test_catch_all_shadows_later_links() {
        let chain = HandlerChain::new()
            .with(catch_all(|_: &str| "fallback").name("all"))
            .and_then(|c| c.with(on_eq("A", |_| "ResultA").name("a")))
            .unwrap();

        for request in ["A", "B", ""] {
            assert_eq!(chain.route(request).map(|h| h.position), Some(0));
        }
    }

    #[test]
    fn test_dispatch_is_repeatable() {
        let chain = abc_chain();
        assert_eq!(chain.dispatch("B"), chain.dispatch("B"));
        assert_eq!(chain.dispatch("Q"), chain.dispatch("Q"));
        assert_eq!(chain.len(), 3);
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let mut chain = abc_chain();
        let err = chain.append(on_eq("X", |_| "X").name("b")).unwrap_err();
        assert_eq!(err, ChainError::DuplicateName("b".to_string()));
        assert_eq!(chain.len(), 3);
    }

    #[test]
    fn test_sealed_chain_rejects_append() {
        let mut chain = abc_chain();
        chain.seal();
        assert!(chain.is_sealed());
        assert_eq!(
            chain.append(on_eq("D", |_| "ResultD")),
            Err(ChainError::Sealed)
        );
        assert_eq!(chain.dispatch("A"), Some("ResultA"));
    }

    #[test]
    fn test_unnamed_links_never_collide() {
        let mut chain: HandlerChain<str, u8> = HandlerChain::new();
        chain.append(on_eq("1", |_| 1)).unwrap();
        chain.append(on_eq("2", |_| 2)).unwrap();
        assert_eq!(chain.names().collect::<Vec<_>>(), vec![None, None]);
    }

    #[test]
    fn test_try_dispatch_propagates_handler_error() {
        let chain: HandlerChain<i32, Result<i32, String>> = HandlerChain::new()
            .with(when(|n: &i32| *n < 0, |n| Err(format!("negative: {n}"))))
            .and_then(|c| c.with(when(|n: &i32| *n % 2 == 0, |n| Ok(n / 2))))
            .unwrap();

        assert_eq!(chain.try_dispatch(&8), Ok(Some(4)));
        assert_eq!(chain.try_dispatch(&3), Ok(None));
        assert_eq!(chain.try_dispatch(&-2), Err("negative: -2".to_string()));
    }

    #[test]
    fn test_try_from_links() {
        let chain: HandlerChain<str, &str> = HandlerChain::try_from_links([
            on_eq("A", |_| "a").name("a"),
            on_eq("B", |_| "b").name("b"),
        ])
        .unwrap();

        assert_eq!(chain.len(), 2);
        assert_eq!(chain.dispatch("B"), Some("b"));
        assert_eq!(chain.position("b"), Some(1));
    }

    #[test]
    fn test_try_from_links_reports_duplicate_name() {
        let result: ChainResult<HandlerChain<str, &str>> = HandlerChain::try_from_links([
            on_eq("A", |_| "first").name("x"),
            on_eq("B", |_| "second").name("x"),
        ]);

        assert_eq!(result.unwrap_err(), ChainError::DuplicateName("x".to_string()));
    }

    #[test]
    fn test_routed_owns_name() {
        let routed: Routed<&str> = abc_chain().route("C").map(Routed::from).unwrap();
        assert_eq!(
            routed,
            Routed {
                position: 2,
                name: Some("c".to_string()),
                value: "ResultC",
            }
        );
    }
}
