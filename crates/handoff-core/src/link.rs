//! Links and link builders.
//!
//! A [`Link`] is what a [`HandlerChain`](crate::HandlerChain) stores: a
//! handler plus an optional name used in logs and for duplicate detection.
//!
//! The free functions in this module cover the common shapes of a link, in
//! the same spirit as `on_message()` style constructors:
//!
//! ```rust
//! use handoff_core::{HandlerChain, catch_all, on_eq, when};
//!
//! let chain = HandlerChain::<str, String>::new()
//!     .with(on_eq("ping", |_| "pong".to_string()).name("ping"))?
//!     .with(when(|r: &str| r.starts_with('/'), |r| format!("command {r}")).name("commands"))?
//!     .with(catch_all(|r: &str| format!("echo {r}")).name("echo"))?;
//!
//! assert_eq!(chain.dispatch("ping").as_deref(), Some("pong"));
//! assert_eq!(chain.dispatch("/help").as_deref(), Some("command /help"));
//! assert_eq!(chain.dispatch("hi").as_deref(), Some("echo hi"));
//! # Ok::<(), handoff_core::ChainError>(())
//! ```

use std::borrow::Borrow;
use std::fmt;

use crate::handler::{BoxedHandler, Handler, into_handler};

/// A handler as linked into a chain.
///
/// A link owns its handler exclusively and is moved into the chain by
/// [`HandlerChain::append`](crate::HandlerChain::append), so a handler can
/// only ever be part of one chain:
///
/// ```rust,compile_fail
/// use handoff_core::{HandlerChain, on_eq};
///
/// let link = on_eq("A", |_: &str| 1);
/// let mut first = HandlerChain::<str, i32>::new();
/// let mut second = HandlerChain::<str, i32>::new();
///
/// first.append(link)?;
/// second.append(link)?;
/// # Ok::<(), handoff_core::ChainError>(())
/// ```
pub struct Link<R: ?Sized, T> {
    handler: BoxedHandler<R, T>,
    name: Option<String>,
}

impl<R: ?Sized, T> Link<R, T> {
    /// Wraps a handler in an unnamed link.
    pub fn new<H>(handler: H) -> Self
    where
        H: Handler<R, T> + 'static,
    {
        Self::from_boxed(into_handler(handler))
    }

    /// Wraps an already type-erased handler.
    pub fn from_boxed(handler: BoxedHandler<R, T>) -> Self {
        Self {
            handler,
            name: None,
        }
    }

    /// Names this link. Names must be unique within a chain.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Returns the name of this link, if set.
    pub fn get_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Runs the handler against a request.
    pub fn handle(&self, request: &R) -> Option<T> {
        self.handler.handle(request)
    }
}

impl<R: ?Sized, T> fmt::Debug for Link<R, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Link")
            .field("name", &self.name.as_deref().unwrap_or("unnamed"))
            .finish_non_exhaustive()
    }
}

/// Creates a link that claims requests matching `predicate` and answers
/// with `responder`.
pub fn when<R, T, P, F>(predicate: P, responder: F) -> Link<R, T>
where
    R: ?Sized + 'static,
    T: 'static,
    P: Fn(&R) -> bool + Send + Sync + 'static,
    F: Fn(&R) -> T + Send + Sync + 'static,
{
    Link::new(move |request: &R| predicate(request).then(|| responder(request)))
}

/// Creates a link that claims requests equal to `value`.
pub fn on_eq<R, Q, T, F>(value: Q, responder: F) -> Link<R, T>
where
    R: PartialEq + ?Sized + 'static,
    Q: Borrow<R> + Send + Sync + 'static,
    T: 'static,
    F: Fn(&R) -> T + Send + Sync + 'static,
{
    when(
        move |request: &R| <Q as Borrow<R>>::borrow(&value) == request,
        responder,
    )
}

/// Creates a link that claims requests equal to any of `values`.
pub fn on_any<R, Q, T, F, I>(values: I, responder: F) -> Link<R, T>
where
    R: PartialEq + ?Sized + 'static,
    Q: Borrow<R> + Send + Sync + 'static,
    T: 'static,
    F: Fn(&R) -> T + Send + Sync + 'static,
    I: IntoIterator<Item = Q>,
{
    let values: Vec<Q> = values.into_iter().collect();
    when(
        move |request: &R| values.iter().any(|v| <Q as Borrow<R>>::borrow(v) == request),
        responder,
    )
}

/// Creates a link that claims every request.
///
/// Anything appended after a catch-all link is unreachable.
pub fn catch_all<R, T, F>(responder: F) -> Link<R, T>
where
    R: ?Sized + 'static,
    T: 'static,
    F: Fn(&R) -> T + Send + Sync + 'static,
{
    Link::new(move |request: &R| Some(responder(request)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_when() {
        let link: Link<i32, &str> = when(|n: &i32| *n < 0, |_| "negative");
        assert_eq!(link.handle(&-4), Some("negative"));
        assert_eq!(link.handle(&4), None);
    }

    #[test]
    fn test_on_eq_over_str() {
        let link: Link<str, usize> = on_eq("Ferrari", |r: &str| r.len());
        assert_eq!(link.handle("Ferrari"), Some(7));
        assert_eq!(link.handle("ferrari"), None);

        let owned: Link<str, usize> = on_eq(String::from("Ferrari"), |r: &str| r.len());
        assert_eq!(owned.handle("Ferrari"), Some(7));
    }

    #[test]
    fn test_on_any() {
        let link: Link<u8, bool> = on_any([1u8, 2, 3], |_| true);
        assert_eq!(link.handle(&2), Some(true));
        assert_eq!(link.handle(&4), None);
    }

    #[test]
    fn test_catch_all() {
        let link: Link<str, String> = catch_all(|r: &str| r.to_uppercase());
        assert_eq!(link.handle("abc").as_deref(), Some("ABC"));
        assert_eq!(link.handle("").as_deref(), Some(""));
    }

    #[test]
    fn test_name_and_debug() {
        let link: Link<u8, u8> = catch_all(|n: &u8| *n).name("identity");

        assert_eq!(link.get_name(), Some("identity"));
        assert_eq!(format!("{link:?}"), "Link { name: \"identity\", .. }");

        let unnamed: Link<u8, u8> = catch_all(|n: &u8| *n);
        assert_eq!(unnamed.get_name(), None);
    }

    #[test]
    fn test_from_boxed() {
        let boxed: BoxedHandler<str, usize> =
            Box::new(|r: &str| r.strip_prefix('#').map(str::len));
        let link = Link::from_boxed(boxed).name("hash");

        assert_eq!(link.handle("#tag"), Some(3));
        assert_eq!(link.handle("tag"), None);
    }
}
