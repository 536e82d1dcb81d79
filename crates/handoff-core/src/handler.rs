//! The [`Handler`] trait.
//!
//! A handler looks at a request and either claims it by returning `Some`
//! with a result, or declines with `None` so the chain moves on. Any
//! `Fn(&R) -> Option<T>` closure is a handler:
//!
//! ```rust
//! use handoff_core::Handler;
//!
//! let even = |n: &u32| (n % 2 == 0).then(|| "even");
//! assert_eq!(even.handle(&4), Some("even"));
//! assert_eq!(even.handle(&5), None);
//! ```
//!
//! Handlers take the request by reference and never see the rest of the
//! chain; ordering and fallthrough are owned by
//! [`HandlerChain`](crate::HandlerChain).

/// A node that may claim a request of type `R` and produce a `T`.
pub trait Handler<R: ?Sized, T>: Send + Sync {
    /// Returns `Some` to claim the request, `None` to defer to the next link.
    fn handle(&self, request: &R) -> Option<T>;
}

impl<R, T, F> Handler<R, T> for F
where
    R: ?Sized,
    F: Fn(&R) -> Option<T> + Send + Sync,
{
    fn handle(&self, request: &R) -> Option<T> {
        self(request)
    }
}

/// A type-erased handler, owned by the link that holds it.
pub type BoxedHandler<R, T> = Box<dyn Handler<R, T>>;

/// Erases a concrete handler into a [`BoxedHandler`].
pub fn into_handler<R, T, H>(handler: H) -> BoxedHandler<R, T>
where
    R: ?Sized,
    H: Handler<R, T> + 'static,
{
    Box::new(handler)
}
