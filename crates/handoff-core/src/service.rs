//! Tower Service implementations for chains.
//!
//! Enabled with the `tower` feature. A chain is always ready and never fails;
//! an unhandled request is reported as `Ok(None)`.
//!
//! ```rust,ignore
//! use tower::ServiceExt;
//!
//! let reply = chain.oneshot("Ferrari".to_string()).await?;
//! ```

use std::convert::Infallible;
use std::future::{Ready, ready};
use std::task::{Context, Poll};

use tower::Service;

use crate::chain::HandlerChain;
use crate::shared::SharedChain;

impl<R, T> Service<R> for HandlerChain<R, T> {
    type Response = Option<T>;
    type Error = Infallible;
    type Future = Ready<Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, request: R) -> Self::Future {
        ready(Ok(self.dispatch(&request)))
    }
}

impl<R, T> Service<R> for SharedChain<R, T> {
    type Response = Option<T>;
    type Error = Infallible;
    type Future = Ready<Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, request: R) -> Self::Future {
        ready(Ok(self.dispatch(&request)))
    }
}

#[cfg(test)]
mod tests {
    use tower::ServiceExt;

    use super::*;
    use crate::link::on_eq;

    fn chain() -> HandlerChain<String, usize> {
        HandlerChain::new()
            .with(on_eq("Ferrari".to_string(), |r: &String| r.len()).name("ferrari"))
            .unwrap()
    }

    #[test]
    fn test_service_matches_dispatch() {
        let mut chain = chain();
        let direct = chain.dispatch(&"Ferrari".to_string());

        let via_service =
            tokio_test::block_on(chain.call("Ferrari".to_string())).unwrap();
        assert_eq!(via_service, direct);
        assert_eq!(via_service, Some(7));
    }

    #[test]
    fn test_shared_service_oneshot() {
        let shared = SharedChain::from(chain());
        let unhandled =
            tokio_test::block_on(shared.clone().oneshot("Lamborghini".to_string())).unwrap();
        assert_eq!(unhandled, None);

        let handled = tokio_test::block_on(shared.oneshot("Ferrari".to_string())).unwrap();
        assert_eq!(handled, Some(7));
    }
}
