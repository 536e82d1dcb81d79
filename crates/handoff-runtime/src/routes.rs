//! Route tables: chains defined in configuration.
//!
//! Every [`RouteConfig`] becomes one named link of a
//! `HandlerChain<str, String>`, in the order the routes are listed. A route
//! claims a request equal to one of its `accepts` values and replies with its
//! template, `{request}` replaced by the request text.
//!
//! ```toml
//! [[routes]]
//! name = "mercedes"
//! accepts = ["Mercedes"]
//! reply = "Mercedes store will sell the {request}."
//! ```

use std::collections::HashMap;

use handoff_core::{HandlerChain, Link, when};
use tracing::{debug, warn};

use crate::config::{HandoffConfig, RouteConfig};
use crate::error::RuntimeResult;

/// Placeholder substituted with the request text in reply templates.
pub const REQUEST_PLACEHOLDER: &str = "{request}";

/// Renders a reply template for `request`.
pub fn render_reply(template: &str, request: &str) -> String {
    template.replace(REQUEST_PLACEHOLDER, request)
}

/// Turns one route into a named link.
pub fn route_link(route: &RouteConfig) -> Link<str, String> {
    let accepts = route.accepts.clone();
    let ignore_case = route.ignore_case;
    let reply = route.reply.clone();

    when(
        move |request: &str| {
            accepts.iter().any(|accepted| {
                if ignore_case {
                    accepted.eq_ignore_ascii_case(request)
                } else {
                    accepted == request
                }
            })
        },
        move |request: &str| render_reply(&reply, request),
    )
    .name(route.name.as_str())
}

/// Accepted values claimed so far, with the position and name of the
/// claiming route.
#[derive(Debug, Default)]
struct Claims<'a> {
    routes: usize,
    exact: HashMap<&'a str, (usize, &'a str)>,
    folded: HashMap<String, (usize, &'a str)>,
}

impl<'a> Claims<'a> {
    /// Returns the first earlier route that claims every request `accepted`
    /// stands for in `route`.
    fn owner(&self, route: &RouteConfig, accepted: &str) -> Option<&'a str> {
        let folded = self.folded.get(&accepted.to_ascii_lowercase()).copied();
        let owner = if route.ignore_case {
            folded
        } else {
            let exact = self.exact.get(accepted).copied();
            exact.into_iter().chain(folded).min_by_key(|(pos, _)| *pos)
        };
        owner.map(|(_, name)| name)
    }

    /// Records the accepted values of `route`, returning each one that an
    /// earlier route shadows together with that route's name.
    fn claim(&mut self, route: &'a RouteConfig) -> Vec<(&'a str, &'a str)> {
        let position = self.routes;
        self.routes += 1;

        let mut shadowed = Vec::new();
        for accepted in &route.accepts {
            if let Some(owner) = self.owner(route, accepted) {
                shadowed.push((accepted.as_str(), owner));
            } else if route.ignore_case {
                self.folded.insert(
                    accepted.to_ascii_lowercase(),
                    (position, route.name.as_str()),
                );
            } else {
                self.exact
                    .insert(accepted.as_str(), (position, route.name.as_str()));
            }
        }
        shadowed
    }
}

/// Links `routes` into a chain, sealing it if `seal` is set.
///
/// An accepted value already claimed by an earlier route can never reach the
/// later one; this is logged as a warning and otherwise allowed.
pub fn build_chain(
    routes: &[RouteConfig],
    seal: bool,
) -> RuntimeResult<HandlerChain<str, String>> {
    let mut chain = HandlerChain::new();
    let mut claims = Claims::default();

    for route in routes {
        for (accepted, owner) in claims.claim(route) {
            warn!(
                route = %route.name,
                shadowed_by = %owner,
                request = %accepted,
                "Request already claimed by an earlier route"
            );
        }

        chain.append(route_link(route))?;
    }

    if seal {
        chain.seal();
    }

    debug!(routes = chain.len(), sealed = chain.is_sealed(), "Route table built");
    Ok(chain)
}

/// Builds the chain described by a loaded configuration.
pub fn chain_from_config(config: &HandoffConfig) -> RuntimeResult<HandlerChain<str, String>> {
    build_chain(&config.routes, config.seal)
}
