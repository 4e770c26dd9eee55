use kv_log_macro as log;

use std::sync::Arc;
use waymark_core::{RouteTable, Routed};

use crate::{Host, Listener, NavigationEnvironment, RouteDefinition, Subscription};

struct Attachment {
    environment: Arc<dyn NavigationEnvironment>,
    subscription: Subscription,
}

/// Resolves locations against a fixed set of routes and keeps a host
/// refreshed while navigation happens.
pub struct Router<R> {
    routes: RouteTable<RouteDefinition<R>>,
    attachment: Option<Attachment>,
}

impl<R> Router<R> {
    /// Build a router; routes are ordered by specificity once, here.
    pub fn new(routes: Vec<RouteDefinition<R>>) -> Self {
        Router {
            routes: RouteTable::new(routes),
            attachment: None,
        }
    }

    /// Render the most specific route matching `location`, or `None` when no
    /// route matches or the matching route has nothing to show.
    pub fn resolve(&self, location: &str) -> Option<R> {
        match self.routes.find(location) {
            Some((route, params)) => {
                log::debug!("Resolved route", {
                    location: location,
                    pattern: route.pattern().pattern()
                });
                route.render(&params)
            }
            None => {
                log::debug!("No route matched", { location: location });
                None
            }
        }
    }

    /// Resolve whatever location `environment` is currently at.
    pub fn resolve_current(&self, environment: &dyn NavigationEnvironment) -> Option<R> {
        self.resolve(&environment.current_path())
    }

    /// Subscribe to `environment`'s navigation changes, asking `host` to
    /// refresh on each one. Starting a router that is already started does
    /// nothing.
    pub fn start(
        &mut self,
        environment: Arc<dyn NavigationEnvironment>,
        host: impl Host + 'static,
    ) {
        if self.attachment.is_some() {
            log::warn!("Router already started");
            return;
        }

        let listener: Listener = Arc::new(move || host.request_refresh());
        let subscription = environment.on_change(listener);

        log::debug!("Router started", { routes: self.routes.len() });

        self.attachment = Some(Attachment {
            environment,
            subscription,
        });
    }

    /// Drop the subscription made by [`Router::start`], if any.
    pub fn stop(&mut self) {
        if let Some(attachment) = self.attachment.take() {
            attachment.environment.unsubscribe(attachment.subscription);
            log::debug!("Router stopped");
        }
    }

    pub fn is_started(&self) -> bool {
        self.attachment.is_some()
    }

    /// The routes in the order they are tried
    pub fn routes(&self) -> &RouteTable<RouteDefinition<R>> {
        &self.routes
    }
}

impl<R> Drop for Router<R> {
    fn drop(&mut self) {
        self.stop();
    }
}
