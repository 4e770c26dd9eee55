use std::fmt;

use waymark_core::{Params, RoutePattern, Routed};

pub type RenderFn<R> = Box<dyn Fn(&Params) -> Option<R> + Send + Sync>;

/// A pattern and the function that renders it.
///
/// The render function gets the parameters bound by the pattern and may
/// return `None` to say it has nothing to show for this match.
pub struct RouteDefinition<R> {
    pattern: RoutePattern,
    render: RenderFn<R>,
}

impl<R> RouteDefinition<R> {
    pub fn new<F>(path: &str, render: F) -> Self
    where
        F: Fn(&Params) -> Option<R> + Send + Sync + 'static,
    {
        RouteDefinition {
            pattern: RoutePattern::new(path),
            render: Box::new(render),
        }
    }

    pub fn path(&self) -> &str {
        self.pattern.pattern()
    }

    pub fn render(&self, params: &Params) -> Option<R> {
        (self.render)(params)
    }
}

impl<R> Routed for RouteDefinition<R> {
    fn pattern(&self) -> &RoutePattern {
        &self.pattern
    }
}

impl<R> fmt::Debug for RouteDefinition<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteDefinition")
            .field("pattern", &self.pattern)
            .finish()
    }
}
