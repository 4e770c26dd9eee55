use kv_log_macro as log;

use crate::pattern::{segments, Params, RoutePattern};

/// Anything that can be stored in a [`RouteTable`].
pub trait Routed {
    fn pattern(&self) -> &RoutePattern;
}

impl Routed for RoutePattern {
    fn pattern(&self) -> &RoutePattern {
        self
    }
}

/// Routes ordered from most to least specific.
///
/// The order is fixed when the table is built; lookups walk it front to back
/// and stop at the first match. Routes of equal specificity keep the order
/// they were given in.
#[derive(Debug, Clone)]
pub struct RouteTable<T> {
    routes: Vec<T>,
}

impl<T: Routed> RouteTable<T> {
    pub fn new(mut routes: Vec<T>) -> Self {
        // stable, so ties stay in registration order
        routes.sort_by(|a, b| b.pattern().cmp_specificity(a.pattern()));

        log::info!("Route table built", { routes: routes.len() });

        RouteTable { routes }
    }

    /// Find the first route matching `location`, with the parameters it binds.
    pub fn find(&self, location: &str) -> Option<(&T, Params)> {
        let location: Vec<&str> = segments(location).collect();

        self.routes.iter().find_map(|route| {
            route
                .pattern()
                .matches_segments(&location)
                .map(|params| (route, params))
        })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl<T: Routed> FromIterator<T> for RouteTable<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        RouteTable::new(iter.into_iter().collect())
    }
}

impl<'a, T> IntoIterator for &'a RouteTable<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.routes.iter()
    }
}
