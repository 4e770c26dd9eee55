//! Common test utilities shared across integration tests

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};
use waymark::{MemoryEnvironment, Params, RouteDefinition, Router};

/// A route that renders its pattern and sorted parameters, e.g. "/users/:id id=42"
pub fn echo_route(path: &'static str) -> RouteDefinition<String> {
    RouteDefinition::new(path, move |params: &Params| {
        let mut pairs: Vec<String> = params.iter().map(|(k, v)| format!("{}={}", k, v)).collect();
        pairs.sort();

        if pairs.is_empty() {
            Some(path.to_string())
        } else {
            Some(format!("{} {}", path, pairs.join(" ")))
        }
    })
}

#[allow(dead_code)]
pub fn echo_router(paths: &[&'static str]) -> Router<String> {
    Router::new(paths.iter().map(|p| echo_route(*p)).collect())
}

#[allow(dead_code)]
pub fn memory_environment() -> Arc<MemoryEnvironment> {
    Arc::new(MemoryEnvironment::new("http://localhost/").unwrap())
}

/// A host that counts how often it was asked to refresh
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct CountingHost {
    refreshes: Arc<AtomicUsize>,
}

#[allow(dead_code)]
impl CountingHost {
    pub fn refreshes(&self) -> usize {
        self.refreshes.load(Ordering::SeqCst)
    }

    pub fn request(&self) -> impl Fn() + Send + Sync + 'static {
        let refreshes = self.refreshes.clone();
        move || {
            refreshes.fetch_add(1, Ordering::SeqCst);
        }
    }
}
