use kv_log_macro as log;

use rustc_hash::FxHashMap;
use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc, Mutex, MutexGuard, PoisonError,
};
use url::Url;

use crate::{
    location::{parse_origin, resolve_href},
    NavigationError, Result,
};

/// Callback invoked whenever the environment's location changes
pub type Listener = Arc<dyn Fn() + Send + Sync>;

/// Handle returned by [`NavigationEnvironment::on_change`], used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Subscription(u64);

/// The navigation primitives a router needs from whatever hosts it.
///
/// `push_path` changes the location without notifying anybody;
/// `dispatch_change` delivers a navigation-changed notification to every
/// current listener, synchronously.
pub trait NavigationEnvironment: Send + Sync {
    fn current_path(&self) -> String;
    fn push_path(&self, href: &str) -> Result<()>;
    fn dispatch_change(&self);
    fn on_change(&self, listener: Listener) -> Subscription;
    fn unsubscribe(&self, subscription: Subscription);
}

struct History {
    entries: Vec<Url>,
    cursor: usize,
}

impl History {
    fn current(&self) -> &Url {
        &self.entries[self.cursor]
    }
}

/// An in-process history stack with browser-like semantics.
///
/// Pushing drops any forward entries; `back` and `forward` move through the
/// stack and notify listeners the way a browser fires `popstate`.
pub struct MemoryEnvironment {
    history: Mutex<History>,
    listeners: Mutex<FxHashMap<Subscription, Listener>>,
    next_subscription: AtomicU64,
}

impl MemoryEnvironment {
    /// Create a history with a single entry at `origin`, e.g. "http://localhost/"
    pub fn new(origin: &str) -> Result<Self> {
        let origin = parse_origin(origin)?;

        Ok(MemoryEnvironment {
            history: Mutex::new(History {
                entries: vec![origin],
                cursor: 0,
            }),
            listeners: Mutex::new(FxHashMap::default()),
            next_subscription: AtomicU64::new(0),
        })
    }

    /// The full URL of the current entry
    pub fn current_href(&self) -> String {
        self.history().current().to_string()
    }

    pub fn history_len(&self) -> usize {
        self.history().entries.len()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners().len()
    }

    /// Step back one entry. Returns false, without notifying, at the start.
    pub fn back(&self) -> bool {
        {
            let mut history = self.history();
            if history.cursor == 0 {
                return false;
            }
            history.cursor -= 1;
        }

        self.dispatch_change();
        true
    }

    /// Step forward one entry. Returns false, without notifying, at the end.
    pub fn forward(&self) -> bool {
        {
            let mut history = self.history();
            if history.cursor + 1 >= history.entries.len() {
                return false;
            }
            history.cursor += 1;
        }

        self.dispatch_change();
        true
    }

    fn history(&self) -> MutexGuard<'_, History> {
        self.history.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn listeners(&self) -> MutexGuard<'_, FxHashMap<Subscription, Listener>> {
        self.listeners.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl NavigationEnvironment for MemoryEnvironment {
    fn current_path(&self) -> String {
        self.history().current().path().to_string()
    }

    fn push_path(&self, href: &str) -> Result<()> {
        let mut history = self.history();
        let url = resolve_href(history.current(), href)?;

        // same rule as a browser's pushState: never leave the current origin
        if url.origin() != history.current().origin() {
            log::warn!("Refusing cross-origin navigation", { href: href });
            return Err(NavigationError::NavigationFailed(format!(
                "'{}' is not on origin {}",
                href,
                history.current().origin().ascii_serialization()
            )));
        }

        log::info!("Pushing location", { href: href, path: url.path() });

        let cursor = history.cursor + 1;
        history.entries.truncate(cursor);
        history.entries.push(url);
        history.cursor = cursor;

        Ok(())
    }

    fn dispatch_change(&self) {
        // listeners may re-enter the environment, so call them unlocked
        let mut listeners: Vec<(Subscription, Listener)> = self
            .listeners()
            .iter()
            .map(|(subscription, listener)| (*subscription, listener.clone()))
            .collect();
        listeners.sort_by_key(|(subscription, _)| *subscription);

        log::debug!("Dispatching navigation change", { listeners: listeners.len() });

        for (_, listener) in listeners {
            listener();
        }
    }

    fn on_change(&self, listener: Listener) -> Subscription {
        let subscription = Subscription(self.next_subscription.fetch_add(1, Ordering::Relaxed));
        self.listeners().insert(subscription, listener);
        subscription
    }

    fn unsubscribe(&self, subscription: Subscription) {
        self.listeners().remove(&subscription);
    }
}
