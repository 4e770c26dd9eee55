use kv_log_macro as log;

use crate::{NavigationEnvironment, Result};

/// A click on something link-like, e.g. an anchor element
pub trait LinkEvent {
    fn prevent_default(&mut self);

    /// Where the element points, if anywhere
    fn href(&self) -> Option<&str>;
}

/// A plain [`LinkEvent`] for hosts that don't have their own event type.
#[derive(Debug, Clone, Default)]
pub struct LinkClick {
    href: Option<String>,
    default_prevented: bool,
}

impl LinkClick {
    pub fn new(href: impl ToString) -> Self {
        LinkClick {
            href: Some(href.to_string()),
            default_prevented: false,
        }
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

impl LinkEvent for LinkClick {
    fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    fn href(&self) -> Option<&str> {
        self.href.as_deref()
    }
}

/// Navigate to `href` without reloading: push it onto the environment's
/// history, then notify listeners once.
pub fn navigate(environment: &dyn NavigationEnvironment, href: &str) -> Result<()> {
    environment.push_path(href)?;
    environment.dispatch_change();
    Ok(())
}

/// Handle a link click in-app: the event's default action is always
/// prevented, and the router navigates to its destination instead.
pub fn navigate_event_handler(
    environment: &dyn NavigationEnvironment,
    event: &mut dyn LinkEvent,
) -> Result<()> {
    event.prevent_default();

    match event.href() {
        Some(href) => navigate(environment, href),
        None => {
            log::warn!("Link has no destination");
            Ok(())
        }
    }
}
