mod environment;
mod error;
mod host;
mod location;
mod navigation;
mod route;
mod router;

pub use environment::{Listener, MemoryEnvironment, NavigationEnvironment, Subscription};
pub use error::NavigationError;
pub use host::Host;
pub use navigation::{navigate, navigate_event_handler, LinkClick, LinkEvent};
pub use route::{RenderFn, RouteDefinition};
pub use router::Router;
pub use waymark_core::{Params, RoutePattern, RouteTable, Routed, Segment};

pub type Result<T> = std::result::Result<T, NavigationError>;
