pub mod pattern;
pub mod table;

pub use pattern::{segments, Params, RoutePattern, Segment};
pub use table::{Routed, RouteTable};
