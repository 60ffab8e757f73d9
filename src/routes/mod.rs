pub mod descriptor;
pub mod pattern;
pub mod table;

pub use descriptor::{MenuItem, RouteDescriptor, RouteMeta, View};
pub use pattern::RoutePattern;
pub use table::{console_routes, RouteMatch, RouteTable};
