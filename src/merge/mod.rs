//! Route merging: the endpoint decision table and the active-route arena.

mod pattern;
mod route_set;

pub use pattern::MergePattern;
pub use route_set::RouteSet;
