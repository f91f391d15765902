//! Plan reporting: the final route list and its aggregate statistics.

mod plan;

pub use plan::{PlanSummary, RoutePlan, RouteSummary};
