//! The Clarke-Wright savings engine.
//!
//! - [`compute_savings`] — pairwise savings list, sorted best-first, O(n² log n)
//! - [`plan_routes`] — the single greedy merge pass producing a [`RoutePlan`](crate::report::RoutePlan)

mod engine;
mod list;

pub use engine::plan_routes;
pub use list::{compute_savings, Saving};
