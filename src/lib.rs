//! # savings-routing
//!
//! Clarke-Wright savings heuristic for the capacitated vehicle routing
//! problem (CVRP): a fleet of identical trucks leaves a single depot,
//! serves every delivery location, and returns, with routes built by
//! greedily merging depot round trips in decreasing order of saving.
//!
//! ## Modules
//!
//! - [`models`] — Domain types (Location, Fleet, Route)
//! - [`network`] — Road network: locations plus sparse travel-time edges
//! - [`distance`] — Travel-cost oracle with straight-line fallback
//! - [`savings`] — Savings list and the greedy planning pass
//! - [`merge`] — Endpoint decision table and the active-route arena
//! - [`report`] — Final plan, per-route records, aggregate statistics
//! - [`dataset`] — JSON instance loading and validation
//!
//! ## Example
//!
//! ```
//! use savings_routing::models::{Fleet, Location};
//! use savings_routing::network::RoadNetwork;
//! use savings_routing::savings::plan_routes;
//!
//! let network = RoadNetwork::new(vec![
//!     Location::depot(0.0, 0.0),
//!     Location::new(1, 0.0, 10.0, 10),
//!     Location::new(2, 10.0, 0.0, 10),
//! ]);
//! let fleet = Fleet::new(1, 25);
//!
//! let plan = plan_routes(&network, &fleet);
//! assert_eq!(plan.num_routes(), 1);
//! assert_eq!(plan.routes()[0].total_demand(), 20);
//! ```

pub mod dataset;
pub mod distance;
pub mod merge;
pub mod models;
pub mod network;
pub mod report;
pub mod savings;
