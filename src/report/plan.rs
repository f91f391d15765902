//! The final plan and its summary records.

use serde::Serialize;

use crate::models::{Fleet, Route};

/// The finished output of a planning run: the immutable route list plus
/// the fleet it was planned for.
///
/// This is the whole contract a rendering or reporting collaborator
/// needs — iterate the routes in order and read their accumulated
/// statistics, or take a [`PlanSummary`] for serialization.
///
/// # Examples
///
/// ```
/// use savings_routing::models::{Fleet, Location};
/// use savings_routing::network::RoadNetwork;
/// use savings_routing::savings::plan_routes;
///
/// let network = RoadNetwork::new(vec![
///     Location::depot(0.0, 0.0),
///     Location::new(1, 0.0, 10.0, 10),
///     Location::new(2, 10.0, 0.0, 10),
/// ]);
/// let plan = plan_routes(&network, &Fleet::new(1, 15));
/// // Demand 20 exceeds capacity 15, so the stops stay on separate
/// // routes and one truck is not enough.
/// assert_eq!(plan.num_routes(), 2);
/// assert!(plan.is_under_provisioned());
/// ```
#[derive(Debug, Clone)]
pub struct RoutePlan {
    routes: Vec<Route>,
    fleet: Fleet,
}

impl RoutePlan {
    pub(crate) fn new(routes: Vec<Route>, fleet: Fleet) -> Self {
        Self { routes, fleet }
    }

    /// The final routes, in planning order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Number of routes in the plan.
    pub fn num_routes(&self) -> usize {
        self.routes.len()
    }

    /// Number of trucks the fleet provides.
    pub fn num_trucks(&self) -> usize {
        self.fleet.trucks()
    }

    /// The fleet the plan was computed against.
    pub fn fleet(&self) -> Fleet {
        self.fleet
    }

    /// Total travel distance across all routes.
    pub fn total_distance(&self) -> f64 {
        self.routes.iter().map(|r| r.total_distance()).sum()
    }

    /// Returns `true` when the plan needs more trucks than the fleet
    /// has. Informational: the planner still produces every route.
    pub fn is_under_provisioned(&self) -> bool {
        self.routes.len() > self.fleet.trucks()
    }

    /// Builds the serializable summary of this plan.
    pub fn summary(&self) -> PlanSummary {
        PlanSummary {
            routes: self
                .routes
                .iter()
                .map(|r| RouteSummary {
                    path: r.path().to_vec(),
                    demand: r.total_demand(),
                    capacity: self.fleet.capacity(),
                    distance: r.total_distance(),
                })
                .collect(),
            num_routes: self.num_routes(),
            num_trucks: self.fleet.trucks(),
            total_distance: self.total_distance(),
            under_provisioned: self.is_under_provisioned(),
        }
    }
}

/// One route's share of a [`PlanSummary`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteSummary {
    /// Visit order, depot endpoints included.
    pub path: Vec<usize>,
    /// Demand carried on this route.
    pub demand: i32,
    /// Truck capacity, for demand-used/capacity display.
    pub capacity: i32,
    /// Travel distance of this route.
    pub distance: f64,
}

/// Aggregate statistics of a finished plan.
#[derive(Debug, Clone, Serialize)]
pub struct PlanSummary {
    /// Per-route records, in planning order.
    pub routes: Vec<RouteSummary>,
    /// Number of routes produced.
    pub num_routes: usize,
    /// Number of trucks available.
    pub num_trucks: usize,
    /// Distance summed across every route.
    pub total_distance: f64,
    /// `true` when more routes than trucks were produced.
    pub under_provisioned: bool,
}
