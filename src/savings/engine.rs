//! The greedy planning pass.

use log::{debug, trace};

use crate::distance::DistanceOracle;
use crate::merge::RouteSet;
use crate::models::Fleet;
use crate::network::RoadNetwork;
use crate::report::RoutePlan;
use crate::savings::compute_savings;

/// Plans delivery routes for the fleet with the Clarke-Wright savings
/// heuristic.
///
/// Seeds one round-trip route per delivery location, computes the full
/// savings list once against the unmerged distances, then walks the list
/// in decreasing order attempting one merge per entry. Merges are never
/// revisited, re-scored, or rolled back, so the run is a single
/// deterministic pass: identical inputs always produce an identical
/// plan. Entries whose saving is zero or negative are skipped — joining
/// such a pair could only lengthen the plan.
///
/// The result never fails: when demand outstrips the fleet, the plan
/// simply contains more routes than trucks and flags the shortfall.
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
///     Location::new(1, 1.0, 0.0, 10),
///     Location::new(2, 2.0, 0.0, 10),
///     Location::new(3, 3.0, 0.0, 10),
/// ]);
/// let plan = plan_routes(&network, &Fleet::new(1, 30));
/// assert_eq!(plan.num_routes(), 1);
/// assert!((plan.total_distance() - 6.0).abs() < 1e-10);
/// ```
pub fn plan_routes(network: &RoadNetwork, fleet: &Fleet) -> RoutePlan {
    let oracle = DistanceOracle::new(network);
    let mut routes = RouteSet::seed(network, &oracle);
    debug!("seeded {} single-stop routes", routes.num_active());

    let savings = compute_savings(network, &oracle);
    debug!("computed {} savings entries", savings.len());

    let mut merges = 0;
    for saving in &savings {
        if saving.value <= 0.0 {
            continue;
        }
        if routes.try_merge(saving.i, saving.j, fleet.capacity(), &oracle) {
            merges += 1;
            trace!(
                "merged routes joining {} and {} (saving {:.2})",
                saving.i,
                saving.j,
                saving.value
            );
        }
    }
    debug!("performed {merges} merges");

    RoutePlan::new(routes.into_routes(), *fleet)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Location;
    use proptest::prelude::*;

    #[test]
    fn test_two_stops_merge_into_one_route() {
        // Depot at origin, A at (0,10) demand 10, B at (10,0) demand 10,
        // capacity 25: one merged route serving both.
        let network = RoadNetwork::new(vec![
            Location::depot(0.0, 0.0),
            Location::new(1, 0.0, 10.0, 10),
            Location::new(2, 10.0, 0.0, 10),
        ]);
        let plan = plan_routes(&network, &Fleet::new(1, 25));

        assert_eq!(plan.num_routes(), 1);
        let route = &plan.routes()[0];
        assert!(route.path() == [0, 1, 2, 0] || route.path() == [0, 2, 1, 0]);
        assert_eq!(route.total_demand(), 20);
        let expected = 10.0 + 200.0_f64.sqrt() + 10.0;
        assert!((route.total_distance() - expected).abs() < 1e-10);
        assert!(!plan.is_under_provisioned());
    }

    #[test]
    fn test_capacity_blocks_merge() {
        // Same layout, capacity 15: the merged demand 20 won't fit.
        let network = RoadNetwork::new(vec![
            Location::depot(0.0, 0.0),
            Location::new(1, 0.0, 10.0, 10),
            Location::new(2, 10.0, 0.0, 10),
        ]);
        let plan = plan_routes(&network, &Fleet::new(2, 15));

        assert_eq!(plan.num_routes(), 2);
        for route in plan.routes() {
            assert_eq!(route.total_demand(), 10);
            assert_eq!(route.num_stops(), 1);
        }
    }

    #[test]
    fn test_zero_savings_leave_routes_unmerged() {
        // Three locations with no incentive to pair: the recorded roads
        // make every connecting leg as long as the two depot legs
        // combined, so all savings are zero or negative.
        let mut network = RoadNetwork::new(vec![
            Location::depot(0.0, 0.0),
            Location::new(1, 10.0, 0.0, 1),
            Location::new(2, -10.0, 0.0, 1),
            Location::new(3, 0.0, 10.0, 1),
        ]);
        network.add_road(1, 2, 20.0);
        network.add_road(1, 3, 25.0);
        network.add_road(2, 3, 20.0);
        let plan = plan_routes(&network, &Fleet::new(1, 100));

        assert_eq!(plan.num_routes(), 3);
        assert!(plan.is_under_provisioned());
    }

    #[test]
    fn test_line_merges_fully() {
        let network = RoadNetwork::new(vec![
            Location::depot(0.0, 0.0),
            Location::new(1, 1.0, 0.0, 10),
            Location::new(2, 2.0, 0.0, 10),
            Location::new(3, 3.0, 0.0, 10),
        ]);
        let plan = plan_routes(&network, &Fleet::new(1, 30));
        assert_eq!(plan.num_routes(), 1);
        // Optimal line tour: 0->1->2->3->0 = 6.
        assert!((plan.total_distance() - 6.0).abs() < 1e-10);
    }

    #[test]
    fn test_capacity_splits_line() {
        let network = RoadNetwork::new(vec![
            Location::depot(0.0, 0.0),
            Location::new(1, 1.0, 0.0, 15),
            Location::new(2, 2.0, 0.0, 15),
            Location::new(3, 3.0, 0.0, 15),
        ]);
        let plan = plan_routes(&network, &Fleet::new(3, 25));
        // 45 total demand never fits one truck of 25.
        assert!(plan.num_routes() >= 2);
        for route in plan.routes() {
            assert!(route.total_demand() <= 25);
        }
    }

    #[test]
    fn test_depot_only_network() {
        let network = RoadNetwork::new(vec![Location::depot(0.0, 0.0)]);
        let plan = plan_routes(&network, &Fleet::new(1, 100));
        assert_eq!(plan.num_routes(), 0);
        assert_eq!(plan.total_distance(), 0.0);
        assert!(!plan.is_under_provisioned());
    }

    #[test]
    fn test_single_stop_network() {
        let network = RoadNetwork::new(vec![
            Location::depot(0.0, 0.0),
            Location::new(1, 5.0, 0.0, 10),
        ]);
        let plan = plan_routes(&network, &Fleet::new(1, 100));
        assert_eq!(plan.num_routes(), 1);
        assert!((plan.total_distance() - 10.0).abs() < 1e-10);
    }

    #[test]
    fn test_merge_monotonicity() {
        // Every merge removes one route and conserves total stops.
        let network = RoadNetwork::new(vec![
            Location::depot(0.0, 0.0),
            Location::new(1, 5.0, 0.0, 10),
            Location::new(2, 0.0, 5.0, 10),
            Location::new(3, 5.0, 5.0, 10),
        ]);
        let plan = plan_routes(&network, &Fleet::new(3, 100));
        let stops: usize = plan.routes().iter().map(|r| r.num_stops()).sum();
        assert_eq!(stops, 3);
    }

    fn demo_network(spots: &[(f64, f64, i32)]) -> RoadNetwork {
        let mut locations = vec![Location::depot(50.0, 50.0)];
        for (k, &(x, y, demand)) in spots.iter().enumerate() {
            locations.push(Location::new(k + 1, x, y, demand));
        }
        RoadNetwork::new(locations)
    }

    proptest! {
        /// Every delivery location ends up on exactly one route, every
        /// route stays depot-bounded and within capacity.
        #[test]
        fn prop_plan_invariants(
            spots in prop::collection::vec((0.0f64..100.0, 0.0f64..100.0, 0i32..=50), 1..20),
            capacity in 50i32..200,
            trucks in 1usize..10,
        ) {
            let network = demo_network(&spots);
            let plan = plan_routes(&network, &Fleet::new(trucks, capacity));

            let mut seen = vec![0usize; network.num_locations()];
            for route in plan.routes() {
                prop_assert!(route.path().len() >= 3);
                prop_assert_eq!(*route.path().first().expect("non-empty"), 0);
                prop_assert_eq!(*route.path().last().expect("non-empty"), 0);
                prop_assert!(route.total_demand() <= capacity);
                for &stop in route.stops() {
                    prop_assert_ne!(stop, 0);
                    seen[stop] += 1;
                }
            }
            for count in &seen[1..] {
                prop_assert_eq!(*count, 1);
            }
            prop_assert_eq!(
                plan.is_under_provisioned(),
                plan.num_routes() > trucks
            );
        }

        /// Identical input always yields an identical plan.
        #[test]
        fn prop_plan_deterministic(
            spots in prop::collection::vec((0.0f64..100.0, 0.0f64..100.0, 0i32..=50), 1..15),
            capacity in 50i32..200,
        ) {
            let network = demo_network(&spots);
            let fleet = Fleet::new(2, capacity);
            let first = plan_routes(&network, &fleet);
            let second = plan_routes(&network, &fleet);

            prop_assert_eq!(first.num_routes(), second.num_routes());
            for (a, b) in first.routes().iter().zip(second.routes()) {
                prop_assert_eq!(a.path(), b.path());
                prop_assert_eq!(a.total_demand(), b.total_demand());
                prop_assert!((a.total_distance() - b.total_distance()).abs() < 1e-12);
            }
        }
    }
}
