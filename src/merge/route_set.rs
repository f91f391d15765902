//! Arena of active routes and the merge operation.

use crate::distance::DistanceOracle;
use crate::merge::MergePattern;
use crate::models::Route;
use crate::network::RoadNetwork;

/// The active routes of a planning run.
///
/// Routes live in an arena of slots; a route's identity is its slot
/// index, and each delivery location maps to the slot of the route that
/// currently owns it, so "same route" checks are integer comparisons.
/// A successful merge writes the combined route into the surviving slot
/// and tombstones the absorbed one.
///
/// # Examples
///
/// ```
/// use savings_routing::models::Location;
/// use savings_routing::network::RoadNetwork;
/// use savings_routing::distance::DistanceOracle;
/// use savings_routing::merge::RouteSet;
///
/// let network = RoadNetwork::new(vec![
///     Location::depot(0.0, 0.0),
///     Location::new(1, 0.0, 10.0, 10),
///     Location::new(2, 10.0, 0.0, 10),
/// ]);
/// let oracle = DistanceOracle::new(&network);
/// let mut routes = RouteSet::seed(&network, &oracle);
/// assert_eq!(routes.num_active(), 2);
///
/// assert!(routes.try_merge(1, 2, 25, &oracle));
/// assert_eq!(routes.num_active(), 1);
/// ```
pub struct RouteSet {
    routes: Vec<Option<Route>>,
    /// Location id -> owning slot. `None` for the depot.
    owner: Vec<Option<usize>>,
}

impl RouteSet {
    /// Creates one single-stop route per delivery location, in
    /// ascending id order.
    pub fn seed(network: &RoadNetwork, oracle: &DistanceOracle) -> Self {
        let n = network.num_locations();
        let mut routes = Vec::with_capacity(n.saturating_sub(1));
        let mut owner = vec![None; n];
        for location in network.locations().iter().filter(|l| !l.is_depot()) {
            let id = location.id();
            let round_trip = oracle.path_distance(&[0, id, 0]);
            owner[id] = Some(routes.len());
            routes.push(Some(Route::seed(id, location.demand(), round_trip)));
        }
        Self { routes, owner }
    }

    /// The slot of the route currently owning `location`, or `None`
    /// for the depot.
    pub fn route_of(&self, location: usize) -> Option<usize> {
        self.owner[location]
    }

    /// The route in the given slot, if not tombstoned.
    pub fn route(&self, slot: usize) -> Option<&Route> {
        self.routes[slot].as_ref()
    }

    /// Number of live routes.
    pub fn num_active(&self) -> usize {
        self.routes.iter().filter(|r| r.is_some()).count()
    }

    /// Attempts to merge the routes owning `i` and `j`.
    ///
    /// Silently rejects pairs that share a route, pairs where either
    /// location is interior or its end is no longer mergeable, and
    /// pairs whose combined demand exceeds `capacity`. On success the
    /// spliced route replaces the prefix operand's slot, its distance
    /// recomputed leg by leg through the oracle, and the absorbed slot
    /// is tombstoned.
    pub fn try_merge(&mut self, i: usize, j: usize, capacity: i32, oracle: &DistanceOracle) -> bool {
        let slot_a = self.owner[i].expect("location is not on any route");
        let slot_b = self.owner[j].expect("location is not on any route");
        if slot_a == slot_b {
            return false;
        }

        let a = self.routes[slot_a].as_ref().expect("owned slot is live");
        let b = self.routes[slot_b].as_ref().expect("owned slot is live");

        let Some(pattern) = MergePattern::classify(a, b, i, j) else {
            return false;
        };
        if !pattern.ends_open(a, b) {
            return false;
        }
        if a.total_demand() + b.total_demand() > capacity {
            return false;
        }

        let layout = pattern.layout();
        let a = self.routes[slot_a].take().expect("owned slot is live");
        let b = self.routes[slot_b].take().expect("owned slot is live");
        let (prefix, suffix, surviving_slot) = if layout.a_is_prefix {
            (a, b, slot_a)
        } else {
            (b, a, slot_b)
        };

        // The merged route keeps each operand's non-joined end flag.
        let mergeable_at_start = if layout.reverse_prefix {
            prefix.mergeable_at_end()
        } else {
            prefix.mergeable_at_start()
        };
        let mergeable_at_end = if layout.reverse_suffix {
            suffix.mergeable_at_start()
        } else {
            suffix.mergeable_at_end()
        };
        let total_demand = prefix.total_demand() + suffix.total_demand();

        let mut stops = prefix.into_stops();
        if layout.reverse_prefix {
            stops.reverse();
        }
        let mut tail = suffix.into_stops();
        if layout.reverse_suffix {
            tail.reverse();
        }
        stops.append(&mut tail);

        let mut path = Vec::with_capacity(stops.len() + 2);
        path.push(0);
        path.extend(stops);
        path.push(0);
        let total_distance = oracle.path_distance(&path);

        let merged = Route::merged(
            path,
            total_demand,
            total_distance,
            mergeable_at_start,
            mergeable_at_end,
        );
        for &stop in merged.stops() {
            self.owner[stop] = Some(surviving_slot);
        }
        self.routes[surviving_slot] = Some(merged);
        true
    }

    /// Consumes the set, yielding live routes in arena order.
    pub fn into_routes(self) -> Vec<Route> {
        self.routes.into_iter().flatten().collect()
    }
}
