//! Location table plus sparse road store.

use std::collections::HashMap;

use crate::models::Location;

/// The problem's location graph: every location indexed by id, plus a
/// sparse store of recorded roads between location pairs.
///
/// Locations must be supplied in id order with the depot (id 0) first;
/// the dataset loader guarantees this, and direct constructors are
/// expected to do the same. Roads are optional — any pair without a
/// recorded road falls back to straight-line distance at query time
/// (see [`DistanceOracle`](crate::distance::DistanceOracle)).
///
/// # Examples
///
/// ```
/// use savings_routing::models::Location;
/// use savings_routing::network::RoadNetwork;
///
/// let mut network = RoadNetwork::new(vec![
///     Location::depot(0.0, 0.0),
///     Location::new(1, 3.0, 4.0, 10),
/// ]);
/// network.add_road(0, 1, 7.5);
/// assert_eq!(network.num_locations(), 2);
/// assert_eq!(network.road(0, 1), Some(7.5));
/// assert_eq!(network.road(1, 0), None);
/// ```
#[derive(Debug, Clone)]
pub struct RoadNetwork {
    locations: Vec<Location>,
    roads: HashMap<(usize, usize), f64>,
}

impl RoadNetwork {
    /// Creates a network from locations ordered by id (depot first).
    pub fn new(locations: Vec<Location>) -> Self {
        debug_assert!(locations.iter().enumerate().all(|(i, l)| l.id() == i));
        Self {
            locations,
            roads: HashMap::new(),
        }
    }

    /// Records a road from `from` to `to` with the given travel time.
    pub fn add_road(&mut self, from: usize, to: usize, travel_time: f64) {
        self.roads.insert((from, to), travel_time);
    }

    /// Looks up a recorded road in the stored orientation only.
    pub fn road(&self, from: usize, to: usize) -> Option<f64> {
        self.roads.get(&(from, to)).copied()
    }

    /// Number of recorded roads.
    pub fn num_roads(&self) -> usize {
        self.roads.len()
    }

    /// The location with the given id.
    ///
    /// # Panics
    ///
    /// Panics if no such location exists; querying an unknown id is a
    /// caller bug, not a recoverable condition.
    pub fn location(&self, id: usize) -> &Location {
        &self.locations[id]
    }

    /// Mutable access to a location, for consumers marking visits.
    ///
    /// # Panics
    ///
    /// Panics if no such location exists.
    pub fn location_mut(&mut self, id: usize) -> &mut Location {
        &mut self.locations[id]
    }

    /// All locations in id order (index 0 = depot).
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// Total number of locations, depot included.
    pub fn num_locations(&self) -> usize {
        self.locations.len()
    }
}
