//! Travel-cost lookup with straight-line fallback.

use crate::network::RoadNetwork;

/// Resolves the travel cost between two locations.
///
/// A recorded road wins over geometry: the oracle first checks the road
/// store in both orientations and only falls back to Euclidean distance
/// over coordinates when no road exists for the pair. Fallback results
/// are recomputed on every query, never written back into the store.
///
/// # Examples
///
/// ```
/// use savings_routing::models::Location;
/// use savings_routing::network::RoadNetwork;
/// use savings_routing::distance::DistanceOracle;
///
/// let mut network = RoadNetwork::new(vec![
///     Location::depot(0.0, 0.0),
///     Location::new(1, 3.0, 4.0, 10),
/// ]);
/// network.add_road(1, 0, 9.0);
///
/// let oracle = DistanceOracle::new(&network);
/// // Recorded road preferred, found in either orientation.
/// assert_eq!(oracle.distance(0, 1), 9.0);
/// // No road between a location and itself.
/// assert_eq!(oracle.distance(1, 1), 0.0);
/// ```
pub struct DistanceOracle<'a> {
    network: &'a RoadNetwork,
}

impl<'a> DistanceOracle<'a> {
    /// Creates an oracle over the given network.
    pub fn new(network: &'a RoadNetwork) -> Self {
        Self { network }
    }

    /// Travel cost from `a` to `b`.
    ///
    /// Returns 0 when `a == b`. Otherwise prefers a recorded road,
    /// trying `(a, b)` then `(b, a)`, and falls back to Euclidean
    /// distance between the two locations' coordinates.
    ///
    /// # Panics
    ///
    /// Panics if either id is unknown to the network; callers must only
    /// query ids the network contains.
    pub fn distance(&self, a: usize, b: usize) -> f64 {
        if a == b {
            return 0.0;
        }
        if let Some(t) = self.network.road(a, b) {
            return t;
        }
        if let Some(t) = self.network.road(b, a) {
            return t;
        }
        self.network.location(a).distance_to(self.network.location(b))
    }

    /// Total travel cost along a path, summed over consecutive pairs.
    pub fn path_distance(&self, path: &[usize]) -> f64 {
        path.windows(2).map(|leg| self.distance(leg[0], leg[1])).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Location;

    fn sample_network() -> RoadNetwork {
        let mut network = RoadNetwork::new(vec![
            Location::depot(0.0, 0.0),
            Location::new(1, 3.0, 4.0, 10),
            Location::new(2, 0.0, 8.0, 20),
        ]);
        network.add_road(0, 1, 6.0);
        network
    }

    #[test]
    fn test_same_location_is_zero() {
        let network = sample_network();
        let oracle = DistanceOracle::new(&network);
        assert_eq!(oracle.distance(0, 0), 0.0);
        assert_eq!(oracle.distance(2, 2), 0.0);
    }

    #[test]
    fn test_road_preferred_over_euclidean() {
        let network = sample_network();
        let oracle = DistanceOracle::new(&network);
        // Euclidean would be 5.0; the recorded road says 6.0.
        assert_eq!(oracle.distance(0, 1), 6.0);
    }

    #[test]
    fn test_reverse_orientation_found() {
        let network = sample_network();
        let oracle = DistanceOracle::new(&network);
        assert_eq!(oracle.distance(1, 0), 6.0);
    }

    #[test]
    fn test_euclidean_fallback() {
        let network = sample_network();
        let oracle = DistanceOracle::new(&network);
        // No road between 0 and 2; coordinates are (0,0) and (0,8).
        assert!((oracle.distance(0, 2) - 8.0).abs() < 1e-10);
        // (3,4) to (0,8) = 5.0.
        assert!((oracle.distance(1, 2) - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_path_distance() {
        let network = sample_network();
        let oracle = DistanceOracle::new(&network);
        // 0->1 road (6.0) + 1->2 fallback (5.0) + 2->0 fallback (8.0).
        assert!((oracle.path_distance(&[0, 1, 2, 0]) - 19.0).abs() < 1e-10);
        assert_eq!(oracle.path_distance(&[0]), 0.0);
        assert_eq!(oracle.path_distance(&[]), 0.0);
    }
}
