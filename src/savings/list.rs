//! Pairwise savings computation (Clarke & Wright, 1964).

use crate::distance::DistanceOracle;
use crate::network::RoadNetwork;

/// The saving earned by serving locations `i` and `j` on one combined
/// trip instead of two separate depot round trips:
///
/// ```text
/// s(i, j) = d(0, i) + d(0, j) - d(i, j)
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Saving {
    /// Lower-id location of the pair.
    pub i: usize,
    /// Higher-id location of the pair.
    pub j: usize,
    /// Cost reduction relative to two separate round trips.
    pub value: f64,
}

/// Computes the saving for every unordered pair of delivery locations
/// and sorts the list in decreasing order of value.
///
/// Pairs are generated by an ascending-id scan (`i < j`) and the sort is
/// stable, so equal savings keep scan order. This fixed ordering is the
/// greedy policy of the whole planner: each pair is considered exactly
/// once, best saving first, against the original unmerged distances.
///
/// # Examples
///
/// ```
/// use savings_routing::models::Location;
/// use savings_routing::network::RoadNetwork;
/// use savings_routing::distance::DistanceOracle;
/// use savings_routing::savings::compute_savings;
///
/// let network = RoadNetwork::new(vec![
///     Location::depot(0.0, 0.0),
///     Location::new(1, 3.0, 0.0, 5),
///     Location::new(2, 4.0, 0.0, 5),
/// ]);
/// let oracle = DistanceOracle::new(&network);
/// let savings = compute_savings(&network, &oracle);
/// // s(1, 2) = 3 + 4 - 1 = 6.
/// assert_eq!(savings.len(), 1);
/// assert!((savings[0].value - 6.0).abs() < 1e-10);
/// ```
pub fn compute_savings(network: &RoadNetwork, oracle: &DistanceOracle) -> Vec<Saving> {
    let n = network.num_locations();
    let pairs = if n > 1 { (n - 1) * (n - 2) / 2 } else { 0 };
    let mut savings = Vec::with_capacity(pairs);
    for i in 1..n {
        for j in (i + 1)..n {
            let value = oracle.distance(0, i) + oracle.distance(0, j) - oracle.distance(i, j);
            savings.push(Saving { i, j, value });
        }
    }
    savings.sort_by(|a, b| {
        b.value
            .partial_cmp(&a.value)
            .expect("saving should not be NaN")
    });
    savings
}
