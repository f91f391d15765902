//! Routes: depot-to-depot delivery paths.

/// An ordered delivery path for one truck.
///
/// The path always begins and ends at the depot (id 0) and visits at
/// least one delivery location in between, so its length is never below
/// 3. `total_demand` sums the demand of every visited location and
/// `total_distance` sums the travel cost of every consecutive leg.
///
/// The two mergeability flags track whether the location adjacent to the
/// depot on each end may still be joined to another route. They start
/// `true` and can only be lost, never regained.
///
/// # Examples
///
/// ```
/// use savings_routing::models::Route;
///
/// let route = Route::seed(4, 12, 18.0);
/// assert_eq!(route.path(), &[0, 4, 0]);
/// assert_eq!(route.total_demand(), 12);
/// assert!(route.mergeable_at_start() && route.mergeable_at_end());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    path: Vec<usize>,
    total_demand: i32,
    total_distance: f64,
    mergeable_at_start: bool,
    mergeable_at_end: bool,
}

impl Route {
    /// Creates the initial single-stop route `[0, location, 0]`.
    ///
    /// `round_trip` is the depot-to-location-and-back distance.
    pub fn seed(location: usize, demand: i32, round_trip: f64) -> Self {
        Self {
            path: vec![0, location, 0],
            total_demand: demand,
            total_distance: round_trip,
            mergeable_at_start: true,
            mergeable_at_end: true,
        }
    }

    /// Assembles a merged route from an already-spliced path.
    pub(crate) fn merged(
        path: Vec<usize>,
        total_demand: i32,
        total_distance: f64,
        mergeable_at_start: bool,
        mergeable_at_end: bool,
    ) -> Self {
        Self {
            path,
            total_demand,
            total_distance,
            mergeable_at_start,
            mergeable_at_end,
        }
    }

    /// The full path, depot endpoints included.
    pub fn path(&self) -> &[usize] {
        &self.path
    }

    /// The delivery locations in visit order, depot endpoints stripped.
    pub fn stops(&self) -> &[usize] {
        &self.path[1..self.path.len() - 1]
    }

    /// First delivery location after leaving the depot.
    pub fn first_stop(&self) -> usize {
        self.path[1]
    }

    /// Last delivery location before returning to the depot.
    pub fn last_stop(&self) -> usize {
        self.path[self.path.len() - 2]
    }

    /// Number of delivery locations on this route.
    pub fn num_stops(&self) -> usize {
        self.path.len() - 2
    }

    /// Total demand delivered along this route.
    pub fn total_demand(&self) -> i32 {
        self.total_demand
    }

    /// Total travel distance of this route.
    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }

    /// Whether the head end may still join another route.
    pub fn mergeable_at_start(&self) -> bool {
        self.mergeable_at_start
    }

    /// Whether the tail end may still join another route.
    pub fn mergeable_at_end(&self) -> bool {
        self.mergeable_at_end
    }

    /// Consumes the route, yielding its stops without depot endpoints.
    pub(crate) fn into_stops(mut self) -> Vec<usize> {
        self.path.pop();
        self.path.remove(0);
        self.path
    }
}
