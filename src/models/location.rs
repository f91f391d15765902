//! Delivery locations.

/// A delivery location (or the depot) in a road network.
///
/// Location 0 is always the depot: the single place every route starts
/// and ends. All other locations carry a non-negative demand, the amount
/// of cargo that must be delivered there.
///
/// The `visited` flag is bookkeeping for consumers that walk finished
/// routes (e.g. a renderer animating deliveries); the planner itself
/// never reads it.
///
/// # Examples
///
/// ```
/// use savings_routing::models::Location;
///
/// let depot = Location::depot(35.0, 35.0);
/// assert_eq!(depot.id(), 0);
/// assert!(depot.is_depot());
///
/// let stop = Location::new(1, 41.0, 49.0, 10);
/// assert_eq!(stop.demand(), 10);
/// assert!(!stop.is_depot());
/// ```
#[derive(Debug, Clone)]
pub struct Location {
    id: usize,
    x: f64,
    y: f64,
    demand: i32,
    is_depot: bool,
    visited: bool,
}

impl Location {
    /// Creates a delivery location with the given id, coordinates, and demand.
    pub fn new(id: usize, x: f64, y: f64, demand: i32) -> Self {
        Self {
            id,
            x,
            y,
            demand,
            is_depot: false,
            visited: false,
        }
    }

    /// Creates the depot at the given coordinates (id 0, no demand).
    pub fn depot(x: f64, y: f64) -> Self {
        Self {
            id: 0,
            x,
            y,
            demand: 0,
            is_depot: true,
            visited: false,
        }
    }

    /// Location id (0 = depot).
    pub fn id(&self) -> usize {
        self.id
    }

    /// X-coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y-coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Cargo demand at this location (0 for the depot).
    pub fn demand(&self) -> i32 {
        self.demand
    }

    /// Returns `true` if this location is the depot.
    pub fn is_depot(&self) -> bool {
        self.is_depot
    }

    /// Returns `true` if a route consumer has marked this location visited.
    pub fn is_visited(&self) -> bool {
        self.visited
    }

    /// Marks this location as visited. Never reversed.
    pub fn mark_visited(&mut self) {
        self.visited = true;
    }

    /// Euclidean distance to another location.
    pub fn distance_to(&self, other: &Location) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}
