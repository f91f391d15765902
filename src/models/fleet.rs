//! Fleet descriptor.

/// The delivery fleet: how many trucks are available and the single
/// cargo capacity every truck shares.
///
/// The planner does not assign routes to individual trucks; it only
/// compares the number of routes it produced against `trucks` to report
/// an under-provisioning shortfall.
///
/// # Examples
///
/// ```
/// use savings_routing::models::Fleet;
///
/// let fleet = Fleet::new(3, 100);
/// assert_eq!(fleet.trucks(), 3);
/// assert_eq!(fleet.capacity(), 100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fleet {
    trucks: usize,
    capacity: i32,
}

impl Fleet {
    /// Creates a fleet of `trucks` vehicles sharing one `capacity`.
    pub fn new(trucks: usize, capacity: i32) -> Self {
        Self { trucks, capacity }
    }

    /// Number of available trucks.
    pub fn trucks(&self) -> usize {
        self.trucks
    }

    /// Cargo capacity shared by every truck.
    pub fn capacity(&self) -> i32 {
        self.capacity
    }
}
