//! Travel-cost resolution over a road network.
//!
//! Recorded roads take priority; unrecorded pairs fall back to
//! straight-line distance.

mod oracle;

pub use oracle::DistanceOracle;
