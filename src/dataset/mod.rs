//! JSON dataset loading and validation.
//!
//! Builds the planner's input collaborators — a
//! [`RoadNetwork`](crate::network::RoadNetwork) and a
//! [`Fleet`](crate::models::Fleet) — from the on-disk instance format,
//! enforcing every invariant the planner assumes about its input.

mod loader;

pub use loader::{load_dataset, parse_dataset, DatasetError};
