//! Domain model types for savings-based route planning.
//!
//! Provides the core abstractions: delivery locations with demands, the
//! fleet descriptor, and routes as depot-bounded location sequences.

mod fleet;
mod location;
mod route;

pub use fleet::Fleet;
pub use location::Location;
pub use route::Route;
