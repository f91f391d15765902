//! Road networks: locations and sparse travel-time edges.

mod road_network;

pub use road_network::RoadNetwork;
