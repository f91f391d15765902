//! JSON dataset parsing and validation.

use std::fs;
use std::path::Path;

use log::debug;
use serde::Deserialize;
use thiserror::Error;

use crate::models::{Fleet, Location};
use crate::network::RoadNetwork;

/// A validation or I/O failure while loading a dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse dataset JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("dataset has no locations")]
    NoLocations,
    #[error("duplicate location id {0}")]
    DuplicateLocation(usize),
    #[error("location ids must be contiguous from 0 (the depot): missing id {0}")]
    MissingLocation(usize),
    #[error("location {id} has negative demand {demand}")]
    NegativeDemand { id: usize, demand: i32 },
    #[error("road {from} -> {to} references an unknown location")]
    UnknownRoadEndpoint { from: usize, to: usize },
    #[error("road {from} -> {to} has negative travel time {minutes}")]
    NegativeTravelTime { from: usize, to: usize, minutes: f64 },
    #[error("fleet must have at least one truck")]
    NoTrucks,
    #[error("truck capacity must be non-negative, got {0}")]
    NegativeCapacity(i32),
}

#[derive(Debug, Deserialize)]
struct DatasetFile {
    meta: MetaRecord,
    locations: Vec<LocationRecord>,
    roads: Vec<RoadRecord>,
}

#[derive(Debug, Deserialize)]
struct MetaRecord {
    trucks: usize,
    truck_capacity: i32,
}

#[derive(Debug, Deserialize)]
struct LocationRecord {
    id: usize,
    longitude: f64,
    latitude: f64,
    demand: i32,
}

#[derive(Debug, Deserialize)]
struct RoadRecord {
    from_id: usize,
    to_id: usize,
    travel_time_minutes: f64,
}

/// Reads and validates a JSON dataset file.
///
/// See [`parse_dataset`] for the schema and the validation rules.
pub fn load_dataset(path: impl AsRef<Path>) -> Result<(RoadNetwork, Fleet), DatasetError> {
    let text = fs::read_to_string(path)?;
    parse_dataset(&text)
}

/// Parses and validates a JSON dataset.
///
/// Expected shape:
///
/// ```json
/// { "meta": { "trucks": 3, "truck_capacity": 100 },
///   "locations": [ { "id": 0, "longitude": 0.0, "latitude": 0.0,
///                    "demand": 0 } ],
///   "roads": [ { "from_id": 0, "to_id": 1,
///                "travel_time_minutes": 12.0 } ] }
/// ```
///
/// Location id 0 is the depot; its demand field is ignored. Validation
/// establishes everything the planner assumes: contiguous unique ids,
/// non-negative demands and travel times, road endpoints that exist,
/// and a fleet with at least one truck and non-negative capacity.
/// Unknown JSON keys (e.g. `name`, `blocked`) are ignored.
///
/// # Examples
///
/// ```
/// use savings_routing::dataset::parse_dataset;
///
/// let json = r#"{
///     "meta": { "trucks": 1, "truck_capacity": 30 },
///     "locations": [
///         { "id": 0, "longitude": 0.0, "latitude": 0.0, "demand": 0 },
///         { "id": 1, "longitude": 3.0, "latitude": 4.0, "demand": 10 }
///     ],
///     "roads": [ { "from_id": 0, "to_id": 1, "travel_time_minutes": 7 } ]
/// }"#;
/// let (network, fleet) = parse_dataset(json).unwrap();
/// assert_eq!(network.num_locations(), 2);
/// assert_eq!(fleet.capacity(), 30);
/// ```
pub fn parse_dataset(json: &str) -> Result<(RoadNetwork, Fleet), DatasetError> {
    let file: DatasetFile = serde_json::from_str(json)?;

    if file.locations.is_empty() {
        return Err(DatasetError::NoLocations);
    }
    let n = file.locations.len();

    let mut slots: Vec<Option<Location>> = vec![None; n];
    for record in &file.locations {
        if record.id >= n {
            // An id beyond the table length implies a gap below it.
            let missing = (0..n)
                .find(|&id| !file.locations.iter().any(|r| r.id == id))
                .unwrap_or(0);
            return Err(DatasetError::MissingLocation(missing));
        }
        if slots[record.id].is_some() {
            return Err(DatasetError::DuplicateLocation(record.id));
        }
        if record.demand < 0 && record.id != 0 {
            return Err(DatasetError::NegativeDemand {
                id: record.id,
                demand: record.demand,
            });
        }
        let location = if record.id == 0 {
            Location::depot(record.longitude, record.latitude)
        } else {
            Location::new(record.id, record.longitude, record.latitude, record.demand)
        };
        slots[record.id] = Some(location);
    }
    let locations = slots
        .into_iter()
        .collect::<Option<Vec<_>>>()
        .expect("gaps already rejected");

    let mut network = RoadNetwork::new(locations);
    for road in &file.roads {
        if road.from_id >= n || road.to_id >= n {
            return Err(DatasetError::UnknownRoadEndpoint {
                from: road.from_id,
                to: road.to_id,
            });
        }
        if road.travel_time_minutes < 0.0 {
            return Err(DatasetError::NegativeTravelTime {
                from: road.from_id,
                to: road.to_id,
                minutes: road.travel_time_minutes,
            });
        }
        network.add_road(road.from_id, road.to_id, road.travel_time_minutes);
    }

    if file.meta.trucks == 0 {
        return Err(DatasetError::NoTrucks);
    }
    if file.meta.truck_capacity < 0 {
        return Err(DatasetError::NegativeCapacity(file.meta.truck_capacity));
    }

    debug!(
        "loaded dataset: {} locations, {} roads, {} trucks of capacity {}",
        network.num_locations(),
        network.num_roads(),
        file.meta.trucks,
        file.meta.truck_capacity
    );
    Ok((network, Fleet::new(file.meta.trucks, file.meta.truck_capacity)))
}
