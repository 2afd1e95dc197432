use serde::{Deserialize, Serialize};

use crate::domain::Point;

/// One complete planning result: the waypoint polyline plus the metrics the
/// dashboard shows next to it.
///
/// A `GeneratedPath` is never updated in place. Any change to the boundary or
/// the settings triggers a fresh plan and the old one is thrown away, so two
/// widgets can never disagree about which path the numbers belong to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedPath {
    /// Ordered travel waypoints. Empty when there is nothing to mow.
    pub waypoints: Vec<Point>,
    /// Enclosed boundary area in square meters.
    pub area_m2: f64,
    /// Total geodesic length of the waypoint polyline in meters.
    pub path_length_m: f64,
    /// Heuristic coverage estimate, always clamped to 0..=1.
    pub coverage_fraction: f64,
    /// Traversal time at the configured mowing speed, in seconds.
    pub estimated_time_s: f64,
    /// Battery drained over the estimated time, in percent.
    pub estimated_battery_percent: f64,
    /// Covered square meters per meter driven; 0 for an empty path.
    pub efficiency: f64,
}

impl GeneratedPath {
    /// The all-zero result for a yard with nothing to mow.
    pub fn empty(area_m2: f64) -> Self {
        Self {
            waypoints: Vec::new(),
            area_m2,
            path_length_m: 0.0,
            coverage_fraction: 0.0,
            estimated_time_s: 0.0,
            estimated_battery_percent: 0.0,
            efficiency: 0.0,
        }
    }
}
