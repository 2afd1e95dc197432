//! Coverage and operating-cost estimates for a generated path.

use serde::{Deserialize, Serialize};

/// Mower performance figures used for time and battery estimates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MowerProfile {
    /// Sustained mowing speed in meters per second
    pub speed_m_s: f64,
    /// Battery drain in percent per hour of mowing
    pub battery_pct_per_hour: f64,
}

impl Default for MowerProfile {
    fn default() -> Self {
        Self {
            speed_m_s: 0.5,
            battery_pct_per_hour: 20.0,
        }
    }
}

/// Operating statistics derived from a path
#[derive(Debug, Clone, PartialEq)]
pub struct PathStatistics {
    pub length_m: f64,
    pub estimated_time_s: f64,
    pub estimated_battery_percent: f64,
    /// Covered square meters per meter driven
    pub efficiency: f64,
}

/// Approximate fraction of the yard covered by the path
///
/// `length * spacing / area`, clamped to 0..=1. This treats the path as a
/// spacing-wide strip and ignores strip overlaps and waypoints outside the
/// boundary, so it overshoots on dense patterns and the clamp does real
/// work. The dashboard's battery and efficiency figures are calibrated
/// against exactly this formula, so it stays as-is.
pub fn estimate_coverage(path_length_m: f64, spacing_m: f64, area_m2: f64) -> f64 {
    if area_m2 <= 0.0 {
        return 0.0;
    }
    (path_length_m * spacing_m / area_m2).clamp(0.0, 1.0)
}

/// Derive time, battery, and efficiency figures for a path
pub fn derive_statistics(
    path_length_m: f64,
    coverage: f64,
    area_m2: f64,
    profile: &MowerProfile,
) -> PathStatistics {
    let estimated_time_s = if profile.speed_m_s > 0.0 {
        path_length_m / profile.speed_m_s
    } else {
        0.0
    };
    let estimated_battery_percent = estimated_time_s / 3600.0 * profile.battery_pct_per_hour;
    let efficiency = if path_length_m > 0.0 {
        coverage * area_m2 / path_length_m
    } else {
        0.0
    };

    PathStatistics {
        length_m: path_length_m,
        estimated_time_s,
        estimated_battery_percent,
        efficiency,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coverage_basic_ratio() {
        // 1000m of path at 0.5m spacing over 1000m² -> 50%
        let c = estimate_coverage(1000.0, 0.5, 1000.0);
        assert!((c - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_coverage_clamps_to_one() {
        assert_eq!(estimate_coverage(1_000_000.0, 1.0, 100.0), 1.0);
    }

    #[test]
    fn test_coverage_zero_area() {
        assert_eq!(estimate_coverage(1000.0, 0.5, 0.0), 0.0);
    }

    #[test]
    fn test_statistics() {
        let profile = MowerProfile {
            speed_m_s: 0.5,
            battery_pct_per_hour: 20.0,
        };
        let stats = derive_statistics(1800.0, 0.9, 1000.0, &profile);

        assert_eq!(stats.estimated_time_s, 3600.0);
        assert_eq!(stats.estimated_battery_percent, 20.0);
        assert!((stats.efficiency - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_statistics_empty_path() {
        let stats = derive_statistics(0.0, 0.0, 1000.0, &MowerProfile::default());
        assert_eq!(stats.estimated_time_s, 0.0);
        assert_eq!(stats.estimated_battery_percent, 0.0);
        assert_eq!(stats.efficiency, 0.0);
    }
}
