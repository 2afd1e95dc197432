//! The planning facade: validate, dispatch, measure, assemble.

use thiserror::Error;

use crate::coverage::{self, MowerProfile};
use crate::domain::{BoundaryPolygon, GeneratedPath, NoGoZone, PatternSettings};
use crate::geometry;
use crate::patterns;

/// Areas below this are floating-point noise from degenerate boundaries
const MIN_MOWABLE_AREA_M2: f64 = 1e-6;

/// Why a plan request was rejected
///
/// Both variants are operator-fixable input problems: the dashboard should
/// point back at the boundary editor or the settings form, not retry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanError {
    #[error("boundary needs at least 3 vertices, got {0}")]
    InvalidBoundary(usize),
    #[error("effective pitch must be positive (spacing {spacing} m, overlap {overlap})")]
    InvalidSettings { spacing: f64, overlap: f64 },
}

/// Generate a coverage path for the yard
///
/// Validates the boundary and settings, runs the selected pattern strategy,
/// and attaches area, length, coverage, and operating estimates. Stateless
/// and deterministic; concurrent calls don't interact.
///
/// No-go zones are accepted so callers can pass the full yard record, but
/// generation does not subtract them yet (the downstream navigation layer
/// enforces them). A boundary that encloses no area yields an empty path
/// rather than an error: there is nothing to mow.
pub fn generate_pattern(
    boundary: &BoundaryPolygon,
    _no_go_zones: &[NoGoZone],
    settings: &PatternSettings,
    profile: &MowerProfile,
) -> Result<GeneratedPath, PlanError> {
    if boundary.vertex_count() < 3 {
        return Err(PlanError::InvalidBoundary(boundary.vertex_count()));
    }
    // Each knob is checked on its own, phrased so NaN fails too: a NaN
    // spacing or overlap would otherwise slip past a `<= 0.0` pitch check
    // and the strategy loops would never terminate.
    let settings_ok = settings.spacing > 0.0
        && (0.0..1.0).contains(&settings.overlap)
        && settings.effective_pitch() > 0.0;
    if !settings_ok {
        return Err(PlanError::InvalidSettings {
            spacing: settings.spacing,
            overlap: settings.overlap,
        });
    }

    let area_m2 = geometry::geodesic_area(&boundary.vertices);
    if area_m2 < MIN_MOWABLE_AREA_M2 {
        return Ok(GeneratedPath::empty(area_m2));
    }

    let waypoints = patterns::generate(boundary, settings);
    let path_length_m = geometry::path_length(&waypoints);

    let coverage_fraction = coverage::estimate_coverage(path_length_m, settings.spacing, area_m2);
    let stats = coverage::derive_statistics(path_length_m, coverage_fraction, area_m2, profile);

    Ok(GeneratedPath {
        waypoints,
        area_m2,
        path_length_m: stats.length_m,
        coverage_fraction,
        estimated_time_s: stats.estimated_time_s,
        estimated_battery_percent: stats.estimated_battery_percent,
        efficiency: stats.efficiency,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PatternType, Point};

    /// ~100m x ~100m square at the equator
    fn square_boundary() -> BoundaryPolygon {
        let side = 0.0009;
        BoundaryPolygon::new(vec![
            Point::new(0.0, 0.0),
            Point::new(0.0, side),
            Point::new(side, side),
            Point::new(side, 0.0),
        ])
    }

    fn settings(pattern: PatternType, spacing: f64) -> PatternSettings {
        PatternSettings::new(pattern, spacing, 0, 0.0)
    }

    #[test]
    fn test_parallel_on_100m_square() {
        let path = generate_pattern(
            &square_boundary(),
            &[],
            &settings(PatternType::Parallel, 1.0),
            &MowerProfile::default(),
        )
        .unwrap();

        // ~100 sweep lines of ~100m each
        assert!(
            (path.path_length_m - 10_000.0).abs() / 10_000.0 < 0.1,
            "length was {}",
            path.path_length_m
        );
        // Dense 1m spacing over the whole square saturates the estimate
        assert_eq!(path.coverage_fraction, 1.0);
        assert!((path.area_m2 - 10_000.0).abs() / 10_000.0 < 0.05);
    }

    #[test]
    fn test_two_vertex_boundary_rejected() {
        let boundary = BoundaryPolygon::new(vec![Point::new(0.0, 0.0), Point::new(0.0, 0.001)]);
        let result = generate_pattern(
            &boundary,
            &[],
            &settings(PatternType::Parallel, 1.0),
            &MowerProfile::default(),
        );
        assert_eq!(result, Err(PlanError::InvalidBoundary(2)));
    }

    #[test]
    fn test_zero_spacing_rejected() {
        let result = generate_pattern(
            &square_boundary(),
            &[],
            &settings(PatternType::Parallel, 0.0),
            &MowerProfile::default(),
        );
        assert!(matches!(result, Err(PlanError::InvalidSettings { .. })));
    }

    #[test]
    fn test_full_overlap_rejected() {
        let s = PatternSettings::new(PatternType::Parallel, 1.0, 0, 1.0);
        let result = generate_pattern(&square_boundary(), &[], &s, &MowerProfile::default());
        assert!(matches!(result, Err(PlanError::InvalidSettings { .. })));
    }

    #[test]
    fn test_nan_settings_rejected() {
        let nan_spacing = PatternSettings::new(PatternType::Parallel, f64::NAN, 0, 0.0);
        let result =
            generate_pattern(&square_boundary(), &[], &nan_spacing, &MowerProfile::default());
        assert!(matches!(result, Err(PlanError::InvalidSettings { .. })));

        let nan_overlap = PatternSettings::new(PatternType::Spiral, 1.0, 0, f64::NAN);
        let result =
            generate_pattern(&square_boundary(), &[], &nan_overlap, &MowerProfile::default());
        assert!(matches!(result, Err(PlanError::InvalidSettings { .. })));
    }

    #[test]
    fn test_negative_spacing_rejected_even_with_positive_pitch() {
        // spacing -1 with overlap 2 multiplies out to a pitch of +1, but both
        // knobs are out of range on their own
        let s = PatternSettings::new(PatternType::Parallel, -1.0, 0, 2.0);
        assert!((s.effective_pitch() - 1.0).abs() < 1e-12);
        let result = generate_pattern(&square_boundary(), &[], &s, &MowerProfile::default());
        assert!(matches!(result, Err(PlanError::InvalidSettings { .. })));
    }

    #[test]
    fn test_collinear_boundary_yields_empty_path() {
        let flat = BoundaryPolygon::new(vec![
            Point::new(0.0, 0.0),
            Point::new(0.0, 0.0005),
            Point::new(0.0, 0.001),
        ]);
        let path = generate_pattern(
            &flat,
            &[],
            &settings(PatternType::Parallel, 1.0),
            &MowerProfile::default(),
        )
        .unwrap();

        assert!(path.waypoints.is_empty());
        assert_eq!(path.path_length_m, 0.0);
        assert_eq!(path.coverage_fraction, 0.0);
        assert_eq!(path.efficiency, 0.0);
    }

    #[test]
    fn test_no_go_zones_do_not_change_output() {
        let zone = NoGoZone::new(vec![
            Point::new(0.0003, 0.0003),
            Point::new(0.0003, 0.0006),
            Point::new(0.0006, 0.0006),
        ]);
        let s = settings(PatternType::Parallel, 2.0);
        let without = generate_pattern(&square_boundary(), &[], &s, &MowerProfile::default());
        let with = generate_pattern(
            &square_boundary(),
            &[zone],
            &s,
            &MowerProfile::default(),
        );
        assert_eq!(without, with);
    }

    #[test]
    fn test_unknown_pattern_name_plans_like_parallel() {
        let named = PatternSettings::new(PatternType::from_name("UNKNOWN_VALUE"), 2.0, 0, 0.0);
        let parallel = settings(PatternType::Parallel, 2.0);
        let a = generate_pattern(&square_boundary(), &[], &named, &MowerProfile::default());
        let b = generate_pattern(&square_boundary(), &[], &parallel, &MowerProfile::default());
        assert_eq!(a, b);
    }

    #[test]
    fn test_determinism_across_patterns() {
        for pattern in [
            PatternType::Parallel,
            PatternType::Spiral,
            PatternType::Zigzag,
            PatternType::Checkerboard,
            PatternType::Diamond,
            PatternType::Waves,
            PatternType::Concentric,
        ] {
            let s = PatternSettings::new(pattern, 0.9, 17, 0.15);
            let a = generate_pattern(&square_boundary(), &[], &s, &MowerProfile::default());
            let b = generate_pattern(&square_boundary(), &[], &s, &MowerProfile::default());
            assert_eq!(a, b, "{} was not deterministic", pattern.name());
        }
    }

    #[test]
    fn test_coverage_fraction_stays_in_range() {
        for spacing in [0.1, 1.0, 10.0, 1000.0] {
            let path = generate_pattern(
                &square_boundary(),
                &[],
                &settings(PatternType::Checkerboard, spacing),
                &MowerProfile::default(),
            )
            .unwrap();
            assert!(
                (0.0..=1.0).contains(&path.coverage_fraction),
                "coverage {} out of range at spacing {spacing}",
                path.coverage_fraction
            );
        }
    }

    #[test]
    fn test_statistics_follow_profile() {
        let profile = MowerProfile {
            speed_m_s: 1.0,
            battery_pct_per_hour: 30.0,
        };
        let path = generate_pattern(
            &square_boundary(),
            &[],
            &settings(PatternType::Parallel, 2.0),
            &profile,
        )
        .unwrap();

        assert!((path.estimated_time_s - path.path_length_m).abs() < 1e-9);
        let expected_battery = path.estimated_time_s / 3600.0 * 30.0;
        assert!((path.estimated_battery_percent - expected_battery).abs() < 1e-9);
    }
}
