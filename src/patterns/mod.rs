//! The seven coverage strategies.
//!
//! Every strategy shares one contract: boundary plus settings in, ordered
//! waypoint sequence out. All of them size themselves from the boundary's
//! bounding extent or centroid radius, not its exact shape, so waypoints can
//! land outside a concave yard; the navigation layer downstream owns keeping
//! the mower inside the perimeter.

pub mod radial;
pub mod sweep;

use crate::domain::{BoundaryPolygon, PatternSettings, PatternType, Point};

/// Generate the raw waypoint sequence for the selected pattern
///
/// Pure and deterministic: identical inputs always produce an identical
/// sequence. Assumes the planner has already validated the effective pitch.
pub fn generate(boundary: &BoundaryPolygon, settings: &PatternSettings) -> Vec<Point> {
    match settings.pattern {
        PatternType::Parallel => sweep::parallel(boundary, settings),
        PatternType::Zigzag => sweep::zigzag(boundary, settings),
        PatternType::Waves => sweep::waves(boundary, settings),
        PatternType::Checkerboard => sweep::checkerboard(boundary, settings),
        PatternType::Spiral => radial::spiral(boundary, settings),
        PatternType::Diamond => radial::diamond(boundary, settings),
        PatternType::Concentric => radial::concentric(boundary, settings),
    }
}
