use std::f64::consts::TAU;

use crate::domain::{BoundaryPolygon, PatternSettings, Point};
use crate::geometry::{LocalFrame, max_centroid_distance, vertex_centroid};

/// Angular sampling step for the spiral, in degrees
const SPIRAL_STEP_DEG: f64 = 5.0;

/// Centroid-anchored frame shared by the outward-growing strategies
fn radial_frame(boundary: &BoundaryPolygon) -> Option<(LocalFrame, f64)> {
    let centroid = vertex_centroid(&boundary.vertices)?;
    let max_radius = max_centroid_distance(&boundary.vertices, centroid);
    if max_radius <= 0.0 {
        return None;
    }
    Some((LocalFrame::new(centroid), max_radius))
}

/// Archimedean spiral from the centroid outward
///
/// Radius grows by one effective pitch per full turn, sampled every 5
/// degrees, and stops once it passes the farthest boundary vertex.
pub fn spiral(boundary: &BoundaryPolygon, settings: &PatternSettings) -> Vec<Point> {
    let Some((frame, max_radius)) = radial_frame(boundary) else {
        return Vec::new();
    };
    let pitch = settings.effective_pitch();
    let step = SPIRAL_STEP_DEG.to_radians();

    let mut waypoints = Vec::new();
    let mut i = 0u32;
    loop {
        let theta = f64::from(i) * step;
        let radius = pitch * theta / TAU;
        if radius > max_radius {
            break;
        }
        waypoints.push(frame.to_point(radius * theta.cos(), radius * theta.sin()));
        i += 1;
    }
    waypoints
}

/// Concentric diamond rings
///
/// Each ring places its four vertices on the cardinal axes at a multiple of
/// the pitch and closes back on itself; consecutive rings share the east
/// axis, so the hop between them is a short radial segment.
pub fn diamond(boundary: &BoundaryPolygon, settings: &PatternSettings) -> Vec<Point> {
    let Some((frame, max_radius)) = radial_frame(boundary) else {
        return Vec::new();
    };
    let pitch = settings.effective_pitch();

    let mut waypoints = Vec::new();
    let mut ring = 1u32;
    loop {
        let r = f64::from(ring) * pitch;
        if r > max_radius {
            break;
        }
        waypoints.push(frame.to_point(r, 0.0));
        waypoints.push(frame.to_point(0.0, r));
        waypoints.push(frame.to_point(-r, 0.0));
        waypoints.push(frame.to_point(0.0, -r));
        waypoints.push(frame.to_point(r, 0.0));
        ring += 1;
    }
    waypoints
}

/// Concentric circular rings
///
/// Ring vertex count scales with circumference over pitch so the sampled
/// circle stays smooth at any radius; rings connect like `diamond`.
pub fn concentric(boundary: &BoundaryPolygon, settings: &PatternSettings) -> Vec<Point> {
    let Some((frame, max_radius)) = radial_frame(boundary) else {
        return Vec::new();
    };
    let pitch = settings.effective_pitch();

    let mut waypoints = Vec::new();
    let mut ring = 1u32;
    loop {
        let r = f64::from(ring) * pitch;
        if r > max_radius {
            break;
        }
        let segments = ((TAU * r / pitch).ceil() as usize).max(8);
        for s in 0..=segments {
            let theta = TAU * s as f64 / segments as f64;
            waypoints.push(frame.to_point(r * theta.cos(), r * theta.sin()));
        }
        ring += 1;
    }
    waypoints
}
