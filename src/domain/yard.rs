use serde::{Deserialize, Serialize};

use crate::domain::Point;

/// The yard perimeter as drawn by the operator.
///
/// An ordered vertex list, implicitly closed (last vertex connects back to the
/// first). Nothing here checks for self-intersection; the drawing surface is
/// trusted to hand over something sensible, and the planner only rejects
/// polygons with fewer than 3 vertices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoundaryPolygon {
    pub vertices: Vec<Point>,
}

impl BoundaryPolygon {
    #[allow(dead_code)]
    pub fn new(vertices: Vec<Point>) -> Self {
        Self { vertices }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }
}

/// An exclusion region inside the yard.
///
/// Zones are accepted and carried through planning so the dashboard can keep
/// displaying them, but pattern generation does not subtract them yet; the
/// downstream navigation layer is expected to enforce them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoGoZone {
    pub vertices: Vec<Point>,
}

impl NoGoZone {
    #[allow(dead_code)]
    pub fn new(vertices: Vec<Point>) -> Self {
        Self { vertices }
    }
}

/// Everything the operator has drawn: perimeter, exclusion zones, and the
/// charging-station location. The home point is informational only; no
/// pattern starts or ends there.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Yard {
    pub boundary: BoundaryPolygon,
    #[serde(default)]
    pub no_go_zones: Vec<NoGoZone>,
    #[serde(default)]
    pub home: Option<Point>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_is_plain_point_array_on_the_wire() {
        let json = r#"[{"lat": 0.0, "lng": 0.0}, {"lat": 0.0, "lng": 1.0}, {"lat": 1.0, "lng": 0.0}]"#;
        let boundary: BoundaryPolygon = serde_json::from_str(json).unwrap();
        assert_eq!(boundary.vertex_count(), 3);
        assert_eq!(boundary.vertices[2], Point::new(1.0, 0.0));
    }

    #[test]
    fn test_yard_zones_and_home_are_optional() {
        let json = r#"{"boundary": [{"lat": 0.0, "lng": 0.0}, {"lat": 0.0, "lng": 1.0}, {"lat": 1.0, "lng": 0.0}]}"#;
        let yard: Yard = serde_json::from_str(json).unwrap();
        assert!(yard.no_go_zones.is_empty());
        assert!(yard.home.is_none());
    }
}
