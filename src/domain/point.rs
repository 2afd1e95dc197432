use serde::{Deserialize, Serialize};

/// A WGS84 coordinate in decimal degrees.
///
/// The web dashboard and the mower firmware both speak `{lat, lng}` objects,
/// so that is the wire name; everything inside the planner uses this one type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    #[serde(rename = "lat", alias = "latitude")]
    pub latitude: f64,
    #[serde(rename = "lng", alias = "longitude", alias = "lon")]
    pub longitude: f64,
}

impl Point {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_wire_names() {
        let p: Point = serde_json::from_str(r#"{"lat": 52.1, "lng": 4.3}"#).unwrap();
        assert_eq!(p, Point::new(52.1, 4.3));

        // Long-form field names from older exports are accepted too
        let p: Point = serde_json::from_str(r#"{"latitude": 52.1, "longitude": 4.3}"#).unwrap();
        assert_eq!(p, Point::new(52.1, 4.3));
    }

    #[test]
    fn test_point_serializes_short_names() {
        let json = serde_json::to_string(&Point::new(1.0, 2.0)).unwrap();
        assert_eq!(json, r#"{"lat":1.0,"lng":2.0}"#);
    }
}
