use geo::{Distance, GeodesicArea, Haversine, LineString, Polygon};

use crate::domain::Point;

/// Great-circle distance between two points in meters
pub fn geodesic_distance(a: Point, b: Point) -> f64 {
    Haversine::distance(
        geo::point!(x: a.longitude, y: a.latitude),
        geo::point!(x: b.longitude, y: b.latitude),
    )
}

/// Enclosed area of a boundary polygon in square meters
///
/// The vertex ring is closed implicitly. Degenerate input never fails:
/// fewer than 3 vertices yields 0, and a collinear ring comes out as
/// (numerically) zero area, which the planner reads as "nothing to mow".
pub fn geodesic_area(vertices: &[Point]) -> f64 {
    if vertices.len() < 3 {
        return 0.0;
    }

    let ring: LineString = vertices
        .iter()
        .map(|p| geo::coord! { x: p.longitude, y: p.latitude })
        .collect();

    Polygon::new(ring, vec![]).geodesic_area_unsigned()
}

/// Total geodesic length of a waypoint polyline in meters
///
/// Sums consecutive-pair distances; 0 for paths with fewer than 2 points.
pub fn path_length(path: &[Point]) -> f64 {
    path.windows(2)
        .map(|pair| geodesic_distance(pair[0], pair[1]))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_one_degree_longitude_at_equator() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(0.0, 1.0);
        let d = geodesic_distance(a, b);
        // 1 degree of longitude at the equator ≈ 111.32 km
        assert!((d - 111_320.0).abs() < 500.0);
    }

    #[test]
    fn test_area_of_known_square() {
        // Roughly 100m x 100m at the equator (0.0009 degrees ≈ 100.19m)
        let side_deg = 0.0009;
        let square = vec![
            Point::new(0.0, 0.0),
            Point::new(0.0, side_deg),
            Point::new(side_deg, side_deg),
            Point::new(side_deg, 0.0),
        ];
        let area = geodesic_area(&square);
        let side_m = side_deg * 111_320.0;
        let expected = side_m * side_m;
        assert!((area - expected).abs() / expected < 0.01);
    }

    #[test]
    fn test_area_degenerate_inputs() {
        assert_eq!(geodesic_area(&[]), 0.0);
        assert_eq!(
            geodesic_area(&[Point::new(0.0, 0.0), Point::new(0.0, 1.0)]),
            0.0
        );

        // Collinear ring encloses nothing
        let flat = vec![
            Point::new(0.0, 0.0),
            Point::new(0.0, 0.001),
            Point::new(0.0, 0.002),
        ];
        assert!(geodesic_area(&flat) < 1e-3);
    }

    #[test]
    fn test_path_length() {
        assert_eq!(path_length(&[]), 0.0);
        assert_eq!(path_length(&[Point::new(0.0, 0.0)]), 0.0);

        let path = vec![
            Point::new(0.0, 0.0),
            Point::new(0.0, 0.001),
            Point::new(0.0, 0.002),
        ];
        let len = path_length(&path);
        assert!((len - 222.64).abs() < 2.0);
    }
}
