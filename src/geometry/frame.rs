use crate::domain::Point;

/// Simple equirectangular mapping between WGS84 and local meters
///
/// Uses the flat-earth approximation suitable for yard-scale geometry:
/// - x = (lon - center_lon) * cos(center_lat) * 111320
/// - y = (lat - center_lat) * 111320
///
/// This avoids a real projection library while staying accurate to
/// centimeters over the tens of meters a lawn spans. It drifts at city
/// scale and beyond, which is fine for this use.
#[derive(Debug, Clone)]
pub struct LocalFrame {
    center_lat: f64,
    center_lon: f64,
    cos_lat: f64,
}

/// Meters per degree of latitude (and of longitude at the equator)
const METERS_PER_DEGREE: f64 = 111_320.0;

impl LocalFrame {
    /// Create a frame centered on the given point
    pub fn new(center: Point) -> Self {
        Self {
            center_lat: center.latitude,
            center_lon: center.longitude,
            cos_lat: center.latitude.to_radians().cos(),
        }
    }

    /// Map a WGS84 point into local meters, centered at the frame origin
    pub fn to_local(&self, p: Point) -> (f64, f64) {
        let x = (p.longitude - self.center_lon) * self.cos_lat * METERS_PER_DEGREE;
        let y = (p.latitude - self.center_lat) * METERS_PER_DEGREE;
        (x, y)
    }

    /// Map local meters back to a WGS84 point (inverse of `to_local`)
    pub fn to_point(&self, x: f64, y: f64) -> Point {
        Point::new(
            self.center_lat + y / METERS_PER_DEGREE,
            self.center_lon + x / (self.cos_lat * METERS_PER_DEGREE),
        )
    }
}

/// Bounding-box center and extent of a polygon, in local meters
///
/// Computed in a linearized lat/lng frame rather than a true projection;
/// the sweep strategies use it to size their line layout.
#[derive(Debug, Clone)]
pub struct BoundingExtent {
    pub center: Point,
    pub width_m: f64,
    pub height_m: f64,
}

/// Compute the axis-aligned bounding extent of a vertex list
///
/// Returns `None` for an empty list.
pub fn bounding_extent(vertices: &[Point]) -> Option<BoundingExtent> {
    let first = vertices.first()?;

    let mut min_lat = first.latitude;
    let mut max_lat = first.latitude;
    let mut min_lon = first.longitude;
    let mut max_lon = first.longitude;

    for p in vertices {
        min_lat = min_lat.min(p.latitude);
        max_lat = max_lat.max(p.latitude);
        min_lon = min_lon.min(p.longitude);
        max_lon = max_lon.max(p.longitude);
    }

    let center = Point::new((min_lat + max_lat) / 2.0, (min_lon + max_lon) / 2.0);
    let frame = LocalFrame::new(center);
    let (min_x, min_y) = frame.to_local(Point::new(min_lat, min_lon));
    let (max_x, max_y) = frame.to_local(Point::new(max_lat, max_lon));

    Some(BoundingExtent {
        center,
        width_m: max_x - min_x,
        height_m: max_y - min_y,
    })
}

/// Arithmetic mean of the vertex positions
///
/// The radial strategies (spiral, diamond, concentric) grow outward from
/// this point. Returns `None` for an empty list.
pub fn vertex_centroid(vertices: &[Point]) -> Option<Point> {
    if vertices.is_empty() {
        return None;
    }

    let n = vertices.len() as f64;
    let lat = vertices.iter().map(|p| p.latitude).sum::<f64>() / n;
    let lon = vertices.iter().map(|p| p.longitude).sum::<f64>() / n;
    Some(Point::new(lat, lon))
}

/// Largest distance from the centroid to any vertex, in local meters
pub fn max_centroid_distance(vertices: &[Point], centroid: Point) -> f64 {
    let frame = LocalFrame::new(centroid);
    vertices
        .iter()
        .map(|&p| {
            let (x, y) = frame.to_local(p);
            (x * x + y * y).sqrt()
        })
        .fold(0.0, f64::max)
}
