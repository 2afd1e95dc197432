use crate::domain::{BoundaryPolygon, PatternSettings, Point};
use crate::geometry::{LocalFrame, bounding_extent};

/// Rotated working frame shared by the sweep-line strategies
///
/// Local meters around the bounding-box center, rotated so sweep lines run
/// along +x. The bounding box is recomputed in the rotated frame, so lines
/// span exactly the boundary's rotated extent instead of its full diagonal.
struct SweepFrame {
    frame: LocalFrame,
    sin: f64,
    cos: f64,
    min_x: f64,
    max_x: f64,
    min_y: f64,
    max_y: f64,
}

impl SweepFrame {
    fn new(boundary: &BoundaryPolygon, angle_deg: u16) -> Option<Self> {
        let extent = bounding_extent(&boundary.vertices)?;
        let frame = LocalFrame::new(extent.center);
        let (sin, cos) = (angle_deg as f64).to_radians().sin_cos();

        let mut min_x = f64::MAX;
        let mut max_x = f64::MIN;
        let mut min_y = f64::MAX;
        let mut max_y = f64::MIN;

        for &v in &boundary.vertices {
            let (x, y) = frame.to_local(v);
            // Rotate by -angle into the sweep frame
            let rx = x * cos + y * sin;
            let ry = -x * sin + y * cos;
            min_x = min_x.min(rx);
            max_x = max_x.max(rx);
            min_y = min_y.min(ry);
            max_y = max_y.max(ry);
        }

        Some(Self {
            frame,
            sin,
            cos,
            min_x,
            max_x,
            min_y,
            max_y,
        })
    }

    fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Rotate a sweep-frame point back by +angle and convert to WGS84
    fn emit(&self, x: f64, y: f64) -> Point {
        let wx = x * self.cos - y * self.sin;
        let wy = x * self.sin + y * self.cos;
        self.frame.to_point(wx, wy)
    }

    /// Line offsets from min_y to max_y at the given pitch, inclusive
    fn line_offsets(&self, pitch: f64) -> Vec<f64> {
        let mut offsets = Vec::new();
        let mut i = 0u32;
        loop {
            let y = self.min_y + f64::from(i) * pitch;
            if y > self.max_y + 1e-9 {
                break;
            }
            offsets.push(y);
            i += 1;
        }
        offsets
    }
}

/// Boustrophedon sweep: straight lines spaced at the effective pitch,
/// alternating direction so consecutive lines join by a short pitch-length
/// hop and the whole pattern is one continuous polyline.
pub fn parallel(boundary: &BoundaryPolygon, settings: &PatternSettings) -> Vec<Point> {
    let Some(sf) = SweepFrame::new(boundary, settings.angle) else {
        return Vec::new();
    };
    let pitch = settings.effective_pitch();

    let mut waypoints = Vec::new();
    for (i, y) in sf.line_offsets(pitch).into_iter().enumerate() {
        let (start, end) = if i % 2 == 0 {
            (sf.min_x, sf.max_x)
        } else {
            (sf.max_x, sf.min_x)
        };
        waypoints.push(sf.emit(start, y));
        waypoints.push(sf.emit(end, y));
    }
    waypoints
}

/// Sawtooth sweep: one diagonal stroke per pitch step, bouncing between the
/// two sides of the extent. Each stroke ends exactly where the next begins,
/// so there are no connector segments and no backtracking.
pub fn zigzag(boundary: &BoundaryPolygon, settings: &PatternSettings) -> Vec<Point> {
    let Some(sf) = SweepFrame::new(boundary, settings.angle) else {
        return Vec::new();
    };
    let pitch = settings.effective_pitch();

    let mut waypoints = Vec::new();
    for (i, y) in sf.line_offsets(pitch).into_iter().enumerate() {
        let x = if i % 2 == 0 { sf.min_x } else { sf.max_x };
        waypoints.push(sf.emit(x, y));
    }
    waypoints
}

/// Sweep lines perturbed by a sinusoid: amplitude twice the pitch, one full
/// period across the extent width. Lines alternate direction like `parallel`.
pub fn waves(boundary: &BoundaryPolygon, settings: &PatternSettings) -> Vec<Point> {
    let Some(sf) = SweepFrame::new(boundary, settings.angle) else {
        return Vec::new();
    };
    let pitch = settings.effective_pitch();
    let width = sf.width();
    if width <= 0.0 {
        // Degenerate extent: nothing to modulate over
        return parallel(boundary, settings);
    }

    let amplitude = 2.0 * pitch;
    let samples = ((width / pitch).ceil() as usize).max(8);

    let mut waypoints = Vec::new();
    for (i, y) in sf.line_offsets(pitch).into_iter().enumerate() {
        for s in 0..=samples {
            let t = if i % 2 == 0 {
                s as f64 / samples as f64
            } else {
                (samples - s) as f64 / samples as f64
            };
            let x = sf.min_x + t * width;
            let dy = amplitude * (std::f64::consts::TAU * t).sin();
            waypoints.push(sf.emit(x, y + dy));
        }
    }
    waypoints
}

/// Two parallel sweeps superimposed: one at the configured angle, one
/// rotated 90 degrees, concatenated into a single sequence.
pub fn checkerboard(boundary: &BoundaryPolygon, settings: &PatternSettings) -> Vec<Point> {
    let mut waypoints = parallel(boundary, settings);

    // Widen before adding: angle is not clamped at construction, so a raw
    // u16 add could overflow for out-of-range inputs
    let cross = PatternSettings {
        angle: ((u32::from(settings.angle) + 90) % 360) as u16,
        ..settings.clone()
    };
    waypoints.extend(parallel(boundary, &cross));
    waypoints
}
