use serde::{Deserialize, Serialize};

/// The seven coverage patterns the dashboard offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternType {
    Parallel,
    Spiral,
    Zigzag,
    Checkerboard,
    Diamond,
    Waves,
    Concentric,
}

impl PatternType {
    /// Resolve a stored pattern name to a pattern type.
    ///
    /// Unrecognized names fall back to `Parallel` rather than failing. Settings
    /// persisted by older dashboard versions may carry pattern names that no
    /// longer exist, and the mower should still produce a usable plan for them.
    pub fn from_name(name: &str) -> PatternType {
        match name.to_ascii_lowercase().as_str() {
            "parallel" => PatternType::Parallel,
            "spiral" => PatternType::Spiral,
            "zigzag" => PatternType::Zigzag,
            "checkerboard" => PatternType::Checkerboard,
            "diamond" => PatternType::Diamond,
            "waves" => PatternType::Waves,
            "concentric" => PatternType::Concentric,
            _ => PatternType::Parallel,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PatternType::Parallel => "parallel",
            PatternType::Spiral => "spiral",
            PatternType::Zigzag => "zigzag",
            PatternType::Checkerboard => "checkerboard",
            PatternType::Diamond => "diamond",
            PatternType::Waves => "waves",
            PatternType::Concentric => "concentric",
        }
    }
}

/// Pattern knobs the operator tunes from the settings form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternSettings {
    #[serde(rename = "patternType")]
    pub pattern: PatternType,
    /// Cutting-line spacing in meters. Must be positive.
    pub spacing: f64,
    /// Sweep direction in whole degrees, 0..=359.
    pub angle: u16,
    /// Fractional overlap between adjacent lines, 0.0..1.0.
    pub overlap: f64,
}

impl PatternSettings {
    pub fn new(pattern: PatternType, spacing: f64, angle: u16, overlap: f64) -> Self {
        Self {
            pattern,
            spacing,
            angle,
            overlap,
        }
    }

    /// Real spacing between adjacent lines/rings after overlap is applied.
    ///
    /// Every strategy spaces itself by this value, never by raw `spacing`.
    pub fn effective_pitch(&self) -> f64 {
        self.spacing * (1.0 - self.overlap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_from_name() {
        assert_eq!(PatternType::from_name("spiral"), PatternType::Spiral);
        assert_eq!(PatternType::from_name("CONCENTRIC"), PatternType::Concentric);
        assert_eq!(PatternType::from_name("Waves"), PatternType::Waves);
    }

    #[test]
    fn test_unknown_pattern_falls_back_to_parallel() {
        assert_eq!(PatternType::from_name("UNKNOWN_VALUE"), PatternType::Parallel);
        assert_eq!(PatternType::from_name(""), PatternType::Parallel);
    }

    #[test]
    fn test_effective_pitch() {
        let settings = PatternSettings::new(PatternType::Parallel, 0.3, 0, 0.1);
        assert!((settings.effective_pitch() - 0.27).abs() < 1e-12);

        let no_overlap = PatternSettings::new(PatternType::Parallel, 1.0, 0, 0.0);
        assert_eq!(no_overlap.effective_pitch(), 1.0);
    }
}
