use serde::Deserialize;
use std::path::PathBuf;

/// Default pattern knobs, shared by the CLI and the config file.
///
/// Spacing defaults to a 30cm cutting deck with 10% overlap; speed and
/// battery drain match a typical residential mower so the time/battery
/// estimates are believable out of the box.
pub mod defaults {
    pub const PATTERN: &str = "parallel";
    pub const SPACING_M: f64 = 0.3;
    pub const ANGLE_DEG: u16 = 0;
    pub const OVERLAP: f64 = 0.1;
    pub const SPEED_M_S: f64 = 0.5;
    pub const BATTERY_PCT_PER_HOUR: f64 = 20.0;
}

fn default_pattern() -> String {
    defaults::PATTERN.to_string()
}
fn default_spacing() -> f64 {
    defaults::SPACING_M
}
fn default_angle() -> u16 {
    defaults::ANGLE_DEG
}
fn default_overlap() -> f64 {
    defaults::OVERLAP
}
fn default_speed() -> f64 {
    defaults::SPEED_M_S
}
fn default_battery_rate() -> f64 {
    defaults::BATTERY_PCT_PER_HOUR
}
fn default_verbose() -> bool {
    false
}

#[derive(Debug, Deserialize)]
pub struct FileConfig {
    #[serde(default = "default_pattern")]
    pub pattern: String,
    #[serde(default = "default_spacing")]
    pub spacing: f64,
    #[serde(default = "default_angle")]
    pub angle: u16,
    #[serde(default = "default_overlap")]
    pub overlap: f64,
    #[serde(default = "default_speed")]
    pub speed: f64,
    #[serde(default = "default_battery_rate")]
    pub battery_rate: f64,
    #[serde(default)]
    pub output: Option<PathBuf>,
    #[serde(default = "default_verbose")]
    pub verbose: bool,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            pattern: default_pattern(),
            spacing: default_spacing(),
            angle: default_angle(),
            overlap: default_overlap(),
            speed: default_speed(),
            battery_rate: default_battery_rate(),
            output: None,
            verbose: false,
        }
    }
}

impl FileConfig {
    /// Search the usual locations and load the first parseable config file
    pub fn load() -> Option<Self> {
        let config_paths = get_config_paths();

        for path in config_paths {
            if path.exists()
                && let Ok(contents) = std::fs::read_to_string(&path)
            {
                match toml::from_str(&contents) {
                    Ok(config) => return Some(config),
                    Err(e) => {
                        eprintln!("Warning: Failed to parse config file {:?}: {}", path, e);
                    }
                }
            }
        }
        None
    }
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    paths.push(PathBuf::from("mowplan.toml"));
    paths.push(PathBuf::from(".mowplan.toml"));

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("mowplan").join("config.toml"));
        paths.push(config_dir.join("mowplan.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".mowplan.toml"));
        paths.push(home.join(".config").join("mowplan").join("config.toml"));
    }

    paths
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_applied_to_empty_config() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert_eq!(config.pattern, "parallel");
        assert_eq!(config.spacing, 0.3);
        assert_eq!(config.angle, 0);
        assert_eq!(config.overlap, 0.1);
        assert_eq!(config.speed, 0.5);
        assert_eq!(config.battery_rate, 20.0);
        assert!(!config.verbose);
        assert!(config.output.is_none());
    }

    #[test]
    fn test_partial_config_keeps_other_defaults() {
        let config: FileConfig = toml::from_str("pattern = \"spiral\"\nspacing = 0.25\n").unwrap();
        assert_eq!(config.pattern, "spiral");
        assert_eq!(config.spacing, 0.25);
        assert_eq!(config.overlap, 0.1);
    }

    #[test]
    fn test_config_paths_include_cwd() {
        let paths = get_config_paths();
        assert!(paths.contains(&PathBuf::from("mowplan.toml")));
    }
}
